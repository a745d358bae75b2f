use crate::models::args::PackageArgs;
use anyhow::{Context, Result};
use tw_kernel::config::load_config;
use tw_kernel::domain::config::PackagingConfig;
use tracing::debug;
use tw_packaging::{Packager, Platform};

/// Builds the wheel and prints its path on stdout.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, the platform is
/// unknown, or any packaging stage fails.
pub fn run(args: &PackageArgs) -> Result<()> {
    let mut config: PackagingConfig =
        load_config(args.config.as_deref()).context("Configuration is malformed")?;

    if let Some(dir) = &args.package_dir {
        config.paths.package_dir.clone_from(dir);
    }
    if let Some(root) = &args.project_root {
        config.paths.project_root = std::path::absolute(root)
            .with_context(|| format!("Invalid project root {}", root.display()))?;
    }
    if let Some(dir) = &args.out_dir {
        config.paths.out_dir.clone_from(dir);
    }

    let platform = match &args.platform {
        Some(p) => p.parse::<Platform>()?,
        None => Platform::host()?,
    };

    debug!(?config, %platform, "Effective packaging configuration");

    let mut packager = Packager::new(config, platform);
    if let Some(tag) = &args.plat_name {
        packager = packager.plat_name(tag);
    }

    let built = packager.build().context("Packaging failed")?;
    println!("{}", built.path.display());
    Ok(())
}
