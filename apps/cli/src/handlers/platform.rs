use anyhow::Result;
use tw_packaging::Platform;

/// Prints the host platform, its executable suffix and its wheel tag.
///
/// # Errors
/// Returns an error on hosts without a wheel tag mapping.
pub fn show() -> Result<()> {
    let host = Platform::host()?;
    let suffix = if host.exe_suffix().is_empty() { "(none)" } else { host.exe_suffix() };

    println!("platform:   {host}");
    println!("exe suffix: {suffix}");
    println!("wheel tag:  py3-none-{}", host.wheel_tag());
    Ok(())
}
