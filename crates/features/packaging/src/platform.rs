//! Target platform of a package and the naming rules that depend on it.

use crate::error::PackagingError;
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumString};

/// Operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Os {
    #[strum(to_string = "linux")]
    Linux,
    #[strum(to_string = "macos", serialize = "darwin", serialize = "macosx")]
    MacOs,
    #[strum(to_string = "windows", serialize = "win")]
    Windows,
}

/// CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Arch {
    #[strum(to_string = "x86_64", serialize = "amd64", serialize = "x64")]
    X86_64,
    #[strum(to_string = "aarch64", serialize = "arm64")]
    Aarch64,
}

/// A packaging target: OS plus architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
    pub os: Os,
    pub arch: Arch,
}

impl Platform {
    #[must_use]
    pub const fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// The platform this process runs on.
    ///
    /// # Errors
    /// Returns [`PackagingError::InvalidPlatform`] on hosts without a wheel tag mapping.
    pub fn host() -> Result<Self, PackagingError> {
        let (os, arch) = (std::env::consts::OS, std::env::consts::ARCH);
        let os = Os::from_str(os).map_err(|_| unsupported("OS", os))?;
        let arch = Arch::from_str(arch).map_err(|_| unsupported("architecture", arch))?;
        Ok(Self { os, arch })
    }

    /// Native executable suffix: `.exe` on Windows, empty elsewhere.
    #[must_use]
    pub const fn exe_suffix(self) -> &'static str {
        match self.os {
            Os::Windows => ".exe",
            Os::Linux | Os::MacOs => "",
        }
    }

    /// Whether the platform marks executables with a permission bit.
    #[must_use]
    pub const fn uses_exec_bit(self) -> bool {
        !matches!(self.os, Os::Windows)
    }

    /// Platform part of the wheel tag (e.g., `linux_x86_64`, `win_amd64`).
    #[must_use]
    pub const fn wheel_tag(self) -> &'static str {
        match (self.os, self.arch) {
            (Os::Linux, Arch::X86_64) => "linux_x86_64",
            (Os::Linux, Arch::Aarch64) => "linux_aarch64",
            (Os::MacOs, Arch::X86_64) => "macosx_10_13_x86_64",
            (Os::MacOs, Arch::Aarch64) => "macosx_11_0_arm64",
            (Os::Windows, Arch::X86_64) => "win_amd64",
            (Os::Windows, Arch::Aarch64) => "win_arm64",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

impl FromStr for Platform {
    type Err = PackagingError;

    /// Parses `<os>-<arch>`, e.g. `linux-x86_64` or `macos-arm64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (os, arch) = s.trim().split_once('-').ok_or_else(|| PackagingError::InvalidPlatform {
            message: format!("expected <os>-<arch>, got '{s}'").into(),
            context: None,
        })?;
        let os = Os::from_str(os).map_err(|_| unsupported("OS", os))?;
        let arch = Arch::from_str(arch).map_err(|_| unsupported("architecture", arch))?;
        Ok(Self { os, arch })
    }
}

/// Checks a user supplied platform tag (`--plat-name`).
///
/// # Errors
/// Returns [`PackagingError::InvalidPlatform`] for empty tags or tags with
/// characters outside `[A-Za-z0-9_.]`.
pub fn validate_plat_name(tag: &str) -> Result<(), PackagingError> {
    let valid = !tag.is_empty()
        && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(PackagingError::InvalidPlatform {
            message: format!("'{tag}' is not a valid wheel platform tag").into(),
            context: None,
        })
    }
}

fn unsupported(kind: &str, value: &str) -> PackagingError {
    PackagingError::InvalidPlatform {
        message: format!("unsupported {kind} '{value}'").into(),
        context: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_is_the_only_suffixed_platform() {
        assert_eq!(Platform::new(Os::Windows, Arch::X86_64).exe_suffix(), ".exe");
        assert_eq!(Platform::new(Os::Linux, Arch::X86_64).exe_suffix(), "");
        assert_eq!(Platform::new(Os::MacOs, Arch::Aarch64).exe_suffix(), "");
    }

    #[test]
    fn parses_aliases() {
        let p: Platform = "darwin-arm64".parse().expect("alias parses");
        assert_eq!(p, Platform::new(Os::MacOs, Arch::Aarch64));
        assert_eq!(p.to_string(), "macos-aarch64");

        let p: Platform = "Windows-AMD64".parse().expect("case insensitive");
        assert_eq!(p.wheel_tag(), "win_amd64");
    }

    #[test]
    fn rejects_unknown_platforms() {
        assert!("linux".parse::<Platform>().is_err());
        assert!("solaris-x86_64".parse::<Platform>().is_err());
        assert!("linux-riscv64".parse::<Platform>().is_err());
    }

    #[test]
    fn host_round_trips_through_display() {
        if let Ok(host) = Platform::host() {
            assert_eq!(host.to_string().parse::<Platform>().ok(), Some(host));
        }
    }

    #[test]
    fn plat_name_validation() {
        assert!(validate_plat_name("manylinux_2_28_x86_64").is_ok());
        assert!(validate_plat_name("").is_err());
        assert!(validate_plat_name("linux-x86_64").is_err());
    }
}
