//! Kernel utilities shared by the workspace binaries.
//!
//! ## Config loading
//! ```rust,no_run
//! use tw_kernel::config::load_config;
//! use tw_kernel::domain::config::PackagingConfig;
//!
//! let cfg: PackagingConfig = load_config(Some("toolwheel.toml")).unwrap();
//! ```

pub mod config;

pub use tw_domain as domain;
