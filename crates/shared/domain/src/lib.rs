//! # Domain Models
//!
//! Pure data shared by the workspace: benchmark model descriptors and their
//! size groups, and the packaging configuration consumed by `tw-packaging`.
//! Keep it lean: no I/O and no logic beyond simple accessors.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod groups;
pub mod models;
