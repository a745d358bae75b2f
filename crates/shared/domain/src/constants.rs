//! Well-known model group names.

/// Models that require less computational resources.
pub const SMALL: &str = "small";
/// Models that require more computational resources.
pub const LARGE: &str = "large";
/// The derived aggregate of every declared group.
pub const ALL: &str = "all";
