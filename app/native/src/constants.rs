//! Application-wide constants.

/// Application identifier, used for per-app filesystem paths.
pub const APP_ID: &str = "com.snapdock.desktop";
