//! Build and version metadata
//!
//! `GIT_COMMIT` and `BUILD_DATE` are captured from the build environment
//! (set by the container build). `RUSTC_VERSION` comes from `build.rs`.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: &'static str,
    pub git_commit: &'static str,
    pub build_date: &'static str,
    pub rustc_version: &'static str,
    pub compiler: &'static str,
    pub platform: String,
}

/// Version of the running binary
pub fn version_info() -> VersionInfo {
    VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_commit: option_env!("GIT_COMMIT").unwrap_or("unknown"),
        build_date: option_env!("BUILD_DATE").unwrap_or("unknown"),
        rustc_version: option_env!("RUSTC_VERSION").unwrap_or("unknown"),
        compiler: "rustc",
        platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{} ({}), built {}",
            self.version, self.git_commit, self.build_date
        )
    }
}
