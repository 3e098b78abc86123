use serde::{Deserialize, Serialize};
use std::env::consts;
use sysinfo::System;

const RUSTC_VERSION: &str = env!("CONTAINER_ALIVE_RUSTC_VERSION");

/// Host metadata shown in the banner. Resolved fresh on every call to
/// [`PlatformInfo::detect`]; nothing is cached between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub runtime_version: String,
    pub os_name: String,
    pub os_release: String,
    pub arch: String,
}

impl PlatformInfo {
    pub fn detect() -> Self {
        Self {
            runtime_version: RUSTC_VERSION.to_string(),
            os_name: os_family_name(consts::OS),
            os_release: System::kernel_version().unwrap_or_default(),
            arch: consts::ARCH.to_string(),
        }
    }

    /// `"Linux 6.1.0"`, or just the family when the release is unknown.
    pub fn os_line(&self) -> String {
        format!("{} {}", self.os_name, self.os_release)
            .trim()
            .to_string()
    }
}

/// Maps Rust's lowercase target OS names onto the names the kernels report
/// for themselves (`uname -s` style).
fn os_family_name(os: &str) -> String {
    match os {
        "linux" | "android" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "dragonfly" => "DragonFly".to_string(),
        "solaris" | "illumos" => "SunOS".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
