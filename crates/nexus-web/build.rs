//! Captures build metadata served by `/version`.
//!
//! - `NEXUS_RUSTC_VERSION`: version of the compiler building this crate
//! - `NEXUS_BUILD_EPOCH`: build time in seconds since the Unix epoch,
//!   `SOURCE_DATE_EPOCH` when set (reproducible builds)

use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let rustc = rustc_version::version()
        .map(|v| v.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=NEXUS_RUSTC_VERSION={rustc}");

    let epoch = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs() as i64)
                .unwrap_or(0)
        });
    println!("cargo:rustc-env=NEXUS_BUILD_EPOCH={epoch}");
}
