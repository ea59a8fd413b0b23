//! Build metadata captured by `build.rs`.

/// Version of the compiler that built this binary (e.g. `1.88.0`).
pub const RUSTC_VERSION: &str = env!("NEXUS_RUSTC_VERSION");

const BUILD_EPOCH: &str = env!("NEXUS_BUILD_EPOCH");

/// Build time in seconds since the Unix epoch.
pub fn build_epoch() -> Option<i64> {
    BUILD_EPOCH.parse().ok()
}
