//! Runtime probes read at request time.
//!
//! Everything here is read-only with respect to the process: wall clock,
//! resident memory of the current process, logical processor count, and a
//! few identifiers fixed at build or startup time.

use chrono::{DateTime, SecondsFormat, Utc};
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

use crate::error::{NexusError, Result};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Current wall-clock time, RFC 3339 UTC with millisecond precision.
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

fn format_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Resident memory of the current process, in megabytes (rounded up).
pub fn process_memory_mb() -> Result<u64> {
    let pid = sysinfo::get_current_pid()
        .map_err(|e| NexusError::Internal(format!("current pid unavailable: {e}")))?;

    let mut sys = System::new();
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing().with_memory(),
    );

    let process = sys
        .process(pid)
        .ok_or_else(|| NexusError::Internal(format!("process {pid} not visible")))?;

    match process.memory() {
        0 => Err(NexusError::Internal(format!("process {pid} reported no resident memory"))),
        bytes => Ok(bytes_to_mb(bytes)),
    }
}

fn bytes_to_mb(bytes: u64) -> u64 {
    bytes.div_ceil(BYTES_PER_MB)
}

/// `"<n> MB"`
pub fn format_memory(mb: u64) -> String {
    format!("{mb} MB")
}

/// Logical processors available to this process (never 0).
pub fn logical_processors() -> usize {
    num_cpus::get()
}

/// Identifier of the runtime this binary was built with, given the
/// compiler version captured at build time.
pub fn runtime_version(rustc_version: &str) -> String {
    format!(
        "rust {rustc_version} ({}-{})",
        std::env::consts::ARCH,
        std::env::consts::OS
    )
}

/// Build time from seconds since the Unix epoch, RFC 3339 UTC.
///
/// Returns `"unknown"` for values chrono cannot represent.
pub fn build_time(epoch_secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(epoch_secs, 0) {
        Some(t) => format_timestamp(t),
        None => {
            tracing::debug!(epoch_secs, "build epoch out of range");
            "unknown".to_string()
        }
    }
}
