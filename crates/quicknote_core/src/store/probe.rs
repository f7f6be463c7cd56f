//! Medium availability probe.
//!
//! # Responsibility
//! - Report whether the medium currently accepts writes at all.
//!
//! # Invariants
//! - Probing leaves no residue: the disposable key is removed on success.
//! - Failures are reported as `false`, never propagated.

use crate::medium::StorageMedium;
use log::debug;

const PROBE_KEY: &str = "__availability_probe__";

/// Performs a throwaway write+remove against the medium.
///
/// Callers probe before every persistence attempt instead of caching the
/// result: availability can change at runtime (quota pressure, privacy modes
/// on embedding hosts).
pub fn medium_available<M: StorageMedium>(medium: &mut M) -> bool {
    let usable = medium
        .set(PROBE_KEY, "probe")
        .and_then(|()| medium.remove(PROBE_KEY))
        .is_ok();
    if !usable {
        debug!("event=medium_probe module=store status=error");
    }
    usable
}
