use crate::error::LocateError;
use crate::models::pool::{DeviceRecord, HealthState};
use crate::platform::Capabilities;
use tracing::{debug, warn};

/// Tab fields in a `zpool list -PLvH` device row: leading empty field, name,
/// size, alloc, free, ckpoint, expandsz, frag, cap, dedup, health.
const MIN_FIELDS: usize = 11;
const PATH_FIELD: usize = 1;
const HEALTH_FIELD: usize = 10;

/// Run `zpool list -PLvH` and return every leaf device with its health.
///
/// A failing zpool is logged by the runner; its partial stdout is still parsed.
pub fn read_pool_health(caps: &Capabilities<'_>) -> Vec<DeviceRecord> {
    let out = caps.runner().run(&caps.tools().zpool, &["list", "-PLvH"]);
    parse_zpool_list(&out.stdout, caps)
}

/// Parse scripted `zpool list -v` output.
///
/// Device rows start with a tab and carry a full `/dev/...` path (`-P`).
/// Pool rows, vdev rows (`mirror-0`, `raidz1-0`) and class headers (`logs`,
/// `cache`) are skipped.
pub fn parse_zpool_list(text: &str, caps: &Capabilities<'_>) -> Vec<DeviceRecord> {
    text.lines()
        .filter_map(|line| {
            if !line.starts_with('\t') { return None; }
            let f: Vec<&str> = line.split('\t').collect();
            if !f.get(PATH_FIELD).is_some_and(|p| p.starts_with("/dev/")) { return None; }
            if f.len() < MIN_FIELDS {
                let err = LocateError::MalformedLine {
                    tool:     "zpool",
                    line:     line.to_string(),
                    found:    f.len(),
                    expected: MIN_FIELDS,
                };
                warn!("{err}");
                return None;
            }
            Some(device_record(f[PATH_FIELD], f[HEALTH_FIELD], caps))
        })
        .collect()
}

fn device_record(path: &str, health: &str, caps: &Capabilities<'_>) -> DeviceRecord {
    let health = HealthState::parse(health);
    if !health.is_healthy() {
        warn!(device = path, %health, "unhealthy pool device");
    }

    match caps.resolve_alias(path) {
        Ok(resolved) => {
            if resolved != path {
                debug!(alias = path, device = %resolved, "resolved alias");
            }
            DeviceRecord { device_path: resolved, ..DeviceRecord::direct(path, health) }
        }
        Err(e) => {
            warn!("{e}");
            DeviceRecord { resolved: false, ..DeviceRecord::direct(path, health) }
        }
    }
}
