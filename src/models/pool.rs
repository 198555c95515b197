use std::fmt;

/// Health column of one `zpool list -v` device row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthState {
    Online,
    Degraded,
    Faulted,
    Offline,
    Unavail,
    Removed,
    /// Anything zpool prints that we do not know by name.
    Other(String),
}

impl HealthState {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "ONLINE"   => HealthState::Online,
            "DEGRADED" => HealthState::Degraded,
            "FAULTED"  => HealthState::Faulted,
            "OFFLINE"  => HealthState::Offline,
            "UNAVAIL"  => HealthState::Unavail,
            "REMOVED"  => HealthState::Removed,
            other      => HealthState::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            HealthState::Online   => "ONLINE",
            HealthState::Degraded => "DEGRADED",
            HealthState::Faulted  => "FAULTED",
            HealthState::Offline  => "OFFLINE",
            HealthState::Unavail  => "UNAVAIL",
            HealthState::Removed  => "REMOVED",
            HealthState::Other(s) => s,
        }
    }

    /// Only ONLINE counts as healthy; every other state lights the drive.
    pub fn is_healthy(&self) -> bool { *self == HealthState::Online }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One leaf device of a pool as reported by zpool, after alias resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    /// Path exactly as zpool printed it.
    pub pool_path:   String,
    /// Path to hand to smartctl. Equals `pool_path` unless an alias was resolved.
    pub device_path: String,
    pub health:      HealthState,
    /// False when alias resolution hit a gap; such records never match a slot.
    pub resolved:    bool,
}

impl DeviceRecord {
    pub fn direct(path: &str, health: HealthState) -> Self {
        Self {
            pool_path:   path.to_string(),
            device_path: path.to_string(),
            health,
            resolved:    true,
        }
    }

    pub fn is_healthy(&self) -> bool { self.health.is_healthy() }
}
