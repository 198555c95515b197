use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Stable identity of a physical drive, shared by the pool view and the
/// controller view. Compared field-by-field, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DiskIdentity {
    pub serial: String,
    pub model:  String,
}

impl DiskIdentity {
    pub fn new(serial: impl Into<String>, model: impl Into<String>) -> Self {
        Self { serial: serial.into(), model: model.into() }
    }
}

impl fmt::Display for DiskIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (SN {})", self.model, self.serial)
    }
}

/// Identities of every distinct drive seen unhealthy during one run.
pub type UnhealthySet = BTreeSet<DiskIdentity>;
