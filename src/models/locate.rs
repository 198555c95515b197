use super::disk::DiskIdentity;
use serde::Serialize;
use std::fmt;

/// Controller / enclosure / slot triple used by storcli to address a drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SlotAddress {
    pub controller: u32,
    pub enclosure:  u32,
    pub slot:       u32,
}

impl SlotAddress {
    pub fn new(controller: u32, enclosure: u32, slot: u32) -> Self {
        Self { controller, enclosure, slot }
    }

    /// storcli object path, e.g. `/c0/e252/s3`.
    pub fn storcli_path(&self) -> String {
        format!("/c{}/e{}/s{}", self.controller, self.enclosure, self.slot)
    }
}

impl fmt::Display for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storcli_path())
    }
}

/// One populated drive slot reported by the controller, healthy or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub address:  SlotAddress,
    pub identity: DiskIdentity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Led {
    On,
    Off,
}

impl Led {
    /// storcli verb for this state.
    pub fn verb(&self) -> &'static str {
        match self {
            Led::On  => "start",
            Led::Off => "stop",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Led::On  => "ON",
            Led::Off => "OFF",
        }
    }
}

/// Decision for one slot: assert or clear its locate indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocateAction {
    #[serde(flatten)]
    pub address:  SlotAddress,
    pub identity: DiskIdentity,
    pub led:      Led,
}
