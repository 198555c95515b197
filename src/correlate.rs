use crate::collectors::{storcli, zfs};
use crate::config::Config;
use crate::models::disk::UnhealthySet;
use crate::models::locate::{InventoryRecord, Led, LocateAction};
use crate::models::pool::DeviceRecord;
use crate::platform::Capabilities;
use tracing::{info, warn};

/// One full pass: pool health → unhealthy identities → controller slots.
pub fn run(caps: &Capabilities<'_>, config: &Config) -> Vec<LocateAction> {
    let records = zfs::read_pool_health(caps);
    let unhealthy = collect_unhealthy(&records, caps);

    let inventory = storcli::read_inventory(
        caps.runner(),
        &caps.tools().storcli,
        &config.controller.inventory_target,
    );
    decide(&inventory, &unhealthy)
}

/// Identities of every unhealthy, resolvable pool device.
///
/// Devices whose path could not be resolved or whose identity cannot be read
/// are logged and left out; they can never match a slot.
pub fn collect_unhealthy(records: &[DeviceRecord], caps: &Capabilities<'_>) -> UnhealthySet {
    let mut set = UnhealthySet::new();

    for rec in records.iter().filter(|r| !r.is_healthy()) {
        if !rec.resolved {
            warn!(device = %rec.pool_path, health = %rec.health, "unresolved unhealthy device, cannot locate it");
            continue;
        }
        match caps.read_identity(&rec.device_path) {
            Ok(id) => {
                info!(device = %rec.device_path, serial = %id.serial, model = %id.model, "found disk");
                set.insert(id);
            }
            Err(e) => warn!("{e}"),
        }
    }

    if set.is_empty() {
        info!("all disks healthy");
    } else {
        let names: Vec<String> = set.iter().map(ToString::to_string).collect();
        info!(count = set.len(), "unhealthy disks: {}", names.join(", "));
    }
    set
}

/// One action per inventory slot, in controller order: ON iff unhealthy.
pub fn decide(inventory: &[InventoryRecord], unhealthy: &UnhealthySet) -> Vec<LocateAction> {
    inventory.iter()
        .map(|r| LocateAction {
            address:  r.address,
            identity: r.identity.clone(),
            led:      if unhealthy.contains(&r.identity) { Led::On } else { Led::Off },
        })
        .collect()
}

/// Drive the locate LEDs. Returns how many storcli commands failed.
pub fn apply(caps: &Capabilities<'_>, actions: &[LocateAction]) -> usize {
    actions.iter()
        .filter(|a| !storcli::set_locate(caps.runner(), &caps.tools().storcli, a.address, a.led))
        .count()
}
