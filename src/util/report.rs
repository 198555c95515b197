use crate::models::locate::{Led, LocateAction};
use serde_json::{json, Value};

/// Human-readable table of every slot and the LED state decided for it.
pub fn generate(actions: &[LocateAction], dry_run: bool) -> String {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let lit = actions.iter().filter(|a| a.led == Led::On).count();
    let mut out = String::new();

    out.push_str("═══════════════════════════════════════════════\n");
    out.push_str(&format!("  poollight — {}{}\n", now, if dry_run { " (dry run)" } else { "" }));
    out.push_str("═══════════════════════════════════════════════\n\n");

    out.push_str(&format!("── Slots ({}, {} lit) ─────────────────────────\n", actions.len(), lit));
    if actions.is_empty() {
        out.push_str("  (controller reported no drives)\n");
    }
    for a in actions {
        let marker = if a.led == Led::On { "●" } else { " " };
        out.push_str(&format!(
            "  {} {:14}  {:3}  SN {:20}  {}\n",
            marker, a.address.storcli_path(), a.led.label(), a.identity.serial, a.identity.model
        ));
    }
    out
}

/// JSON snapshot of the decisions for scripting.
pub fn snapshot(actions: &[LocateAction], platform: &str, dry_run: bool) -> Value {
    json!({
        "poollight_version": env!("CARGO_PKG_VERSION"),
        "timestamp":         chrono::Local::now().to_rfc3339(),
        "platform":          platform,
        "dry_run":           dry_run,
        "actions":           actions,
    })
}
