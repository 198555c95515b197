use crate::exec::{command_line, ToolRunner};
use crate::models::disk::DiskIdentity;
use crate::models::locate::{InventoryRecord, Led, SlotAddress};
use tracing::{debug, info, warn};

const SERIAL_KEY: &str = "SN =";
const MODEL_KEY: &str = "Model Number =";
/// Last field of a drive's attribute section; capture stops here.
const TERMINATOR_KEY: &str = "Inquiry Data =";

/// Run `storcli <target> show all` and return every populated slot.
pub fn read_inventory(runner: &dyn ToolRunner, storcli: &str, target: &str) -> Vec<InventoryRecord> {
    let out = runner.run(storcli, &[target, "show", "all"]);
    let inventory = parse_inventory(&out.stdout);
    debug!(drives = inventory.len(), "controller inventory read");
    inventory
}

/// Parse `storcli ... show all` into one record per drive block.
///
/// Any line carrying a `/cN/eN/sN` token opens the block for that address
/// (storcli repeats the address in several sub-headers of the same block).
/// `SN =` and `Model Number =` are captured until `Inquiry Data =`, a new
/// address, or end of input. Blocks lacking either field are dropped.
pub fn parse_inventory(text: &str) -> Vec<InventoryRecord> {
    let mut records = Vec::new();
    let mut block: Option<Block> = None;

    for line in text.lines() {
        if let Some(address) = find_address(line) {
            if block.as_ref().map(|b| b.address) != Some(address) {
                if let Some(done) = block.take() {
                    done.finish(&mut records);
                }
                block = Some(Block::new(address));
            }
            continue;
        }

        let Some(b) = block.as_mut() else { continue };
        if b.closed { continue; }

        let trimmed = line.trim();
        if trimmed.starts_with(TERMINATOR_KEY) {
            b.closed = true;
        } else if let Some(v) = trimmed.strip_prefix(SERIAL_KEY) {
            b.serial = non_empty(v);
        } else if let Some(v) = trimmed.strip_prefix(MODEL_KEY) {
            b.model = non_empty(v);
        }
    }

    if let Some(done) = block.take() {
        done.finish(&mut records);
    }
    records
}

struct Block {
    address: SlotAddress,
    serial:  Option<String>,
    model:   Option<String>,
    closed:  bool,
}

impl Block {
    fn new(address: SlotAddress) -> Self {
        Self { address, serial: None, model: None, closed: false }
    }

    fn finish(self, records: &mut Vec<InventoryRecord>) {
        match (self.serial, self.model) {
            (Some(serial), Some(model)) => records.push(InventoryRecord {
                address:  self.address,
                identity: DiskIdentity::new(serial, model),
            }),
            _ => debug!(slot = %self.address, "no serial/model, treating slot as empty"),
        }
    }
}

fn non_empty(v: &str) -> Option<String> {
    let v = v.trim();
    if v.is_empty() { None } else { Some(v.to_string()) }
}

/// First `/c<N>/e<N>/s<N>` token on the line, if any.
fn find_address(line: &str) -> Option<SlotAddress> {
    line.split_whitespace()
        .find_map(|t| parse_address(t.trim_end_matches(':')))
}

fn parse_address(token: &str) -> Option<SlotAddress> {
    let mut parts = token.strip_prefix('/')?.split('/');
    let controller = index(parts.next()?, 'c')?;
    let enclosure  = index(parts.next()?, 'e')?;
    let slot       = index(parts.next()?, 's')?;
    if parts.next().is_some() { return None; }
    Some(SlotAddress::new(controller, enclosure, slot))
}

fn index(part: &str, tag: char) -> Option<u32> {
    part.strip_prefix(tag)?.parse().ok()
}

/// Issue `storcli /cC/eE/sS start|stop locate`. Returns whether storcli succeeded.
pub fn set_locate(runner: &dyn ToolRunner, storcli: &str, address: SlotAddress, led: Led) -> bool {
    let path = address.storcli_path();
    let args = [path.as_str(), led.verb(), "locate"];
    let out = runner.run(storcli, &args);
    if out.success {
        info!(slot = %address, led = led.label(), "{} locate LED", if led == Led::On { "started" } else { "stopped" });
    } else {
        warn!(command = %command_line(storcli, &args), "locate command failed");
    }
    out.success
}
