use crate::error::LocateError;
use crate::exec::ToolRunner;
use crate::models::disk::DiskIdentity;

/// Labels smartctl uses for the serial number (ATA/NVMe, then SCSI).
const SERIAL_LABELS: &[&str] = &["Serial Number:", "Serial number:"];

/// Labels for the model: ATA, SCSI, NVMe.
const MODEL_LABELS: &[&str] = &["Device Model:", "Product:", "Model Number:"];

/// Run `smartctl -i <device>` and pull out the drive's serial and model.
pub fn read_identity(
    runner:   &dyn ToolRunner,
    smartctl: &str,
    device:   &str,
) -> Result<DiskIdentity, LocateError> {
    // smartctl sets exit status bits for conditions that do not affect the
    // information section, so the report is parsed regardless.
    let out = runner.run(smartctl, &["-i", device]);
    parse_identity(&out.stdout, device)
}

/// Parse the information section of a smartctl report.
pub fn parse_identity(report: &str, device: &str) -> Result<DiskIdentity, LocateError> {
    let serial = field(report, SERIAL_LABELS)
        .and_then(|v| v.split_whitespace().next().map(str::to_string))
        .ok_or_else(|| missing(device, "serial number"))?;

    let model = field(report, MODEL_LABELS)
        .map(str::to_string)
        .ok_or_else(|| missing(device, "model"))?;

    Ok(DiskIdentity { serial, model })
}

fn missing(device: &str, field: &'static str) -> LocateError {
    LocateError::MissingField { tool: "smartctl", device: device.to_string(), field }
}

/// Trimmed, non-empty value of the first line starting with any of `labels`.
fn field<'a>(report: &'a str, labels: &[&str]) -> Option<&'a str> {
    report.lines().find_map(|line| {
        labels.iter()
            .find_map(|l| line.strip_prefix(l))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    })
}
