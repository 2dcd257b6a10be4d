use serde::Serialize;

use super::inquiry::extract_inquiry;
use super::lines::FieldLine;
use crate::error::ParseError;

/// One physical drive bay's status at poll time. Fields missing from the
/// report keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlotRecord {
    pub slot_number: u64,
    pub media_error_count: u64,
    pub other_error_count: u64,
    pub serial_number: String,
    pub model_number: String,
    pub firmware_version: String,
    pub smart_alert: bool,
    pub state: String,
}

/// Fold classified field lines into completed records, one per slot.
///
/// "Slot Number" lines are the only record boundary the report provides:
/// each one finalizes the record in progress and starts a fresh one. No
/// record exists before the first boundary, so the controller's numbering is
/// taken literally — slot 0 is a real slot, and an empty report yields no
/// records.
pub fn assemble(
    lines: impl IntoIterator<Item = FieldLine>,
) -> Result<Vec<SlotRecord>, ParseError> {
    let mut records = Vec::new();
    let mut current: Option<SlotRecord> = None;

    for line in lines {
        match line {
            FieldLine::SlotNumber(v) => {
                let number = parse_count("Slot Number", &v)?;
                if let Some(done) = current.take() {
                    records.push(done);
                }
                current = Some(SlotRecord {
                    slot_number: number,
                    ..SlotRecord::default()
                });
            }
            FieldLine::InquiryData(v) => {
                if let Some(rec) = current.as_mut() {
                    let inquiry = extract_inquiry(&v);
                    rec.serial_number = inquiry.serial_number;
                    rec.model_number = inquiry.model_number;
                    rec.firmware_version = inquiry.firmware_version;
                }
            }
            FieldLine::MediaErrorCount(v) => {
                let n = parse_count("Media Error Count", &v)?;
                if let Some(rec) = current.as_mut() {
                    rec.media_error_count = n;
                }
            }
            FieldLine::OtherErrorCount(v) => {
                let n = parse_count("Other Error Count", &v)?;
                if let Some(rec) = current.as_mut() {
                    rec.other_error_count = n;
                }
            }
            FieldLine::FirmwareState(v) => {
                if let Some(rec) = current.as_mut() {
                    rec.state = v;
                }
            }
            FieldLine::SmartAlert(v) => {
                if let Some(rec) = current.as_mut() {
                    // Controller prints "No" when healthy; anything else
                    // ("Yes", "N/A", ...) is treated as an alert.
                    rec.smart_alert = v != "No";
                }
            }
        }
    }

    if let Some(done) = current {
        records.push(done);
    }

    Ok(records)
}

fn parse_count(field: &'static str, value: &str) -> Result<u64, ParseError> {
    value.parse::<u64>().map_err(|_| ParseError::MalformedCount {
        field,
        value: value.to_string(),
    })
}

// ── Tests ──
