use std::sync::LazyLock;

use regex::Regex;

// Cheap anchored prefilter so the common case (an irrelevant report line)
// bails before any splitting or trimming. Labels are matched case-sensitively;
// MegaCli prints the S.M.A.R.T label with a space before the colon.
static FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(Slot Number|Inquiry Data|Media Error Count|Other Error Count|Firmware state|Drive has flagged a S\.M\.A\.R\.T alert ?):",
    )
    .unwrap()
});

/// One of the six report lines we care about, carrying the trimmed value
/// portion after the first colon. Everything else in a `-PDList` report is
/// noise and classifies to `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldLine {
    SlotNumber(String),
    InquiryData(String),
    MediaErrorCount(String),
    OtherErrorCount(String),
    FirmwareState(String),
    SmartAlert(String),
}

pub fn classify_line(line: &str) -> Option<FieldLine> {
    if !FIELD_RE.is_match(line) {
        return None;
    }

    let (label, value) = line.split_once(':')?;
    let label = label.trim();
    let value = value.trim().to_string();

    match label {
        "Slot Number" => Some(FieldLine::SlotNumber(value)),
        "Inquiry Data" => Some(FieldLine::InquiryData(value)),
        "Media Error Count" => Some(FieldLine::MediaErrorCount(value)),
        "Other Error Count" => Some(FieldLine::OtherErrorCount(value)),
        "Firmware state" => Some(FieldLine::FirmwareState(value)),
        "Drive has flagged a S.M.A.R.T alert" => Some(FieldLine::SmartAlert(value)),
        _ => None,
    }
}

// ── Tests ──
