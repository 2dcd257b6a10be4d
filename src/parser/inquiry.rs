use std::sync::LazyLock;

use regex::Regex;

// Seagate drives report serial and model fused into one token
// ("Z305D1GFST4000DM000-1F2168"): a run of word characters followed by the
// ST<thousands> family prefix. Capture 1 is the serial.
static FUSED_SERIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)(ST\d000[\w-]+)").unwrap());

/// Serial, model, and firmware pulled out of a single free-text
/// "Inquiry Data" value. Internal layout varies by drive vendor: some emit
/// three-plus whitespace-separated fields, some fuse serial and model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryData {
    pub serial_number: String,
    pub model_number: String,
    pub firmware_version: String,
}

pub fn extract_inquiry(value: &str) -> InquiryData {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    let Some(last) = tokens.last() else {
        return InquiryData::default();
    };
    let firmware_version = last.to_string();

    let serial_number = if tokens.len() < 3 {
        FUSED_SERIAL_RE
            .captures(tokens[0])
            .map(|caps| caps[1].to_string())
            .unwrap_or_default()
    } else {
        tokens[0].to_string()
    };

    // The model is whatever remains of the raw value once the serial and
    // firmware substrings are gone; tokenizing alone would fragment
    // multi-word model names.
    let mut model = value.to_string();
    if !serial_number.is_empty() {
        model = model.replacen(&serial_number, "", 1);
    }
    model = model.replacen(&firmware_version, "", 1);

    InquiryData {
        serial_number,
        model_number: model.trim().to_string(),
        firmware_version,
    }
}

// ── Tests ──
