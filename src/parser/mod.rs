pub mod inquiry;
pub mod lines;
pub mod slots;

use crate::error::ParseError;
use lines::classify_line;
pub use slots::SlotRecord;

/// Parse one full `-PDList` report into ordered per-slot records.
///
/// The report is line-oriented with CRLF or LF endings; only the six known
/// field lines matter, everything else is skipped.
pub fn parse_report(text: &str) -> Result<Vec<SlotRecord>, ParseError> {
    slots::assemble(text.lines().map(str::trim_end).filter_map(classify_line))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_slot_scenario_with_noise() {
        let report = "\
Adapter #0

Enclosure Device ID: 32
Slot Number: 0
Media Error Count: 3
PD Type: SATA
Firmware state: Online
Slot Number: 1
Media Error Count: 0
Device Speed: 6.0Gb/s
Drive has flagged a S.M.A.R.T alert : No
";
        let records = parse_report(report).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].slot_number, 0);
        assert_eq!(records[0].media_error_count, 3);
        assert_eq!(records[0].state, "Online");
        assert_eq!(records[1].slot_number, 1);
        assert_eq!(records[1].media_error_count, 0);
        assert!(!records[1].smart_alert);
    }

    #[test]
    fn crlf_line_endings() {
        let report = "Slot Number: 2\r\nFirmware state: Online, Spun Up\r\n";
        let records = parse_report(report).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slot_number, 2);
        assert_eq!(records[0].state, "Online, Spun Up");
    }

    #[test]
    fn empty_report() {
        assert!(parse_report("").unwrap().is_empty());
        assert!(parse_report("Adapter #0\n\nExit Code: 0x00\n").unwrap().is_empty());
    }

    #[test]
    fn malformed_count_aborts() {
        let report = "Slot Number: 0\nMedia Error Count: n/a\n";
        assert!(parse_report(report).is_err());
    }

    #[test]
    fn full_pdlist_fixture() {
        let text = std::fs::read_to_string("tests/fixtures/pdlist.txt").unwrap();
        let records = parse_report(&text).unwrap();
        assert_eq!(records.len(), 4);

        let numbers: Vec<u64> = records.iter().map(|r| r.slot_number).collect();
        assert_eq!(numbers, vec![0, 1, 2, 3]);

        // Slot 0: Seagate with fused serial+model inquiry token
        assert_eq!(records[0].serial_number, "Z305D1GF");
        assert_eq!(records[0].model_number, "ST4000DM000-1F2168");
        assert_eq!(records[0].firmware_version, "CC52");
        assert_eq!(records[0].state, "Online, Spun Up");
        assert!(!records[0].smart_alert);

        // Slot 1: WD with multi-word model
        assert_eq!(records[1].serial_number, "WD-WCC4N0123456");
        assert_eq!(records[1].model_number, "WDC WD40EFRX-68WT0N0");
        assert_eq!(records[1].firmware_version, "82.00A82");
        assert_eq!(records[1].media_error_count, 0);

        // Slot 2: accumulated errors and a flagged alert
        assert_eq!(records[2].media_error_count, 17);
        assert_eq!(records[2].other_error_count, 4);
        assert!(records[2].smart_alert);

        // Slot 3: trailing record flushed without a following boundary
        assert_eq!(records[3].state, "Unconfigured(good), Spun Up");
    }
}
