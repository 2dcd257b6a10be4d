use std::path::PathBuf;
use std::time::Duration;

/// Immutable runtime settings, built once from CLI args in main and passed
/// by reference. The parser core never sees this.
#[derive(Debug, Clone)]
pub struct Config {
    pub interval: Duration,
    pub destination: String,
    pub index: String,
    pub shipper: String,
    pub cli_path: PathBuf,
}

/// Parse interval strings like "30s", "5m", "1h". Bare numbers are seconds.
pub fn parse_interval(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let (number, unit) = match s.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) => s.split_at(idx),
        None => (s, "s"),
    };
    let n: u64 = number
        .parse()
        .map_err(|_| format!("invalid interval {s:?}"))?;
    let secs = match unit {
        "s" => n,
        "m" => n * 60,
        "h" => n * 3600,
        _ => return Err(format!("invalid interval unit {unit:?} (use s, m, or h)")),
    };
    if secs == 0 {
        return Err("interval must be greater than zero".into());
    }
    Ok(Duration::from_secs(secs))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_forms() {
        assert_eq!(parse_interval("30s"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_interval("5m"), Ok(Duration::from_secs(300)));
        assert_eq!(parse_interval("1h"), Ok(Duration::from_secs(3600)));
        assert_eq!(parse_interval("90"), Ok(Duration::from_secs(90)));
        assert_eq!(parse_interval(" 5m "), Ok(Duration::from_secs(300)));
    }

    #[test]
    fn rejected_forms() {
        assert!(parse_interval("").is_err());
        assert!(parse_interval("5x").is_err());
        assert!(parse_interval("m").is_err());
        assert!(parse_interval("0s").is_err());
        assert!(parse_interval("-5m").is_err());
    }
}
