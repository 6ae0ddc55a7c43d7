use models::Snapshot;

/// Best-effort decimal read. Absent keys and unparsable values fall back to
/// the supplied default; negative and fractional values pass through.
pub fn read_amount(snapshot: &Snapshot, key: &str, default: f64) -> f64 {
    snapshot
        .get(key)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Best-effort integer read. Falls back to truncating a decimal value when
/// the string is not a plain integer (hosts have written both forms).
pub fn read_int(snapshot: &Snapshot, key: &str, default: i64) -> i64 {
    let Some(raw) = snapshot.get(key) else {
        return default;
    };
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return n;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v.trunc() as i64,
        _ => default,
    }
}

/// Reads a stored string, substituting the default only when the key is absent.
pub fn read_string(snapshot: &Snapshot, key: &str, default: &str) -> String {
    snapshot
        .get(key)
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

/// Reads the primary key, consulting the legacy key only when the primary is
/// absent entirely. A present-but-malformed primary still wins (and falls back
/// to the default), so a migrated host never resurrects stale legacy values.
pub fn read_amount_either(
    snapshot: &Snapshot,
    primary: &str,
    legacy: &str,
    default: f64,
) -> f64 {
    if snapshot.get(primary).is_some() {
        read_amount(snapshot, primary, default)
    } else {
        read_amount(snapshot, legacy, default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(pairs: &[(&str, &str)]) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for (key, value) in pairs {
            snapshot.set(key, value);
        }
        snapshot
    }

    #[test]
    fn test_read_amount_absent_key_returns_default() {
        let snapshot = Snapshot::new();
        assert_eq!(read_amount(&snapshot, "todaySpent", 0.0), 0.0);
        assert_eq!(read_amount(&snapshot, "todaySpent", 42.5), 42.5);
    }

    #[test]
    fn test_read_amount_parses_decimals() {
        let snapshot = snapshot_with(&[("todaySpent", "1234.5")]);
        assert_eq!(read_amount(&snapshot, "todaySpent", 0.0), 1234.5);
    }

    #[test]
    fn test_read_amount_malformed_values_degrade_to_default() {
        let snapshot = snapshot_with(&[
            ("empty", ""),
            ("text", "abc"),
            ("partial", "12abc"),
            ("nan", "NaN"),
            ("inf", "inf"),
        ]);
        assert_eq!(read_amount(&snapshot, "empty", 0.0), 0.0);
        assert_eq!(read_amount(&snapshot, "text", 0.0), 0.0);
        assert_eq!(read_amount(&snapshot, "partial", 7.0), 7.0);
        assert_eq!(read_amount(&snapshot, "nan", 3.0), 3.0);
        assert_eq!(read_amount(&snapshot, "inf", 3.0), 3.0);
    }

    #[test]
    fn test_read_amount_negative_and_large_values() {
        let snapshot = snapshot_with(&[
            ("negative", "-250000"),
            ("large", "999999999999999"),
        ]);
        assert_eq!(read_amount(&snapshot, "negative", 0.0), -250_000.0);
        assert_eq!(read_amount(&snapshot, "large", 0.0), 999_999_999_999_999.0);
    }

    #[test]
    fn test_read_amount_tolerates_surrounding_whitespace() {
        let snapshot = snapshot_with(&[("padded", " 150000 ")]);
        assert_eq!(read_amount(&snapshot, "padded", 0.0), 150_000.0);
    }

    #[test]
    fn test_read_int_plain_and_truncated() {
        let snapshot = snapshot_with(&[
            ("count", "12"),
            ("decimal", "12.9"),
            ("negative", "-3"),
        ]);
        assert_eq!(read_int(&snapshot, "count", 0), 12);
        assert_eq!(read_int(&snapshot, "decimal", 0), 12);
        assert_eq!(read_int(&snapshot, "negative", 0), -3);
    }

    #[test]
    fn test_read_int_malformed_or_absent_returns_default() {
        let snapshot = snapshot_with(&[("text", "abc"), ("empty", "")]);
        assert_eq!(read_int(&snapshot, "text", 0), 0);
        assert_eq!(read_int(&snapshot, "empty", 5), 5);
        assert_eq!(read_int(&snapshot, "missing", 7), 7);
    }

    #[test]
    fn test_read_string_defaults_only_when_absent() {
        let snapshot = snapshot_with(&[("habitName", "Cà phê"), ("blank", "")]);
        assert_eq!(read_string(&snapshot, "habitName", "Chưa có"), "Cà phê");
        assert_eq!(read_string(&snapshot, "blank", "Chưa có"), "");
        assert_eq!(read_string(&snapshot, "missing", "Chưa có"), "Chưa có");
    }

    #[test]
    fn test_read_amount_either_prefers_primary() {
        let snapshot = snapshot_with(&[("weeklyTotal", "1200000"), ("weekSpent", "999")]);
        assert_eq!(
            read_amount_either(&snapshot, "weeklyTotal", "weekSpent", 0.0),
            1_200_000.0
        );
    }

    #[test]
    fn test_read_amount_either_falls_back_when_primary_absent() {
        let snapshot = snapshot_with(&[("weekSpent", "850000")]);
        assert_eq!(
            read_amount_either(&snapshot, "weeklyTotal", "weekSpent", 0.0),
            850_000.0
        );
    }

    #[test]
    fn test_read_amount_either_malformed_primary_does_not_fall_back() {
        let snapshot = snapshot_with(&[("weeklyTotal", "abc"), ("weekSpent", "850000")]);
        assert_eq!(
            read_amount_either(&snapshot, "weeklyTotal", "weekSpent", 0.0),
            0.0
        );
    }
}
