//! Fixed lookup tables for categorical raw fields.
//!
//! All three tables are immutable process-wide constants. Whether a table
//! tolerates unknown keys is part of its definition: the wind tables carry a
//! fallback value, the hour table does not (an unknown hour slot is an
//! error, handled by the caller).

/// A small static key/value table with an optional fallback for unknown keys.
#[derive(Debug, Clone, Copy)]
pub struct LookupTable {
    pub entries: &'static [(&'static str, f64)],
    /// Returned for keys not in `entries`; `None` means unknown keys have no
    /// mapping and the caller must treat them as an error.
    pub fallback: Option<f64>,
}

impl LookupTable {
    /// Look a key up, applying the table's fallback if it has one.
    pub fn lookup(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .or(self.fallback)
    }
}

/// Representative hour of day per sub-slot. No fallback: an hour outside
/// this vocabulary cannot be placed on the solar axis.
pub static HOUR_OF_DAY: LookupTable = LookupTable {
    entries: &[("manha", 8.0), ("tarde", 14.0), ("noite", 20.0)],
    fallback: None,
};

/// Bearing in degrees per compass-transition code. Unknown codes read as
/// 180 (neutral direction).
pub static WIND_DIRECTION_DEG: LookupTable = LookupTable {
    entries: &[
        ("N-NE", 22.5),
        ("NE-N", 45.0),
        ("E-NE", 67.5),
        ("SE-E", 112.5),
        ("SE-S", 135.0),
        ("S-SE", 157.5),
        ("S-SW", 202.5),
        ("SW-S", 225.0),
        ("W-SW", 247.5),
        ("W-NW", 292.5),
        ("NW-N", 315.0),
        ("N-NW", 337.5),
    ],
    fallback: Some(180.0),
};

/// Ordinal intensity per wind label. Unknown labels read as 0 (calm).
pub static WIND_INTENSITY: LookupTable = LookupTable {
    entries: &[("Fracos", 0.0), ("Moderados", 1.0), ("Fortes", 2.0)],
    fallback: Some(0.0),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_table_has_no_fallback() {
        assert_eq!(HOUR_OF_DAY.lookup("tarde"), Some(14.0));
        assert_eq!(HOUR_OF_DAY.lookup("madrugada"), None);
    }

    #[test]
    fn wind_tables_fall_back() {
        assert_eq!(WIND_DIRECTION_DEG.lookup("S-SE"), Some(157.5));
        assert_eq!(WIND_DIRECTION_DEG.lookup("XYZ"), Some(180.0));
        assert_eq!(WIND_INTENSITY.lookup("Fortes"), Some(2.0));
        assert_eq!(WIND_INTENSITY.lookup("Furacão"), Some(0.0));
    }

    #[test]
    fn wind_direction_covers_all_twelve_codes() {
        assert_eq!(WIND_DIRECTION_DEG.entries.len(), 12);
    }
}
