//! Browser-style web font preferences.

use serde::{Deserialize, Serialize};

/// Font family choices, one per generic class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontFamilyPrefs {
    pub standard: String,
    pub serif: String,
    pub sans_serif: String,
    pub fixed: String,
}

impl Default for FontFamilyPrefs {
    fn default() -> Self {
        Self {
            standard: "Times New Roman".to_owned(),
            serif: "Times New Roman".to_owned(),
            sans_serif: "Arial".to_owned(),
            fixed: "Courier New".to_owned(),
        }
    }
}

/// The shared preferences tree the settings page reads and writes.
///
/// Owned by the app shell and persisted through eframe storage; the page
/// component only ever borrows it to touch individual leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontPrefs {
    /// Default font size in pixels.
    pub default_font_size: i32,
    /// Default fixed-width font size in pixels, kept at a fixed gap below
    /// the standard size.
    pub default_fixed_font_size: i32,
    /// Minimum font size in pixels; 0 means no minimum is enforced.
    pub minimum_font_size: i32,
    pub families: FontFamilyPrefs,
    /// Default character encoding (IANA name).
    pub default_encoding: String,
}

impl Default for FontPrefs {
    fn default() -> Self {
        Self {
            default_font_size: 16,
            default_fixed_font_size: 13,
            minimum_font_size: 0,
            families: FontFamilyPrefs::default(),
            default_encoding: "UTF-8".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_the_fixed_size_gap() {
        let prefs = FontPrefs::default();
        assert_eq!(prefs.default_font_size, 16);
        assert_eq!(prefs.default_fixed_font_size, 13);
        assert_eq!(prefs.minimum_font_size, 0);
        assert_eq!(prefs.default_encoding, "UTF-8");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let prefs: FontPrefs = ron::from_str("(default_font_size: 20)").unwrap();
        assert_eq!(prefs.default_font_size, 20);
        assert_eq!(prefs.default_fixed_font_size, 13);
        assert_eq!(prefs.families.standard, "Times New Roman");
        assert_eq!(prefs.families.fixed, "Courier New");
    }

    #[test]
    fn ron_round_trip_preserves_every_leaf() {
        let mut prefs = FontPrefs::default();
        prefs.default_font_size = 20;
        prefs.default_fixed_font_size = 17;
        prefs.minimum_font_size = 12;
        prefs.families.fixed = "Consolas".to_owned();
        prefs.default_encoding = "windows-1252".to_owned();

        let text = ron::to_string(&prefs).unwrap();
        assert_eq!(ron::from_str::<FontPrefs>(&text).unwrap(), prefs);
    }
}
