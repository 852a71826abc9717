//! The font and encoding catalog supplied by the fonts proxy.

use serde::{Deserialize, Serialize};

/// Raw catalog data as reported by the fonts proxy.
///
/// Each entry pairs a machine value with a display label. Field names stay
/// camelCase to match the catalog file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontCatalog {
    pub font_list: Vec<(String, String)>,
    pub encoding_list: Vec<(String, String)>,
    /// Store page for the advanced font settings companion.
    pub extension_url: String,
}

/// A single dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub value: String,
    pub label: String,
}

/// Dropdown option sets built from a [`FontCatalog`].
///
/// All four family dropdowns share `fonts`; the encoding dropdown uses
/// `encodings`.
#[derive(Debug, Clone, Default)]
pub struct MenuOptions {
    pub fonts: Vec<MenuOption>,
    pub encodings: Vec<MenuOption>,
}

impl MenuOptions {
    /// Display label for a font value, if the catalog knows it.
    pub fn font_label(&self, value: &str) -> Option<&str> {
        Self::label_in(&self.fonts, value)
    }

    /// Display label for an encoding value, if the catalog knows it.
    pub fn encoding_label(&self, value: &str) -> Option<&str> {
        Self::label_in(&self.encodings, value)
    }

    fn label_in<'a>(options: &'a [MenuOption], value: &str) -> Option<&'a str> {
        options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
    }
}

impl FontCatalog {
    /// Builds the dropdown option sets the page renders from.
    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            fonts: to_options(&self.font_list),
            encodings: to_options(&self.encoding_list),
        }
    }
}

fn to_options(pairs: &[(String, String)]) -> Vec<MenuOption> {
    pairs
        .iter()
        .map(|(value, label)| MenuOption {
            value: value.clone(),
            label: label.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FontCatalog {
        FontCatalog {
            font_list: vec![
                ("Arial".to_owned(), "Arial".to_owned()),
                ("Courier New".to_owned(), "Courier New".to_owned()),
            ],
            encoding_list: vec![("UTF-8".to_owned(), "Unicode (UTF-8)".to_owned())],
            extension_url: "https://example.com/companion".to_owned(),
        }
    }

    #[test]
    fn parses_camel_case_ron() {
        let catalog: FontCatalog = ron::from_str(
            r#"(
                fontList: [("Arial", "Arial")],
                encodingList: [("UTF-8", "Unicode (UTF-8)")],
                extensionUrl: "https://example.com",
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.font_list.len(), 1);
        assert_eq!(catalog.encoding_list[0].0, "UTF-8");
        assert_eq!(catalog.extension_url, "https://example.com");
    }

    #[test]
    fn menu_options_keep_value_label_pairs() {
        let options = sample().menu_options();

        assert_eq!(options.fonts.len(), 2);
        assert_eq!(options.fonts[1].value, "Courier New");
        assert_eq!(options.encodings[0].label, "Unicode (UTF-8)");
    }

    #[test]
    fn label_lookup_misses_unknown_values() {
        let options = sample().menu_options();

        assert_eq!(options.font_label("Arial"), Some("Arial"));
        assert_eq!(options.encoding_label("UTF-8"), Some("Unicode (UTF-8)"));
        assert_eq!(options.font_label("Comic Sans MS"), None);
        assert_eq!(options.encoding_label("KOI8-R"), None);
    }
}
