//! The font preferences page component.
//!
//! This is the headless half of the settings page: it owns the slider state
//! and the data fetched from the fonts proxy, and reacts to preference
//! changes the way a data-bound settings widget would. The UI layer calls
//! [`FontsPage::observe_prefs`] once per frame before rendering and routes
//! widget edits through the `*_index_changed` handlers.

use crate::catalog::{FontCatalog, MenuOptions};
use crate::prefs::FontPrefs;
use crate::sizes::{FIXED_STANDARD_SIZE_GAP, FONT_SIZE_RANGE, MINIMUM_FONT_SIZE_RANGE, SizeSlider};

/// Sublabel under the advanced row while the companion is installed.
pub const ADVANCED_INSTALLED_SUBLABEL: &str = "Open advanced font settings";
/// Sublabel under the advanced row while the companion is missing.
pub const ADVANCED_MISSING_SUBLABEL: &str =
    "Requires the advanced fonts companion from the store";

/// What activating the advanced row should do right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvancedAction {
    /// Companion is installed; open its settings window.
    OpenCompanionSettings,
    /// Companion is missing; send the user to its store page.
    OpenStoreUrl(String),
    /// No store URL known yet, nothing sensible to do.
    Unavailable,
}

pub struct FontsPage {
    /// Slider over [`FONT_SIZE_RANGE`].
    pub size_slider: SizeSlider,
    /// Slider over [`MINIMUM_FONT_SIZE_RANGE`].
    pub minimum_slider: SizeSlider,
    default_size: i32,
    minimum_size: i32,
    last_default: Option<i32>,
    last_minimum: Option<i32>,
    options: Option<MenuOptions>,
    advanced_installed: bool,
    store_url: Option<String>,
}

impl FontsPage {
    pub fn new() -> Self {
        Self {
            size_slider: SizeSlider::new(&FONT_SIZE_RANGE),
            minimum_slider: SizeSlider::new(&MINIMUM_FONT_SIZE_RANGE),
            default_size: 0,
            minimum_size: 0,
            last_default: None,
            last_minimum: None,
            options: None,
            advanced_installed: false,
            store_url: None,
        }
    }

    /// Reacts to preference changes since the last frame.
    ///
    /// A slider being dragged is left alone; the drag-release resync request
    /// makes the handler run once more after the drag ends so the slider
    /// settles on a table entry and the fixed size catches up.
    pub fn observe_prefs(&mut self, prefs: &mut FontPrefs) {
        let resync = self.size_slider.take_resync();
        let default = prefs.default_font_size;
        if self.last_default != Some(default) || resync {
            self.last_default = Some(default);
            self.default_size_changed(default, prefs);
        }

        let resync = self.minimum_slider.take_resync();
        let minimum = prefs.minimum_font_size;
        if self.last_minimum != Some(minimum) || resync {
            self.last_minimum = Some(minimum);
            self.minimum_size_changed(minimum);
        }
    }

    fn default_size_changed(&mut self, value: i32, prefs: &mut FontPrefs) {
        self.default_size = value;
        if self.size_slider.sync_to_size(value) {
            prefs.default_fixed_font_size = value - FIXED_STANDARD_SIZE_GAP;
        }
    }

    fn minimum_size_changed(&mut self, value: i32) {
        self.minimum_size = value;
        self.minimum_slider.sync_to_size(value);
    }

    /// Commits the default size slider position to the preference.
    pub fn default_index_changed(&mut self, prefs: &mut FontPrefs) {
        prefs.default_font_size = self.size_slider.size();
    }

    /// Commits the minimum size slider position to the preference.
    pub fn minimum_index_changed(&mut self, prefs: &mut FontPrefs) {
        prefs.minimum_font_size = self.minimum_slider.size();
    }

    /// Takes in the catalog the fonts proxy delivered.
    pub fn set_fonts_data(&mut self, catalog: &FontCatalog) {
        self.options = Some(catalog.menu_options());
        self.store_url = Some(catalog.extension_url.clone());
    }

    pub fn set_advanced_installed(&mut self, installed: bool) {
        self.advanced_installed = installed;
    }

    pub fn advanced_installed(&self) -> bool {
        self.advanced_installed
    }

    pub fn advanced_sublabel(&self) -> &'static str {
        if self.advanced_installed {
            ADVANCED_INSTALLED_SUBLABEL
        } else {
            ADVANCED_MISSING_SUBLABEL
        }
    }

    /// Resolves what the advanced row does when activated.
    pub fn advanced_action(&self) -> AdvancedAction {
        if self.advanced_installed {
            AdvancedAction::OpenCompanionSettings
        } else if let Some(url) = &self.store_url {
            AdvancedAction::OpenStoreUrl(url.clone())
        } else {
            AdvancedAction::Unavailable
        }
    }

    /// Dropdown option sets, once the catalog has arrived.
    pub fn options(&self) -> Option<&MenuOptions> {
        self.options.as_ref()
    }

    /// Last observed default size in pixels, table entry or not.
    pub fn default_size(&self) -> i32 {
        self.default_size
    }

    /// Last observed minimum size in pixels, table entry or not.
    pub fn minimum_size(&self) -> i32 {
        self.minimum_size
    }
}

impl Default for FontsPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> FontCatalog {
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
    fn initial_observation_positions_sliders_and_derives_fixed_size() {
        let mut prefs = FontPrefs::default();
        let mut page = FontsPage::new();

        page.observe_prefs(&mut prefs);

        assert_eq!(page.size_slider.size(), 16);
        assert_eq!(page.minimum_slider.size(), 6);
        assert_eq!(prefs.default_fixed_font_size, 13);
        assert_eq!(page.default_size(), 16);
        assert_eq!(page.minimum_size(), 0);
    }

    #[test]
    fn slider_movement_writes_the_table_size_through() {
        let mut prefs = FontPrefs::default();
        let mut page = FontsPage::new();
        page.observe_prefs(&mut prefs);

        page.size_slider.index = 12;
        page.default_index_changed(&mut prefs);
        assert_eq!(prefs.default_font_size, 24);

        page.observe_prefs(&mut prefs);
        assert_eq!(prefs.default_fixed_font_size, 21);
    }

    #[test]
    fn external_changes_leave_a_dragged_slider_alone() {
        let mut prefs = FontPrefs::default();
        let mut page = FontsPage::new();
        page.observe_prefs(&mut prefs);

        page.size_slider.set_dragging(true);
        prefs.default_font_size = 72;
        page.observe_prefs(&mut prefs);

        assert_eq!(page.size_slider.size(), 16);
        assert_eq!(prefs.default_fixed_font_size, 13);
        assert_eq!(page.default_size(), 72);
    }

    #[test]
    fn drag_release_commits_the_slider_value() {
        let mut prefs = FontPrefs::default();
        let mut page = FontsPage::new();
        page.observe_prefs(&mut prefs);

        page.size_slider.set_dragging(true);
        page.size_slider.index = 9;
        page.default_index_changed(&mut prefs);
        page.observe_prefs(&mut prefs);
        assert_eq!(prefs.default_font_size, 18);
        assert_eq!(prefs.default_fixed_font_size, 13);

        page.size_slider.set_dragging(false);
        page.default_index_changed(&mut prefs);
        page.observe_prefs(&mut prefs);
        assert_eq!(prefs.default_font_size, 18);
        assert_eq!(prefs.default_fixed_font_size, 15);
    }

    #[test]
    fn minimum_slider_covers_the_table_endpoints() {
        let mut prefs = FontPrefs::default();
        let mut page = FontsPage::new();
        page.observe_prefs(&mut prefs);

        prefs.minimum_font_size = 6;
        page.observe_prefs(&mut prefs);
        assert_eq!(page.minimum_slider.index, 0);

        prefs.minimum_font_size = 24;
        page.observe_prefs(&mut prefs);
        assert_eq!(page.minimum_slider.index, 15);

        // The minimum slider never touches the fixed size.
        assert_eq!(prefs.default_fixed_font_size, 13);
    }

    #[test]
    fn fonts_data_populates_options_and_store_url() {
        let mut page = FontsPage::new();
        assert!(page.options().is_none());
        assert_eq!(page.advanced_action(), AdvancedAction::Unavailable);

        page.set_fonts_data(&catalog());

        let options = page.options().unwrap();
        assert_eq!(options.fonts.len(), 2);
        assert_eq!(options.encodings.len(), 1);
        assert_eq!(
            page.advanced_action(),
            AdvancedAction::OpenStoreUrl("https://example.com/companion".to_owned())
        );
    }

    #[test]
    fn advanced_gate_follows_the_install_flag() {
        let mut page = FontsPage::new();
        assert_eq!(page.advanced_sublabel(), ADVANCED_MISSING_SUBLABEL);

        page.set_fonts_data(&catalog());
        page.set_advanced_installed(true);
        assert!(page.advanced_installed());
        assert_eq!(page.advanced_sublabel(), ADVANCED_INSTALLED_SUBLABEL);
        assert_eq!(page.advanced_action(), AdvancedAction::OpenCompanionSettings);

        page.set_advanced_installed(false);
        assert_eq!(
            page.advanced_action(),
            AdvancedAction::OpenStoreUrl("https://example.com/companion".to_owned())
        );
    }
}
