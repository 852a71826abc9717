/// Maximum width of the settings column in pixels.
pub const PAGE_MAX_WIDTH: f32 = 480.0;

/// Width of the font family and encoding dropdowns in pixels.
pub const FAMILY_COMBO_WIDTH: f32 = 220.0;

/// Sample sentence rendered below the size sliders.
pub const PREVIEW_TEXT: &str = "The quick brown fox jumps over the lazy dog. 0123456789";

/// Subdirectory of the extensions directory the companion installs into.
pub const COMPANION_DIR: &str = "advanced-fonts";

/// Base name of the companion executable, without the platform suffix.
pub const COMPANION_BIN: &str = "advanced-fonts";
