//! Defaults and output-naming constants

/// Minimum contiguous positive-profile length counted as a grid row or column
pub const DEFAULT_MIN_RUN_LENGTH: usize = 20;

/// Threshold applied to inverted luminance during binarization
pub const DEFAULT_BINARIZATION_THRESHOLD: u8 = 128;

/// Filename prefix shared by all extracted icons
pub const ICON_PREFIX: &str = "icon_";

/// Zero-padded width of the decimal index in icon filenames
pub const ICON_INDEX_WIDTH: usize = 8;

/// Extension of extracted icon files
pub const ICON_EXTENSION: &str = "png";

/// Extension expected of sheet images when scanning a source directory
pub const SHEET_EXTENSION: &str = "png";
