//! Shared constants for card sheet layout
//!
//! The ratios describe a 63mm × 88mm card on a portrait A4 page. They are
//! the defaults of [`LayoutOptions`](crate::LayoutOptions); nothing reads
//! them directly during a run.

// =============================================================================
// Card and Page Ratios
// =============================================================================

/// Nominal card width in pixels that all other dimensions derive from
pub const DEFAULT_CARD_WIDTH: u32 = 3264;

/// Card height / card width (88mm / 63mm)
pub const CARD_RATIO: f64 = 88.0 / 63.0;

/// Page width / card width (210mm / 63mm)
pub const CARD_TO_PAGE_WIDTH_RATIO: f64 = 210.0 / 63.0;

/// Page height / page width (297mm / 210mm)
pub const PAGE_RATIO: f64 = 297.0 / 210.0;

/// Left margin / page width
pub const MARGIN_W_RATIO: f64 = 10.5 / 210.0;

/// Top margin / page height
pub const MARGIN_TOP_RATIO: f64 = 16.5 / 297.0;

/// Gap between neighbouring cards in pixels
pub const SPACING: u32 = 0;

// =============================================================================
// Grid
// =============================================================================

pub const ROWS: usize = 3;
pub const COLUMNS: usize = 3;

// =============================================================================
// Bleed Border
// =============================================================================

/// Fraction of the card width cropped from each side
pub const BORDER_CROP_W: f64 = 0.049;

/// Fraction of the card height cropped from top and bottom
pub const BORDER_CROP_H: f64 = 0.037;

// =============================================================================
// Files
// =============================================================================

pub const DEFAULT_MANIFEST_PATH: &str = "cards.xml";
pub const DEFAULT_IMAGE_DIR: &str = "./images/";
pub const DEFAULT_PAGE_DIR: &str = "./pages/";

/// Sidecar files written by Windows next to downloads; never card images
pub const EXCLUDED_FILE_MARKER: &str = "Zone.Identifier";

/// Extension of the page files
pub const PAGE_EXTENSION: &str = "png";

/// Suffix appended to the page number for duplex back pages
pub const BACK_PAGE_SUFFIX: &str = "_back";
