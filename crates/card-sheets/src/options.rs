use crate::constants::*;
use crate::layout::Dimensions;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ratios and grid shape that turn one card width into a page layout
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    /// Card height / card width
    pub card_ratio: f64,
    /// Page width / card width
    pub card_to_page_width_ratio: f64,
    /// Page height / page width
    pub page_ratio: f64,
    /// Left margin / page width
    pub margin_w_ratio: f64,
    /// Top margin / page height
    pub margin_top_ratio: f64,
    /// Gap between cards in pixels
    pub spacing: u32,
    pub rows: usize,
    pub columns: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            card_ratio: CARD_RATIO,
            card_to_page_width_ratio: CARD_TO_PAGE_WIDTH_RATIO,
            page_ratio: PAGE_RATIO,
            margin_w_ratio: MARGIN_W_RATIO,
            margin_top_ratio: MARGIN_TOP_RATIO,
            spacing: SPACING,
            rows: ROWS,
            columns: COLUMNS,
        }
    }
}

/// Where a run reads its inputs and writes its pages
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetPaths {
    pub manifest: PathBuf,
    pub images: PathBuf,
    pub pages: PathBuf,
}

impl Default for SheetPaths {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST_PATH),
            images: PathBuf::from(DEFAULT_IMAGE_DIR),
            pages: PathBuf::from(DEFAULT_PAGE_DIR),
        }
    }
}

/// Complete configuration for one run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetOptions {
    /// Nominal card width in pixels
    pub card_width: u32,
    pub layout: LayoutOptions,
    pub paths: SheetPaths,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            card_width: DEFAULT_CARD_WIDTH,
            layout: LayoutOptions::default(),
            paths: SheetPaths::default(),
        }
    }
}

impl SheetOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| SheetError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SheetError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Derive the pixel dimensions for this configuration
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.card_width, &self.layout)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.card_width == 0 {
            return Err(SheetError::Config(
                "Card width must be greater than zero".to_string(),
            ));
        }

        let layout = &self.layout;
        if layout.rows == 0 || layout.columns == 0 {
            return Err(SheetError::Config(
                "Grid must have at least one row and one column".to_string(),
            ));
        }

        let ratios = [
            ("card_ratio", layout.card_ratio),
            ("card_to_page_width_ratio", layout.card_to_page_width_ratio),
            ("page_ratio", layout.page_ratio),
        ];
        for (name, value) in ratios {
            if !value.is_finite() || value <= 0.0 {
                return Err(SheetError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let margins = [
            ("margin_w_ratio", layout.margin_w_ratio),
            ("margin_top_ratio", layout.margin_top_ratio),
        ];
        for (name, value) in margins {
            if !value.is_finite() || !(0.0..1.0).contains(&value) {
                return Err(SheetError::Config(format!(
                    "{} must be in [0, 1), got {}",
                    name, value
                )));
            }
        }

        let dims = self.dimensions();
        if dims.card_height == 0 {
            return Err(SheetError::Config(
                "Card width is too small for the card ratio".to_string(),
            ));
        }

        let (grid_width, grid_height) = dims.grid_extent();
        if dims.margin_w as u64 + grid_width > dims.page_width as u64 {
            return Err(SheetError::Config(format!(
                "{} columns of {}px cards do not fit a {}px wide page",
                layout.columns, dims.card_width, dims.page_width
            )));
        }
        if dims.margin_top as u64 + grid_height > dims.page_height as u64 {
            return Err(SheetError::Config(format!(
                "{} rows of {}px cards do not fit a {}px tall page",
                layout.rows, dims.card_height, dims.page_height
            )));
        }

        Ok(())
    }
}
