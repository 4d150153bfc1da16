//! Page geometry calculation
//!
//! Derives page, margin and card pixel sizes from a single nominal card
//! width and the ratios in [`LayoutOptions`].

use crate::options::LayoutOptions;

use super::{Dimensions, GridPosition};

/// Truncate a scaled pixel value to whole pixels
#[inline]
fn floor_px(value: f64) -> u32 {
    value.floor() as u32
}

impl Dimensions {
    /// Derive all dimensions from `card_width`.
    ///
    /// The page width follows the card width and the page height follows the
    /// page width, so the page keeps its aspect ratio for any card width.
    pub fn new(card_width: u32, layout: &LayoutOptions) -> Self {
        let card_height = floor_px(layout.card_ratio * card_width as f64);

        let page_width = floor_px(layout.card_to_page_width_ratio * card_width as f64);
        let page_height = floor_px(layout.page_ratio * page_width as f64);

        let margin_w = floor_px(layout.margin_w_ratio * page_width as f64);
        let margin_top = floor_px(layout.margin_top_ratio * page_height as f64);

        Self {
            card_width,
            card_height,
            page_width,
            page_height,
            margin_w,
            margin_top,
            spacing: layout.spacing,
            rows: layout.rows,
            columns: layout.columns,
        }
    }

    /// Number of grid cells on one page
    pub fn cards_per_page(&self) -> usize {
        self.rows * self.columns
    }

    /// Top-left pixel of the cell at `pos`.
    pub fn cell_origin(&self, pos: GridPosition) -> (u32, u32) {
        let x = self.margin_w + pos.col as u32 * (self.card_width + self.spacing);
        let y = self.margin_top + pos.row as u32 * (self.card_height + self.spacing);
        (x, y)
    }

    /// Width and height covered by the full grid, excluding margins
    pub fn grid_extent(&self) -> (u64, u64) {
        let span = |count: usize, size: u32| -> u64 {
            let count = count as u64;
            count * size as u64 + count.saturating_sub(1) * self.spacing as u64
        };
        (
            span(self.columns, self.card_width),
            span(self.rows, self.card_height),
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
