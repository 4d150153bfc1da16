//! In-memory page canvas
//!
//! A [`PageCanvas`] is one physical output page before it is written to
//! disk. Cards are pasted in row-major order; the canvas reports when its
//! grid is full so the caller can flush it.

use crate::layout::{Dimensions, GridPosition};
use crate::prepare::prepare;
use crate::types::Result;
use image::imageops;
use image::{DynamicImage, Rgba, RgbaImage};
use std::path::Path;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Clone)]
pub struct PageCanvas {
    dims: Dimensions,
    buffer: RgbaImage,
    cursor: GridPosition,
    is_empty: bool,
    is_full: bool,
    has_back: bool,
}

impl PageCanvas {
    /// Create a blank white page sized by `dims`.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            buffer: blank_page(&dims),
            cursor: GridPosition::default(),
            is_empty: true,
            is_full: false,
            has_back: false,
        }
    }

    /// Prepare `image` and paste it at the next grid cell.
    ///
    /// Sets `is_full` once the cursor moves past the last row.
    pub fn add_image_to_page(&mut self, image: &DynamicImage) {
        debug_assert!(!self.is_full, "placement on a full page");

        let card = prepare(image, &self.dims);
        let (x, y) = self.dims.cell_origin(self.cursor);
        imageops::replace(&mut self.buffer, &card, x as i64, y as i64);
        self.is_empty = false;

        self.cursor.col += 1;
        if self.cursor.col >= self.dims.columns {
            self.cursor.col = 0;
            self.cursor.row += 1;
        }

        if self.cursor.row >= self.dims.rows {
            self.is_full = true;
        }
    }

    /// Write the page to `path`; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.buffer.save(path)?;
        Ok(())
    }

    /// Discard all placements and start a blank page.
    pub fn reset(&mut self) {
        self.buffer = blank_page(&self.dims);
        self.cursor = GridPosition::default();
        self.is_empty = true;
        self.is_full = false;
        self.has_back = false;
    }

    /// Move the cursor so the next placement lands at `pos`.
    pub(crate) fn seek(&mut self, pos: GridPosition) {
        self.cursor = pos;
        self.is_full = pos.row >= self.dims.rows;
    }

    pub fn mark_has_back(&mut self) {
        self.has_back = true;
    }

    pub fn cursor(&self) -> GridPosition {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn is_full(&self) -> bool {
        self.is_full
    }

    /// True if any card on this page has a back that must be printed
    pub fn has_back(&self) -> bool {
        self.has_back
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dims
    }

    pub fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }
}

fn blank_page(dims: &Dimensions) -> RgbaImage {
    RgbaImage::from_pixel(dims.page_width, dims.page_height, BACKGROUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LayoutOptions;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn canvas() -> PageCanvas {
        PageCanvas::new(Dimensions::new(100, &LayoutOptions::default()))
    }

    fn card(color: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(100, 139, color))
    }

    fn cell_center(canvas: &PageCanvas, pos: GridPosition) -> Rgba<u8> {
        let dims = canvas.dimensions();
        let (x, y) = dims.cell_origin(pos);
        *canvas
            .buffer()
            .get_pixel(x + dims.card_width / 2, y + dims.card_height / 2)
    }

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = canvas();
        assert!(canvas.is_empty());
        assert!(!canvas.is_full());
        assert!(!canvas.has_back());
        assert_eq!(canvas.cursor(), GridPosition::new(0, 0));
        assert_eq!(canvas.buffer().dimensions(), (333, 470));
        assert!(canvas.buffer().pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn test_cursor_advances_row_major() {
        let mut canvas = canvas();
        let red = card(RED);

        canvas.add_image_to_page(&red);
        assert!(!canvas.is_empty());
        assert_eq!(canvas.cursor(), GridPosition::new(0, 1));

        canvas.add_image_to_page(&red);
        canvas.add_image_to_page(&red);
        assert_eq!(canvas.cursor(), GridPosition::new(1, 0));

        assert_eq!(cell_center(&canvas, GridPosition::new(0, 2)), RED);
        assert_eq!(cell_center(&canvas, GridPosition::new(1, 0)), BACKGROUND);
    }

    #[test]
    fn test_full_on_last_cell_only() {
        let mut canvas = canvas();
        let red = card(RED);
        let cells = canvas.dimensions().cards_per_page();

        for placed in 1..=cells {
            canvas.add_image_to_page(&red);
            assert_eq!(canvas.is_full(), placed == cells, "after {} placements", placed);
        }
        assert_eq!(canvas.cursor(), GridPosition::new(3, 0));
    }

    #[test]
    fn test_reset_restores_blank_state() {
        let mut canvas = canvas();
        for _ in 0..9 {
            canvas.add_image_to_page(&card(RED));
        }
        canvas.mark_has_back();

        canvas.reset();

        assert!(canvas.is_empty());
        assert!(!canvas.is_full());
        assert!(!canvas.has_back());
        assert_eq!(canvas.cursor(), GridPosition::new(0, 0));
        assert_eq!(canvas.buffer().dimensions(), (333, 470));
        assert!(canvas.buffer().pixels().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn test_save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.png");

        let mut canvas = canvas();
        canvas.add_image_to_page(&card(RED));
        canvas.save(&path).unwrap();

        let saved = image::open(&path).unwrap().to_rgba8();
        assert_eq!(saved.dimensions(), (333, 470));
        assert_eq!(*saved.get_pixel(16 + 50, 26 + 69), RED);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("1.png");
        assert!(canvas().save(&path).is_err());
    }
}
