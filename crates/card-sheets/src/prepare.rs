//! Card image preparation
//!
//! Source images are scaled to the canonical card size, stripped of their
//! bleed border, and scaled back up so every card pastes as exactly
//! `card_width × card_height` pixels.

use crate::constants::{BORDER_CROP_H, BORDER_CROP_W};
use crate::layout::Dimensions;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

const FILTER: FilterType = FilterType::CatmullRom;

/// Scale `image` to exactly `card_width × card_height`.
pub fn resize<I>(image: &I, dims: &Dimensions) -> RgbaImage
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    imageops::resize(image, dims.card_width, dims.card_height, FILTER)
}

/// Crop box `(x, y, width, height)` that removes the bleed border.
///
/// Computed from the card dimensions, not from the image being cropped.
pub fn crop_box(dims: &Dimensions) -> (u32, u32, u32, u32) {
    let left = (BORDER_CROP_W * dims.card_width as f64).floor() as u32;
    let upper = (BORDER_CROP_H * dims.card_height as f64).floor() as u32;
    let right = dims.card_width - left;
    let lower = dims.card_height - upper;
    (left, upper, right - left, lower - upper)
}

/// Remove the bleed border and scale the rest back to card size.
///
/// `image` is expected to already have card proportions; crop coordinates
/// come from [`crop_box`] and are clamped to the image bounds.
pub fn crop_and_resize(image: &RgbaImage, dims: &Dimensions) -> RgbaImage {
    let (x, y, width, height) = crop_box(dims);
    let cropped = imageops::crop_imm(image, x, y, width, height).to_image();
    resize(&cropped, dims)
}

/// Normalize an arbitrary source image into a pasteable card.
pub fn prepare(image: &DynamicImage, dims: &Dimensions) -> RgbaImage {
    let scaled = resize(image, dims);
    crop_and_resize(&scaled, dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LayoutOptions;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn dims() -> Dimensions {
        Dimensions::new(100, &LayoutOptions::default())
    }

    #[test]
    fn test_crop_box() {
        // 4.9% of 100 and 3.7% of 139, truncated
        assert_eq!(crop_box(&dims()), (4, 5, 92, 129));
    }

    #[test]
    fn test_resize_to_card_size() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(37, 52, RED));
        let resized = resize(&source, &dims());
        assert_eq!(resized.dimensions(), (100, 139));
    }

    #[test]
    fn test_prepare_strips_border() {
        let dims = dims();
        let (x, y, w, h) = crop_box(&dims);
        let source = RgbaImage::from_fn(dims.card_width, dims.card_height, |px, py| {
            if px >= x && px < x + w && py >= y && py < y + h {
                BLUE
            } else {
                RED
            }
        });

        let prepared = prepare(&DynamicImage::ImageRgba8(source), &dims);
        assert_eq!(prepared.dimensions(), (dims.card_width, dims.card_height));

        for (px, py) in [(0, 0), (99, 0), (0, 138), (99, 138), (50, 70)] {
            let pixel = prepared.get_pixel(px, py);
            assert!(pixel[0] < 5, "red bleed left at ({}, {}): {:?}", px, py, pixel);
            assert!(pixel[2] > 250, "expected blue at ({}, {}): {:?}", px, py, pixel);
        }
    }

    #[test]
    fn test_prepare_from_large_source() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(630, 880, BLUE));
        let prepared = prepare(&source, &dims());
        assert_eq!(prepared.dimensions(), (100, 139));
    }
}
