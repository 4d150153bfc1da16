//! Double-sided placement
//!
//! When a sheet is flipped for duplex printing its columns swap sides, so a
//! card's back goes in the horizontally mirrored cell of the back page.

use crate::canvas::PageCanvas;
use crate::layout::GridPosition;
use image::DynamicImage;

/// Cell on the back page behind the front cell `pos`.
pub fn mirror_position(pos: GridPosition, columns: usize) -> GridPosition {
    GridPosition::new(pos.row, columns - 1 - pos.col)
}

/// Place a card on `front` and its back on `back` at the mirrored cell.
///
/// The back page's cursor always follows the front page; whatever the back
/// page did on its own last placement is overridden.
pub fn place_mirrored(
    front: &mut PageCanvas,
    back: &mut PageCanvas,
    front_image: &DynamicImage,
    back_image: &DynamicImage,
) {
    let columns = front.dimensions().columns;
    back.seek(mirror_position(front.cursor(), columns));

    front.add_image_to_page(front_image);
    back.add_image_to_page(back_image);

    front.mark_has_back();
}
