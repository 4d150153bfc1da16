//! Layout calculation for card sheets
//!
//! Everything here is pure arithmetic on pixel values: deriving the page
//! geometry from one card width, and locating grid cells on the page.

mod geometry;
mod types;

pub use geometry::*;
pub use types::*;
