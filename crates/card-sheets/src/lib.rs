pub mod canvas;
pub mod compose;
pub mod constants;
pub mod images;
pub mod layout;
pub mod manifest;
mod options;
pub mod prepare;
mod stats;
mod types;

pub use canvas::PageCanvas;
pub use compose::{compose, mirror_position, place_mirrored, run};
pub use images::ImageIndex;
pub use layout::{Dimensions, GridPosition};
pub use manifest::{CardEntry, Manifest, load_manifest};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
