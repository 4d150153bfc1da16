//! Page composition
//!
//! This module drives one complete run:
//! 1. Clear the output directory and load the manifest
//! 2. Index the image directory
//! 3. Place every front (and its mirrored back) slot by slot
//! 4. Flush a page pair whenever the front page fills up

mod io;
mod placement;

pub use io::{clear_output_dir, page_path};
pub use placement::{mirror_position, place_mirrored};

use crate::canvas::PageCanvas;
use crate::images::ImageIndex;
use crate::layout::Dimensions;
use crate::manifest::{CardEntry, Manifest, load_manifest};
use crate::options::SheetOptions;
use crate::types::*;
use image::DynamicImage;
use io::load_image;
use std::path::{Path, PathBuf};

/// Run the whole pipeline described by `options`.
pub async fn run(options: &SheetOptions) -> Result<RunSummary> {
    options.validate()?;

    let options = options.clone();
    clear_output_dir(&options.paths.pages).await?;
    let manifest = load_manifest(&options.paths.manifest).await?;

    // Image decoding and raster work are CPU-bound
    tokio::task::spawn_blocking(move || {
        let index = ImageIndex::build(&options.paths.images)?;
        compose(&manifest, &index, &options)
    })
    .await?
}

/// Place every card of `manifest` and write the resulting pages.
///
/// Stops at the first error; pages flushed before it stay on disk.
pub fn compose(
    manifest: &Manifest,
    index: &ImageIndex,
    options: &SheetOptions,
) -> Result<RunSummary> {
    options.validate()?;
    let mut sheets = SheetPair::new(options.dimensions(), &options.paths.pages);

    for front in &manifest.fronts {
        let back = manifest.back_for(front);
        let card = load_card(front, back, index)?;

        for _ in 0..front.slot_count() {
            sheets.place(&card);
            if sheets.front.is_full() {
                sheets.flush()?;
            }
        }
    }

    if !sheets.front.is_empty() {
        sheets.flush()?;
    }

    log::debug!(
        "Placed {} cards on {} pages ({} backs)",
        sheets.summary.cards_placed,
        sheets.summary.pages_written,
        sheets.summary.back_pages_written
    );
    Ok(sheets.summary)
}

/// Decoded images for one manifest entry
struct LoadedCard {
    front: DynamicImage,
    back: Option<DynamicImage>,
}

/// Resolve and decode the images for `front` and its optional back.
fn load_card(
    front: &CardEntry,
    back: Option<&CardEntry>,
    index: &ImageIndex,
) -> Result<LoadedCard> {
    let front_path = index.resolve_entry(front)?;
    let back_path = back.map(|entry| index.resolve_entry(entry)).transpose()?;

    log::debug!(
        "Card \"{}\" x{} -> {}",
        front.display_name(),
        front.slot_count(),
        front_path.display()
    );

    Ok(LoadedCard {
        front: load_image(front_path)?,
        back: back_path.map(load_image).transpose()?,
    })
}

/// The front page being filled and the back page printed behind it
struct SheetPair {
    front: PageCanvas,
    back: PageCanvas,
    page_dir: PathBuf,
    page_count: usize,
    summary: RunSummary,
}

impl SheetPair {
    fn new(dims: Dimensions, page_dir: &Path) -> Self {
        Self {
            front: PageCanvas::new(dims),
            back: PageCanvas::new(dims),
            page_dir: page_dir.to_path_buf(),
            page_count: 0,
            summary: RunSummary::default(),
        }
    }

    fn place(&mut self, card: &LoadedCard) {
        match &card.back {
            None => self.front.add_image_to_page(&card.front),
            Some(back) => place_mirrored(&mut self.front, &mut self.back, &card.front, back),
        }
        self.summary.cards_placed += 1;
    }

    /// Save the current pages and start blank ones.
    fn flush(&mut self) -> Result<()> {
        self.page_count += 1;

        let front_path = page_path(&self.page_dir, self.page_count, false);
        self.front.save(&front_path)?;
        self.summary.pages_written += 1;
        log::info!("Wrote {}", front_path.display());

        if self.front.has_back() {
            let back_path = page_path(&self.page_dir, self.page_count, true);
            self.back.save(&back_path)?;
            self.summary.back_pages_written += 1;
            log::info!("Wrote {}", back_path.display());
        }

        self.back.reset();
        self.front.reset();
        Ok(())
    }
}
