use crate::manifest::Manifest;
use crate::options::LayoutOptions;
use crate::types::*;

/// Predict what a run over `manifest` would write, without touching images.
pub fn calculate_statistics(manifest: &Manifest, layout: &LayoutOptions) -> SheetStatistics {
    let cards_per_page = layout.rows * layout.columns;

    let cards = manifest.total_slots();
    let mut placed = 0;
    let mut double_sided_entries = 0;
    let mut back_pages = 0;
    let mut page_has_back = false;

    for front in &manifest.fronts {
        let double_sided = manifest.back_for(front).is_some();
        if double_sided {
            double_sided_entries += 1;
        }

        for _ in 0..front.slot_count() {
            page_has_back |= double_sided;
            placed += 1;

            // Page boundary: the page just filled is flushed
            if cards_per_page > 0 && placed % cards_per_page == 0 {
                back_pages += usize::from(page_has_back);
                page_has_back = false;
            }
        }
    }
    back_pages += usize::from(page_has_back);

    let pages = if cards_per_page == 0 {
        0
    } else {
        cards.div_ceil(cards_per_page)
    };

    SheetStatistics {
        front_entries: manifest.fronts.len(),
        double_sided_entries,
        cards,
        cards_per_page,
        pages,
        back_pages,
    }
}
