/// Position within the page grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Pixel dimensions of one run's pages and cards
///
/// Every value is a floor-integer derived once from the nominal card width;
/// a run never recomputes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub card_width: u32,
    pub card_height: u32,
    pub page_width: u32,
    pub page_height: u32,
    /// Left offset of the first column
    pub margin_w: u32,
    /// Top offset of the first row
    pub margin_top: u32,
    /// Gap between neighbouring cards
    pub spacing: u32,
    pub rows: usize,
    pub columns: usize,
}
