use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Malformed manifest: \"{0}\" section missing")]
    MissingSection(&'static str),
    #[error("Malformed manifest: \"{field}\" element missing in entry {entry}")]
    MissingField { field: &'static str, entry: String },
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Image for \"{name}\" not found")]
    ImageNotFound { name: String },
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, SheetError>;

/// What a finished run wrote to the output directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Number of card images placed on front pages
    pub cards_placed: usize,
    /// Number of front page files written
    pub pages_written: usize,
    /// Number of `_back` page files written
    pub back_pages_written: usize,
}

/// Predicted output of a manifest, computed without rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetStatistics {
    /// Entries under the "fronts" section
    pub front_entries: usize,
    /// Front entries that have a matching back
    pub double_sided_entries: usize,
    /// Total card placements (sum of slot counts)
    pub cards: usize,
    /// Grid cells per page
    pub cards_per_page: usize,
    /// Front page files that a run would write
    pub pages: usize,
    /// Back page files that a run would write
    pub back_pages: usize,
}
