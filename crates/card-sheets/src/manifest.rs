//! Card manifest reader
//!
//! The manifest is an XML file with a required `fronts` section and an
//! optional `backs` section:
//!
//! ```xml
//! <order>
//!   <fronts>
//!     <card><id>abc</id><query>Forest</query><slots>0,1,2</slots></card>
//!   </fronts>
//!   <backs>
//!     <card><id>def</id><query>Forest back</query><slots>0,1,2</slots></card>
//!   </backs>
//! </order>
//! ```
//!
//! The number of comma-separated tokens in `slots` is how many times the
//! card is placed. A back belongs to the front whose `slots` text is
//! identical.

use crate::types::*;
use roxmltree::Node;
use std::path::Path;

const FRONTS: &str = "fronts";
const BACKS: &str = "backs";

/// One card record from the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    /// Substring of the image file name
    pub id: String,
    /// Human-readable name used in error messages
    pub query: Option<String>,
    /// Raw slot list; also the key that pairs a front with its back
    pub slots: String,
}

impl CardEntry {
    /// Number of times this card appears on the output pages
    pub fn slot_count(&self) -> usize {
        self.slots.split(',').count()
    }

    pub fn display_name(&self) -> &str {
        self.query.as_deref().unwrap_or(&self.id)
    }
}

/// Parsed manifest, in document order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    pub fronts: Vec<CardEntry>,
    pub backs: Vec<CardEntry>,
}

impl Manifest {
    /// Parse manifest XML. Every front is validated before anything is
    /// returned, so a malformed entry never leaves a partial run behind.
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        let root = doc.root_element();

        let fronts = child(root, FRONTS).ok_or(SheetError::MissingSection(FRONTS))?;
        let fronts = elements(fronts)
            .enumerate()
            .map(|(index, node)| parse_front(node, index))
            .collect::<Result<Vec<_>>>()?;

        let backs = match child(root, BACKS) {
            Some(section) => {
                let mut backs = Vec::new();
                for (index, node) in elements(section).enumerate() {
                    if let Some(back) = parse_back(node, index)? {
                        backs.push(back);
                    }
                }
                backs
            }
            None => Vec::new(),
        };

        Ok(Self { fronts, backs })
    }

    /// The back printed behind `front`, if any.
    ///
    /// Matches on identical slot text; the first matching back wins.
    pub fn back_for(&self, front: &CardEntry) -> Option<&CardEntry> {
        self.backs.iter().find(|back| back.slots == front.slots)
    }

    /// Total number of card placements
    pub fn total_slots(&self) -> usize {
        self.fronts.iter().map(CardEntry::slot_count).sum()
    }
}

/// Read and parse a manifest file
pub async fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest> {
    let xml = tokio::fs::read_to_string(path).await?;
    Manifest::parse(&xml)
}

fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    elements(node).find(|n| n.tag_name().name() == name)
}

/// Raw element text; an empty element yields an empty string.
fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    child(node, name).map(|n| n.text().unwrap_or_default().to_string())
}

/// `(id, query, slots)` of one entry; only `id` is required here.
fn parse_entry(
    node: Node<'_, '_>,
    section: &str,
    index: usize,
) -> Result<(String, Option<String>, Option<String>)> {
    let id = child_text(node, "id").ok_or_else(|| SheetError::MissingField {
        field: "id",
        entry: format!("{} #{}", section, index + 1),
    })?;
    Ok((id, child_text(node, "query"), child_text(node, "slots")))
}

fn parse_front(node: Node<'_, '_>, index: usize) -> Result<CardEntry> {
    let (id, query, slots) = parse_entry(node, FRONTS, index)?;
    let slots = slots.ok_or_else(|| SheetError::MissingField {
        field: "slots",
        entry: format!("\"{}\"", query.as_deref().unwrap_or(&id)),
    })?;
    Ok(CardEntry { id, query, slots })
}

fn parse_back(node: Node<'_, '_>, index: usize) -> Result<Option<CardEntry>> {
    let (id, query, slots) = parse_entry(node, BACKS, index)?;
    match slots {
        Some(slots) => Ok(Some(CardEntry { id, query, slots })),
        None => {
            log::warn!("Skipping back \"{}\": no slots element, it can never match a front", id);
            Ok(None)
        }
    }
}
