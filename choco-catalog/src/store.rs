use crate::data::{CatalogDocument, ComicEntry};
use crate::section::SectionKind;

/// Holder of the last successfully loaded catalog
///
/// The document is replaced wholesale on every successful load and never
/// edited in place.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    document: Option<CatalogDocument>,
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly loaded document.
    pub fn replace(&mut self, document: CatalogDocument) {
        self.document = Some(document);
    }

    #[must_use]
    pub const fn document(&self) -> Option<&CatalogDocument> {
        self.document.as_ref()
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    /// Resolve an activation back to the comic it came from.
    ///
    /// Lookup runs against the list of the section that rendered the item.
    /// Returns `None` before the catalog has loaded or when the id is unknown.
    #[must_use]
    pub fn find_comic(&self, kind: SectionKind, id: &str) -> Option<&ComicEntry> {
        self.document.as_ref()?.find_comic(kind, id)
    }
}
