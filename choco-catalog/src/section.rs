use std::fmt;

use crate::data::{CatalogDocument, ComicEntry, NewsEntry};

/// Message written into every known container when the catalog cannot be loaded.
pub const FAILURE_MESSAGE: &str = "Unable to load comics right now. Please try again later.";

/// One display area of the page, fed by one catalog list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKind {
    NewReleases,
    Trending,
    PullList,
    StaffPicks,
    News,
}

impl SectionKind {
    /// Every section, in page order.
    pub const ALL: [Self; 5] = [
        Self::NewReleases,
        Self::Trending,
        Self::PullList,
        Self::StaffPicks,
        Self::News,
    ];

    /// Key of the backing list in `comics.json`.
    #[must_use]
    pub const fn catalog_key(self) -> &'static str {
        match self {
            Self::NewReleases => "newReleases",
            Self::Trending => "trendingComics",
            Self::PullList => "pullList",
            Self::StaffPicks => "staffPicks",
            Self::News => "comicNews",
        }
    }

    /// Literal text shown when the backing list is present but empty.
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::NewReleases => "No new releases available at the moment.",
            Self::Trending => "No trending comics available at the moment.",
            Self::PullList => "No comics on your pull list yet.",
            Self::StaffPicks => "No staff picks available at the moment.",
            Self::News => "No comic news available at the moment.",
        }
    }

    /// Whether items of this section open the detail overlay when activated.
    #[must_use]
    pub const fn is_activatable(self) -> bool {
        !matches!(self, Self::News)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.catalog_key())
    }
}

/// What a section container should show
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Comics(Vec<ComicEntry>),
    News(Vec<NewsEntry>),
    /// The list was present but empty.
    Empty(&'static str),
    /// The catalog failed to load.
    Failed(&'static str),
}

impl SectionContent {
    /// Content for `kind` from a loaded catalog.
    ///
    /// Returns `None` when the document has no list for `kind`; the caller
    /// must then leave the container untouched.
    #[must_use]
    pub fn from_catalog(catalog: &CatalogDocument, kind: SectionKind) -> Option<Self> {
        if kind == SectionKind::News {
            let news = catalog.news()?;
            return Some(if news.is_empty() {
                Self::Empty(kind.empty_message())
            } else {
                Self::News(news.to_vec())
            });
        }

        let comics = catalog.comics(kind)?;
        Some(if comics.is_empty() {
            Self::Empty(kind.empty_message())
        } else {
            Self::Comics(comics.to_vec())
        })
    }

    /// Content shown in every container after a failed load.
    #[must_use]
    pub const fn failure() -> Self {
        Self::Failed(FAILURE_MESSAGE)
    }

    /// Number of item fragments this content renders to.
    #[must_use]
    pub fn item_count(&self) -> usize {
        match self {
            Self::Comics(comics) => comics.len(),
            Self::News(news) => news.len(),
            Self::Empty(_) | Self::Failed(_) => 0,
        }
    }
}
