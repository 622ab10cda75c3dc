use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::section::SectionKind;

/// A comic as listed in any of the catalog's comic sections
///
/// Only `title` is structurally required. An entry without an `id` still
/// renders but cannot be activated. Every other field is optional and the
/// renderers substitute a default or drop the sub-element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicEntry {
    #[serde(default, deserialize_with = "scalar_text")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "author")]
    pub publisher: Option<String>,
    #[serde(default, alias = "artist")]
    pub writer: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "optional_rating")]
    pub rating: Option<f64>,
}

impl ComicEntry {
    /// Minimal entry with just an id and title (useful for tests)
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            publisher: None,
            writer: None,
            cover: None,
            description: None,
            tags: Vec::new(),
            price: None,
            release_date: None,
            rating: None,
        }
    }

    /// Description text, treating an empty string as missing.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    /// Cover URL, treating an empty string as missing.
    #[must_use]
    pub fn cover(&self) -> Option<&str> {
        non_empty(self.cover.as_deref())
    }

    #[must_use]
    pub fn writer(&self) -> Option<&str> {
        non_empty(self.writer.as_deref())
    }

    #[must_use]
    pub fn publisher(&self) -> Option<&str> {
        non_empty(self.publisher.as_deref())
    }
}

/// A news headline shown in the news section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEntry {
    #[serde(default, deserialize_with = "scalar_text")]
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub date: Option<String>,
}

/// The whole `comics.json` document
///
/// A list that is missing from the document stays `None`, which is not the
/// same as an empty list: sections skip absent lists but announce empty ones.
/// Malformed entries are dropped from their own list only, and a list that
/// is not an array counts as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_releases: Option<Vec<ComicEntry>>,
    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub trending_comics: Option<Vec<ComicEntry>>,
    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub pull_list: Option<Vec<ComicEntry>>,
    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub staff_picks: Option<Vec<ComicEntry>>,
    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub comic_news: Option<Vec<NewsEntry>>,
}

impl CatalogDocument {
    /// Parse a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object. Bad lists and entries
    /// inside a well-formed object are skipped instead.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The comic list backing `kind`, or `None` when absent (always `None` for news).
    #[must_use]
    pub fn comics(&self, kind: SectionKind) -> Option<&[ComicEntry]> {
        match kind {
            SectionKind::NewReleases => self.new_releases.as_deref(),
            SectionKind::Trending => self.trending_comics.as_deref(),
            SectionKind::PullList => self.pull_list.as_deref(),
            SectionKind::StaffPicks => self.staff_picks.as_deref(),
            SectionKind::News => None,
        }
    }

    #[must_use]
    pub fn news(&self) -> Option<&[NewsEntry]> {
        self.comic_news.as_deref()
    }

    /// Whether the document carries a list (possibly empty) for `kind`.
    #[must_use]
    pub fn has_section(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::News => self.comic_news.is_some(),
            _ => self.comics(kind).is_some(),
        }
    }

    /// Sections present in the document, in page order.
    #[must_use]
    pub fn present_sections(&self) -> Vec<SectionKind> {
        SectionKind::ALL
            .into_iter()
            .filter(|kind| self.has_section(*kind))
            .collect()
    }

    /// Look up a comic by id within the list that backs `kind`.
    #[must_use]
    pub fn find_comic(&self, kind: SectionKind, id: &str) -> Option<&ComicEntry> {
        if id.is_empty() {
            return None;
        }
        self.comics(kind)?.iter().find(|comic| comic.id == id)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
        }
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_text)
        .unwrap_or_default())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(other) => {
            log::warn!("ignoring catalog list that is not an array: {other}");
            return Ok(None);
        }
    };
    let entries = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<T>(item) {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("skipping catalog entry #{idx}: {err}");
                None
            }
        })
        .collect();
    Ok(Some(entries))
}

fn optional_scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

fn optional_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Int(value)) => Some(value as f64),
        Some(Scalar::Float(value)) => Some(value),
        Some(Scalar::Text(text)) => text.trim().parse::<f64>().ok(),
        Some(Scalar::Bool(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_comic_entry() {
        let json = r#"{
            "newReleases": [
                {
                    "id": "nr-1",
                    "title": "Absolute Batman #11",
                    "publisher": "DC",
                    "writer": "Scott Snyder",
                    "cover": "https://example.test/batman.jpg",
                    "description": "Gotham burns.",
                    "tags": ["superhero", "dark"],
                    "price": "$5.99",
                    "releaseDate": "8/20/25",
                    "rating": 4.5
                }
            ]
        }"#;

        let catalog = CatalogDocument::from_json(json).unwrap();
        let releases = catalog.new_releases.unwrap();
        assert_eq!(releases.len(), 1);
        let comic = &releases[0];
        assert_eq!(comic.id, "nr-1");
        assert_eq!(comic.publisher(), Some("DC"));
        assert_eq!(comic.writer(), Some("Scott Snyder"));
        assert_eq!(comic.tags, vec!["superhero", "dark"]);
        assert_eq!(comic.price.as_deref(), Some("$5.99"));
        assert_eq!(comic.release_date.as_deref(), Some("8/20/25"));
        assert_eq!(comic.rating, Some(4.5));
    }

    #[test]
    fn numeric_ids_and_string_ratings_are_normalised() {
        let json = r#"{"staffPicks": [{"id": 7, "title": "Saga", "rating": "4.8", "price": 3.99}]}"#;
        let catalog = CatalogDocument::from_json(json).unwrap();
        let pick = &catalog.staff_picks.unwrap()[0];
        assert_eq!(pick.id, "7");
        assert_eq!(pick.rating, Some(4.8));
        assert_eq!(pick.price.as_deref(), Some("3.99"));
    }

    #[test]
    fn author_and_artist_aliases_fill_publisher_and_writer() {
        let json = r#"{"trendingComics": [{"id": "t", "title": "T", "author": "Image", "artist": "Jim Lee"}]}"#;
        let catalog = CatalogDocument::from_json(json).unwrap();
        let comic = &catalog.trending_comics.unwrap()[0];
        assert_eq!(comic.publisher(), Some("Image"));
        assert_eq!(comic.writer(), Some("Jim Lee"));
    }

    #[test]
    fn absent_lists_differ_from_empty_lists() {
        let catalog = CatalogDocument::from_json(r#"{"newReleases": [], "unknownKey": 1}"#).unwrap();
        assert_eq!(catalog.comics(SectionKind::NewReleases), Some(&[][..]));
        assert!(catalog.comics(SectionKind::Trending).is_none());
        assert!(catalog.news().is_none());
        assert_eq!(catalog.present_sections(), vec![SectionKind::NewReleases]);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let mut comic = ComicEntry::new("a", "A");
        comic.description = Some(String::new());
        comic.cover = Some(String::new());
        assert!(comic.description().is_none());
        assert!(comic.cover().is_none());
    }

    #[test]
    fn find_comic_is_scoped_to_one_list() {
        let catalog = CatalogDocument {
            trending_comics: Some(vec![ComicEntry::new("1", "Trending One")]),
            staff_picks: Some(vec![ComicEntry::new("1", "Staff One")]),
            ..CatalogDocument::default()
        };
        assert_eq!(
            catalog.find_comic(SectionKind::StaffPicks, "1").map(|c| c.title.as_str()),
            Some("Staff One")
        );
        assert_eq!(
            catalog.find_comic(SectionKind::Trending, "1").map(|c| c.title.as_str()),
            Some("Trending One")
        );
        assert!(catalog.find_comic(SectionKind::NewReleases, "1").is_none());
        assert!(catalog.find_comic(SectionKind::News, "1").is_none());
    }

    #[test]
    fn non_json_is_a_parse_error() {
        assert!(CatalogDocument::from_json("<html>404</html>").is_err());
        assert!(CatalogDocument::from_json(r#""just text""#).is_err());
    }

    #[test]
    fn entry_without_id_keeps_the_rest_of_the_catalog() {
        let json = r#"{
            "newReleases": [{"id": "a", "title": "A"}],
            "pullList": [{"title": "Absolute Batman #11", "rating": 5}]
        }"#;
        let catalog = CatalogDocument::from_json(json).unwrap();
        assert_eq!(catalog.new_releases.as_ref().map(Vec::len), Some(1));
        let pulls = catalog.pull_list.as_ref().unwrap();
        assert_eq!(pulls.len(), 1);
        assert_eq!(pulls[0].id, "");
        assert!(catalog.find_comic(SectionKind::PullList, "").is_none());
        assert_eq!(pulls[0].rating, Some(5.0));
    }

    #[test]
    fn malformed_entries_drop_only_themselves() {
        let json = r#"{
            "trendingComics": [{"id": "t1"}, {"id": "t2", "title": "Kept"}, 42],
            "staffPicks": [{"id": "s1", "title": "Also kept"}]
        }"#;
        let catalog = CatalogDocument::from_json(json).unwrap();
        let trending = catalog.trending_comics.unwrap();
        assert_eq!(trending.len(), 1);
        assert_eq!(trending[0].title, "Kept");
        assert_eq!(catalog.staff_picks.map(|s| s.len()), Some(1));
    }

    #[test]
    fn non_array_list_counts_as_absent() {
        let catalog =
            CatalogDocument::from_json(r#"{"newReleases": "nope", "comicNews": []}"#).unwrap();
        assert!(catalog.new_releases.is_none());
        assert_eq!(catalog.present_sections(), vec![SectionKind::News]);
    }

    #[test]
    fn empty_ids_never_resolve() {
        let catalog = CatalogDocument {
            pull_list: Some(vec![ComicEntry::new("", "No id")]),
            ..CatalogDocument::default()
        };
        assert!(catalog.find_comic(SectionKind::PullList, "").is_none());
    }
}
