//! Page configuration: where the catalog lives and which container ids the
//! page exposes.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::section::SectionKind;

/// Catalog location used when the page does not name one.
pub const DEFAULT_CATALOG_PATH: &str = "comics.json";

/// Naming scheme of the section containers
///
/// The storefront and catalog page layouts were built separately and name
/// the trending and pull-list containers differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerProfile {
    #[default]
    Storefront,
    Catalog,
}

impl ContainerProfile {
    #[must_use]
    pub const fn container_id(self, kind: SectionKind) -> &'static str {
        match (self, kind) {
            (_, SectionKind::NewReleases) => "newReleasesGrid",
            (Self::Storefront, SectionKind::Trending) => "trendingList",
            (Self::Catalog, SectionKind::Trending) => "trendingGrid",
            (Self::Storefront, SectionKind::PullList) => "comicListsContent",
            (Self::Catalog, SectionKind::PullList) => "pullListContent",
            (_, SectionKind::StaffPicks) => "staffPicksGrid",
            (_, SectionKind::News) => "newsGrid",
        }
    }

    /// `(section, container id)` pairs in page order.
    #[must_use]
    pub fn containers(self) -> [(SectionKind, &'static str); 5] {
        SectionKind::ALL.map(|kind| (kind, self.container_id(kind)))
    }
}

impl FromStr for ContainerProfile {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "storefront" | "" => Ok(Self::Storefront),
            "catalog" => Ok(Self::Catalog),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

/// Resolved page configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub catalog_url: String,
    pub profile: ContainerProfile,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_PATH.to_string(),
            profile: ContainerProfile::default(),
        }
    }
}

impl CatalogConfig {
    /// Build the configuration from optional page attributes.
    ///
    /// Blank values fall back to defaults. An unknown profile is logged and
    /// replaced by the default profile rather than aborting the page.
    #[must_use]
    pub fn from_attributes(catalog_url: Option<&str>, profile: Option<&str>) -> Self {
        let catalog_url = catalog_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_CATALOG_PATH)
            .to_string();
        let profile = match profile.map(str::parse::<ContainerProfile>) {
            Some(Ok(profile)) => profile,
            Some(Err(err)) => {
                log::warn!("{err}; using the storefront layout");
                ContainerProfile::default()
            }
            None => ContainerProfile::default(),
        };
        Self {
            catalog_url,
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_differ_only_in_trending_and_pull_list() {
        for kind in SectionKind::ALL {
            let same = ContainerProfile::Storefront.container_id(kind)
                == ContainerProfile::Catalog.container_id(kind);
            let expected_same = !matches!(kind, SectionKind::Trending | SectionKind::PullList);
            assert_eq!(same, expected_same, "{kind}");
        }
        assert_eq!(
            ContainerProfile::Catalog.container_id(SectionKind::PullList),
            "pullListContent"
        );
    }

    #[test]
    fn profile_parsing_accepts_known_names() {
        assert_eq!(
            "Catalog".parse::<ContainerProfile>(),
            Ok(ContainerProfile::Catalog)
        );
        assert_eq!(
            " storefront ".parse::<ContainerProfile>(),
            Ok(ContainerProfile::Storefront)
        );
        assert_eq!(
            "magazine".parse::<ContainerProfile>(),
            Err(ConfigError::UnknownProfile("magazine".into()))
        );
    }

    #[test]
    fn attributes_fall_back_to_defaults() {
        assert_eq!(CatalogConfig::from_attributes(None, None), CatalogConfig::default());
        assert_eq!(
            CatalogConfig::from_attributes(Some("  "), Some("bogus")),
            CatalogConfig::default()
        );
        let config = CatalogConfig::from_attributes(Some("data/comics.json"), Some("catalog"));
        assert_eq!(config.catalog_url, "data/comics.json");
        assert_eq!(config.profile, ContainerProfile::Catalog);
    }
}
