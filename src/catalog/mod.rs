// SPDX-License-Identifier: MPL-2.0
//! Gallery catalog loading.
//!
//! The catalog is build-time data: a TOML file listing the photos of each
//! real category in grid order, plus the clips of the video section. The
//! site's own catalog is embedded into the binary; a file on disk can
//! replace it through [`Config::catalog_path`](crate::config::Config).
//!
//! ```toml
//! [[marine]]
//! source = "/images/gallery/marine/shark.jpg"
//! alt = "Shark"
//!
//! [[videos]]
//! source = "/videos/diving.mp4"
//! title_key = "gallery-video-diving"
//! ```

use crate::config::Config;
use crate::domain::gallery::{Category, Photo, Video};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

const EMBEDDED_CATALOG: &str = "gallery.toml";

/// Ordered photo lists per real category, plus the gallery videos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoCatalog {
    #[serde(default)]
    divers: Vec<Photo>,
    #[serde(default)]
    marine: Vec<Photo>,
    #[serde(default)]
    landscapes: Vec<Photo>,
    #[serde(default)]
    vibes: Vec<Photo>,
    #[serde(default)]
    videos: Vec<Video>,
}

impl PhotoCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the photos of a real category.
    ///
    /// `Category::All` has no storage of its own and is ignored.
    #[must_use]
    pub fn with_photos(mut self, category: Category, photos: Vec<Photo>) -> Self {
        match self.slot_mut(category) {
            Some(slot) => *slot = photos,
            None => tracing::debug!("ignoring photos assigned to the synthetic `all` category"),
        }
        self
    }

    /// Replaces the video list.
    #[must_use]
    pub fn with_videos(mut self, videos: Vec<Video>) -> Self {
        self.videos = videos;
        self
    }

    /// Loads the catalog shipped with the site.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the embedded file is missing or malformed.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(EMBEDDED_CATALOG)
            .ok_or_else(|| Error::Catalog(format!("embedded {EMBEDDED_CATALOG} not found")))?;
        Self::from_toml_str(&String::from_utf8_lossy(file.data.as_ref()))
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the text is not a valid catalog.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))
    }

    /// Reads a catalog file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Catalog`] if it cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads the configured catalog, falling back to the embedded one.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Self::load_from_path`] and [`Self::embedded`].
    pub fn load(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::embedded()?,
        };
        tracing::debug!(
            photos = catalog.len(),
            videos = catalog.videos.len(),
            "gallery catalog loaded"
        );
        Ok(catalog)
    }

    /// Returns the photos shown under `category`, in grid order.
    ///
    /// Real categories borrow their list verbatim; `All` allocates the
    /// concatenation of the real categories in [`Category::REAL`] order.
    #[must_use]
    pub fn photos(&self, category: Category) -> Cow<'_, [Photo]> {
        match self.slot(category) {
            Some(photos) => Cow::Borrowed(photos.as_slice()),
            None => Cow::Owned(
                Category::REAL
                    .into_iter()
                    .filter_map(|real| self.slot(real))
                    .flat_map(|photos| photos.iter().cloned())
                    .collect(),
            ),
        }
    }

    /// Clips of the video section, in display order.
    #[must_use]
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Total number of photos across all real categories.
    #[must_use]
    pub fn len(&self) -> usize {
        Category::REAL
            .into_iter()
            .filter_map(|real| self.slot(real))
            .map(Vec::len)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, category: Category) -> Option<&Vec<Photo>> {
        match category {
            Category::All => None,
            Category::Divers => Some(&self.divers),
            Category::Marine => Some(&self.marine),
            Category::Landscapes => Some(&self.landscapes),
            Category::Vibes => Some(&self.vibes),
        }
    }

    fn slot_mut(&mut self, category: Category) -> Option<&mut Vec<Photo>> {
        match category {
            Category::All => None,
            Category::Divers => Some(&mut self.divers),
            Category::Marine => Some(&mut self.marine),
            Category::Landscapes => Some(&mut self.landscapes),
            Category::Vibes => Some(&mut self.vibes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn photos(prefix: &str, count: usize) -> Vec<Photo> {
        (0..count)
            .map(|i| Photo::new(format!("/{prefix}/{i}.jpg"), format!("{prefix} {i}")))
            .collect()
    }

    #[test]
    fn embedded_catalog_matches_site_layout() {
        let catalog = PhotoCatalog::embedded().expect("embedded catalog should parse");
        assert_eq!(catalog.photos(Category::Divers).len(), 28);
        assert_eq!(catalog.photos(Category::Marine).len(), 44);
        assert_eq!(catalog.photos(Category::Landscapes).len(), 13);
        assert_eq!(catalog.photos(Category::Vibes).len(), 6);
        assert_eq!(catalog.len(), 91);
        assert_eq!(catalog.videos().len(), 4);
    }

    #[test]
    fn embedded_catalog_keeps_odd_extensions() {
        let catalog = PhotoCatalog::embedded().expect("embedded catalog should parse");
        assert_eq!(
            catalog.photos(Category::Divers)[2].source,
            "/images/gallery/divers/diver-3.JPG"
        );
        let marine = catalog.photos(Category::Marine);
        assert_eq!(marine.last().map(|p| p.alt_text.as_str()), Some("Crocodile"));
        let landscapes = catalog.photos(Category::Landscapes);
        assert!(landscapes[12].source.ends_with("sea-landscape-13.jpeg"));
    }

    #[test]
    fn all_concatenates_real_categories_in_order() {
        let catalog = PhotoCatalog::new()
            .with_photos(Category::Vibes, photos("v", 1))
            .with_photos(Category::Divers, photos("d", 2))
            .with_photos(Category::Landscapes, photos("l", 1))
            .with_photos(Category::Marine, photos("m", 3));

        let sources: Vec<String> = catalog
            .photos(Category::All)
            .iter()
            .map(|p| p.source.clone())
            .collect();
        assert_eq!(
            sources,
            vec!["/d/0.jpg", "/d/1.jpg", "/m/0.jpg", "/m/1.jpg", "/m/2.jpg", "/l/0.jpg", "/v/0.jpg"]
        );
    }

    #[test]
    fn real_category_is_borrowed_verbatim() {
        let catalog = PhotoCatalog::new().with_photos(Category::Marine, photos("m", 3));
        assert!(matches!(catalog.photos(Category::Marine), Cow::Borrowed(_)));
        assert_eq!(catalog.photos(Category::Marine).as_ref(), photos("m", 3).as_slice());
        assert!(catalog.photos(Category::Divers).is_empty());
    }

    #[test]
    fn videos_are_kept_apart_from_photos() {
        let clip = Video {
            source: "/videos/diving.mp4".to_string(),
            title_key: "gallery-video-diving".to_string(),
        };
        let catalog = PhotoCatalog::new()
            .with_photos(Category::Vibes, photos("v", 2))
            .with_videos(vec![clip.clone()]);
        assert_eq!(catalog.videos(), &[clip]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.photos(Category::All).len(), 2);
    }

    #[test]
    fn assigning_to_all_is_ignored() {
        let catalog = PhotoCatalog::new().with_photos(Category::All, photos("x", 2));
        assert!(catalog.is_empty());
    }

    #[test]
    fn partial_file_defaults_missing_categories() {
        let catalog = PhotoCatalog::from_toml_str(
            "[[vibes]]\nsource = \"/v.jpg\"\nalt = \"Food\"\n",
        )
        .expect("partial catalog should parse");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.photos(Category::Vibes)[0], Photo::new("/v.jpg", "Food"));
    }

    #[test]
    fn malformed_file_is_a_catalog_error() {
        let result = PhotoCatalog::from_toml_str("[[marine]]\nsource = 3\n");
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn load_prefers_configured_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("gallery.toml");
        fs::write(&path, "[[divers]]\nsource = \"/d.jpg\"\nalt = \"Diver\"\n")
            .expect("failed to write catalog");

        let config = Config {
            catalog_path: Some(path),
            ..Config::default()
        };
        let catalog = PhotoCatalog::load(&config).expect("catalog should load");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn load_without_path_uses_embedded_catalog() {
        let catalog = PhotoCatalog::load(&Config::default()).expect("catalog should load");
        assert_eq!(catalog, PhotoCatalog::embedded().expect("embedded"));
    }
}
