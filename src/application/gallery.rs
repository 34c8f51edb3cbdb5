// SPDX-License-Identifier: MPL-2.0
//! Gallery filtering and lightbox navigation.
//!
//! [`GalleryEngine`] owns the state of one gallery view: the injected photo
//! catalog, the active category filter and the lightbox session. The view
//! forwards user input as [`Message`]s (or calls the operations directly)
//! and reads back [`GalleryEngine::visible_photos`] for the grid and
//! [`GalleryEngine::current_photo`] for the overlay.
//!
//! # Snapshot semantics
//!
//! Opening the lightbox copies the visible photo set. Navigation walks that
//! copy only, so the overlay keeps matching the grid the user clicked in
//! even if the filter changes underneath it.

use crate::catalog::PhotoCatalog;
use crate::domain::gallery::{Category, Photo};
use crate::error::GalleryError;
use std::borrow::Cow;

/// Lightbox navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// i18n key of the arrow button's accessible label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Direction::Forward => "gallery-next",
            Direction::Backward => "gallery-previous",
        }
    }
}

/// Moves `index` by `delta` within `0..len`, wrapping at both ends.
///
/// `len` must be non-zero.
fn wrap_index(index: usize, delta: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrap_index on an empty set");
    // Photo counts are far below isize::MAX.
    let len = len as isize;
    (index as isize + delta).rem_euclid(len) as usize
}

/// An open lightbox: a frozen copy of the photos plus the displayed index.
///
/// Invariant: `photos` is non-empty and `index < photos.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxSession {
    photos: Vec<Photo>,
    index: usize,
}

impl LightboxSession {
    fn new(photos: Vec<Photo>, index: usize) -> Result<Self, GalleryError> {
        if photos.is_empty() {
            return Err(GalleryError::EmptySelection);
        }
        if index >= photos.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: photos.len(),
            });
        }
        Ok(Self { photos, index })
    }

    /// The photo on screen.
    #[must_use]
    pub fn current(&self) -> &Photo {
        &self.photos[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The snapshot taken when the lightbox opened.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Always `false`; sessions are never created empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    fn step(&mut self, direction: Direction) {
        self.index = wrap_index(self.index, direction.delta(), self.photos.len());
    }
}

/// Lightbox state machine: `Closed` initially, `Open` while a photo is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(LightboxSession),
}

impl Lightbox {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&LightboxSession> {
        match self {
            Lightbox::Open(session) => Some(session),
            Lightbox::Closed => None,
        }
    }
}

/// User input the gallery view reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A filter button was pressed.
    CategorySelected(Category),
    /// A grid thumbnail was pressed; carries its index in the visible set.
    ThumbnailClicked(usize),
    /// An overlay arrow was pressed.
    Navigate(Direction),
    /// The overlay close button was pressed.
    CloseRequested,
    /// The dimmed area around the photo was pressed.
    BackdropClicked,
}

/// Filter and lightbox state of one gallery view.
#[derive(Debug, Clone)]
pub struct GalleryEngine {
    catalog: PhotoCatalog,
    filter: Category,
    lightbox: Lightbox,
}

impl GalleryEngine {
    /// Creates an engine showing every photo with the lightbox closed.
    #[must_use]
    pub fn new(catalog: PhotoCatalog) -> Self {
        Self::with_filter(catalog, Category::All)
    }

    /// Creates an engine with a preselected filter.
    #[must_use]
    pub fn with_filter(catalog: PhotoCatalog, filter: Category) -> Self {
        Self {
            catalog,
            filter,
            lightbox: Lightbox::Closed,
        }
    }

    /// Applies one user input.
    ///
    /// # Errors
    ///
    /// Only [`Message::ThumbnailClicked`] can fail, see [`Self::open_lightbox`].
    pub fn update(&mut self, message: Message) -> Result<(), GalleryError> {
        match message {
            Message::CategorySelected(category) => self.select_category(category),
            Message::ThumbnailClicked(index) => self.open_lightbox(index)?,
            Message::Navigate(direction) => {
                self.navigate(direction);
            }
            Message::CloseRequested | Message::BackdropClicked => self.close_lightbox(),
        }
        Ok(())
    }

    #[must_use]
    pub fn catalog(&self) -> &PhotoCatalog {
        &self.catalog
    }

    /// The active filter.
    #[must_use]
    pub fn filter(&self) -> Category {
        self.filter
    }

    /// Whether `category`'s filter button should be highlighted.
    #[must_use]
    pub fn is_active(&self, category: Category) -> bool {
        self.filter == category
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Replaces the active filter.
    ///
    /// An open lightbox keeps its snapshot and index.
    pub fn select_category(&mut self, category: Category) {
        if self.filter != category {
            tracing::debug!(from = %self.filter, to = %category, "gallery filter changed");
        }
        self.filter = category;
    }

    /// Photos of the grid under the active filter, in display order.
    #[must_use]
    pub fn visible_photos(&self) -> Cow<'_, [Photo]> {
        self.catalog.photos(self.filter)
    }

    /// Opens the lightbox on the `clicked_index`-th visible photo.
    ///
    /// Re-opening while open replaces the session with a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::EmptySelection`] when nothing is visible and
    /// [`GalleryError::IndexOutOfRange`] when the index addresses no visible
    /// photo. The state is left unchanged in both cases.
    pub fn open_lightbox(&mut self, clicked_index: usize) -> Result<(), GalleryError> {
        let snapshot = self.visible_photos().into_owned();
        match LightboxSession::new(snapshot, clicked_index) {
            Ok(session) => {
                tracing::debug!(
                    filter = %self.filter,
                    index = clicked_index,
                    len = session.len(),
                    "lightbox opened"
                );
                self.lightbox = Lightbox::Open(session);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(filter = %self.filter, %err, "refusing to open lightbox");
                Err(err)
            }
        }
    }

    /// Shows the next or previous photo of the snapshot, wrapping around.
    ///
    /// Returns the photo now on screen, or `None` (and does nothing) when
    /// the lightbox is closed.
    pub fn navigate(&mut self, direction: Direction) -> Option<&Photo> {
        match &mut self.lightbox {
            Lightbox::Open(session) => {
                session.step(direction);
                Some(session.current())
            }
            Lightbox::Closed => {
                tracing::debug!(?direction, "ignoring navigation while lightbox is closed");
                None
            }
        }
    }

    /// Closes the lightbox and drops its snapshot. Does nothing when closed.
    pub fn close_lightbox(&mut self) {
        if self.lightbox.is_open() {
            tracing::debug!("lightbox closed");
        }
        self.lightbox = Lightbox::Closed;
    }

    /// The photo shown in the lightbox, if open.
    #[must_use]
    pub fn current_photo(&self) -> Option<&Photo> {
        self.lightbox.session().map(LightboxSession::current)
    }
}
