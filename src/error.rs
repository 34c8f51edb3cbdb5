// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Catalog Error: {0}")]
    Catalog(String),
    #[error("Gallery Error: {0}")]
    Gallery(#[from] GalleryError),
    #[error("Booking Error: {0}")]
    Booking(#[from] BookingError),
}

/// Precondition violations raised by the gallery engine.
///
/// Thumbnails only exist for photos that are visible, so these indicate a
/// caller bug rather than a user-facing condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The visible photo set is empty, so there is nothing to open.
    #[error("Cannot open the lightbox on an empty photo set")]
    EmptySelection,

    /// The clicked index does not address a visible photo.
    #[error("Photo index {index} is out of range for {len} visible photos")]
    IndexOutOfRange { index: usize, len: usize },
}

impl GalleryError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GalleryError::EmptySelection => "error-gallery-empty",
            GalleryError::IndexOutOfRange { .. } => "error-gallery-index",
        }
    }
}

/// Returned when a string names no gallery category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gallery category: {0}")]
pub struct UnknownCategory(pub String);

/// Field-level rejections of a booking submission.
///
/// These mirror the constraints a browser enforces on the form inputs
/// (`required`, `type=email`, `type=date`, `min`/`max`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// A required field is absent or blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The email address is not of the form `local@domain`.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The service value is not one of the bookable tags.
    #[error("Unknown service: {0}")]
    UnknownService(String),

    /// The date is not an ISO `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The party size is not a whole number within the allowed bounds.
    #[error("Invalid party size: {0}")]
    InvalidPartySize(String),
}

impl BookingError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            BookingError::MissingField(_) => "error-booking-missing-field",
            BookingError::InvalidEmail(_) => "error-booking-email",
            BookingError::UnknownService(_) => "error-booking-service",
            BookingError::InvalidDate(_) => "error-booking-date",
            BookingError::InvalidPartySize(_) => "error-booking-people",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
