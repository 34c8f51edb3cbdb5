// SPDX-License-Identifier: MPL-2.0
//! Booking inquiry intake.
//!
//! The booking form is a flat set of named fields. [`BookingIntake`] holds
//! the state of one form instance: the service preselected from the
//! `service` deep-link parameter and whether the inquiry has been submitted.
//! Submissions are checked against the constraints the form inputs declare,
//! captured as a [`BookingRecord`] and logged; nothing is sent or stored.

use crate::config::defaults::PHONE_PREFIX;
use crate::domain::booking::{PartySize, ServiceTag};
use crate::error::BookingError;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Name of the deep-link query parameter carrying a service tag.
pub const SERVICE_PARAM: &str = "service";

/// Form field names, in form order.
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const SERVICE: &str = "service";
    pub const DATE: &str = "date";
    pub const PEOPLE: &str = "people";
    pub const MESSAGE: &str = "message";

    pub const ALL: [&str; 7] = [NAME, EMAIL, PHONE, SERVICE, DATE, PEOPLE, MESSAGE];
}

/// Returns the first value of `name` in a URL query string.
///
/// A leading `?` is accepted. Keys and values are form-urlencoded, so
/// `%XX` escapes and `+` are decoded before comparing.
#[must_use]
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// The submitted form as flat key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRecord(BTreeMap<String, String>);

impl BookingRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(field, value)` pairs; later pairs win.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Returns the trimmed value of `field`, treating blank as absent.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Like a `required` input: any non-empty value passes, even blanks.
    fn required(&self, field: &'static str) -> Result<&str, BookingError> {
        self.0
            .get(field)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
            .ok_or(BookingError::MissingField(field))
    }
}

/// A booking inquiry that satisfies every field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    /// National number; the form shows the country prefix separately.
    pub phone: Option<String>,
    pub service: ServiceTag,
    pub date: NaiveDate,
    pub party_size: PartySize,
    pub message: Option<String>,
}

fn is_plausible_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl TryFrom<&BookingRecord> for BookingRequest {
    type Error = BookingError;

    fn try_from(record: &BookingRecord) -> Result<Self, Self::Error> {
        let name = record.required(fields::NAME)?.to_string();

        // Email inputs strip surrounding whitespace from their value.
        let email = record.required(fields::EMAIL)?.trim();
        if !is_plausible_email(email) {
            return Err(BookingError::InvalidEmail(email.to_string()));
        }

        let service = record.required(fields::SERVICE)?.parse::<ServiceTag>()?;

        let date = record.required(fields::DATE)?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate(date.to_string()))?;

        let people = record.required(fields::PEOPLE)?;
        let party_size = people
            .parse::<u32>()
            .ok()
            .and_then(PartySize::new)
            .ok_or_else(|| BookingError::InvalidPartySize(people.to_string()))?;

        Ok(Self {
            name,
            email: email.to_string(),
            phone: record.get(fields::PHONE).map(str::to_string),
            service,
            date,
            party_size,
            message: record.get(fields::MESSAGE).map(str::to_string),
        })
    }
}

impl BookingRequest {
    /// Phone number with the country prefix the form displays.
    #[must_use]
    pub fn international_phone(&self) -> Option<String> {
        self.phone
            .as_deref()
            .map(|phone| format!("{PHONE_PREFIX} {phone}"))
    }

    /// Flattens the request back into form fields, omitting empty optionals.
    #[must_use]
    pub fn to_record(&self) -> BookingRecord {
        let mut record = BookingRecord::new();
        record.insert(fields::NAME, self.name.clone());
        record.insert(fields::EMAIL, self.email.clone());
        if let Some(phone) = &self.phone {
            record.insert(fields::PHONE, phone.clone());
        }
        record.insert(fields::SERVICE, self.service.as_str());
        record.insert(fields::DATE, self.date.format("%Y-%m-%d").to_string());
        record.insert(fields::PEOPLE, self.party_size.value().to_string());
        if let Some(message) = &self.message {
            record.insert(fields::MESSAGE, message.clone());
        }
        record
    }
}

/// Whether the form is still being filled in or has been acknowledged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Editing,
    Submitted,
}

/// State of one booking form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingIntake {
    service: Option<ServiceTag>,
    state: FormState,
    submission: Option<BookingRecord>,
}

impl BookingIntake {
    /// Creates an empty form with no service selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form preselecting the service named by a deep link.
    ///
    /// Values outside the service enumeration leave the selection unset.
    #[must_use]
    pub fn from_service_param(value: Option<&str>) -> Self {
        let service = value.and_then(ServiceTag::parse);
        if service.is_none() {
            if let Some(value) = value {
                tracing::debug!(value, "ignoring unknown service deep link");
            }
        }
        Self {
            service,
            ..Self::default()
        }
    }

    /// Creates a form from the page's query string, e.g. `?service=snorkeling`.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self::from_service_param(query_param(query, SERVICE_PARAM).as_deref())
    }

    /// The service currently selected in the form.
    #[must_use]
    pub fn selected_service(&self) -> Option<ServiceTag> {
        self.service
    }

    /// The user picked a service in the dropdown.
    pub fn select_service(&mut self, service: Option<ServiceTag>) {
        self.service = service;
    }

    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    /// The captured submission, once submitted.
    #[must_use]
    pub fn submission(&self) -> Option<&BookingRecord> {
        self.submission.as_ref()
    }

    /// Captures a submission and switches to the acknowledgment state.
    ///
    /// The dropdown selection fills the `service` field when the record has
    /// none. A rejected record leaves the form editable.
    ///
    /// # Errors
    ///
    /// Returns the first [`BookingError`] a field constraint reports.
    pub fn submit(&mut self, mut record: BookingRecord) -> Result<BookingRequest, BookingError> {
        if record.get(fields::SERVICE).is_none() {
            if let Some(service) = self.service {
                record.insert(fields::SERVICE, service.as_str());
            }
        }

        let request = match BookingRequest::try_from(&record) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(%err, "booking submission rejected");
                return Err(err);
            }
        };

        tracing::info!(
            service = %request.service,
            date = %request.date,
            people = request.party_size.value(),
            "booking form submitted"
        );
        self.service = Some(request.service);
        self.submission = Some(record);
        self.state = FormState::Submitted;
        Ok(request)
    }
}
