//! Form parsing and validation for the create/edit pages.
//!
//! Bodies are `application/x-www-form-urlencoded`; multi-selects such as
//! `genres` arrive as repeated keys, so they are parsed into an ordered list
//! of pairs rather than a map.

pub mod artist;
pub mod choices;
pub mod show;
pub mod venue;

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    #[must_use]
    pub fn parse(body: &[u8]) -> Self {
        Self {
            fields: url::form_urlencoded::parse(body).into_owned().collect(),
        }
    }

    /// First value submitted for `key`, untrimmed.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every non-blank value submitted for `key`, in submission order.
    #[must_use]
    pub fn values(&self, key: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Trimmed value, with blanks treated as absent.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.value(key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(ToString::to_string)
    }

    /// Checkbox state. Browsers omit unchecked boxes entirely.
    #[must_use]
    pub fn checkbox(&self, key: &str) -> bool {
        self.value(key)
            .is_some_and(|v| matches!(v.trim(), "y" | "on" | "true" | "1"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(value)` if nothing was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

pub(crate) fn required(
    errors: &mut ValidationErrors,
    form: &FormData,
    field: &'static str,
) -> String {
    form.text(field).unwrap_or_else(|| {
        errors.add(field, "This field is required.");
        String::new()
    })
}

pub(crate) fn max_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    max: usize,
) {
    if value.is_some_and(|v| v.chars().count() > max) {
        errors.add(field, format!("Must be at most {max} characters."));
    }
}

pub(crate) fn state_choice(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if !value.is_empty() && !choices::STATES.contains(&value) {
        errors.add(field, "Not a valid choice.");
    }
}

pub(crate) fn genre_choices(errors: &mut ValidationErrors, field: &'static str, genres: &[String]) {
    if genres.is_empty() {
        errors.add(field, "This field is required.");
    }
    for genre in genres {
        if !choices::GENRES.contains(&genre.as_str()) {
            errors.add(field, format!("'{genre}' is not a valid choice."));
        }
    }
}

pub(crate) fn phone(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^\+?[0-9(][0-9 ().\-]{5,18}[0-9]$").expect("Invalid regex")
    });

    if value.is_some_and(|v| !re.is_match(v)) {
        errors.add(field, "Invalid phone number.");
    }
}

pub(crate) fn link(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    let Some(value) = value else {
        return;
    };
    match url::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {}
        _ => errors.add(field, "Invalid URL."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_keep_order() {
        let form = FormData::parse(b"genres=Jazz&name=Hop&genres=Reggae&genres=+");
        assert_eq!(form.values("genres"), vec!["Jazz", "Reggae"]);
        assert_eq!(form.value("name"), Some("Hop"));
    }

    #[test]
    fn blank_text_is_absent() {
        let form = FormData::parse(b"phone=++&city=San+Francisco");
        assert_eq!(form.text("phone"), None);
        assert_eq!(form.text("city").as_deref(), Some("San Francisco"));
        assert_eq!(form.text("missing"), None);
    }

    #[test]
    fn checkbox_values() {
        assert!(FormData::parse(b"seeking_talent=y").checkbox("seeking_talent"));
        assert!(FormData::parse(b"seeking_talent=on").checkbox("seeking_talent"));
        assert!(!FormData::parse(b"seeking_talent=n").checkbox("seeking_talent"));
        assert!(!FormData::parse(b"").checkbox("seeking_talent"));
    }

    #[test]
    fn phone_formats() {
        for ok in ["123-123-1234", "(415) 555 0100", "+44 20 7946 0958"] {
            let mut errors = ValidationErrors::default();
            phone(&mut errors, "phone", Some(ok));
            assert!(errors.is_empty(), "{ok} should be accepted");
        }
        let mut errors = ValidationErrors::default();
        phone(&mut errors, "phone", Some("call me"));
        assert!(errors.has("phone"));
    }

    #[test]
    fn links_must_be_http() {
        let mut errors = ValidationErrors::default();
        link(&mut errors, "website_link", Some("https://www.themusicalhop.com"));
        link(&mut errors, "facebook_link", None);
        assert!(errors.is_empty());

        link(&mut errors, "image_link", Some("ftp://example.com/a.png"));
        link(&mut errors, "website_link", Some("not a url"));
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn display_joins_field_messages() {
        let mut errors = ValidationErrors::default();
        errors.add("name", "This field is required.");
        errors.add("state", "Not a valid choice.");
        assert_eq!(
            errors.to_string(),
            "name: This field is required.; state: Not a valid choice."
        );
    }
}
