//! Multipart form handling for owner photos and property image files.

use std::collections::HashMap;
use std::str::FromStr;

use axum::extract::Multipart;
use chrono::NaiveDate;

use crate::errors::JsonApiError;

/// All parts of a multipart body, keyed by field name and read fully into memory.
#[derive(Debug, Default)]
pub struct UploadForm {
    parts: HashMap<String, Vec<u8>>,
}

impl UploadForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, JsonApiError> {
        let mut parts = HashMap::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| JsonApiError::new(e.status(), "Bad Multipart", Some(e.body_text())))?
        {
            let Some(name) = field.name().map(str::to_string) else { continue };
            let bytes = field
                .bytes()
                .await
                .map_err(|e| JsonApiError::new(e.status(), "Bad Multipart", Some(e.body_text())))?;
            parts.insert(name, bytes.to_vec());
        }
        Ok(Self { parts })
    }

    #[cfg(test)]
    pub fn from_parts<const N: usize>(parts: [(&str, &[u8]); N]) -> Self {
        Self { parts: parts.into_iter().map(|(k, v)| (k.to_string(), v.to_vec())).collect() }
    }

    /// Required text field.
    pub fn text(&self, name: &str) -> Result<String, JsonApiError> {
        let raw = self
            .parts
            .get(name)
            .ok_or_else(|| JsonApiError::bad_request(format!("missing form field `{name}`")))?;
        String::from_utf8(raw.clone()).map_err(|_| JsonApiError::bad_request(format!("form field `{name}` is not UTF-8")))
    }

    /// Required field parsed with `FromStr`.
    pub fn parse<T: FromStr>(&self, name: &str) -> Result<T, JsonApiError> {
        self.text(name)?
            .trim()
            .parse()
            .map_err(|_| JsonApiError::bad_request(format!("form field `{name}` has an invalid value")))
    }

    /// Optional field parsed with `FromStr`; `default` when absent or blank.
    pub fn parse_or<T: FromStr>(&self, name: &str, default: T) -> Result<T, JsonApiError> {
        match self.parts.get(name) {
            Some(raw) if !raw.iter().all(u8::is_ascii_whitespace) => self.parse(name),
            _ => Ok(default),
        }
    }

    /// Required `YYYY-MM-DD` date.
    pub fn date(&self, name: &str) -> Result<NaiveDate, JsonApiError> {
        let raw = self.text(name)?;
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| JsonApiError::bad_request(format!("form field `{name}` must be a YYYY-MM-DD date")))
    }

    /// Binary part, first of `names` present. An empty part counts as absent.
    pub fn take_file(&mut self, names: &[&str]) -> Option<Vec<u8>> {
        names
            .iter()
            .find_map(|n| self.parts.remove(*n))
            .filter(|bytes| !bytes.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn reads_typed_fields() {
        let form = UploadForm::from_parts([
            ("name", b"John Doe".as_slice()),
            ("birthday", b"1975-08-15".as_slice()),
            ("property_id", b" 12 ".as_slice()),
            ("enabled", b"true".as_slice()),
        ]);
        assert_eq!(form.text("name").unwrap(), "John Doe");
        assert_eq!(form.date("birthday").unwrap(), NaiveDate::from_ymd_opt(1975, 8, 15).unwrap());
        assert_eq!(form.parse::<i32>("property_id").unwrap(), 12);
        assert!(form.parse_or("enabled", false).unwrap());
        assert!(!form.parse_or("missing", false).unwrap());
    }

    #[test]
    fn bad_fields_are_client_errors() {
        let form = UploadForm::from_parts([("birthday", b"15/08/1975".as_slice()), ("property_id", b"abc".as_slice())]);
        assert_eq!(form.date("birthday").unwrap_err().status, StatusCode::BAD_REQUEST);
        assert_eq!(form.parse::<i32>("property_id").unwrap_err().status, StatusCode::BAD_REQUEST);
        assert_eq!(form.text("name").unwrap_err().status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn empty_file_part_counts_as_absent() {
        let mut form = UploadForm::from_parts([("photo", b"".as_slice()), ("file", b"\x01\x02".as_slice())]);
        assert_eq!(form.take_file(&["photo"]), None);
        assert_eq!(form.take_file(&["file", "photo"]), Some(vec![1, 2]));
    }
}
