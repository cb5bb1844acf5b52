//! Core form types
//!
//! `Record` is the committed, persisted shape. `Draft` is the same shape bound to the
//! form while the user is typing: any field may be empty and `rating` may be 0 (unset).

use super::validation::{validate_city_field, validate_email_field};
use crate::error::{EntryFormError, EntryFormResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Number of positions on the rating scale
pub const RATING_SCALE: u8 = 5;

/// Closed set of cities offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "surat")]
    Surat,
    Rajkot,
    Mumbai,
    Rampur,
}

impl City {
    pub const ALL: [City; 4] = [City::Surat, City::Rajkot, City::Mumbai, City::Rampur];

    /// Value as submitted by the form and written to storage (case-sensitive)
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Surat => "surat",
            City::Rajkot => "Rajkot",
            City::Mumbai => "Mumbai",
            City::Rampur => "Rampur",
        }
    }
}

impl FromStr for City {
    type Err = EntryFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::ALL
            .into_iter()
            .find(|city| city.as_str() == s)
            .ok_or_else(|| EntryFormError::InvalidInput(format!("unknown city '{}'", s)))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of the form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FullName,
    Email,
    Password,
    Address,
    City,
    Rating,
    Feedback,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::FullName,
        FormField::Email,
        FormField::Password,
        FormField::Address,
        FormField::City,
        FormField::Rating,
        FormField::Feedback,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::Address => "address",
            FormField::City => "city",
            FormField::Rating => "rating",
            FormField::Feedback => "feedback",
        }
    }

    /// Map a `Draft` member name as reported by `validator` (struct or serde name)
    pub(crate) fn from_member(member: &str) -> Option<Self> {
        match member {
            "full_name" | "fullName" => Some(FormField::FullName),
            "email" => Some(FormField::Email),
            "password" => Some(FormField::Password),
            "address" => Some(FormField::Address),
            "city" => Some(FormField::City),
            "rating" => Some(FormField::Rating),
            "feedback" => Some(FormField::Feedback),
            _ => None,
        }
    }
}

impl FromStr for FormField {
    type Err = EntryFormError;

    /// Accepts both the short names and the original input names (`userEmail`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullName" | "full_name" | "name" => Ok(FormField::FullName),
            "email" | "userEmail" => Ok(FormField::Email),
            "password" | "userPassword" => Ok(FormField::Password),
            "address" | "userAddress" => Ok(FormField::Address),
            "city" | "userCity" => Ok(FormField::City),
            "rating" | "userRating" => Ok(FormField::Rating),
            "feedback" | "userFeedback" => Ok(FormField::Feedback),
            other => Err(EntryFormError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A committed entry. Only drafts that passed validation become records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "userEmail", alias = "email")]
    pub email: String,
    #[serde(rename = "userPassword", alias = "password")]
    pub password: String,
    #[serde(rename = "userAddress", alias = "address")]
    pub address: String,
    #[serde(rename = "userCity", alias = "city")]
    pub city: City,
    #[serde(rename = "userRating", alias = "rating")]
    pub rating: u8,
    #[serde(rename = "userFeedback", alias = "feedback", default)]
    pub feedback: String,
}

/// Ordered list of records; insertion order drives rendering and indexing
pub type RecordList = Vec<Record>;

/// In-progress record bound to the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[validate(length(min = 1, message = "Name is required"))]
    pub full_name: String,
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(custom(function = "validate_city_field"))]
    pub city: String,
    #[validate(range(min = 1, max = 5, message = "Please rate your experience"))]
    pub rating: u8,
    pub feedback: String,
}

impl Draft {
    /// Set a text field. The rating comes from the rating scale, not from typing.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> EntryFormResult<()> {
        let value = value.into();
        match field {
            FormField::FullName => self.full_name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::Address => self.address = value,
            FormField::City => self.city = value,
            FormField::Feedback => self.feedback = value,
            FormField::Rating => {
                return Err(EntryFormError::InvalidInput(
                    "rating is selected on the rating scale, not typed".to_string(),
                ))
            }
        }
        Ok(())
    }

    pub fn get(&self, field: FormField) -> String {
        match field {
            FormField::FullName => self.full_name.clone(),
            FormField::Email => self.email.clone(),
            FormField::Password => self.password.clone(),
            FormField::Address => self.address.clone(),
            FormField::City => self.city.clone(),
            FormField::Rating => self.rating.to_string(),
            FormField::Feedback => self.feedback.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }

    /// Build the record this draft would commit as. Fails with the field errors if the
    /// draft does not pass validation.
    pub fn to_record(&self) -> Result<Record, FieldErrors> {
        let errors = super::validation::validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }
        let city = self.city.parse::<City>().map_err(|_| {
            FieldErrors::single(FormField::City, super::validation::INVALID_CITY_MESSAGE)
        })?;
        Ok(Record {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            address: self.address.clone(),
            city,
            rating: self.rating,
            feedback: self.feedback.clone(),
        })
    }
}

impl From<&Record> for Draft {
    /// Verbatim copy used when editing, password included
    fn from(record: &Record) -> Self {
        Self {
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            password: record.password.clone(),
            address: record.address.clone(),
            city: record.city.as_str().to_string(),
            rating: record.rating,
            feedback: record.feedback.clone(),
        }
    }
}

/// Field name -> human-readable message, one message per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: FormField, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            full_name: "Asha Patel".to_string(),
            email: "asha@example.in".to_string(),
            password: "hunter2".to_string(),
            address: "12 Ring Road".to_string(),
            city: City::Surat,
            rating: 4,
            feedback: String::new(),
        }
    }

    #[test]
    fn test_city_parse_is_case_sensitive() {
        assert_eq!("surat".parse::<City>().unwrap(), City::Surat);
        assert_eq!("Mumbai".parse::<City>().unwrap(), City::Mumbai);
        assert!("Surat".parse::<City>().is_err());
        assert!("".parse::<City>().is_err());
    }

    #[test]
    fn test_form_field_accepts_original_input_names() {
        assert_eq!("userEmail".parse::<FormField>().unwrap(), FormField::Email);
        assert_eq!("fullName".parse::<FormField>().unwrap(), FormField::FullName);
        assert_eq!("city".parse::<FormField>().unwrap(), FormField::City);
        assert!(matches!(
            "userGender".parse::<FormField>(),
            Err(EntryFormError::UnknownField(_))
        ));
    }

    #[test]
    fn test_record_wire_format_uses_storage_keys() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["fullName"], "Asha Patel");
        assert_eq!(json["userEmail"], "asha@example.in");
        assert_eq!(json["userCity"], "surat");
        assert_eq!(json["userRating"], 4);
        assert_eq!(json["userFeedback"], "");
    }

    #[test]
    fn test_record_reads_aliases_and_ignores_unknown_keys() {
        let raw = r#"{"fullName":"A","email":"a@b.co","password":"p","address":"x",
                      "city":"Rampur","rating":2,"userGender":"f"}"#;
        let record: Record = serde_json::from_str(raw).unwrap();
        assert_eq!(record.city, City::Rampur);
        assert_eq!(record.rating, 2);
        assert_eq!(record.feedback, "");
    }

    #[test]
    fn test_draft_from_record_copies_password() {
        let record = sample_record();
        let draft = Draft::from(&record);
        assert_eq!(draft.password, "hunter2");
        assert_eq!(draft.city, "surat");
        assert_eq!(draft.to_record().unwrap(), record);
    }

    #[test]
    fn test_rating_is_not_a_text_field() {
        let mut draft = Draft::default();
        assert!(draft.set(FormField::Rating, "3").is_err());
        assert_eq!(draft.rating, 0);
        draft.set(FormField::Feedback, "great").unwrap();
        assert_eq!(draft.get(FormField::Feedback), "great");
    }
}
