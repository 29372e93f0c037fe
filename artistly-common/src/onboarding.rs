//! Artist onboarding: form validation and application submission
//!
//! Every field is checked independently and every violation is reported, so
//! the form can show all of its errors at once.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::OnboardingConfig;
use crate::models::{CategoryId, FeeRange, Language};
use crate::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const BIO_MIN_CHARS: usize = 50;
pub const BIO_MAX_CHARS: usize = 500;

/// Acknowledgement shown once an application is accepted
pub const ACKNOWLEDGEMENT: &str =
    "We'll review your application and get back to you within 2-3 business days.";

/// Raw onboarding form as submitted by the applicant
///
/// Option fields hold the picker values as strings; [`validate`] turns them
/// into typed values or reports them as violations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingForm {
    pub name: String,
    pub bio: String,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub fee_range: String,
    pub location: String,
    pub profile_image: Option<String>,
}

/// Form field a violation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Bio,
    Categories,
    Languages,
    FeeRange,
    Location,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Name => "name",
            FormField::Bio => "bio",
            FormField::Categories => "categories",
            FormField::Languages => "languages",
            FormField::FeeRange => "fee_range",
            FormField::Location => "location",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: FormField,
    pub message: String,
}

/// Every violation found in one form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{} form field(s) failed validation", .violations.len())]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    fn push(&mut self, field: FormField, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has(&self, field: FormField) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    pub fn messages_for(&self, field: FormField) -> Vec<&str> {
        self.violations
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.message.as_str())
            .collect()
    }
}

/// A form that passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistApplication {
    pub name: String,
    pub bio: String,
    pub categories: Vec<CategoryId>,
    pub languages: Vec<Language>,
    pub fee_range: FeeRange,
    pub location: String,
    pub profile_image: Option<String>,
}

/// Check a form, collecting every violation
///
/// Location is trimmed before the emptiness check, so a whitespace-only
/// location is rejected rather than accepted as a one-character value.
pub fn validate(form: &OnboardingForm) -> Result<ArtistApplication, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if form.name.chars().count() < NAME_MIN_CHARS {
        errors.push(FormField::Name, "Name must be at least 2 characters");
    }

    let bio_chars = form.bio.chars().count();
    if bio_chars < BIO_MIN_CHARS {
        errors.push(FormField::Bio, "Bio must be at least 50 characters");
    } else if bio_chars > BIO_MAX_CHARS {
        errors.push(FormField::Bio, "Bio must be less than 500 characters");
    }

    let categories = parse_choices::<CategoryId>(
        &form.categories,
        FormField::Categories,
        "Please select at least one category",
        &mut errors,
    );
    let languages = parse_choices::<Language>(
        &form.languages,
        FormField::Languages,
        "Please select at least one language",
        &mut errors,
    );

    let fee_range = if form.fee_range.is_empty() {
        errors.push(FormField::FeeRange, "Please select a fee range");
        None
    } else {
        match form.fee_range.parse::<FeeRange>() {
            Ok(fee) => Some(fee),
            Err(_) => {
                errors.push(FormField::FeeRange, format!("Unknown fee range: {}", form.fee_range));
                None
            }
        }
    };

    let location = form.location.trim();
    if location.is_empty() {
        errors.push(FormField::Location, "Please enter your location");
    }

    match fee_range {
        Some(fee_range) if errors.is_empty() => Ok(ArtistApplication {
            name: form.name.clone(),
            bio: form.bio.clone(),
            categories,
            languages,
            fee_range,
            location: location.to_string(),
            profile_image: form.profile_image.clone().filter(|img| !img.is_empty()),
        }),
        _ => {
            debug!(violations = errors.violations.len(), "Onboarding form rejected");
            Err(errors)
        }
    }
}

/// Parse a multi-select field, reporting an empty selection or unknown values
fn parse_choices<T>(
    raw: &[String],
    field: FormField,
    empty_message: &str,
    errors: &mut ValidationErrors,
) -> Vec<T>
where
    T: std::str::FromStr<Err = Error> + PartialEq,
{
    if raw.is_empty() {
        errors.push(field, empty_message);
        return Vec::new();
    }

    let mut parsed = Vec::with_capacity(raw.len());
    for value in raw {
        match value.parse::<T>() {
            Ok(choice) if !parsed.contains(&choice) => parsed.push(choice),
            Ok(_) => {}
            Err(Error::InvalidInput(message)) => errors.push(field, message),
            Err(other) => errors.push(field, other.to_string()),
        }
    }
    parsed
}

/// Confirmation returned for an accepted application
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationReceipt {
    pub reference: Uuid,
    pub applicant: String,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}

/// Accepts onboarding applications
///
/// There is no backend to forward applications to; the desk waits out a
/// configurable delay in place of the real submission call, then logs the
/// application and hands back a receipt.
#[derive(Debug, Clone)]
pub struct OnboardingDesk {
    submission_delay: Duration,
}

impl OnboardingDesk {
    pub fn new(submission_delay: Duration) -> Self {
        Self { submission_delay }
    }

    pub fn from_config(config: &OnboardingConfig) -> Self {
        Self::new(config.submission_delay())
    }

    /// Validate and submit an application
    ///
    /// Invalid forms are rejected immediately, without the submission delay.
    pub async fn submit(&self, form: &OnboardingForm) -> Result<ApplicationReceipt, ValidationErrors> {
        let application = validate(form)?;

        if !self.submission_delay.is_zero() {
            tokio::time::sleep(self.submission_delay).await;
        }

        let receipt = ApplicationReceipt {
            reference: Uuid::new_v4(),
            applicant: application.name.clone(),
            submitted_at: Utc::now(),
            message: ACKNOWLEDGEMENT.to_string(),
        };

        info!(
            reference = %receipt.reference,
            applicant = %application.name,
            categories = ?application.categories,
            languages = ?application.languages,
            fee_range = %application.fee_range,
            location = %application.location,
            "Artist onboarding application submitted"
        );

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> OnboardingForm {
        OnboardingForm {
            name: "Asha Rao".to_string(),
            bio: "Playback singer performing Kannada and Hindi film songs at weddings.".to_string(),
            categories: vec!["singers".to_string()],
            languages: vec!["Kannada".to_string(), "Hindi".to_string()],
            fee_range: "₹15,000 - ₹30,000".to_string(),
            location: " Bangalore ".to_string(),
            profile_image: Some(String::new()),
        }
    }

    #[test]
    fn test_valid_form_is_typed() {
        let application = validate(&valid_form()).unwrap();
        assert_eq!(application.categories, vec![CategoryId::Singers]);
        assert_eq!(application.languages, vec![Language::Kannada, Language::Hindi]);
        assert_eq!(application.fee_range, FeeRange::From15kTo30k);
        assert_eq!(application.location, "Bangalore");
        assert_eq!(application.profile_image, None);
    }

    #[test]
    fn test_name_minimum() {
        let mut form = valid_form();
        form.name = "A".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.messages_for(FormField::Name), vec!["Name must be at least 2 characters"]);

        form.name = "Al".to_string();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_unknown_choices_reported_per_field() {
        let mut form = valid_form();
        form.categories = vec!["singers".to_string(), "jugglers".to_string()];
        form.languages = vec!["Klingon".to_string()];
        form.fee_range = "₹25,000 - ₹40,000".to_string();

        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.messages_for(FormField::Categories), vec!["Unknown category: jugglers"]);
        assert_eq!(errors.messages_for(FormField::Languages), vec!["Unknown language: Klingon"]);
        assert_eq!(
            errors.messages_for(FormField::FeeRange),
            vec!["Unknown fee range: ₹25,000 - ₹40,000"]
        );
    }

    #[test]
    fn test_duplicate_choices_collapse() {
        let mut form = valid_form();
        form.categories = vec!["djs".to_string(), "djs".to_string()];
        assert_eq!(validate(&form).unwrap().categories, vec![CategoryId::Djs]);
    }

    #[test]
    fn test_whitespace_location_rejected() {
        let mut form = valid_form();
        form.location = "   ".to_string();
        let errors = validate(&form).unwrap_err();
        assert!(errors.has(FormField::Location));
        assert_eq!(errors.violations.len(), 1);
    }

    #[tokio::test]
    async fn test_desk_issues_receipt() {
        let desk = OnboardingDesk::new(Duration::ZERO);
        let receipt = desk.submit(&valid_form()).await.unwrap();
        assert_eq!(receipt.applicant, "Asha Rao");
        assert_eq!(receipt.message, ACKNOWLEDGEMENT);
    }

    #[tokio::test]
    async fn test_invalid_form_skips_delay() {
        let desk = OnboardingDesk::new(Duration::from_secs(30));
        let started = std::time::Instant::now();
        let errors = desk.submit(&OnboardingForm::default()).await.unwrap_err();
        assert_eq!(errors.violations.len(), 6);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
