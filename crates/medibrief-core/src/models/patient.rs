use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::attachment::{self, UploadedFile};
use crate::error::CoreError;

/// Everything the intake form collects about a patient.
///
/// Every field is optional from the form's point of view; missing values are
/// rendered as "Not provided" when the prompt is assembled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PatientRecord {
    // Details
    pub name: String,
    pub age: Option<u32>,
    pub gender: Gender,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,

    // History
    pub medical_history: String,
    pub family_medical_history: String,
    pub current_medications: String,
    pub allergies: String,

    // Symptoms
    pub symptoms: SymptomSet,
    pub symptom_start_date: Option<jiff::civil::Date>,
    #[ts(type = "number | null")]
    pub symptom_intensity: Option<SymptomIntensity>,

    // Uploads
    pub files: Vec<UploadedFile>,

    // Lifestyle
    pub lifestyle: Lifestyle,
}

impl PatientRecord {
    /// Re-check the form rules on a record that did not come through the
    /// form, e.g. one deserialized from a file.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = SymptomSet::default();
        for label in self.symptoms.iter() {
            seen.insert(label)?;
        }

        if self.files.len() > attachment::MAX_ATTACHMENTS {
            return Err(CoreError::TooManyFiles(attachment::MAX_ATTACHMENTS));
        }
        for file in &self.files {
            file.validate()?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl Gender {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Gender::Male => Some("Male"),
            Gender::Female => Some("Female"),
            Gender::Other => Some("Other"),
            Gender::Unset => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl StressLevel {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            StressLevel::Low => Some("Low"),
            StressLevel::Moderate => Some("Moderate"),
            StressLevel::High => Some("High"),
            StressLevel::Unset => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Lifestyle {
    pub dietary_habits: String,
    pub exercise_frequency: String,
    pub sleep_patterns: String,
    pub stress_level: StressLevel,
    pub alcohol_and_tobacco_use: String,
}

/// Symptom intensity on the form's 1–10 slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SymptomIntensity(u8);

impl SymptomIntensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidIntensity(value))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SymptomIntensity {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SymptomIntensity> for u8 {
    fn from(value: SymptomIntensity) -> Self {
        value.0
    }
}

impl fmt::Display for SymptomIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Symptom labels in the order they were added.
///
/// Labels are unique ignoring case: adding "Fever" after "fever" fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct SymptomSet(Vec<String>);

impl SymptomSet {
    pub fn insert(&mut self, label: &str) -> Result<(), CoreError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(CoreError::EmptySymptom);
        }
        if self.contains(label) {
            return Err(CoreError::DuplicateSymptom(label.to_string()));
        }
        self.0.push(label.to_string());
        Ok(())
    }

    /// Remove a label, ignoring case. Returns whether anything was removed.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.0.len();
        let needle = label.trim().to_lowercase();
        self.0.retain(|s| s.to_lowercase() != needle);
        self.0.len() != before
    }

    pub fn contains(&self, label: &str) -> bool {
        let needle = label.trim().to_lowercase();
        self.0.iter().any(|s| s.to_lowercase() == needle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for SymptomSet {
    type Error = CoreError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        let mut set = SymptomSet::default();
        for label in &labels {
            set.insert(label)?;
        }
        Ok(set)
    }
}
