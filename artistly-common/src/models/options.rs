//! Enumerated option sets offered by the directory and onboarding pickers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

// ========================================
// Locations
// ========================================

/// Cities offered by the directory location picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Mumbai,
    Delhi,
    Bangalore,
    Chennai,
    Kolkata,
    Hyderabad,
    Pune,
    Ahmedabad,
}

impl Location {
    pub const ALL: [Location; 8] = [
        Location::Mumbai,
        Location::Delhi,
        Location::Bangalore,
        Location::Chennai,
        Location::Kolkata,
        Location::Hyderabad,
        Location::Pune,
        Location::Ahmedabad,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Location::Mumbai => "Mumbai",
            Location::Delhi => "Delhi",
            Location::Bangalore => "Bangalore",
            Location::Chennai => "Chennai",
            Location::Kolkata => "Kolkata",
            Location::Hyderabad => "Hyderabad",
            Location::Pune => "Pune",
            Location::Ahmedabad => "Ahmedabad",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|location| location.label() == s)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown location: {}", s)))
    }
}

// ========================================
// Fee ranges
// ========================================

/// Pricing brackets, compared by exact label rather than numeric overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeRange {
    #[serde(rename = "₹5,000 - ₹15,000")]
    From5kTo15k,
    #[serde(rename = "₹15,000 - ₹30,000")]
    From15kTo30k,
    #[serde(rename = "₹30,000 - ₹50,000")]
    From30kTo50k,
    #[serde(rename = "₹50,000 - ₹1,00,000")]
    From50kTo1Lakh,
    #[serde(rename = "₹1,00,000+")]
    Above1Lakh,
}

impl FeeRange {
    pub const ALL: [FeeRange; 5] = [
        FeeRange::From5kTo15k,
        FeeRange::From15kTo30k,
        FeeRange::From30kTo50k,
        FeeRange::From50kTo1Lakh,
        FeeRange::Above1Lakh,
    ];

    /// Display label; also the value artists' fee labels are matched against
    pub fn label(&self) -> &'static str {
        match self {
            FeeRange::From5kTo15k => "₹5,000 - ₹15,000",
            FeeRange::From15kTo30k => "₹15,000 - ₹30,000",
            FeeRange::From30kTo50k => "₹30,000 - ₹50,000",
            FeeRange::From50kTo1Lakh => "₹50,000 - ₹1,00,000",
            FeeRange::Above1Lakh => "₹1,00,000+",
        }
    }
}

impl fmt::Display for FeeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FeeRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeeRange::ALL
            .into_iter()
            .find(|fee| fee.label() == s)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown fee range: {}", s)))
    }
}

// ========================================
// Languages
// ========================================

/// Languages an applicant can declare during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Hindi,
    English,
    Tamil,
    Telugu,
    Bengali,
    Marathi,
    Gujarati,
    Kannada,
    Malayalam,
    Punjabi,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::Hindi,
        Language::English,
        Language::Tamil,
        Language::Telugu,
        Language::Bengali,
        Language::Marathi,
        Language::Gujarati,
        Language::Kannada,
        Language::Malayalam,
        Language::Punjabi,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::English => "English",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Bengali => "Bengali",
            Language::Marathi => "Marathi",
            Language::Gujarati => "Gujarati",
            Language::Kannada => "Kannada",
            Language::Malayalam => "Malayalam",
            Language::Punjabi => "Punjabi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.label() == s)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown language: {}", s)))
    }
}
