//! Allowed-country enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use biblio_core::AppError;

/// The fixed set of countries an author or publisher may declare.
///
/// Wire and database labels are uppercase; note that the United States
/// label contains a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "country")]
pub enum Country {
    #[serde(rename = "SPAIN")]
    #[sqlx(rename = "SPAIN")]
    Spain,
    #[serde(rename = "COLOMBIA")]
    #[sqlx(rename = "COLOMBIA")]
    Colombia,
    #[serde(rename = "ENGLAND")]
    #[sqlx(rename = "ENGLAND")]
    England,
    #[serde(rename = "RUSSIA")]
    #[sqlx(rename = "RUSSIA")]
    Russia,
    #[serde(rename = "UNITED STATES")]
    #[sqlx(rename = "UNITED STATES")]
    UnitedStates,
    #[serde(rename = "ARGENTINA")]
    #[sqlx(rename = "ARGENTINA")]
    Argentina,
    #[serde(rename = "CZECHOSLOVAKIA")]
    #[sqlx(rename = "CZECHOSLOVAKIA")]
    Czechoslovakia,
    #[serde(rename = "JAPAN")]
    #[sqlx(rename = "JAPAN")]
    Japan,
    #[serde(rename = "NIGERIA")]
    #[sqlx(rename = "NIGERIA")]
    Nigeria,
}

impl Country {
    /// Return the wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spain => "SPAIN",
            Self::Colombia => "COLOMBIA",
            Self::England => "ENGLAND",
            Self::Russia => "RUSSIA",
            Self::UnitedStates => "UNITED STATES",
            Self::Argentina => "ARGENTINA",
            Self::Czechoslovakia => "CZECHOSLOVAKIA",
            Self::Japan => "JAPAN",
            Self::Nigeria => "NIGERIA",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Country {
    type Err = AppError;

    /// Parse a country label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SPAIN" => Ok(Self::Spain),
            "COLOMBIA" => Ok(Self::Colombia),
            "ENGLAND" => Ok(Self::England),
            "RUSSIA" => Ok(Self::Russia),
            "UNITED STATES" => Ok(Self::UnitedStates),
            "ARGENTINA" => Ok(Self::Argentina),
            "CZECHOSLOVAKIA" => Ok(Self::Czechoslovakia),
            "JAPAN" => Ok(Self::Japan),
            "NIGERIA" => Ok(Self::Nigeria),
            _ => Err(AppError::validation(format!(
                "Country '{s}' is not in the allowed set"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(" spain ".parse::<Country>().unwrap(), Country::Spain);
        assert_eq!("Japan".parse::<Country>().unwrap(), Country::Japan);
        assert_eq!(
            "united states".parse::<Country>().unwrap(),
            Country::UnitedStates
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("ATLANTIS".parse::<Country>().is_err());
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&Country::UnitedStates).unwrap();
        assert_eq!(json, "\"UNITED STATES\"");
        let back: Country = serde_json::from_str("\"NIGERIA\"").unwrap();
        assert_eq!(back, Country::Nigeria);
    }
}
