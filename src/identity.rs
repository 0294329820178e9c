use crate::checksum::PREFIX_LENGTH;
use crate::error::IdError;
use crate::gender::Gender;
use crate::region::{RegionEntry, RegionTable};
use crate::validation::validate_with;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A Taiwan national identification number known to pass every check.
///
/// Obtained either from a [crate::Generator] or by parsing, which runs the full
/// validation and fails with the error of the first failing check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityNumber {
    value: String,
    region: RegionEntry,
    gender: Gender,
}

impl IdentityNumber {
    /// `value` must already be uppercase and have passed validation.
    fn from_validated(regions: &RegionTable, value: String) -> Result<Self, IdError> {
        let mut chars = value.chars();
        let letter = chars.next().unwrap_or_default();
        let region = *regions
            .lookup(letter)
            .ok_or(IdError::UnknownRegion(letter))?;
        let gender_digit = chars.next().unwrap_or_default();
        let gender =
            Gender::from_digit(gender_digit).ok_or(IdError::InvalidGenderDigit(gender_digit))?;
        Ok(Self {
            value,
            region,
            gender,
        })
    }

    pub(crate) fn from_parts(value: String, region: RegionEntry, gender: Gender) -> Self {
        Self {
            value,
            region,
            gender,
        }
    }

    pub fn parse_with(regions: &RegionTable, input: &str) -> Result<Self, IdError> {
        let report = validate_with(regions, input);
        if let Some(err) = report.first_error() {
            return Err(err);
        }
        Self::from_validated(regions, input.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn region(&self) -> &RegionEntry {
        &self.region
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// The region letter, gender digit and body digits.
    pub fn prefix(&self) -> &str {
        // every character is ASCII
        &self.value[..PREFIX_LENGTH]
    }

    pub fn check_digit(&self) -> char {
        self.value[PREFIX_LENGTH..].chars().next().unwrap_or_default()
    }
}

impl Display for IdentityNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for IdentityNumber {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(RegionTable::standard(), s)
    }
}

impl TryFrom<String> for IdentityNumber {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IdentityNumber> for String {
    fn from(id: IdentityNumber) -> Self {
        id.value
    }
}

impl AsRef<str> for IdentityNumber {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
