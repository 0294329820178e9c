use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// The second character of an identification number.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum Gender {
    #[strum(to_string = "male", serialize = "1")]
    Male,
    #[strum(to_string = "female", serialize = "2")]
    Female,
}

impl Gender {
    pub fn from_digit(digit: char) -> Option<Gender> {
        match digit {
            '1' => Some(Gender::Male),
            '2' => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn digit(&self) -> char {
        match self {
            Gender::Male => '1',
            Gender::Female => '2',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "男性",
            Gender::Female => "女性",
        }
    }
}
