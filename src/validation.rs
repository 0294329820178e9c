use crate::checksum::{compute_check_digit, ID_LENGTH, PREFIX_LENGTH};
use crate::error::{IdError, Malformed};
use crate::gender::Gender;
use crate::region::RegionTable;
use crate::stats;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use strum::IntoStaticStr;

const PASSED_MARK: &str = "✅";
const FAILED_MARK: &str = "❎";

/// The individual checks, in the order they are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Check {
    Length,
    FirstCharacter,
    TrailingDigits,
    Region,
    Gender,
    Checksum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub check: Check,
    pub passed: bool,
    pub message: String,

    /// Set when the check failed
    #[serde(skip)]
    pub error: Option<IdError>,
}

impl CheckResult {
    fn pass(check: Check, message: String) -> Self {
        Self {
            check,
            passed: true,
            message,
            error: None,
        }
    }

    fn fail(check: Check, error: IdError, message: String) -> Self {
        Self {
            check,
            passed: false,
            message,
            error: Some(error),
        }
    }
}

impl Display for CheckResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mark = if self.passed { PASSED_MARK } else { FAILED_MARK };
        write!(f, "{}{}", mark, self.message)
    }
}

/// Outcome of validating one input. `checks` preserves evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub checks: Vec<CheckResult>,
}

impl ValidationReport {
    fn new() -> Self {
        Self {
            valid: true,
            checks: vec![],
        }
    }

    fn push(&mut self, result: CheckResult) {
        self.valid &= result.passed;
        self.checks.push(result);
    }

    /// The error of the first failed check, if any.
    pub fn first_error(&self) -> Option<IdError> {
        self.checks.iter().find_map(|result| result.error)
    }

    pub fn first_failed_check(&self) -> Option<Check> {
        self.checks
            .iter()
            .find(|result| !result.passed)
            .map(|result| result.check)
    }

    /// The one-line verdict shown above the itemized checks.
    pub fn verdict(&self) -> &'static str {
        if self.valid {
            "✅ 驗證通過"
        } else {
            "❎ 驗證失敗"
        }
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.verdict())?;
        for result in &self.checks {
            write!(f, "\n{}", result)?;
        }
        Ok(())
    }
}

/// Validates `input` against the standard region table. The input is
/// uppercased first, so region letters may be given in either case.
pub fn validate(input: &str) -> ValidationReport {
    validate_with(RegionTable::standard(), input)
}

pub fn validate_with(regions: &RegionTable, input: &str) -> ValidationReport {
    let chars: Vec<char> = input.to_uppercase().chars().collect();
    let mut report = ValidationReport::new();

    if chars.len() != ID_LENGTH {
        report.push(CheckResult::fail(
            Check::Length,
            Malformed::Length {
                expected: ID_LENGTH,
                actual: chars.len(),
            }
            .into(),
            "長度必須為10個字元".to_owned(),
        ));
    }

    if let Some((first, rest)) = chars.split_first() {
        if !first.is_alphabetic() {
            report.push(CheckResult::fail(
                Check::FirstCharacter,
                Malformed::FirstCharacterNotLetter.into(),
                "第一個字元必須是英文字母".to_owned(),
            ));
        }
        if rest.is_empty() || !rest.iter().all(char::is_ascii_digit) {
            report.push(CheckResult::fail(
                Check::TrailingDigits,
                Malformed::NonDigitCharacters.into(),
                "第2-10個字元必須是數字".to_owned(),
            ));
        }
    }

    // Everything below indexes by position, which is only safe once the
    // structural checks passed.
    if report.valid {
        check_contents(regions, &chars, &mut report);
    }

    stats::record_validation(&report);
    log::debug!(
        "validated identification number: valid={} checks={}",
        report.valid,
        report.checks.len()
    );
    report
}

fn check_contents(regions: &RegionTable, chars: &[char], report: &mut ValidationReport) {
    let letter = chars[0];
    match regions.lookup(letter) {
        Some(region) => report.push(CheckResult::pass(
            Check::Region,
            format!("地區: {}", region.name),
        )),
        None => report.push(CheckResult::fail(
            Check::Region,
            IdError::UnknownRegion(letter),
            "無效的地區代碼".to_owned(),
        )),
    }

    let gender_digit = chars[1];
    match Gender::from_digit(gender_digit) {
        Some(gender) => report.push(CheckResult::pass(
            Check::Gender,
            format!("性別: {}", gender.label()),
        )),
        None => report.push(CheckResult::fail(
            Check::Gender,
            IdError::InvalidGenderDigit(gender_digit),
            "無效的性別代碼".to_owned(),
        )),
    }

    if !report.valid {
        return;
    }

    let prefix: String = chars[..PREFIX_LENGTH].iter().collect();
    let actual = chars[PREFIX_LENGTH];
    match compute_check_digit(regions, &prefix) {
        Ok(expected) if expected == actual => {
            report.push(CheckResult::pass(Check::Checksum, "驗證碼正確".to_owned()))
        }
        Ok(expected) => report.push(CheckResult::fail(
            Check::Checksum,
            IdError::ChecksumMismatch { expected, actual },
            format!("驗證碼錯誤 (正確應為: {})", expected),
        )),
        Err(err) => report.push(CheckResult::fail(
            Check::Checksum,
            err,
            "驗證碼錯誤".to_owned(),
        )),
    }
}
