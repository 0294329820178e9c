use crate::error::{IdError, Malformed};
use crate::region::RegionTable;

/// Number of characters in a full identification number.
pub const ID_LENGTH: usize = 10;

/// Number of characters the check digit is computed from.
pub const PREFIX_LENGTH: usize = ID_LENGTH - 1;

// Applied to the two digits of the region code followed by the gender digit
// and the seven body digits.
const WEIGHTS: &[u32; 10] = &[1, 9, 8, 7, 6, 5, 4, 3, 2, 1];

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// Boolean check of a full identification number: length, region letter and
/// check digit. The region letter may be lowercase.
pub struct TaiwanIdChecksum;

impl Validator for TaiwanIdChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let normalized = candidate.to_uppercase();
        if normalized.chars().count() != ID_LENGTH {
            return false;
        }
        let mut prefix = normalized;
        let actual = match prefix.pop() {
            Some(c) => c,
            None => return false,
        };

        match compute_check_digit(RegionTable::standard(), &prefix) {
            Ok(expected) => expected == actual,
            Err(_) => false,
        }
    }
}

/// Computes the check digit of a 9 character prefix (region letter, gender
/// digit and seven body digits) against the standard region table.
pub fn calculate_check_digit(prefix: &str) -> Result<char, IdError> {
    compute_check_digit(RegionTable::standard(), prefix)
}

pub fn compute_check_digit(regions: &RegionTable, prefix: &str) -> Result<char, IdError> {
    let actual = prefix.chars().count();
    if actual != PREFIX_LENGTH {
        return Err(Malformed::Length {
            expected: PREFIX_LENGTH,
            actual,
        }
        .into());
    }

    let mut chars = prefix.chars();
    let letter = chars.next().ok_or(Malformed::Length {
        expected: PREFIX_LENGTH,
        actual,
    })?;
    let region = regions
        .lookup(letter)
        .ok_or(IdError::UnknownRegion(letter))?;

    let mut sum = 0;
    let digits = region
        .code_digits()
        .into_iter()
        .map(Some)
        .chain(chars.map(|c| c.to_digit(10)));
    for (digit, weight) in digits.zip(WEIGHTS) {
        let digit = digit.ok_or(Malformed::NonDigitCharacters)?;
        sum += digit * weight;
    }

    Ok(digit_to_char((10 - (sum % 10)) % 10))
}

#[inline]
fn digit_to_char(digit: u32) -> char {
    (b'0' + digit as u8) as char
}
