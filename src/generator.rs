use crate::checksum::{compute_check_digit, ID_LENGTH};
use crate::error::IdError;
use crate::gender::Gender;
use crate::identity::IdentityNumber;
use crate::region::RegionTable;
use crate::stats;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Number of random digits between the gender digit and the check digit.
const BODY_LENGTH: usize = 7;

/// Produces random, valid identification numbers for a chosen region and
/// gender. The random source is owned by the generator, so a seeded RNG gives
/// a reproducible sequence.
pub struct Generator<'a, R> {
    regions: &'a RegionTable,
    rng: R,
}

impl<'a, R: Rng> Generator<'a, R> {
    pub fn new(regions: &'a RegionTable, rng: R) -> Self {
        Self { regions, rng }
    }

    /// Fails only when `region` is not an issued region letter. Lowercase
    /// letters are accepted.
    pub fn generate(&mut self, region: char, gender: Gender) -> Result<IdentityNumber, IdError> {
        let entry = *self
            .regions
            .lookup(region.to_ascii_uppercase())
            .ok_or(IdError::UnknownRegion(region))?;

        let mut value = String::with_capacity(ID_LENGTH);
        value.push(entry.letter);
        value.push(gender.digit());
        for _ in 0..BODY_LENGTH {
            value.push(char::from(b'0' + self.rng.gen_range(0..10u8)));
        }

        let check_digit = compute_check_digit(self.regions, &value)?;
        value.push(check_digit);

        stats::record_generated(entry.letter);
        log::debug!("generated identification number for region {}", entry);
        Ok(IdentityNumber::from_parts(value, entry, gender))
    }
}

impl Generator<'static, ThreadRng> {
    /// A generator over the standard region table, drawing from the thread
    /// local RNG.
    pub fn standard() -> Self {
        Self::new(RegionTable::standard(), rand::thread_rng())
    }
}

/// Generates one identification number with the standard region table.
pub fn generate(region: char, gender: Gender) -> Result<IdentityNumber, IdError> {
    Generator::standard().generate(region, gender)
}
