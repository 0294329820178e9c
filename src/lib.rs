// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod error;
mod gender;
mod generator;
mod identity;
mod region;
mod stats;
mod validation;

// This is the public API of the tw-id core library
pub use checksum::{
    calculate_check_digit, compute_check_digit, TaiwanIdChecksum, Validator, ID_LENGTH,
    PREFIX_LENGTH,
};
pub use error::{IdError, Malformed};
pub use gender::Gender;
pub use generator::{generate, Generator};
pub use identity::IdentityNumber;
pub use region::{region_name, RegionEntry, RegionTable};
pub use validation::{validate, validate_with, Check, CheckResult, ValidationReport};
