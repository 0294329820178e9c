use thiserror::Error;

/// The structural defect found in an input that is not shaped like an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("expected {expected} characters, found {actual}")]
    Length { expected: usize, actual: usize },

    #[error("the first character must be a letter")]
    FirstCharacterNotLetter,

    #[error("every character after the first must be a decimal digit")]
    NonDigitCharacters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdError {
    /// The region letter is not one of the 22 household registration codes
    #[error("unknown region letter {0:?}")]
    UnknownRegion(char),

    #[error("malformed identification number: {0}")]
    MalformedInput(#[from] Malformed),

    #[error("invalid gender digit {0:?}, expected '1' or '2'")]
    InvalidGenderDigit(char),

    /// The last digit disagrees with the weighted sum of the first nine characters
    #[error("check digit {actual:?} does not match, expected {expected:?}")]
    ChecksumMismatch { expected: char, actual: char },
}
