//! Yes/no answer parsing for the archive prompt.

use thiserror::Error;

/// Rejected prompt input. Recovered by asking again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Nothing but whitespace was entered.
    #[error("empty input")]
    EmptyInput,
    /// The answer starts with something other than `y` or `n`.
    #[error("must be yes or no")]
    NotYesOrNo,
}

/// Parses a yes/no answer.
///
/// Surrounding whitespace is trimmed and the input lowercased; only the first
/// character is inspected, so `"Yep"` and `"nope"` are accepted.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyInput`] for blank input and
/// [`ValidationError::NotYesOrNo`] when the first character is neither `y`
/// nor `n`.
///
/// # Example
///
/// ```
/// use tidyhub::review::parse_yes_no;
///
/// assert_eq!(parse_yes_no("Y"), Ok(true));
/// assert_eq!(parse_yes_no("  no"), Ok(false));
/// assert!(parse_yes_no("maybe").is_err());
/// ```
pub fn parse_yes_no(input: &str) -> Result<bool, ValidationError> {
    let normalised = input.trim().to_lowercase();
    match normalised.chars().next() {
        None => Err(ValidationError::EmptyInput),
        Some('y') => Ok(true),
        Some('n') => Ok(false),
        Some(_) => Err(ValidationError::NotYesOrNo),
    }
}

/// Validator form of [`parse_yes_no`] for prompt surfaces.
///
/// # Errors
///
/// Returns the same [`ValidationError`] as [`parse_yes_no`].
pub fn validate_yes_no(input: &str) -> Result<(), ValidationError> {
    parse_yes_no(input).map(|_| ())
}
