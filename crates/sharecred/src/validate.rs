//! Username and password validation.
//!
//! Pure functions over the charset in [`crate::charset`]; each rejection
//! carries the specific reason so prompts can tell the operator what to fix.

use crate::charset;
use snafu::Snafu;

/// Minimum username length.
pub const USERNAME_MIN_LEN: usize = 3;
/// Maximum username length.
pub const USERNAME_MAX_LEN: usize = 20;
/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;
/// Maximum password length.
pub const PASSWORD_MAX_LEN: usize = 20;

/// Why a candidate username or password was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum Error {
    /// Fewer characters than the minimum.
    #[snafu(display("{len} characters is too short, at least {min} required"))]
    TooShort { len: usize, min: usize },

    /// More characters than the maximum.
    #[snafu(display("{len} characters is too long, at most {max} allowed"))]
    TooLong { len: usize, max: usize },

    /// A character outside the allowed alphabet.
    #[snafu(display("character '{ch}' is not allowed (use a-z, A-Z, 0-9, !, -, ., &, *)"))]
    DisallowedCharacter { ch: char },

    /// No lowercase letter present.
    #[snafu(display("at least one lowercase letter is required"))]
    MissingLowercase,

    /// No uppercase letter present.
    #[snafu(display("at least one uppercase letter is required"))]
    MissingUppercase,

    /// No special character present.
    #[snafu(display("at least one special character is required (!, -, ., &, *)"))]
    MissingSpecial,
}

fn check_length_and_alphabet(s: &str, min: usize, max: usize) -> Result<(), Error> {
    let len = s.chars().count();
    snafu::ensure!(len >= min, TooShortSnafu { len, min });
    snafu::ensure!(len <= max, TooLongSnafu { len, max });

    if let Some(ch) = s.chars().find(|&c| !charset::is_allowed(c)) {
        return DisallowedCharacterSnafu { ch }.fail();
    }
    Ok(())
}

/// Check a candidate username: 3-20 allowed characters, no class requirements.
pub fn check_username(s: &str) -> Result<(), Error> {
    check_length_and_alphabet(s, USERNAME_MIN_LEN, USERNAME_MAX_LEN)
}

/// Check a candidate password: 8-20 allowed characters with at least one
/// lowercase letter, one uppercase letter and one special character.
pub fn check_password(s: &str) -> Result<(), Error> {
    check_length_and_alphabet(s, PASSWORD_MIN_LEN, PASSWORD_MAX_LEN)?;

    snafu::ensure!(s.chars().any(|c| c.is_ascii_lowercase()), MissingLowercaseSnafu);
    snafu::ensure!(s.chars().any(|c| c.is_ascii_uppercase()), MissingUppercaseSnafu);
    snafu::ensure!(s.chars().any(charset::is_special), MissingSpecialSnafu);
    Ok(())
}

/// True iff `s` would be accepted as a username.
pub fn is_valid_username(s: &str) -> bool {
    check_username(s).is_ok()
}

/// True iff `s` would be accepted as a password.
pub fn is_valid_password(s: &str) -> bool {
    check_password(s).is_ok()
}
