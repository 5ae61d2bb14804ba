//! The fixed alphabet accepted in usernames and passwords.
//!
//! Four disjoint classes; [`ALL`] is their concatenation in class order.

/// Lowercase letters.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Uppercase letters.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits.
pub const DIGITS: &[u8] = b"0123456789";

/// The five special characters the file share accepts.
pub const SPECIAL: &[u8] = b"!-.&*";

/// Every allowed character: lowercase, uppercase, digits, special.
pub const ALL: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!-.&*";

/// Whether `c` may appear in a username or password at all.
pub fn is_allowed(c: char) -> bool {
    c.is_ascii() && ALL.contains(&(c as u8))
}

/// Whether `c` is one of the allowed special characters.
pub fn is_special(c: char) -> bool {
    c.is_ascii() && SPECIAL.contains(&(c as u8))
}
