//! Password suggestion generator.

use crate::charset;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Length of a generated suggestion.
pub const SUGGESTION_LEN: usize = 10;

/// Generate a random 10-character password that always satisfies
/// [`crate::validate::check_password`].
///
/// One character is drawn from each of the lowercase, uppercase and special
/// classes, the remaining slots are drawn from the full alphabet, and the
/// whole sequence is shuffled so the guaranteed characters end up in
/// unpredictable positions.
///
/// Randomness comes from the operating system CSPRNG. If the entropy source
/// fails the process aborts; a suggestion is never produced from a weaker
/// generator.
pub fn generate_suggestion() -> String {
    let mut rng = OsRng;
    let mut chars = Vec::with_capacity(SUGGESTION_LEN);

    // One pick per required class, so the class constraints always hold.
    chars.push(charset::LOWERCASE[rng.gen_range(0..charset::LOWERCASE.len())]);
    chars.push(charset::UPPERCASE[rng.gen_range(0..charset::UPPERCASE.len())]);
    chars.push(charset::SPECIAL[rng.gen_range(0..charset::SPECIAL.len())]);

    while chars.len() < SUGGESTION_LEN {
        chars.push(charset::ALL[rng.gen_range(0..charset::ALL.len())]);
    }

    chars.shuffle(&mut rng);

    chars.into_iter().map(char::from).collect()
}
