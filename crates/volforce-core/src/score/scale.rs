//! Normalization of raw scores.
//!
//! Scores are typed in at whatever precision the player remembers
//! (`9890000`, `989000`, `989`, ...). Every representation is read as a
//! fraction of the maximum score of 10,000,000.

use crate::config::score::MAX_SCORE;

/// Scale a raw score down into `[0, 1]` by repeated division by 10.
pub fn frac_score(score: u32) -> f64 {
    let mut frac = f64::from(score);
    while frac > 1.0 {
        frac /= 10.0;
    }
    frac
}

/// Scale a raw score up to its full-precision representation
/// (the largest power-of-ten multiple not exceeding [`MAX_SCORE`]).
///
/// Zero stays zero, and values already above the maximum are returned as-is.
pub fn long_score(score: u32) -> u32 {
    let mut long = u64::from(score);
    if long > 0 {
        while long * 10 <= u64::from(MAX_SCORE) {
            long *= 10;
        }
    }
    long as u32
}

/// Strip trailing zeros from a raw score.
pub fn short_score(score: u32) -> u32 {
    let mut short = score;
    if short > 0 {
        while short % 10 == 0 {
            short /= 10;
        }
    }
    short
}
