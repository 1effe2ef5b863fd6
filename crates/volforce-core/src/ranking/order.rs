use std::cmp::Reverse;

use crate::config::volforce::TOP_PLAYS;
use crate::play::Play;

/// Sort key of a play: force, level, and full-precision score descending,
/// then case-folded name ascending.
///
/// Names compare by Unicode code point, so a name mixing astral characters
/// with BMP characters above U+E000 may order differently than under a
/// UTF-16 code unit comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    force: Reverse<u32>,
    level: Reverse<u32>,
    long_score: Reverse<u32>,
    name: String,
}

impl RankKey {
    pub fn of(play: &Play) -> Self {
        Self {
            force: Reverse(play.force()),
            level: Reverse(play.level()),
            long_score: Reverse(play.long_score()),
            name: play.name().to_lowercase(),
        }
    }
}

/// Plays in ranking order.
///
/// The sort is stable, so plays with equal keys keep their stored order.
pub fn sorted_plays(plays: &[Play]) -> Vec<Play> {
    let mut sorted = plays.to_vec();
    sorted.sort_by_cached_key(RankKey::of);
    sorted
}

/// Borrowed plays in ranking order.
pub fn ranked(plays: &[Play]) -> Vec<&Play> {
    let mut ranked: Vec<&Play> = plays.iter().collect();
    ranked.sort_by_cached_key(|play| RankKey::of(play));
    ranked
}

/// Whether the stored order already is the ranking order.
pub fn is_sorted(plays: &[Play]) -> bool {
    plays
        .windows(2)
        .all(|pair| RankKey::of(&pair[0]) <= RankKey::of(&pair[1]))
}

/// Zero-based ranking position of each play, indexed by stored position.
pub fn positions(plays: &[Play]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..plays.len()).collect();
    order.sort_by_cached_key(|&index| RankKey::of(&plays[index]));

    let mut positions = vec![0; plays.len()];
    for (position, index) in order.into_iter().enumerate() {
        positions[index] = position;
    }
    positions
}

/// Whether a ranking position counts toward the aggregate.
pub fn is_counted(position: usize) -> bool {
    position < TOP_PLAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::PlayFields;
    use crate::score::Clear;

    fn play(name: &str, level: u32, score: u32) -> Play {
        Play::new(
            PlayFields::new()
                .name(name)
                .level(level)
                .score(score)
                .clear(Clear::Complete),
        )
    }

    fn names(plays: &[Play]) -> Vec<&str> {
        plays.iter().map(Play::name).collect()
    }

    #[test]
    fn test_sorted_by_force_descending() {
        let plays = vec![
            play("low", 17, 9_000_000),
            play("high", 20, 9_950_000),
            play("mid", 19, 9_800_000),
        ];

        assert_eq!(names(&sorted_plays(&plays)), ["high", "mid", "low"]);
    }

    #[test]
    fn test_force_tie_broken_by_level() {
        // Both score zero force, so level decides.
        let plays = vec![play("a", 17, 0), play("b", 19, 0)];
        assert_eq!(names(&sorted_plays(&plays)), ["b", "a"]);
    }

    #[test]
    fn test_level_tie_broken_by_long_score() {
        // 990 and 9_905_000 give the same force at level 1; long score decides.
        let a = play("a", 1, 990);
        let b = play("b", 1, 9_905_000);
        assert_eq!(a.force(), b.force());

        assert_eq!(names(&sorted_plays(&[a, b])), ["b", "a"]);
    }

    #[test]
    fn test_name_tie_is_case_insensitive() {
        let plays = vec![play("beta", 17, 0), play("Alpha", 17, 0), play("alpha2", 17, 0)];
        assert_eq!(names(&sorted_plays(&plays)), ["Alpha", "alpha2", "beta"]);
    }

    #[test]
    fn test_full_tie_keeps_stored_order() {
        let first = play("same", 17, 0);
        let second = play("SAME", 17, 0);
        let sorted = sorted_plays(&[first.clone(), second.clone()]);

        assert_eq!(sorted[0].id(), first.id());
        assert_eq!(sorted[1].id(), second.id());
    }

    #[test]
    fn test_ranked_matches_sorted_plays() {
        let plays = vec![play("a", 17, 0), play("b", 20, 9_900_000), play("c", 18, 9_000_000)];
        let ranked_ids: Vec<_> = ranked(&plays).iter().map(|p| p.id()).collect();
        let sorted_ids: Vec<_> = sorted_plays(&plays).iter().map(Play::id).collect();
        assert_eq!(ranked_ids, sorted_ids);
    }

    #[test]
    fn test_positions() {
        let plays = vec![play("a", 17, 0), play("b", 20, 9_900_000), play("c", 18, 9_000_000)];
        assert_eq!(positions(&plays), [2, 0, 1]);
    }

    #[test]
    fn test_is_sorted() {
        let plays = vec![play("a", 17, 0), play("b", 20, 9_900_000)];
        assert!(!is_sorted(&plays));
        assert!(is_sorted(&sorted_plays(&plays)));
        assert!(is_sorted(&[]));
    }

    #[test]
    fn test_is_counted() {
        assert!(is_counted(0));
        assert!(is_counted(49));
        assert!(!is_counted(50));
    }
}
