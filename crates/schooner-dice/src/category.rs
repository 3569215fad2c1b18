//! Scoring categories and their configured parameters.
//!
//! Each category either counts a single die face (Ones through Eights),
//! requires a structural pattern over the roll (the of-a-kinds, Full House,
//! the straights, All Different, Schooner), or pays on the whole roll
//! (Chance). Parameters live in a constant side table; a category exposes
//! only the parameters its rule needs, and reading an absent one is a typed
//! error rather than a silent default.

use serde::{Deserialize, Serialize};

use crate::error::{ScoreError, ScoreResult};

/// Occurrences of one face required for three-of-a-kind.
pub const THREE_OF_A_KIND_COUNT: u32 = 3;

/// Occurrences of one face required for four-of-a-kind.
pub const FOUR_OF_A_KIND_COUNT: u32 = 4;

/// A full house is one face occurring three times and another twice.
pub const FULL_HOUSE_GROUPS: (u32, u32) = (3, 2);

/// Distinct faces in a full house: exactly one triple and one pair.
pub const FULL_HOUSE_DISTINCT_FACES: usize = 2;

/// Distinct faces in a schooner: every die shows the same face.
pub const SCHOONER_DISTINCT_FACES: usize = 1;

/// Score awarded when a roll does not satisfy a category.
pub const DEFAULT_SCORE: u32 = 0;

/// One scoring category of the Schooner dice game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Sum of dice showing 1.
    Ones,
    /// Sum of dice showing 2.
    Twos,
    /// Sum of dice showing 3.
    Threes,
    /// Sum of dice showing 4.
    Fours,
    /// Sum of dice showing 5.
    Fives,
    /// Sum of dice showing 6.
    Sixes,
    /// Sum of dice showing 7 (only pays with a d8 or larger in play).
    Sevens,
    /// Sum of dice showing 8 (only pays with a d8 or larger in play).
    Eights,
    /// Sum of the whole roll when a face occurs at least three times.
    ThreeOfAKind,
    /// Sum of the whole roll when a face occurs at least four times.
    FourOfAKind,
    /// One triple and one pair: 25 points.
    FullHouse,
    /// Four consecutive distinct faces: 30 points.
    SmallStraight,
    /// Every die showing a different face: 35 points.
    AllDifferent,
    /// Five consecutive distinct faces: 40 points.
    LargeStraight,
    /// Every die showing the same face: 50 points.
    Schooner,
    /// Sum of the whole roll, unconditionally.
    Chance,
}

/// Parameter table: `PARAMS[category.index()]` is
/// `(matching value, constant score)`. For the straights the matching value
/// is the required run length, not a die face.
const PARAMS: [(Option<u32>, Option<u32>); 16] = [
    (Some(1), None),     // Ones
    (Some(2), None),     // Twos
    (Some(3), None),     // Threes
    (Some(4), None),     // Fours
    (Some(5), None),     // Fives
    (Some(6), None),     // Sixes
    (Some(7), None),     // Sevens
    (Some(8), None),     // Eights
    (None, None),        // ThreeOfAKind
    (None, None),        // FourOfAKind
    (None, Some(25)),    // FullHouse
    (Some(4), Some(30)), // SmallStraight
    (None, Some(35)),    // AllDifferent
    (Some(5), Some(40)), // LargeStraight
    (None, Some(50)),    // Schooner
    (None, None),        // Chance
];

impl Category {
    /// All categories in registry order.
    ///
    /// This order is the tie-break order for top-category selection, so it
    /// is part of the public contract and must stay stable.
    pub fn all() -> &'static [Self] {
        &[
            Self::Ones,
            Self::Twos,
            Self::Threes,
            Self::Fours,
            Self::Fives,
            Self::Sixes,
            Self::Sevens,
            Self::Eights,
            Self::ThreeOfAKind,
            Self::FourOfAKind,
            Self::FullHouse,
            Self::SmallStraight,
            Self::AllDifferent,
            Self::LargeStraight,
            Self::Schooner,
            Self::Chance,
        ]
    }

    /// The face value counted for single-face categories, or the run length
    /// required for the straights.
    pub fn matching_value(self) -> ScoreResult<u32> {
        PARAMS[self.index()]
            .0
            .ok_or(ScoreError::MissingMatchingValue(self))
    }

    /// The fixed payout awarded when this category's condition is met.
    pub fn constant_score(self) -> ScoreResult<u32> {
        PARAMS[self.index()]
            .1
            .ok_or(ScoreError::MissingConstantScore(self))
    }

    /// Parse a category from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "ones" | "1s" => Some(Self::Ones),
            "twos" | "2s" => Some(Self::Twos),
            "threes" | "3s" => Some(Self::Threes),
            "fours" | "4s" => Some(Self::Fours),
            "fives" | "5s" => Some(Self::Fives),
            "sixes" | "6s" => Some(Self::Sixes),
            "sevens" | "7s" => Some(Self::Sevens),
            "eights" | "8s" => Some(Self::Eights),
            "three of a kind" | "3 of a kind" => Some(Self::ThreeOfAKind),
            "four of a kind" | "4 of a kind" => Some(Self::FourOfAKind),
            "full house" => Some(Self::FullHouse),
            "small straight" => Some(Self::SmallStraight),
            "all different" => Some(Self::AllDifferent),
            "large straight" => Some(Self::LargeStraight),
            "schooner" => Some(Self::Schooner),
            "chance" => Some(Self::Chance),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Ones => 0,
            Self::Twos => 1,
            Self::Threes => 2,
            Self::Fours => 3,
            Self::Fives => 4,
            Self::Sixes => 5,
            Self::Sevens => 6,
            Self::Eights => 7,
            Self::ThreeOfAKind => 8,
            Self::FourOfAKind => 9,
            Self::FullHouse => 10,
            Self::SmallStraight => 11,
            Self::AllDifferent => 12,
            Self::LargeStraight => 13,
            Self::Schooner => 14,
            Self::Chance => 15,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ones => write!(f, "Ones"),
            Self::Twos => write!(f, "Twos"),
            Self::Threes => write!(f, "Threes"),
            Self::Fours => write!(f, "Fours"),
            Self::Fives => write!(f, "Fives"),
            Self::Sixes => write!(f, "Sixes"),
            Self::Sevens => write!(f, "Sevens"),
            Self::Eights => write!(f, "Eights"),
            Self::ThreeOfAKind => write!(f, "Three of a Kind"),
            Self::FourOfAKind => write!(f, "Four of a Kind"),
            Self::FullHouse => write!(f, "Full House"),
            Self::SmallStraight => write!(f, "Small Straight"),
            Self::AllDifferent => write!(f, "All Different"),
            Self::LargeStraight => write!(f, "Large Straight"),
            Self::Schooner => write!(f, "Schooner"),
            Self::Chance => write!(f, "Chance"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_category_in_registry_order() {
        let all = Category::all();
        assert_eq!(all.len(), 16);
        assert_eq!(all[0], Category::Ones);
        assert_eq!(all[8], Category::ThreeOfAKind);
        assert_eq!(all[15], Category::Chance);
        // Small Straight sorts before All Different, which sorts before
        // Large Straight — the original registry order, not score order.
        assert_eq!(all[11], Category::SmallStraight);
        assert_eq!(all[12], Category::AllDifferent);
        assert_eq!(all[13], Category::LargeStraight);
    }

    #[test]
    fn single_face_categories_match_their_face() {
        let faces: Vec<u32> = Category::all()[..8]
            .iter()
            .map(|c| c.matching_value().unwrap())
            .collect();
        assert_eq!(faces, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn straights_require_their_run_length() {
        assert_eq!(Category::SmallStraight.matching_value().unwrap(), 4);
        assert_eq!(Category::LargeStraight.matching_value().unwrap(), 5);
    }

    #[test]
    fn constant_scores_match_the_payout_table() {
        assert_eq!(Category::FullHouse.constant_score().unwrap(), 25);
        assert_eq!(Category::SmallStraight.constant_score().unwrap(), 30);
        assert_eq!(Category::AllDifferent.constant_score().unwrap(), 35);
        assert_eq!(Category::LargeStraight.constant_score().unwrap(), 40);
        assert_eq!(Category::Schooner.constant_score().unwrap(), 50);
    }

    #[test]
    fn matching_value_fails_where_unconfigured() {
        for cat in [
            Category::ThreeOfAKind,
            Category::FourOfAKind,
            Category::FullHouse,
            Category::AllDifferent,
            Category::Schooner,
            Category::Chance,
        ] {
            assert!(matches!(
                cat.matching_value(),
                Err(ScoreError::MissingMatchingValue(c)) if c == cat
            ));
        }
    }

    #[test]
    fn constant_score_fails_where_unconfigured() {
        let mut unconfigured: Vec<Category> = Category::all()[..8].to_vec();
        unconfigured.extend([
            Category::ThreeOfAKind,
            Category::FourOfAKind,
            Category::Chance,
        ]);
        for cat in unconfigured {
            assert!(matches!(
                cat.constant_score(),
                Err(ScoreError::MissingConstantScore(c)) if c == cat
            ));
        }
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(Category::parse("ones"), Some(Category::Ones));
        assert_eq!(Category::parse("full_house"), Some(Category::FullHouse));
        assert_eq!(Category::parse("Full House"), Some(Category::FullHouse));
        assert_eq!(
            Category::parse("3 of a kind"),
            Some(Category::ThreeOfAKind)
        );
        assert_eq!(
            Category::parse("large-straight"),
            Some(Category::LargeStraight)
        );
        assert_eq!(Category::parse("yahtzee"), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for &cat in Category::all() {
            assert_eq!(Category::parse(&cat.to_string()), Some(cat));
        }
    }

    #[test]
    fn serde_wire_names_are_the_variant_names() {
        assert_eq!(
            serde_json::to_string(&Category::FullHouse).unwrap(),
            "\"FullHouse\""
        );
        let parsed: Category = serde_json::from_str("\"SmallStraight\"").unwrap();
        assert_eq!(parsed, Category::SmallStraight);
    }
}
