//! Per-category scoring rules and top-category selection.
//!
//! [`score`] dispatches on the category identity and applies that
//! category's rule to the roll; every rule either returns the category's
//! payout or falls through to [`category::DEFAULT_SCORE`] when the roll
//! does not qualify. [`top_categories`] scans the whole registry and keeps
//! the best payers.

use std::cmp::Ordering;

use crate::category::{self, Category};
use crate::error::ScoreResult;
use crate::roll::Roll;

/// Score a roll against a single category.
///
/// Always `Ok` for the shipped registry: an error means a rule read a
/// parameter its category does not define, which is a wiring defect, not a
/// property of the roll.
pub fn score(cat: Category, roll: &Roll) -> ScoreResult<u32> {
    match cat {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes
        | Category::Sevens
        | Category::Eights => Ok(roll.sum_of_face(cat.matching_value()?)),
        Category::ThreeOfAKind => Ok(of_a_kind(roll, category::THREE_OF_A_KIND_COUNT)),
        Category::FourOfAKind => Ok(of_a_kind(roll, category::FOUR_OF_A_KIND_COUNT)),
        Category::FullHouse => full_house(cat, roll),
        Category::SmallStraight | Category::LargeStraight => straight(cat, roll),
        Category::AllDifferent => {
            if roll.distinct_faces().len() == roll.len() {
                cat.constant_score()
            } else {
                Ok(category::DEFAULT_SCORE)
            }
        }
        Category::Schooner => {
            if roll.distinct_faces().len() == category::SCHOONER_DISTINCT_FACES {
                cat.constant_score()
            } else {
                Ok(category::DEFAULT_SCORE)
            }
        }
        Category::Chance => Ok(roll.total()),
    }
}

/// The categories that pay the most for this roll, in registry order.
///
/// The running maximum starts at zero, so categories scoring zero
/// accumulate only until the first positive score appears. A roll on which
/// every category scores zero would return the full registry; no non-empty
/// roll can produce one, since Chance always pays the roll's total.
/// Any error from an inner [`score`] call aborts the scan unmodified.
pub fn top_categories(roll: &Roll) -> ScoreResult<Vec<Category>> {
    let mut top = Vec::new();
    let mut top_score = 0;
    for &cat in Category::all() {
        let current = score(cat, roll)?;
        match current.cmp(&top_score) {
            Ordering::Greater => {
                top.clear();
                top.push(cat);
                top_score = current;
            }
            Ordering::Equal => top.push(cat),
            Ordering::Less => {}
        }
    }
    Ok(top)
}

/// Sum of the whole roll when any face occurs at least `required` times.
fn of_a_kind(roll: &Roll, required: u32) -> u32 {
    if roll.face_counts().values().any(|&count| count >= required) {
        roll.total()
    } else {
        category::DEFAULT_SCORE
    }
}

/// A full house is exactly one triple and one pair.
fn full_house(cat: Category, roll: &Roll) -> ScoreResult<u32> {
    let counts = roll.face_counts();
    let (triple, pair) = category::FULL_HOUSE_GROUPS;
    // Two distinct faces alone is not enough: {4, 1} must not pay.
    if counts.len() == category::FULL_HOUSE_DISTINCT_FACES
        && counts.values().all(|&count| count == triple || count == pair)
    {
        cat.constant_score()
    } else {
        Ok(category::DEFAULT_SCORE)
    }
}

/// A straight is a run of consecutive values among the distinct faces.
fn straight(cat: Category, roll: &Roll) -> ScoreResult<u32> {
    let run_required = cat.matching_value()?;
    let faces = roll.distinct_faces();
    // Fewer distinct faces than the run is long can never qualify.
    if (faces.len() as u32) < run_required {
        return Ok(category::DEFAULT_SCORE);
    }
    // The run counter is never reset on a gap; it only has to reach the
    // required length at some point during the scan.
    let mut run = 1;
    for window in faces.windows(2) {
        if window[0] + 1 == window[1] {
            run += 1;
        }
        if run == run_required {
            return cat.constant_score();
        }
    }
    Ok(category::DEFAULT_SCORE)
}
