//! The dice roll value type and its aggregation helpers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single roll of the dice: the face values being scored, in throw order.
///
/// Schooner is played with five dice, but nothing here depends on that —
/// the engine is length- and face-agnostic, so rolls from larger dice
/// (Sevens and Eights only pay when a d8 is in play) score the same way.
/// No range invariant is enforced on the faces beyond being positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// The face value each die landed on.
    pub faces: Vec<u32>,
}

impl Roll {
    /// A roll from the given face values.
    pub fn new(faces: Vec<u32>) -> Self {
        Self { faces }
    }

    /// Number of dice in the roll.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the roll contains no dice.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Sum of all face values.
    pub fn total(&self) -> u32 {
        self.faces.iter().sum()
    }

    /// Sum of the dice showing exactly the given face.
    pub fn sum_of_face(&self, face: u32) -> u32 {
        self.faces.iter().filter(|&&f| f == face).sum()
    }

    /// Occurrence multiset: face value → number of dice showing it.
    pub fn face_counts(&self) -> BTreeMap<u32, u32> {
        let mut counts = BTreeMap::new();
        for &face in &self.faces {
            *counts.entry(face).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct face values, sorted ascending.
    pub fn distinct_faces(&self) -> Vec<u32> {
        self.face_counts().into_keys().collect()
    }
}

impl From<Vec<u32>> for Roll {
    fn from(faces: Vec<u32>) -> Self {
        Self { faces }
    }
}

impl<const N: usize> From<[u32; N]> for Roll {
    fn from(faces: [u32; N]) -> Self {
        Self {
            faces: faces.to_vec(),
        }
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.faces.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
