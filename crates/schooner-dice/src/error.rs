//! Error types for the scoring engine.

use crate::category::Category;

/// Errors that can occur when evaluating a category.
///
/// Both variants mean a rule read a parameter its category does not define.
/// That is a registry/rule wiring defect, not a property of the roll, and
/// the shipped registry never produces either at runtime.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// `matching_value` was read on a category with none configured.
    #[error("category {0} has no matching value")]
    MissingMatchingValue(Category),

    /// `constant_score` was read on a category with none configured.
    #[error("category {0} has no constant score")]
    MissingConstantScore(Category),
}

/// Convenience result type for scoring operations.
pub type ScoreResult<T> = Result<T, ScoreError>;
