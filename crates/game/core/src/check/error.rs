//! Check resolution errors.

use crate::error::{ErrorSeverity, RulesError};

/// Errors that make a check unresolvable.
///
/// Resolution validates everything before the first die is drawn, so an
/// error always means nothing was rolled.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckError {
    /// A die would have fewer than one face.
    #[error("cannot roll a die with {faces} faces")]
    InvalidDie { faces: i64 },

    /// A weapon or ability has no attribute pair to roll.
    #[error("'{item}' has no attribute pair to roll")]
    MissingAttributes { item: String },

    /// An ability is flagged as rolling but carries no roll parameters.
    #[error("'{item}' rolls but has no roll parameters")]
    MissingRollInfo { item: String },

    /// The item type never rolls (armor, classes, ...).
    #[error("'{item}' ({kind}) cannot be rolled")]
    NotRollable { item: String, kind: String },

    /// The actor owns no item with this name or id.
    #[error("item '{0}' not found")]
    ItemNotFound(String),
}

impl RulesError for CheckError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotRollable { .. } => ErrorSeverity::Recoverable,
            Self::InvalidDie { .. }
            | Self::MissingAttributes { .. }
            | Self::MissingRollInfo { .. }
            | Self::ItemNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDie { .. } => "CHECK_INVALID_DIE",
            Self::MissingAttributes { .. } => "CHECK_MISSING_ATTRIBUTES",
            Self::MissingRollInfo { .. } => "CHECK_MISSING_ROLL_INFO",
            Self::NotRollable { .. } => "CHECK_NOT_ROLLABLE",
            Self::ItemNotFound(_) => "CHECK_ITEM_NOT_FOUND",
        }
    }
}
