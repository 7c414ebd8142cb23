//! Error types for label parsing and merge decisions.
//!
//! Every variant is recoverable: a rejected merge leaves the board untouched
//! and the frontend shows the message to the user.

use crate::board::EntityId;
use thiserror::Error;

/// Failures turning text back into labels or compositions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// Text that names no known quark or antiquark.
    #[error("unknown constituent label: {0:?}")]
    Unknown(String),

    /// A composition with no constituents.
    #[error("composition is empty")]
    Empty,

    /// More constituents than any entity may hold.
    #[error("composition has {len} constituents; at most {max} allowed")]
    TooLong { len: usize, max: usize },
}

/// Reasons a merge is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// The merged composition would exceed the constituent cap.
    #[error("Cannot merge: resulting particle would exceed {max} constituents! ({total} requested)")]
    TooManyConstituents { total: usize, max: usize },

    /// Two lone quarks may not form another group while the board is full.
    #[error("Cannot merge: there are already {limit} particles on the board!")]
    PopulationLimitReached { limit: usize },

    /// The board holds no entity with this id.
    #[error("no entity with id {0}")]
    UnknownEntity(EntityId),

    /// An entity cannot merge with itself.
    #[error("cannot merge an entity with itself")]
    SameEntity,
}
