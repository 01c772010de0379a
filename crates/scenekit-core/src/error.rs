//! Error handling for SceneKit
//!
//! The editor core degrades most failures to logged no-ops so that a stray
//! UI event can never leave the entity tables half-mutated. The variants
//! below cover the cases that do surface to callers as values.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Editor error type
///
/// Represents failures raised by entity construction, lookup, and the
/// value-parsing helpers at the UI boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// Operation referenced an id that is in neither entity table
    #[error("no entity with id \"{id}\" in the scene")]
    MissingEntity {
        /// The id that could not be resolved.
        id: String,
    },

    /// Primitive construction was invoked with an unusable parameter list
    #[error("cannot construct {prim_type}: {reason}")]
    InvalidConstruction {
        /// Label of the primitive type under construction.
        prim_type: String,
        /// Why the parameter list was rejected.
        reason: String,
    },

    /// A color literal did not parse as `#RRGGBB`
    #[error("invalid color literal \"{literal}\"")]
    InvalidColor {
        /// The rejected literal.
        literal: String,
    },
}

/// Result type using EditorError
pub type Result<T> = std::result::Result<T, EditorError>;
