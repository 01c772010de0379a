//! Input context threaded into editor operations.
//!
//! The editor never reads ambient keyboard or mode state. Callers capture a
//! [`InputModifiers`] snapshot per event and pass the active
//! [`InteractionMode`] alongside it, so every operation is a pure function
//! of its arguments and the entity tables.

use serde::{Deserialize, Serialize};

/// Keyboard modifier snapshot at the time of an input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputModifiers {
    /// Shift key held (multi-select gesture).
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl InputModifiers {
    /// Snapshot with no modifier held.
    pub fn none() -> Self {
        Self::default()
    }

    /// Snapshot with only shift held.
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// Which transform component the shared X/Y/Z fields currently edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Translation,
    Rotation,
    Scale,
}
