// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the operator boundary.
//!
//! The engine reports failed preconditions as `false` returns; this
//! layer maps them into typed, loggable rejections so the UI can tell
//! the operator what was refused and why.

use raid_loot::CoreError;
use raid_loot_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from engine errors and represent the operator
/// contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No live session with the given id.
    #[error("Unknown session '{session_id}'")]
    SessionNotFound {
        /// The unknown session id.
        session_id: String,
    },

    /// The operator's role does not permit this action.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },

    /// The engine refused the operation as a no-op (wrong state,
    /// double award, unknown drop).
    #[error("Precondition failed: {action} was refused by the session")]
    PreconditionFailed {
        /// The action that was refused.
        action: String,
    },

    /// The request violated an engine construction rule.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] CoreError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::InvalidRequest(CoreError::from(err))
    }
}
