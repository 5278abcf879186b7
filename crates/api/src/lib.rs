// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Operator boundary layer for the raid loot coordination tool.
//!
//! The UI surface talks to the engine exclusively through this crate:
//! it owns the live sessions, the shared default configuration, the
//! inventory ledger, and the authorization check separating the loot
//! master from assistant operators. Every mutating call is logged.

mod error;
mod handlers;
mod ledger;
mod request_response;

#[cfg(test)]
mod tests;

use raid_loot_audit::Actor;

pub use error::ApiError;
pub use handlers::SessionManager;
pub use ledger::MemoryLedger;
pub use request_response::{
    CandidateView, ContainerView, GuaranteedView, RuleScoreView, SessionView,
};

/// Operator roles for authorization.
///
/// Roles apply to operators driving the tool, never to roster
/// participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorRole {
    /// The loot master: may configure, evaluate, and award.
    Master,
    /// An assistant: may configure quantities and evaluate, but never
    /// award.
    Assistant,
}

impl OperatorRole {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Assistant => "assistant",
        }
    }
}

/// An operator with an associated role.
///
/// This represents the person pressing the buttons; the engine records
/// their identity on every award event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    /// The unique identifier for this operator.
    pub id: String,
    /// The role assigned to this operator.
    pub role: OperatorRole,
}

impl Operator {
    /// Creates a new operator.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this operator
    /// * `role` - The role assigned to this operator
    #[must_use]
    pub const fn new(id: String, role: OperatorRole) -> Self {
        Self { id, role }
    }

    /// Converts this operator into an audit Actor.
    ///
    /// Used when recording award events to attribute decisions to the
    /// operator.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.role.as_str().to_string())
    }
}

/// Authorizes an award-capable action.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` if the operator is not the loot
/// master.
pub(crate) fn authorize_award(operator: &Operator, action: &str) -> Result<(), ApiError> {
    if operator.role == OperatorRole::Master {
        Ok(())
    } else {
        Err(ApiError::Unauthorized {
            action: action.to_string(),
            required_role: OperatorRole::Master.as_str().to_string(),
        })
    }
}
