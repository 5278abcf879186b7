// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::rules::RuleKind;
use raid_loot_domain::DomainError;

/// Errors that can occur while constructing or configuring a session.
///
/// The four session operations themselves never error: illegal
/// operations are no-ops reported through `bool` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A ruling may contain each rule kind at most once.
    DuplicateRule {
        /// The duplicated rule kind.
        kind: RuleKind,
    },
    /// Rule kind string is not recognized.
    InvalidRuleKind(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::DuplicateRule { kind } => {
                write!(f, "Ruling already contains rule '{kind}'")
            }
            Self::InvalidRuleKind(msg) => write!(f, "Invalid rule kind: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
