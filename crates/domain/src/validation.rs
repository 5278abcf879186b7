// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster and configuration validation helpers.

use crate::error::DomainError;
use crate::job::Role;
use crate::participant::Participant;
use crate::priority::RolePriority;

/// Validates that a roster is non-empty and contains no duplicate
/// player/job pairings.
///
/// # Errors
///
/// Returns `DomainError::EmptyRoster` or
/// `DomainError::DuplicateParticipant`.
pub fn validate_roster_unique(roster: &[Participant]) -> Result<(), DomainError> {
    if roster.is_empty() {
        return Err(DomainError::EmptyRoster);
    }
    for (index, participant) in roster.iter().enumerate() {
        let duplicate: bool = roster[..index].iter().any(|earlier| {
            earlier.player() == participant.player() && earlier.job() == participant.job()
        });
        if duplicate {
            return Err(DomainError::DuplicateParticipant {
                player: participant.player().to_string(),
                job: participant.job(),
            });
        }
    }
    Ok(())
}

/// Validates that a role priority table carries a usable value for
/// every role.
///
/// # Errors
///
/// Returns `DomainError::InvalidPriority` for the first role whose
/// value is unset.
pub fn validate_role_priority(priorities: &RolePriority) -> Result<(), DomainError> {
    for role in Role::ALL {
        let value: i32 = priorities.get(role);
        if value == i32::MAX {
            return Err(DomainError::InvalidPriority { role, value });
        }
    }
    Ok(())
}
