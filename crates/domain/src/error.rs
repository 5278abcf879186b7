// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::job::{Job, Role};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Job abbreviation is not recognized.
    InvalidJob(String),
    /// Role name is not recognized.
    InvalidRole(String),
    /// Equipment slot name is not recognized.
    InvalidSlot(String),
    /// Item source name is not recognized.
    InvalidSource(String),
    /// Materia grade is outside the valid range.
    InvalidMateriaGrade {
        /// The invalid grade value.
        grade: u8,
    },
    /// Role priority values must be non-negative.
    InvalidPriority {
        /// The role the value was set for.
        role: Role,
        /// The invalid value.
        value: i32,
    },
    /// The same player/job pairing appears twice in one roster.
    DuplicateParticipant {
        /// The player's display name.
        player: String,
        /// The duplicated job.
        job: Job,
    },
    /// A roster must contain at least one participant.
    EmptyRoster,
    /// Participant index is out of range for the roster.
    ParticipantNotFound {
        /// The out-of-range index.
        index: usize,
        /// The roster size.
        roster_size: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJob(msg) => write!(f, "Invalid job: {msg}"),
            Self::InvalidRole(msg) => write!(f, "Invalid role: {msg}"),
            Self::InvalidSlot(msg) => write!(f, "Invalid slot: {msg}"),
            Self::InvalidSource(msg) => write!(f, "Invalid item source: {msg}"),
            Self::InvalidMateriaGrade { grade } => {
                write!(f, "Invalid materia grade: {grade}. Must be between 1 and 12")
            }
            Self::InvalidPriority { role, value } => {
                write!(
                    f,
                    "Invalid priority {value} for role '{role}'. Must be non-negative"
                )
            }
            Self::DuplicateParticipant { player, job } => {
                write!(f, "Participant '{player}' appears twice on job {job}")
            }
            Self::EmptyRoster => write!(f, "Roster must contain at least one participant"),
            Self::ParticipantNotFound { index, roster_size } => {
                write!(
                    f,
                    "Participant index {index} out of range for roster of {roster_size}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
