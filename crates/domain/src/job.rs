// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Jobs, roles, and job categories.
//!
//! A job is the combat class a participant loots on. Every job maps to
//! exactly one role, and the role is what the role-priority loot rule
//! keys on.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The combat role a job fills in a raid roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Main and off tanks.
    Tank,
    /// Pure and barrier healers.
    Healer,
    /// Melee DPS.
    Melee,
    /// Physical ranged DPS.
    Ranged,
    /// Magical ranged DPS.
    Caster,
}

impl Role {
    /// Every role, in priority-table display order.
    pub const ALL: [Self; 5] = [
        Self::Tank,
        Self::Healer,
        Self::Melee,
        Self::Ranged,
        Self::Caster,
    ];

    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tank => "tank",
            Self::Healer => "healer",
            Self::Melee => "melee",
            Self::Ranged => "ranged",
            Self::Caster => "caster",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "tank" => Ok(Self::Tank),
            "healer" => Ok(Self::Healer),
            "melee" => Ok(Self::Melee),
            "ranged" => Ok(Self::Ranged),
            "caster" => Ok(Self::Caster),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A playable job, identified by its three-letter abbreviation.
///
/// Jobs are fixed domain constants. Adding a job is a compile-time
/// enumeration extension; every match over `Job` is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Job {
    // Tanks
    PLD,
    WAR,
    DRK,
    GNB,
    // Healers
    WHM,
    SCH,
    AST,
    SGE,
    // Melee
    MNK,
    DRG,
    NIN,
    SAM,
    RPR,
    VPR,
    // Physical ranged
    BRD,
    MCH,
    DNC,
    // Casters
    BLM,
    SMN,
    RDM,
    PCT,
}

impl Job {
    /// Every job, grouped by role.
    pub const ALL: [Self; 21] = [
        Self::PLD,
        Self::WAR,
        Self::DRK,
        Self::GNB,
        Self::WHM,
        Self::SCH,
        Self::AST,
        Self::SGE,
        Self::MNK,
        Self::DRG,
        Self::NIN,
        Self::SAM,
        Self::RPR,
        Self::VPR,
        Self::BRD,
        Self::MCH,
        Self::DNC,
        Self::BLM,
        Self::SMN,
        Self::RDM,
        Self::PCT,
    ];

    /// Returns the role this job fills.
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::PLD | Self::WAR | Self::DRK | Self::GNB => Role::Tank,
            Self::WHM | Self::SCH | Self::AST | Self::SGE => Role::Healer,
            Self::MNK | Self::DRG | Self::NIN | Self::SAM | Self::RPR | Self::VPR => Role::Melee,
            Self::BRD | Self::MCH | Self::DNC => Role::Ranged,
            Self::BLM | Self::SMN | Self::RDM | Self::PCT => Role::Caster,
        }
    }

    /// Returns the three-letter abbreviation for the job.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PLD => "PLD",
            Self::WAR => "WAR",
            Self::DRK => "DRK",
            Self::GNB => "GNB",
            Self::WHM => "WHM",
            Self::SCH => "SCH",
            Self::AST => "AST",
            Self::SGE => "SGE",
            Self::MNK => "MNK",
            Self::DRG => "DRG",
            Self::NIN => "NIN",
            Self::SAM => "SAM",
            Self::RPR => "RPR",
            Self::VPR => "VPR",
            Self::BRD => "BRD",
            Self::MCH => "MCH",
            Self::DNC => "DNC",
            Self::BLM => "BLM",
            Self::SMN => "SMN",
            Self::RDM => "RDM",
            Self::PCT => "PCT",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        let upper: String = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|job| job.as_str() == upper)
            .copied()
            .ok_or_else(|| DomainError::InvalidJob(s.to_string()))
    }
}

impl FromStr for Job {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of jobs an item may be equipped by.
///
/// Item catalogs express applicability either broadly (all jobs, one
/// role) or as an explicit job list; this models both without a
/// process-wide registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCategory {
    jobs: Vec<Job>,
}

impl JobCategory {
    /// A category containing every job.
    #[must_use]
    pub fn all() -> Self {
        Self {
            jobs: Job::ALL.to_vec(),
        }
    }

    /// A category containing no job at all.
    ///
    /// Unresolvable catalog ids degrade to this.
    #[must_use]
    pub const fn none() -> Self {
        Self { jobs: Vec::new() }
    }

    /// A category containing exactly the given jobs.
    #[must_use]
    pub fn of(jobs: &[Job]) -> Self {
        Self {
            jobs: jobs.to_vec(),
        }
    }

    /// A category containing every job of the given roles.
    #[must_use]
    pub fn roles(roles: &[Role]) -> Self {
        Self {
            jobs: Job::ALL
                .iter()
                .filter(|job| roles.contains(&job.role()))
                .copied()
                .collect(),
        }
    }

    /// Checks whether a job may equip items of this category.
    #[must_use]
    pub fn contains(&self, job: Job) -> bool {
        self.jobs.contains(&job)
    }

    /// Returns whether the category is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
