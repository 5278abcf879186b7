// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role priority tables.
//!
//! A role priority table maps every role to an integer priority; lower
//! values rank higher. Sessions snapshot the table at start, so editing
//! the shared configuration never retroactively changes an in-progress
//! session.

use crate::error::DomainError;
use crate::job::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from [`Role`] to an integer priority (lower = higher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePriority {
    priorities: BTreeMap<Role, i32>,
}

impl RolePriority {
    /// Creates a table with the conventional progression defaults:
    /// tanks first, then healers, melee, casters, ranged.
    #[must_use]
    pub fn new() -> Self {
        let mut priorities: BTreeMap<Role, i32> = BTreeMap::new();
        priorities.insert(Role::Tank, 0);
        priorities.insert(Role::Healer, 1);
        priorities.insert(Role::Melee, 2);
        priorities.insert(Role::Caster, 3);
        priorities.insert(Role::Ranged, 4);
        Self { priorities }
    }

    /// Returns the priority for a role.
    #[must_use]
    pub fn get(&self, role: Role) -> i32 {
        self.priorities.get(&role).copied().unwrap_or(i32::MAX)
    }

    /// Sets the priority for a role.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative.
    pub fn set(&mut self, role: Role, value: i32) -> Result<(), DomainError> {
        if value < 0 {
            return Err(DomainError::InvalidPriority { role, value });
        }
        self.priorities.insert(role, value);
        Ok(())
    }
}

impl Default for RolePriority {
    fn default() -> Self {
        Self::new()
    }
}
