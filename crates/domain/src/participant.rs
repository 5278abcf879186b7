// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster participants and the inventory ledger boundary.

use crate::gear::GearSet;
use crate::item::ItemId;
use crate::job::{Job, Role};
use serde::{Deserialize, Serialize};

/// A player/job pairing eligible to receive loot.
///
/// A participant carries the two gear sets the ranking engine compares:
/// the currently equipped set and the target ("best-in-slot") set the
/// player is working towards. The current set is the only entity the
/// engine mutates, and only as an award side effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    player: String,
    job: Job,
    current: GearSet,
    target: GearSet,
}

impl Participant {
    /// Creates a new `Participant`.
    ///
    /// # Arguments
    ///
    /// * `player` - The player's display name
    /// * `job` - The job the player loots on
    /// * `current` - The currently equipped gear set
    /// * `target` - The best-in-slot gear set the player aims for
    #[must_use]
    pub const fn new(player: String, job: Job, current: GearSet, target: GearSet) -> Self {
        Self {
            player,
            job,
            current,
            target,
        }
    }

    /// Returns the player's display name.
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Returns the job this participant loots on.
    #[must_use]
    pub const fn job(&self) -> Job {
        self.job
    }

    /// Returns the role the job fills.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.job.role()
    }

    /// Returns the currently equipped gear set.
    #[must_use]
    pub const fn current(&self) -> &GearSet {
        &self.current
    }

    /// Returns the currently equipped gear set for mutation.
    ///
    /// Award side effects are the only intended caller.
    pub fn current_mut(&mut self) -> &mut GearSet {
        &mut self.current
    }

    /// Returns the target gear set.
    #[must_use]
    pub const fn target(&self) -> &GearSet {
        &self.target
    }

    /// Returns the target gear set for mutation.
    pub fn target_mut(&mut self) -> &mut GearSet {
        &mut self.target
    }
}

/// A per-participant quantity store that guaranteed-item awards write
/// into.
///
/// External collaborator boundary; the engine only appends entries and
/// never reads them back.
pub trait InventoryLedger {
    /// Records a quantity of an item against a participant.
    fn record(&mut self, player: &str, item: ItemId, quantity: u32);
}
