// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loot sessions.
//!
//! A session orchestrates one distribution event for one encounter and
//! one roster. It owns the state machine, the editable per-drop
//! quantities, the guaranteed loot map, and one result container per
//! configured item copy. Sessions are created per encounter-looting
//! action, are exclusively owned by the UI surface driving them, and
//! are discarded when that surface closes; nothing is persisted.
//!
//! ## State machine
//!
//! `Started → LootChosen → DistributionStarted → Finished`, strictly
//! increasing except for the single explicit reversal
//! [`LootSession::revert_to_choose_loot`].
//!
//! ## Error reporting
//!
//! Illegal operations (double award, awarding a guaranteed item twice,
//! reverting from the wrong state) are no-ops reported as `false`.
//! Callers must check the return value to know whether the requested
//! transition occurred.
//!
//! ## Awards and re-evaluation
//!
//! Awarding never re-evaluates by itself: a successful award queues a
//! re-evaluation (visible through [`LootSession::needs_evaluation`])
//! and the caller invokes [`LootSession::evaluate`] explicitly. This
//! keeps the state machine's transitions independently testable.

use crate::container::LootResultContainer;
use crate::error::CoreError;
use crate::ruling::LootRuling;
use crate::rules::RuleKind;
use raid_loot_audit::{Action, Actor, AwardEvent, Cause, GearSnapshot};
use raid_loot_domain::{
    DomainError, GearSlot, InstanceDef, InventoryLedger, Item, ItemId, Participant, RolePriority,
    validate_role_priority, validate_roster_unique,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The lifecycle state of a loot session.
///
/// States are ordered; `Ord` comparisons express "has distribution
/// started yet" style checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// The operator is still setting per-item drop quantities; no
    /// result containers exist yet.
    #[default]
    Started,
    /// Quantities are chosen and containers are built and ranked.
    LootChosen,
    /// At least one item has been awarded; the candidate set is
    /// frozen.
    DistributionStarted,
    /// Every contested copy and every guaranteed item is awarded.
    Finished,
}

impl SessionState {
    /// Returns the string representation of the state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::LootChosen => "loot_chosen",
            Self::DistributionStarted => "distribution_started",
            Self::Finished => "finished",
        }
    }

    /// Returns true if no further awards are accepted.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - `Started` → `LootChosen`
    /// - `LootChosen` → `Started` (the single explicit reversal)
    /// - `Started` | `LootChosen` → `DistributionStarted`
    /// - `DistributionStarted` → `Finished`
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Started, Self::LootChosen)
                | (Self::LootChosen, Self::Started)
                | (Self::Started | Self::LootChosen, Self::DistributionStarted)
                | (Self::DistributionStarted, Self::Finished)
        )
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One loot distribution event for one encounter and one roster.
#[derive(Debug, Clone)]
pub struct LootSession {
    instance: InstanceDef,
    ruling: LootRuling,
    priorities: RolePriority,
    roster: Vec<Participant>,
    drop_counts: Vec<(Item, u32)>,
    guaranteed: BTreeMap<ItemId, bool>,
    results: BTreeMap<(ItemId, u32), LootResultContainer>,
    manual_scores: BTreeMap<usize, i32>,
    state: SessionState,
    operator: Actor,
    events: Vec<AwardEvent>,
    pending_evaluation: bool,
}

impl LootSession {
    /// Creates a session for one encounter and one roster.
    ///
    /// The ruling and the role priority table are cloned: the session
    /// owns independent snapshots, and later edits to the shared
    /// configuration never retroactively change this session.
    ///
    /// # Arguments
    ///
    /// * `instance` - The encounter being looted
    /// * `roster` - The participants eligible for loot
    /// * `ruling` - The configured ruling to snapshot
    /// * `priorities` - The configured role priority table to snapshot
    /// * `operator` - The operator driving this session, for the award
    ///   log
    ///
    /// # Errors
    ///
    /// Returns an error if the roster is empty or contains duplicate
    /// player/job pairings, or if the priority table is unusable.
    pub fn new(
        instance: InstanceDef,
        roster: Vec<Participant>,
        ruling: &LootRuling,
        priorities: &RolePriority,
        operator: Actor,
    ) -> Result<Self, CoreError> {
        validate_roster_unique(&roster)?;
        validate_role_priority(priorities)?;

        let drop_counts: Vec<(Item, u32)> = instance
            .possible_drops()
            .iter()
            .map(|item| (item.clone(), 0))
            .collect();
        let guaranteed: BTreeMap<ItemId, bool> = instance
            .guaranteed_drops()
            .iter()
            .map(|item| (item.id(), false))
            .collect();

        Ok(Self {
            instance,
            ruling: ruling.clone(),
            priorities: priorities.clone(),
            roster,
            drop_counts,
            guaranteed,
            results: BTreeMap::new(),
            manual_scores: BTreeMap::new(),
            state: SessionState::Started,
            operator,
            events: Vec::new(),
            pending_evaluation: false,
        })
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn current_state(&self) -> SessionState {
        self.state
    }

    /// Returns the encounter being looted.
    #[must_use]
    pub const fn instance(&self) -> &InstanceDef {
        &self.instance
    }

    /// Returns the session's ruling snapshot.
    #[must_use]
    pub const fn ruling(&self) -> &LootRuling {
        &self.ruling
    }

    /// Returns the session's role priority snapshot.
    #[must_use]
    pub const fn priorities(&self) -> &RolePriority {
        &self.priorities
    }

    /// Returns the roster.
    #[must_use]
    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    /// Returns the editable (item, requested-copy-count) list.
    #[must_use]
    pub fn drop_counts(&self) -> &[(Item, u32)] {
        &self.drop_counts
    }

    /// Returns the ranked result containers keyed by (item, copy).
    #[must_use]
    pub const fn results(&self) -> &BTreeMap<(ItemId, u32), LootResultContainer> {
        &self.results
    }

    /// Returns the guaranteed loot map (item → awarded flag).
    #[must_use]
    pub const fn guaranteed_loot(&self) -> &BTreeMap<ItemId, bool> {
        &self.guaranteed
    }

    /// Returns the award events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[AwardEvent] {
        &self.events
    }

    /// Returns whether an award has queued a re-evaluation that has
    /// not run yet.
    #[must_use]
    pub const fn needs_evaluation(&self) -> bool {
        self.pending_evaluation
    }

    /// Sets the requested copy count for a drop.
    ///
    /// Only legal while the operator is still choosing loot (state
    /// `Started`); returns `false` without mutation otherwise, or if
    /// the item is not part of the encounter's drop list.
    pub fn set_drop_count(&mut self, item: ItemId, count: u32) -> bool {
        if self.state != SessionState::Started {
            return false;
        }
        match self
            .drop_counts
            .iter_mut()
            .find(|(drop, _)| drop.id() == item)
        {
            Some((_, current)) => {
                *current = count;
                true
            }
            None => false,
        }
    }

    /// Sets the manual override score for a participant.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is out of range for the roster.
    pub fn set_manual_score(&mut self, participant: usize, score: i32) -> Result<(), CoreError> {
        if participant >= self.roster.len() {
            return Err(CoreError::DomainViolation(
                DomainError::ParticipantNotFound {
                    index: participant,
                    roster_size: self.roster.len(),
                },
            ));
        }
        self.manual_scores.insert(participant, score);
        Ok(())
    }

    /// Returns the configured total number of contested item copies.
    #[must_use]
    pub fn total_copies(&self) -> usize {
        self.drop_counts
            .iter()
            .map(|(_, count)| *count as usize)
            .sum()
    }

    /// Builds, evaluates, and sorts the result containers.
    ///
    /// Transitions `Started → LootChosen` (monotonic; never regresses
    /// through this call). While distribution has not started and the
    /// built container count does not match the configured copy total,
    /// the container set is rebuilt from scratch. Every unawarded
    /// container is then re-evaluated against the roster's current
    /// gear and re-sorted under the session ruling. Idempotent: with
    /// no intervening mutation a second call changes nothing.
    pub fn evaluate(&mut self) {
        if self.state == SessionState::Started {
            self.state = SessionState::LootChosen;
        }

        if self.state < SessionState::DistributionStarted
            && self.results.len() != self.total_copies()
        {
            self.results = self
                .drop_counts
                .iter()
                .flat_map(|(item, count)| {
                    (0..*count).map(move |copy| {
                        (
                            (item.id(), copy),
                            LootResultContainer::new(item.clone(), copy),
                        )
                    })
                })
                .collect();
        }

        let frozen: bool = self.state >= SessionState::DistributionStarted;
        for container in self.results.values_mut() {
            container.evaluate(
                &self.roster,
                &self.ruling,
                &self.priorities,
                &self.manual_scores,
                frozen,
            );
        }

        self.pending_evaluation = false;
    }

    /// Reverts `LootChosen → Started` so the operator can change drop
    /// quantities before distribution begins.
    ///
    /// This is the state machine's only backward transition. Returns
    /// `false` without any state change when called from any other
    /// state.
    pub fn revert_to_choose_loot(&mut self) -> bool {
        if !self.state.can_transition_to(SessionState::Started) {
            return false;
        }
        self.state = SessionState::Started;
        true
    }

    /// Awards one contested item copy to a ranked candidate.
    ///
    /// Fails (returns `false`, no mutation) if the session is
    /// finished, the container does not exist or is already awarded,
    /// the chosen item is not among the drop's possible items, or the
    /// candidate index is out of range.
    ///
    /// On success: the container's award index is set permanently, the
    /// item lands in the winner's current gear (materia from the
    /// winner's target piece for that slot is copied across), one
    /// award event is recorded, the session moves to
    /// `DistributionStarted`, completion is checked, and a
    /// re-evaluation is queued unless the session just finished.
    pub fn award_item(&mut self, drop: (ItemId, u32), chosen: ItemId, candidate: usize) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        let Some(container) = self.results.get_mut(&drop) else {
            return false;
        };
        if container.is_awarded() {
            return false;
        }
        if !container
            .droppable_items()
            .iter()
            .any(|item| item.id() == chosen)
        {
            return false;
        }
        let Some(result) = container.results().get(candidate) else {
            return false;
        };
        let participant_index: usize = result.participant_index();
        let Some(winner) = self.roster.get_mut(participant_index) else {
            return false;
        };

        let item: Item = container.item().clone();
        let placed: Option<(GearSlot, Item)> = placement(winner, &item);
        let awarded: Item = placed
            .as_ref()
            .map_or_else(|| item.clone(), |(_, awarded)| awarded.clone());
        if !container.mark_awarded(candidate, awarded.clone()) {
            return false;
        }

        let winner_name: String = winner.player().to_string();
        let before: GearSnapshot = gear_snapshot(winner);
        if let Some((slot, awarded)) = placed {
            winner.current_mut().set(slot, awarded);
        }
        let after: GearSnapshot = gear_snapshot(winner);

        self.events.push(AwardEvent::new(
            self.operator.clone(),
            Cause::new(
                self.instance.name().to_string(),
                String::from("Operator award during loot distribution"),
            ),
            Action::new(
                String::from("AwardItem"),
                Some(format!("Awarded '{}' to {winner_name}", item.name())),
            ),
            before,
            after,
            self.instance.name().to_string(),
            item.id(),
            Some(winner_name),
        ));

        if self.state < SessionState::DistributionStarted {
            self.state = SessionState::DistributionStarted;
        }
        self.evaluate_finished();
        if !self.state.is_terminal() {
            self.pending_evaluation = true;
        }
        true
    }

    /// Awards a guaranteed (non-contested) item.
    ///
    /// Fails (returns `false`, no mutation) if the session is finished,
    /// the item is not in the guaranteed list, or it has already been
    /// awarded. On success the item is recorded with zero quantity in
    /// every roster participant's inventory ledger, one award event is
    /// recorded, the session moves to `DistributionStarted`, and
    /// completion is checked.
    pub fn award_guaranteed_loot(&mut self, item: ItemId, ledger: &mut dyn InventoryLedger) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        match self.guaranteed.get_mut(&item) {
            None => return false,
            Some(awarded) if *awarded => return false,
            Some(awarded) => *awarded = true,
        }

        for participant in &self.roster {
            ledger.record(participant.player(), item, 0);
        }

        let snapshot: GearSnapshot = GearSnapshot::new(String::from("unchanged"));
        self.events.push(AwardEvent::new(
            self.operator.clone(),
            Cause::new(
                self.instance.name().to_string(),
                String::from("Operator award during loot distribution"),
            ),
            Action::new(
                String::from("AwardGuaranteedLoot"),
                Some(format!("Item {item} recorded for the whole roster")),
            ),
            snapshot.clone(),
            snapshot,
            self.instance.name().to_string(),
            item,
            None,
        ));

        if self.state < SessionState::DistributionStarted {
            self.state = SessionState::DistributionStarted;
        }
        self.evaluate_finished();
        true
    }

    /// Returns the first rule whose scores differ between two ranked
    /// candidates of a container, for UI explanation text.
    #[must_use]
    pub fn deciding_factor(
        &self,
        drop: (ItemId, u32),
        upper: usize,
        lower: usize,
    ) -> Option<RuleKind> {
        self.results
            .get(&drop)?
            .deciding_factor(upper, lower, &self.ruling)
    }

    /// Transitions to `Finished` once every contested copy and every
    /// guaranteed item is awarded.
    fn evaluate_finished(&mut self) {
        let containers_built: bool = self.results.len() == self.total_copies();
        let containers_awarded: bool = self
            .results
            .values()
            .all(LootResultContainer::is_awarded);
        let guaranteed_awarded: bool = self.guaranteed.values().all(|awarded| *awarded);

        if containers_built
            && containers_awarded
            && guaranteed_awarded
            && self.state.can_transition_to(SessionState::Finished)
        {
            self.state = SessionState::Finished;
        }
    }
}

/// Chooses where an awarded item lands in the winner's gear and dresses
/// it with the winner's planned materia.
///
/// Preference order among the item's slots: a slot where the winner's
/// target set holds this exact item, else the overlapping slot with
/// the lowest current item level. Items with no slots (unresolvable
/// ids) place nowhere.
fn placement(winner: &Participant, item: &Item) -> Option<(GearSlot, Item)> {
    let slots: &[GearSlot] = item.slots();
    let slot: GearSlot = slots
        .iter()
        .copied()
        .find(|slot| {
            winner
                .target()
                .get(*slot)
                .is_some_and(|planned| planned.id() == item.id())
        })
        .or_else(|| {
            slots
                .iter()
                .copied()
                .min_by_key(|slot| winner.current().item_level_at(*slot))
        })?;

    let mut awarded: Item = item.clone();
    if let Some(planned) = winner.target().get(slot) {
        awarded.set_materia(planned.materia().to_vec());
    }
    Some((slot, awarded))
}

/// Renders a compact gear description for the award log.
fn gear_snapshot(participant: &Participant) -> GearSnapshot {
    GearSnapshot::new(format!(
        "player={},job={},ilvl={}",
        participant.player(),
        participant.job(),
        participant.current().item_level()
    ))
}
