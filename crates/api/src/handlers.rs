// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session management handlers.
//!
//! One [`SessionManager`] backs the whole UI surface: it owns the live
//! sessions, the shared default ruling and role priority table (which
//! sessions snapshot at open, never alias), and the inventory ledger
//! guaranteed awards write into.

use crate::error::ApiError;
use crate::ledger::MemoryLedger;
use crate::request_response::SessionView;
use crate::{Operator, authorize_award};
use raid_loot::{LootRuling, LootSession};
use raid_loot_domain::{InstanceDef, ItemId, Participant, RolePriority};
use std::collections::HashMap;

/// Owns every live session and the shared defaults they snapshot.
#[derive(Debug)]
pub struct SessionManager {
    sessions: HashMap<String, LootSession>,
    default_ruling: LootRuling,
    default_priorities: RolePriority,
    ledger: MemoryLedger,
}

impl SessionManager {
    /// Creates a manager with the standard ruling and priority
    /// defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LootRuling::standard(), RolePriority::new())
    }

    /// Creates a manager with explicit defaults.
    #[must_use]
    pub fn with_config(default_ruling: LootRuling, default_priorities: RolePriority) -> Self {
        Self {
            sessions: HashMap::new(),
            default_ruling,
            default_priorities,
            ledger: MemoryLedger::new(),
        }
    }

    /// Returns the shared default ruling.
    #[must_use]
    pub const fn default_ruling(&self) -> &LootRuling {
        &self.default_ruling
    }

    /// Replaces the shared default ruling.
    ///
    /// Sessions already open keep their snapshots.
    pub fn set_default_ruling(&mut self, ruling: LootRuling) {
        self.default_ruling = ruling;
    }

    /// Returns the shared default role priority table.
    #[must_use]
    pub const fn default_priorities(&self) -> &RolePriority {
        &self.default_priorities
    }

    /// Replaces the shared default role priority table.
    pub fn set_default_priorities(&mut self, priorities: RolePriority) {
        self.default_priorities = priorities;
    }

    /// Returns the inventory ledger.
    #[must_use]
    pub const fn ledger(&self) -> &MemoryLedger {
        &self.ledger
    }

    /// Opens a session for an encounter and roster, snapshotting the
    /// current defaults.
    ///
    /// # Arguments
    ///
    /// * `operator` - The operator driving the session
    /// * `instance` - The encounter being looted
    /// * `roster` - The participants eligible for loot
    ///
    /// # Returns
    ///
    /// The generated session id.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster or configuration is invalid.
    pub fn open_session(
        &mut self,
        operator: &Operator,
        instance: InstanceDef,
        roster: Vec<Participant>,
    ) -> Result<String, ApiError> {
        let session: LootSession = LootSession::new(
            instance,
            roster,
            &self.default_ruling,
            &self.default_priorities,
            operator.to_audit_actor(),
        )?;

        let session_id: String = format!("session_{}", rand::random::<u64>());
        tracing::info!(
            session_id = %session_id,
            operator = %operator.id,
            instance = %session.instance().name(),
            "Opened loot session"
        );
        self.sessions.insert(session_id.clone(), session);
        Ok(session_id)
    }

    /// Closes and discards a session.
    ///
    /// Sessions live only for the UI surface that created them;
    /// nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the session id is unknown.
    pub fn close_session(&mut self, operator: &Operator, session_id: &str) -> Result<(), ApiError> {
        if self.sessions.remove(session_id).is_none() {
            return Err(ApiError::SessionNotFound {
                session_id: session_id.to_string(),
            });
        }
        tracing::info!(
            session_id = %session_id,
            operator = %operator.id,
            "Closed loot session"
        );
        Ok(())
    }

    /// Returns a session for read access.
    ///
    /// # Errors
    ///
    /// Returns an error if the session id is unknown.
    pub fn session(&self, session_id: &str) -> Result<&LootSession, ApiError> {
        self.sessions
            .get(session_id)
            .ok_or_else(|| ApiError::SessionNotFound {
                session_id: session_id.to_string(),
            })
    }

    fn session_mut(&mut self, session_id: &str) -> Result<&mut LootSession, ApiError> {
        self.sessions
            .get_mut(session_id)
            .ok_or_else(|| ApiError::SessionNotFound {
                session_id: session_id.to_string(),
            })
    }

    /// Sets the requested copy count for a drop.
    ///
    /// # Errors
    ///
    /// Returns an error if the session id is unknown, or the session
    /// refuses the edit (distribution already under way, unknown
    /// item).
    pub fn set_drop_count(
        &mut self,
        operator: &Operator,
        session_id: &str,
        item: ItemId,
        count: u32,
    ) -> Result<(), ApiError> {
        let session: &mut LootSession = self.session_mut(session_id)?;
        if !session.set_drop_count(item, count) {
            tracing::warn!(
                session_id = %session_id,
                operator = %operator.id,
                item = %item,
                "Drop count edit refused"
            );
            return Err(ApiError::PreconditionFailed {
                action: String::from("set_drop_count"),
            });
        }
        Ok(())
    }

    /// Sets the manual override score for a participant.
    ///
    /// # Errors
    ///
    /// Returns an error if the session id is unknown or the index is
    /// out of range.
    pub fn set_manual_score(
        &mut self,
        operator: &Operator,
        session_id: &str,
        participant: usize,
        score: i32,
    ) -> Result<(), ApiError> {
        let session: &mut LootSession = self.session_mut(session_id)?;
        session.set_manual_score(participant, score)?;
        tracing::info!(
            session_id = %session_id,
            operator = %operator.id,
            participant,
            score,
            "Manual override score set"
        );
        Ok(())
    }

    /// Builds, evaluates, and sorts the session's result containers.
    ///
    /// # Errors
    ///
    /// Returns an error if the session id is unknown.
    pub fn evaluate(&mut self, operator: &Operator, session_id: &str) -> Result<(), ApiError> {
        let session: &mut LootSession = self.session_mut(session_id)?;
        session.evaluate();
        tracing::info!(
            session_id = %session_id,
            operator = %operator.id,
            containers = session.results().len(),
            "Session evaluated"
        );
        Ok(())
    }

    /// Reverts a session to the quantity-choosing state.
    ///
    /// # Errors
    ///
    /// Returns an error if the session id is unknown, or the session
    /// is not in the one state the reversal is legal from.
    pub fn revert_to_choose_loot(
        &mut self,
        operator: &Operator,
        session_id: &str,
    ) -> Result<(), ApiError> {
        let session: &mut LootSession = self.session_mut(session_id)?;
        if !session.revert_to_choose_loot() {
            tracing::warn!(
                session_id = %session_id,
                operator = %operator.id,
                state = %session.current_state(),
                "Revert to choose-loot refused"
            );
            return Err(ApiError::PreconditionFailed {
                action: String::from("revert_to_choose_loot"),
            });
        }
        Ok(())
    }

    /// Awards one contested item copy to a ranked candidate, then runs
    /// the re-evaluation the engine queued.
    ///
    /// Only the loot master may award. The engine deliberately keeps
    /// award and evaluation separate; this handler restores the
    /// award-then-re-rank flow the UI expects.
    ///
    /// # Errors
    ///
    /// Returns an error if the session id is unknown, the operator is
    /// not the loot master, or the session refuses the award.
    pub fn award_item(
        &mut self,
        operator: &Operator,
        session_id: &str,
        drop: (ItemId, u32),
        chosen: ItemId,
        candidate: usize,
    ) -> Result<(), ApiError> {
        authorize_award(operator, "award_item")?;
        let session: &mut LootSession = self.session_mut(session_id)?;
        if !session.award_item(drop, chosen, candidate) {
            tracing::warn!(
                session_id = %session_id,
                operator = %operator.id,
                item = %drop.0,
                copy = drop.1,
                "Award refused"
            );
            return Err(ApiError::PreconditionFailed {
                action: String::from("award_item"),
            });
        }

        tracing::info!(
            session_id = %session_id,
            operator = %operator.id,
            item = %drop.0,
            copy = drop.1,
            candidate,
            "Item awarded"
        );

        if session.needs_evaluation() {
            session.evaluate();
        }
        Ok(())
    }

    /// Awards a guaranteed item to the whole roster.
    ///
    /// Only the loot master may award.
    ///
    /// # Errors
    ///
    /// Returns an error if the session id is unknown, the operator is
    /// not the loot master, or the session refuses the award.
    pub fn award_guaranteed_loot(
        &mut self,
        operator: &Operator,
        session_id: &str,
        item: ItemId,
    ) -> Result<(), ApiError> {
        authorize_award(operator, "award_guaranteed_loot")?;
        let session: &mut LootSession =
            self.sessions
                .get_mut(session_id)
                .ok_or_else(|| ApiError::SessionNotFound {
                    session_id: session_id.to_string(),
                })?;
        if !session.award_guaranteed_loot(item, &mut self.ledger) {
            tracing::warn!(
                session_id = %session_id,
                operator = %operator.id,
                item = %item,
                "Guaranteed award refused"
            );
            return Err(ApiError::PreconditionFailed {
                action: String::from("award_guaranteed_loot"),
            });
        }

        tracing::info!(
            session_id = %session_id,
            operator = %operator.id,
            item = %item,
            "Guaranteed loot awarded"
        );
        Ok(())
    }

    /// Renders a session into its response DTO.
    ///
    /// # Errors
    ///
    /// Returns an error if the session id is unknown.
    pub fn session_view(&self, session_id: &str) -> Result<SessionView, ApiError> {
        let session: &LootSession = self.session(session_id)?;
        Ok(SessionView::from_session(session_id, session))
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
