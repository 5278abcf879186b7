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

//! Award decision audit types.
//!
//! Award decisions are irreversible: once an item has been handed to a
//! winner the session refuses to change its mind. Every successful
//! award therefore produces exactly one immutable [`AwardEvent`]
//! capturing who decided, why, and what changed.

use raid_loot_domain::ItemId;
use time::OffsetDateTime;

/// Represents the entity performing an award.
///
/// An actor is any identifiable entity that initiates an award
/// decision: normally the loot master driving the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "operator", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for an award.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., session id).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this award
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific award action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`AwardItem`",
    /// "`AwardGuaranteedLoot`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact description of a winner's gear at a point in time.
///
/// Captures enough to explain an award after the fact (overall item
/// level before and after is the interesting part); it is not a full
/// gear serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GearSnapshot {
    /// A string representation of the gear state.
    pub data: String,
}

impl GearSnapshot {
    /// Creates a new `GearSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the gear state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event representing one award decision.
///
/// Every successful award must produce exactly one event; failed
/// preconditions produce none. Events capture:
/// - Who decided (actor)
/// - Why (cause)
/// - What was awarded (action, item)
/// - The winner, or `None` for guaranteed loot handed to everyone
/// - The winner's gear before and after the side effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardEvent {
    /// The actor who made this award.
    pub actor: Actor,
    /// The cause or reason for this award.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The winner's gear before the award side effect.
    pub before: GearSnapshot,
    /// The winner's gear after the award side effect.
    pub after: GearSnapshot,
    /// The encounter the loot came from.
    pub instance: String,
    /// The awarded item.
    pub item: ItemId,
    /// The winning player, or `None` for guaranteed loot.
    pub winner: Option<String>,
    /// When the award was recorded, in UTC.
    pub recorded_at: OffsetDateTime,
}

impl AwardEvent {
    /// Creates a new `AwardEvent` stamped with the current UTC time.
    ///
    /// Once created, an award event is immutable.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who made the award
    /// * `cause` - The reason for the award
    /// * `action` - The action that was performed
    /// * `before` - The winner's gear before the side effect
    /// * `after` - The winner's gear after the side effect
    /// * `instance` - The encounter the loot came from
    /// * `item` - The awarded item
    /// * `winner` - The winning player, or `None` for guaranteed loot
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: GearSnapshot,
        after: GearSnapshot,
        instance: String,
        item: ItemId,
        winner: Option<String>,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            instance,
            item,
            winner,
            recorded_at: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(winner: Option<String>) -> AwardEvent {
        AwardEvent::new(
            Actor::new(String::from("op-1"), String::from("operator")),
            Cause::new(String::from("session-9"), String::from("Operator award")),
            Action::new(String::from("AwardItem"), Some(String::from("Helm"))),
            GearSnapshot::new(String::from("ilvl=600")),
            GearSnapshot::new(String::from("ilvl=601")),
            String::from("The Omega Protocol"),
            ItemId::new(42),
            winner,
        )
    }

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("op-1"), String::from("operator"));

        assert_eq!(actor.id, "op-1");
        assert_eq!(actor.actor_type, "operator");
    }

    #[test]
    fn test_action_creation_with_details() {
        let action: Action = Action::new(
            String::from("AwardGuaranteedLoot"),
            Some(String::from("Token of the encounter")),
        );

        assert_eq!(action.name, "AwardGuaranteedLoot");
        assert!(action.details.is_some());
    }

    #[test]
    fn test_award_event_carries_all_fields() {
        let event: AwardEvent = event(Some(String::from("Alice")));

        assert_eq!(event.item, ItemId::new(42));
        assert_eq!(event.winner.as_deref(), Some("Alice"));
        assert_eq!(event.instance, "The Omega Protocol");
        assert_eq!(event.before.data, "ilvl=600");
        assert_eq!(event.after.data, "ilvl=601");
    }

    #[test]
    fn test_guaranteed_loot_event_has_no_single_winner() {
        let event: AwardEvent = event(None);
        assert!(event.winner.is_none());
    }
}
