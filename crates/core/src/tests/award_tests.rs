// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Awarding: idempotence guards, side effects, and completion.

use super::helpers::{
    TestLedger, helm, operator, participant, ruling_of, session_with_drops,
};
use crate::{LootSession, NeedStatus, RuleKind, SessionState};
use raid_loot_domain::{
    GearSlot, InstanceDef, Item, ItemId, Job, Materia, MateriaKind, Participant, RolePriority,
};

fn drop_item() -> Item {
    helm(100, 615, true)
}

fn alice_and_bob() -> Vec<Participant> {
    let drop: Item = drop_item();
    let mut alice: Participant = participant("Alice", Job::WAR, 1000, 600);
    alice.target_mut().set(GearSlot::Head, drop.clone());
    let mut bob: Participant = participant("Bob", Job::WHM, 2000, 610);
    bob.target_mut().set(GearSlot::Head, drop);
    vec![alice, bob]
}

fn evaluated_session(copies: u32) -> LootSession {
    let mut session: LootSession = session_with_drops(
        alice_and_bob(),
        vec![drop_item()],
        &ruling_of(&[RuleKind::RolePriority]),
    )
    .expect("valid session");
    assert!(session.set_drop_count(drop_item().id(), copies));
    session.evaluate();
    session
}

#[test]
fn test_award_succeeds_once_then_refuses() {
    let mut session: LootSession = evaluated_session(2);
    let key: (ItemId, u32) = (drop_item().id(), 0);

    assert!(session.award_item(key, drop_item().id(), 0));
    let winner: String = session
        .results()
        .get(&key)
        .and_then(|container| container.awarded_to())
        .map(|result| result.player().to_string())
        .expect("winner recorded");

    // Second award on the same copy is a no-op, even for a different
    // candidate.
    assert!(!session.award_item(key, drop_item().id(), 1));
    let still_winner: String = session
        .results()
        .get(&key)
        .and_then(|container| container.awarded_to())
        .map(|result| result.player().to_string())
        .expect("winner unchanged");
    assert_eq!(winner, still_winner);
}

#[test]
fn test_award_rejects_unknown_container_and_candidate() {
    let mut session: LootSession = evaluated_session(1);

    // No such copy index.
    assert!(!session.award_item((drop_item().id(), 5), drop_item().id(), 0));
    // No such candidate.
    assert!(!session.award_item((drop_item().id(), 0), drop_item().id(), 9));
    // The chosen item must be one the drop can turn into.
    assert!(!session.award_item((drop_item().id(), 0), ItemId::new(555), 0));

    assert_eq!(session.current_state(), SessionState::LootChosen);
    assert!(session.events().is_empty());
}

#[test]
fn test_award_applies_item_to_winner_gear() {
    let mut session: LootSession = evaluated_session(1);
    let key: (ItemId, u32) = (drop_item().id(), 0);

    // Role priority puts the tank first.
    assert_eq!(
        session
            .results()
            .get(&key)
            .expect("container for the drop")
            .results()[0]
            .player(),
        "Alice"
    );
    assert!(session.award_item(key, drop_item().id(), 0));

    let alice: &Participant = &session.roster()[0];
    assert!(alice.current().contains(drop_item().id()));
    assert_eq!(alice.current().item_level_at(GearSlot::Head), 615);
}

#[test]
fn test_award_copies_materia_from_target_piece() {
    let drop: Item = drop_item();
    let planned: Item = drop
        .clone()
        .with_materia(Materia::new(MateriaKind::CriticalHit, 10).expect("valid grade"))
        .with_materia(Materia::new(MateriaKind::Determination, 9).expect("valid grade"));

    let mut alice: Participant = participant("Alice", Job::WAR, 1000, 600);
    alice.target_mut().set(GearSlot::Head, planned);

    let mut session: LootSession = session_with_drops(
        vec![alice],
        vec![drop.clone()],
        &ruling_of(&[RuleKind::RolePriority]),
    )
    .expect("valid session");
    assert!(session.set_drop_count(drop.id(), 1));
    session.evaluate();
    assert!(session.award_item((drop.id(), 0), drop.id(), 0));

    let equipped: &Item = session.roster()[0]
        .current()
        .get(GearSlot::Head)
        .expect("helm equipped");
    assert_eq!(equipped.id(), drop.id());
    assert_eq!(equipped.materia().len(), 2);
    assert_eq!(equipped.materia()[0].kind(), MateriaKind::CriticalHit);
}

#[test]
fn test_award_queues_re_evaluation_instead_of_running_it() {
    let mut session: LootSession = evaluated_session(2);
    let key: (ItemId, u32) = (drop_item().id(), 0);

    assert!(!session.needs_evaluation());
    assert!(session.award_item(key, drop_item().id(), 0));
    assert!(session.needs_evaluation());

    // The second container still ranks Alice as needing until the
    // caller actually evaluates.
    let second = session
        .results()
        .get(&(drop_item().id(), 1))
        .expect("second container");
    assert_eq!(second.results()[0].player(), "Alice");
    assert_eq!(second.results()[0].status(), NeedStatus::Need);

    session.evaluate();
    assert!(!session.needs_evaluation());

    // The unique helm is now owned: Alice drops to Greed and the
    // healer takes the lead on the remaining copy.
    let second = session
        .results()
        .get(&(drop_item().id(), 1))
        .expect("second container");
    assert_eq!(second.results()[0].player(), "Bob");
    let alice = second
        .results()
        .iter()
        .find(|result| result.player() == "Alice")
        .expect("Alice still a candidate");
    assert_eq!(alice.status(), NeedStatus::Greed);
}

#[test]
fn test_single_drop_session_finishes_on_award() {
    let mut session: LootSession = evaluated_session(1);
    let key: (ItemId, u32) = (drop_item().id(), 0);

    assert!(session.award_item(key, drop_item().id(), 0));
    assert_eq!(session.current_state(), SessionState::Finished);
    // A finished session queues nothing further.
    assert!(!session.needs_evaluation());
    // And refuses everything afterwards.
    assert!(!session.award_item(key, drop_item().id(), 1));
}

#[test]
fn test_every_successful_award_records_exactly_one_event() {
    let mut session: LootSession = evaluated_session(2);

    assert!(session.award_item((drop_item().id(), 0), drop_item().id(), 0));
    assert_eq!(session.events().len(), 1);

    // Failed award records nothing.
    assert!(!session.award_item((drop_item().id(), 0), drop_item().id(), 1));
    assert_eq!(session.events().len(), 1);

    session.evaluate();
    assert!(session.award_item((drop_item().id(), 1), drop_item().id(), 0));
    assert_eq!(session.events().len(), 2);

    let first = &session.events()[0];
    assert_eq!(first.action.name, "AwardItem");
    assert_eq!(first.item, drop_item().id());
    assert_eq!(first.winner.as_deref(), Some("Alice"));
    assert_eq!(first.actor.id, "op-1");
}

#[test]
fn test_guaranteed_loot_award_and_completion() {
    let token: Item = helm(900, 0, false);
    let instance: InstanceDef = InstanceDef::new(
        String::from("Test Encounter"),
        vec![drop_item()],
        vec![token.clone()],
    );
    let mut session: LootSession = LootSession::new(
        instance,
        alice_and_bob(),
        &ruling_of(&[RuleKind::RolePriority]),
        &RolePriority::new(),
        operator(),
    )
    .expect("valid session");
    assert!(session.set_drop_count(drop_item().id(), 1));
    session.evaluate();

    let mut ledger: TestLedger = TestLedger::default();
    assert!(session.award_guaranteed_loot(token.id(), &mut ledger));
    assert_eq!(session.current_state(), SessionState::DistributionStarted);
    assert_eq!(session.guaranteed_loot().get(&token.id()), Some(&true));

    // One zero-quantity row per roster participant.
    assert_eq!(ledger.entries.len(), 2);
    for (_, item, quantity) in &ledger.entries {
        assert_eq!(*item, token.id());
        assert_eq!(*quantity, 0);
    }

    // Awarding the same guaranteed item twice is a no-op.
    assert!(!session.award_guaranteed_loot(token.id(), &mut ledger));
    assert_eq!(ledger.entries.len(), 2);
    assert_eq!(session.events().len(), 1);
    assert!(session.events()[0].winner.is_none());

    // The contested copy is still open; completing it finishes the
    // session.
    assert!(session.award_item((drop_item().id(), 0), drop_item().id(), 0));
    assert_eq!(session.current_state(), SessionState::Finished);
}

#[test]
fn test_guaranteed_award_rejects_unknown_item() {
    let mut session: LootSession = evaluated_session(1);
    let mut ledger: TestLedger = TestLedger::default();

    assert!(!session.award_guaranteed_loot(ItemId::new(901), &mut ledger));
    assert!(ledger.entries.is_empty());
    assert_eq!(session.current_state(), SessionState::LootChosen);
}

#[test]
fn test_guaranteed_award_starts_distribution_before_evaluate() {
    // Guaranteed loot can be handed out while quantities are still
    // being chosen; that locks the quantity list.
    let token: Item = helm(900, 0, false);
    let instance: InstanceDef = InstanceDef::new(
        String::from("Test Encounter"),
        vec![drop_item()],
        vec![token.clone()],
    );
    let mut session: LootSession = LootSession::new(
        instance,
        alice_and_bob(),
        &ruling_of(&[RuleKind::RolePriority]),
        &RolePriority::new(),
        operator(),
    )
    .expect("valid session");

    assert!(session.set_drop_count(drop_item().id(), 1));

    let mut ledger: TestLedger = TestLedger::default();
    assert!(session.award_guaranteed_loot(token.id(), &mut ledger));
    assert_eq!(session.current_state(), SessionState::DistributionStarted);
    assert!(!session.set_drop_count(drop_item().id(), 2));
}
