// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for the API tests.

use crate::{Operator, OperatorRole, SessionManager};
use raid_loot_domain::{
    GearSet, GearSlot, InstanceDef, Item, ItemDefinition, ItemId, ItemSource, Job, JobCategory,
    Participant,
};

/// The id of the contested helm every fixture session drops.
pub const HELM_ID: u32 = 100;

/// The id of the guaranteed token.
pub const TOKEN_ID: u32 = 900;

pub fn master() -> Operator {
    Operator::new(String::from("op-master"), OperatorRole::Master)
}

pub fn assistant() -> Operator {
    Operator::new(String::from("op-assist"), OperatorRole::Assistant)
}

fn item(id: u32, ilvl: u32, slots: Vec<GearSlot>) -> Item {
    Item::new(ItemDefinition::new(
        ItemId::new(id),
        format!("Item {id}"),
        slots,
        ilvl,
        ItemSource::Raid,
        true,
        JobCategory::all(),
    ))
}

fn uniform_gear(id_base: u32, ilvl: u32) -> GearSet {
    let mut gear: GearSet = GearSet::new();
    for (index, slot) in GearSlot::ALL.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        gear.set(*slot, item(id_base + index as u32, ilvl, vec![*slot]));
    }
    gear
}

/// A tank and a healer, both wanting the contested helm for their
/// target sets.
pub fn roster() -> Vec<Participant> {
    let helm: Item = item(HELM_ID, 615, vec![GearSlot::Head]);

    let mut alice: Participant = Participant::new(
        String::from("Alice"),
        Job::WAR,
        uniform_gear(1000, 600),
        uniform_gear(1000, 600),
    );
    alice.target_mut().set(GearSlot::Head, helm.clone());

    let mut bob: Participant = Participant::new(
        String::from("Bob"),
        Job::WHM,
        uniform_gear(2000, 610),
        uniform_gear(2000, 610),
    );
    bob.target_mut().set(GearSlot::Head, helm);

    vec![alice, bob]
}

/// The fixture encounter: one contested helm, one guaranteed token.
pub fn instance() -> InstanceDef {
    InstanceDef::new(
        String::from("Test Encounter"),
        vec![item(HELM_ID, 615, vec![GearSlot::Head])],
        vec![item(TOKEN_ID, 0, Vec::new())],
    )
}

/// Opens a fixture session, chooses one helm copy, and evaluates.
pub fn evaluated_session(manager: &mut SessionManager) -> String {
    let session_id: String = manager
        .open_session(&master(), instance(), roster())
        .expect("session opens");
    manager
        .set_drop_count(&master(), &session_id, ItemId::new(HELM_ID), 1)
        .expect("drop count accepted");
    manager
        .evaluate(&master(), &session_id)
        .expect("evaluation succeeds");
    session_id
}
