// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for the engine tests.

use crate::{CoreError, LootRuling, LootSession, RuleKind};
use raid_loot_audit::Actor;
use raid_loot_domain::{
    GearSet, GearSlot, InstanceDef, InventoryLedger, Item, ItemDefinition, ItemId, ItemSource,
    Job, JobCategory, Participant, RolePriority,
};

/// Builds an equippable item with full job applicability.
pub fn item(id: u32, ilvl: u32, slots: Vec<GearSlot>, unique: bool) -> Item {
    Item::new(ItemDefinition::new(
        ItemId::new(id),
        format!("Item {id}"),
        slots,
        ilvl,
        ItemSource::Raid,
        unique,
        JobCategory::all(),
    ))
}

/// Builds a head-slot item, the workhorse of these tests.
pub fn helm(id: u32, ilvl: u32, unique: bool) -> Item {
    item(id, ilvl, vec![GearSlot::Head], unique)
}

/// Fills every slot with a distinct item of uniform level.
///
/// Slot items get ids from `id_base` upward, so two gear sets built
/// from different bases never alias.
pub fn full_gear(id_base: u32, ilvl: u32) -> GearSet {
    let mut gear: GearSet = GearSet::new();
    for (index, slot) in GearSlot::ALL.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        gear.set(*slot, item(id_base + index as u32, ilvl, vec![*slot], false));
    }
    gear
}

/// Builds a participant with uniform current gear.
pub fn participant(player: &str, job: Job, id_base: u32, ilvl: u32) -> Participant {
    let gear: GearSet = full_gear(id_base, ilvl);
    Participant::new(player.to_string(), job, gear.clone(), gear)
}

/// The operator every test session runs under.
pub fn operator() -> Actor {
    Actor::new(String::from("op-1"), String::from("operator"))
}

/// Builds a session over the given drops with no guaranteed loot.
pub fn session_with_drops(
    roster: Vec<Participant>,
    drops: Vec<Item>,
    ruling: &LootRuling,
) -> Result<LootSession, CoreError> {
    let instance: InstanceDef = InstanceDef::new(String::from("Test Encounter"), drops, Vec::new());
    LootSession::new(instance, roster, ruling, &RolePriority::new(), operator())
}

/// A ruling made of exactly the given kinds, in order.
pub fn ruling_of(kinds: &[RuleKind]) -> LootRuling {
    LootRuling::from_kinds(kinds).expect("test rulings are duplicate-free")
}

/// An in-memory inventory ledger capturing every recorded entry.
#[derive(Debug, Default)]
pub struct TestLedger {
    pub entries: Vec<(String, ItemId, u32)>,
}

impl InventoryLedger for TestLedger {
    fn record(&mut self, player: &str, item: ItemId, quantity: u32) {
        self.entries.push((player.to_string(), item, quantity));
    }
}
