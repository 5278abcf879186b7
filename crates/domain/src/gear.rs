// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gear sets.
//!
//! A gear set is a fixed mapping from slot to at most one item. An
//! empty slot is a well-defined "no item" value; a gear set is never
//! partially invalid. Mutation happens only through explicit slot
//! assignment.

use crate::item::{Item, ItemId};
use crate::slot::GearSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered collection of equipped items across the fixed slots.
///
/// ## Invariants
///
/// - At most one item per slot; dual-wield and shield setups may leave
///   `OffHand` empty.
/// - Aggregate item level is the arithmetic mean over all slots, with a
///   two-handed weapon counted for both hand slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GearSet {
    slots: BTreeMap<GearSlot, Item>,
}

impl GearSet {
    /// Creates an empty gear set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Returns the item equipped in a slot, if any.
    #[must_use]
    pub fn get(&self, slot: GearSlot) -> Option<&Item> {
        self.slots.get(&slot)
    }

    /// Assigns an item to a slot, replacing any previous occupant.
    ///
    /// Placing a two-handed weapon into `MainHand` clears `OffHand`,
    /// since the weapon occupies both hand slots.
    pub fn set(&mut self, slot: GearSlot, item: Item) {
        if slot == GearSlot::MainHand && item.is_two_handed() {
            self.slots.remove(&GearSlot::OffHand);
        }
        self.slots.insert(slot, item);
    }

    /// Clears a slot.
    pub fn clear(&mut self, slot: GearSlot) {
        self.slots.remove(&slot);
    }

    /// Checks whether any slot holds the item with the given id.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.slots.values().any(|item| item.id() == id)
    }

    /// Returns the slots currently holding the item with the given id.
    #[must_use]
    pub fn slots_of(&self, id: ItemId) -> Vec<GearSlot> {
        self.slots
            .iter()
            .filter(|(_, item)| item.id() == id)
            .map(|(slot, _)| *slot)
            .collect()
    }

    /// Returns the effective item level at a slot.
    ///
    /// An empty `OffHand` inherits the main-hand weapon's level when
    /// that weapon is two-handed; any other empty slot is level 0.
    #[must_use]
    pub fn item_level_at(&self, slot: GearSlot) -> u32 {
        if let Some(item) = self.slots.get(&slot) {
            return item.item_level();
        }
        if slot == GearSlot::OffHand
            && let Some(main) = self.slots.get(&GearSlot::MainHand)
            && main.is_two_handed()
        {
            return main.item_level();
        }
        0
    }

    /// Returns the aggregate item level: the arithmetic mean of
    /// per-slot item levels over all fixed slots, with a two-handed
    /// weapon weighted double via the `OffHand` slot.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn item_level(&self) -> u32 {
        let total: u32 = GearSlot::ALL
            .iter()
            .map(|slot| self.item_level_at(*slot))
            .sum();
        total / GearSlot::ALL.len() as u32
    }

    /// Returns the lowest effective item level among the given slots.
    ///
    /// Used by the item-level-gain rule: the gain of a drop is measured
    /// against the weakest slot it could replace. An empty slot list
    /// yields 0.
    #[must_use]
    pub fn min_item_level_in(&self, slots: &[GearSlot]) -> u32 {
        slots
            .iter()
            .map(|slot| self.item_level_at(*slot))
            .min()
            .unwrap_or(0)
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over `(slot, item)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (GearSlot, &Item)> {
        self.slots.iter().map(|(slot, item)| (*slot, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemDefinition, ItemSource};
    use crate::job::JobCategory;

    fn item(id: u32, ilvl: u32, slots: Vec<GearSlot>) -> Item {
        Item::new(ItemDefinition::new(
            ItemId::new(id),
            format!("Item {id}"),
            slots,
            ilvl,
            ItemSource::Raid,
            false,
            JobCategory::all(),
        ))
    }

    fn full_set(ilvl: u32) -> GearSet {
        let mut gear: GearSet = GearSet::new();
        for (index, slot) in GearSlot::ALL.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            gear.set(*slot, item(1000 + index as u32, ilvl, vec![*slot]));
        }
        gear
    }

    #[test]
    fn test_uniform_set_has_uniform_item_level() {
        let gear: GearSet = full_set(600);
        assert_eq!(gear.item_level(), 600);
    }

    #[test]
    fn test_two_handed_weapon_counts_double() {
        let mut gear: GearSet = full_set(600);
        gear.clear(GearSlot::MainHand);
        gear.clear(GearSlot::OffHand);
        gear.set(
            GearSlot::MainHand,
            item(1, 660, vec![GearSlot::MainHand, GearSlot::OffHand]),
        );

        // Ten slots at 600 plus the weapon counted twice at 660.
        assert_eq!(gear.item_level(), (600 * 10 + 660 * 2) / 12);
    }

    #[test]
    fn test_two_handed_weapon_evicts_off_hand() {
        let mut gear: GearSet = GearSet::new();
        gear.set(GearSlot::OffHand, item(2, 590, vec![GearSlot::OffHand]));
        gear.set(
            GearSlot::MainHand,
            item(1, 615, vec![GearSlot::MainHand, GearSlot::OffHand]),
        );

        assert!(gear.get(GearSlot::OffHand).is_none());
        assert_eq!(gear.item_level_at(GearSlot::OffHand), 615);
    }

    #[test]
    fn test_contains_and_slots_of() {
        let mut gear: GearSet = GearSet::new();
        let ring: Item = item(77, 580, vec![GearSlot::Ring1, GearSlot::Ring2]);
        gear.set(GearSlot::Ring2, ring);

        assert!(gear.contains(ItemId::new(77)));
        assert!(!gear.contains(ItemId::new(78)));
        assert_eq!(gear.slots_of(ItemId::new(77)), vec![GearSlot::Ring2]);
    }

    #[test]
    fn test_min_item_level_over_slots() {
        let mut gear: GearSet = GearSet::new();
        gear.set(GearSlot::Ring1, item(5, 620, vec![GearSlot::Ring1]));
        gear.set(GearSlot::Ring2, item(6, 560, vec![GearSlot::Ring2]));

        assert_eq!(
            gear.min_item_level_in(&[GearSlot::Ring1, GearSlot::Ring2]),
            560
        );
        // Empty slots count as level 0.
        assert_eq!(gear.min_item_level_in(&[GearSlot::Head]), 0);
    }
}
