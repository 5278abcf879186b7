// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Equipment slots.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An equipment slot on a gear set.
///
/// Slots are fixed domain constants. `Ring1` and `Ring2` are
/// interchangeable for ring items; every other slot is unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearSlot {
    MainHand,
    OffHand,
    Head,
    Body,
    Hands,
    Legs,
    Feet,
    Ear,
    Neck,
    Wrist,
    Ring1,
    Ring2,
}

impl GearSlot {
    /// Every slot, in display order.
    pub const ALL: [Self; 12] = [
        Self::MainHand,
        Self::OffHand,
        Self::Head,
        Self::Body,
        Self::Hands,
        Self::Legs,
        Self::Feet,
        Self::Ear,
        Self::Neck,
        Self::Wrist,
        Self::Ring1,
        Self::Ring2,
    ];

    /// Returns true for the two interchangeable ring slots.
    #[must_use]
    pub const fn is_ring(&self) -> bool {
        matches!(self, Self::Ring1 | Self::Ring2)
    }

    /// Returns the string representation of the slot.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MainHand => "main_hand",
            Self::OffHand => "off_hand",
            Self::Head => "head",
            Self::Body => "body",
            Self::Hands => "hands",
            Self::Legs => "legs",
            Self::Feet => "feet",
            Self::Ear => "ear",
            Self::Neck => "neck",
            Self::Wrist => "wrist",
            Self::Ring1 => "ring1",
            Self::Ring2 => "ring2",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .find(|slot| slot.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::InvalidSlot(s.to_string()))
    }
}

impl FromStr for GearSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for GearSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_string_round_trip() {
        for slot in GearSlot::ALL {
            let s: &str = slot.as_str();
            match GearSlot::parse_str(s) {
                Ok(parsed) => assert_eq!(slot, parsed),
                Err(e) => panic!("Failed to parse slot string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_slot_string() {
        assert!(GearSlot::parse_str("belt").is_err());
    }

    #[test]
    fn test_only_rings_are_rings() {
        for slot in GearSlot::ALL {
            assert_eq!(
                slot.is_ring(),
                matches!(slot, GearSlot::Ring1 | GearSlot::Ring2)
            );
        }
    }
}
