// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loot rulings.
//!
//! A ruling is an ordered list of loot rules; the order is the
//! tie-break precedence chain. Sessions take an independent clone of
//! the configured ruling at start, so editing the shared default never
//! affects an in-progress session.

use crate::error::CoreError;
use crate::rules::{LootRule, RuleKind};
use serde::{Deserialize, Serialize};

/// An ordered, duplicate-free list of loot rules.
///
/// ## Invariants
///
/// - No rule kind appears twice.
/// - Order is significant: earlier rules take precedence when sorting
///   and tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootRuling {
    rules: Vec<LootRule>,
}

impl LootRuling {
    /// Creates an empty ruling.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates the conventional default ruling: target-set needs beat
    /// plain upgrades, then role priority, then the larger upgrade,
    /// then the weaker gear set, then the dice.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: vec![
                LootRule::new(RuleKind::BisOverUpgrade),
                LootRule::new(RuleKind::RolePriority),
                LootRule::new(RuleKind::HighestItemLevelGain),
                LootRule::new(RuleKind::LowestItemLevel),
                LootRule::new(RuleKind::Random),
            ],
        }
    }

    /// Creates a ruling from an ordered rule-kind list.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateRule` if a kind appears twice.
    pub fn from_kinds(kinds: &[RuleKind]) -> Result<Self, CoreError> {
        let mut ruling: Self = Self::empty();
        for kind in kinds {
            ruling.push(LootRule::new(*kind))?;
        }
        Ok(ruling)
    }

    /// Appends a rule to the end of the precedence chain.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateRule` if the ruling already
    /// contains a rule of this kind.
    pub fn push(&mut self, rule: LootRule) -> Result<(), CoreError> {
        if self.contains(rule.kind()) {
            return Err(CoreError::DuplicateRule { kind: rule.kind() });
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Checks whether the ruling contains a rule of the given kind.
    #[must_use]
    pub fn contains(&self, kind: RuleKind) -> bool {
        self.rules.iter().any(|rule| rule.kind() == kind)
    }

    /// Returns the rules in precedence order.
    #[must_use]
    pub fn rules(&self) -> &[LootRule] {
        &self.rules
    }

    /// Returns the number of configured rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns whether the ruling is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for LootRuling {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_ruling_has_no_duplicates() {
        let ruling: LootRuling = LootRuling::standard();
        for (index, rule) in ruling.rules().iter().enumerate() {
            assert!(
                !ruling.rules()[..index]
                    .iter()
                    .any(|earlier| earlier.kind() == rule.kind())
            );
        }
    }

    #[test]
    fn test_push_rejects_duplicate_kind() {
        let mut ruling: LootRuling = LootRuling::empty();
        assert!(ruling.push(LootRule::new(RuleKind::Random)).is_ok());

        let result = ruling.push(LootRule::new(RuleKind::Random));
        assert_eq!(
            result,
            Err(CoreError::DuplicateRule {
                kind: RuleKind::Random
            })
        );
        assert_eq!(ruling.len(), 1);
    }

    #[test]
    fn test_from_kinds_preserves_order() {
        let ruling: LootRuling =
            LootRuling::from_kinds(&[RuleKind::RolePriority, RuleKind::Random])
                .unwrap_or_else(|_| LootRuling::empty());

        let kinds: Vec<RuleKind> = ruling.rules().iter().map(|rule| rule.kind()).collect();
        assert_eq!(kinds, vec![RuleKind::RolePriority, RuleKind::Random]);
    }

    #[test]
    fn test_clone_is_independent() {
        let shared: LootRuling = LootRuling::standard();
        let mut session_copy: LootRuling = shared.clone();
        let _ = session_copy.push(LootRule::new(RuleKind::ManualOverride));

        assert_eq!(shared.len(), 5);
        assert_eq!(session_copy.len(), 6);
    }
}
