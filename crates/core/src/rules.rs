// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loot rules.
//!
//! A rule is a pure evaluation function mapping a candidate's
//! [`LootResult`] (plus session context) to a comparable score and a
//! display label. The rule set is closed: adding a rule kind is a
//! compile-time enumeration extension, and every dispatch over
//! [`RuleKind`] is an exhaustive match. There is no process-wide rule
//! registry; [`RuleKind::all`] is the enumerable factory.

use crate::result::LootResult;
use raid_loot_domain::{Participant, RolePriority};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of loot rule kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// A random roll drawn once per result.
    Random,
    /// Lowest overall current item level ranks first.
    LowestItemLevel,
    /// Highest item-level gain over current gear ranks first.
    HighestItemLevelGain,
    /// Needing the drop for the target set beats needing it as a mere
    /// upgrade.
    BisOverUpgrade,
    /// Configured role priority (lower configured value ranks first).
    RolePriority,
    /// An externally supplied ranking value, e.g. a damage ranking.
    ManualOverride,
}

impl RuleKind {
    /// Every rule kind, in canonical order.
    ///
    /// This is the enumerable factory injected wherever the UI needs
    /// the full rule list; there is deliberately no global registry.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Random,
            Self::LowestItemLevel,
            Self::HighestItemLevelGain,
            Self::BisOverUpgrade,
            Self::RolePriority,
            Self::ManualOverride,
        ]
    }

    /// Returns the string representation of the rule kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::LowestItemLevel => "lowest_item_level",
            Self::HighestItemLevelGain => "highest_item_level_gain",
            Self::BisOverUpgrade => "bis_over_upgrade",
            Self::RolePriority => "role_priority",
            Self::ManualOverride => "manual_override",
        }
    }

    fn parse_str(s: &str) -> Result<Self, crate::error::CoreError> {
        Self::all()
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| crate::error::CoreError::InvalidRuleKind(s.to_string()))
    }
}

impl FromStr for RuleKind {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The score and display label one rule produced for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleScore {
    /// The comparable score; higher wins within a rule.
    pub score: i32,
    /// The label shown to the operator for this rule column.
    pub label: String,
}

impl RuleScore {
    /// The neutral score produced by a rule that is not applicable to a
    /// candidate.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            score: 0,
            label: String::from("none"),
        }
    }
}

/// Session context a rule may consult while scoring a candidate.
///
/// Everything here is borrowed from the owning session for the duration
/// of one evaluation pass; rules never mutate it.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    /// The candidate being scored.
    pub participant: &'a Participant,
    /// The session's role priority snapshot.
    pub priorities: &'a RolePriority,
    /// The operator-entered manual override value for this candidate.
    pub manual_score: i32,
}

/// One configured loot rule.
///
/// A rule wraps a [`RuleKind`] and carries value semantics: two rules
/// are equal exactly when their kinds are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootRule {
    kind: RuleKind,
}

impl LootRule {
    /// Creates a rule of the given kind.
    #[must_use]
    pub const fn new(kind: RuleKind) -> Self {
        Self { kind }
    }

    /// Returns the rule kind.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Scores a candidate under this rule.
    ///
    /// Pure: the same result and context always produce the same score,
    /// except that `Random` reads the roll drawn once at result
    /// construction (and therefore is stable per result, too).
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn evaluate(&self, result: &LootResult, ctx: &EvalContext<'_>) -> RuleScore {
        match self.kind {
            RuleKind::Random => RuleScore {
                score: result.roll(),
                label: result.roll().to_string(),
            },
            RuleKind::LowestItemLevel => {
                let level: u32 = ctx.participant.current().item_level();
                RuleScore {
                    score: -(level as i32),
                    label: level.to_string(),
                }
            }
            RuleKind::HighestItemLevelGain => {
                let gain: Option<i32> = result
                    .needed_items()
                    .iter()
                    .map(|item| {
                        let floor: u32 = ctx.participant.current().min_item_level_in(item.slots());
                        item.item_level() as i32 - floor as i32
                    })
                    .max();
                // The gain is deliberately unclamped: a candidate whose
                // current slot already exceeds the drop reports a
                // negative gain.
                gain.map_or_else(RuleScore::neutral, |gain| RuleScore {
                    score: gain,
                    label: gain.to_string(),
                })
            }
            RuleKind::BisOverUpgrade => {
                let in_target: bool = result
                    .needed_items()
                    .iter()
                    .any(|item| ctx.participant.target().contains(item.id()));
                if in_target {
                    RuleScore {
                        score: 1,
                        label: String::from("y"),
                    }
                } else {
                    RuleScore {
                        score: -1,
                        label: String::from("n"),
                    }
                }
            }
            RuleKind::RolePriority => {
                let priority: i32 = ctx.priorities.get(ctx.participant.role());
                RuleScore {
                    score: -priority,
                    label: priority.to_string(),
                }
            }
            RuleKind::ManualOverride => RuleScore {
                score: ctx.manual_score,
                label: String::from("none"),
            },
        }
    }
}

impl std::fmt::Display for LootRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}
