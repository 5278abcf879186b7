// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-candidate loot evaluation.
//!
//! A [`LootResult`] is one (participant, job) evaluation against the
//! droppable items of a result container: which of those items the
//! candidate actually needs, the Need/Greed category that follows, and
//! the score every configured rule produced. Results are replaced
//! wholesale on re-evaluation; only the random roll survives, carried
//! forward by the container so it is drawn exactly once per candidate
//! per session.

use crate::ruling::LootRuling;
use crate::rules::{EvalContext, RuleKind, RuleScore};
use raid_loot_domain::{GearSet, Item, Job, Participant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether a candidate needs a drop or merely wants it.
///
/// `Need` always sorts before `Greed`; the numeric weights keep the
/// comparison explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedStatus {
    /// The drop measurably improves the candidate's loadout.
    Need,
    /// The drop does not improve the candidate's loadout.
    Greed,
}

impl NeedStatus {
    /// Returns the numeric weight used by the comparator (ascending).
    #[must_use]
    pub const fn weight(&self) -> u8 {
        match self {
            Self::Need => 0,
            Self::Greed => 10,
        }
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Need => "need",
            Self::Greed => "greed",
        }
    }
}

impl std::fmt::Display for NeedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One candidate's evaluation for one dropped-item copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootResult {
    participant_index: usize,
    player: String,
    job: Job,
    roll: i32,
    needed_items: Vec<Item>,
    status: NeedStatus,
    scores: BTreeMap<RuleKind, RuleScore>,
    awarded_item: Option<Item>,
}

impl LootResult {
    /// Evaluates a candidate against a droppable item set.
    ///
    /// The roll is supplied by the container (drawn once per candidate
    /// per session and carried across re-evaluations); everything else
    /// is recomputed from the candidate's gear as it stands now.
    #[must_use]
    pub fn evaluate(
        participant_index: usize,
        participant: &Participant,
        droppable: &[Item],
        roll: i32,
        ruling: &LootRuling,
        ctx: &EvalContext<'_>,
    ) -> Self {
        let needed_items: Vec<Item> = droppable
            .iter()
            .filter(|item| item.applicable_to(participant.job()))
            .filter(|item| is_needed(item, participant.current(), participant.target()))
            .cloned()
            .collect();

        let status: NeedStatus = if needed_items.is_empty() {
            NeedStatus::Greed
        } else {
            NeedStatus::Need
        };

        let mut result: Self = Self {
            participant_index,
            player: participant.player().to_string(),
            job: participant.job(),
            roll,
            needed_items,
            status,
            scores: BTreeMap::new(),
            awarded_item: None,
        };

        for rule in ruling.rules() {
            let score: RuleScore = rule.evaluate(&result, ctx);
            result.scores.insert(rule.kind(), score);
        }

        result
    }

    /// Returns the index of the candidate in the session roster.
    #[must_use]
    pub const fn participant_index(&self) -> usize {
        self.participant_index
    }

    /// Returns the candidate's player name.
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Returns the job the candidate was evaluated on.
    #[must_use]
    pub const fn job(&self) -> Job {
        self.job
    }

    /// Returns the roll drawn at construction.
    #[must_use]
    pub const fn roll(&self) -> i32 {
        self.roll
    }

    /// Returns the droppable items this candidate needs.
    #[must_use]
    pub fn needed_items(&self) -> &[Item] {
        &self.needed_items
    }

    /// Returns the Need/Greed category.
    #[must_use]
    pub const fn status(&self) -> NeedStatus {
        self.status
    }

    /// Returns the score a rule produced, or the neutral score for a
    /// rule outside the session ruling.
    #[must_use]
    pub fn score(&self, kind: RuleKind) -> RuleScore {
        self.scores
            .get(&kind)
            .cloned()
            .unwrap_or_else(RuleScore::neutral)
    }

    /// Returns the full per-rule score map.
    #[must_use]
    pub const fn scores(&self) -> &BTreeMap<RuleKind, RuleScore> {
        &self.scores
    }

    /// Returns the item awarded to this candidate, if any.
    #[must_use]
    pub const fn awarded_item(&self) -> Option<&Item> {
        self.awarded_item.as_ref()
    }

    pub(crate) fn set_awarded_item(&mut self, item: Item) {
        self.awarded_item = Some(item);
    }
}

/// Decides whether a single droppable item is needed.
///
/// An item is needed when it is a target-set piece the candidate does
/// not yet wear, or when it is still a plain upgrade: not a unique the
/// candidate already owns, and not outclassed in every slot it could
/// occupy by gear matching both the target level and the drop's own
/// level.
fn is_needed(item: &Item, current: &GearSet, target: &GearSet) -> bool {
    let in_target_and_missing: bool = target.contains(item.id()) && !current.contains(item.id());
    if in_target_and_missing {
        return true;
    }

    let unique_and_owned: bool = item.is_unique() && current.contains(item.id());

    // An unresolved item has no slots, so `all` is vacuously true and
    // the item is treated as fully covered.
    let fully_covered: bool = item.slots().iter().all(|slot| {
        let current_level: u32 = current.item_level_at(*slot);
        current_level >= target.item_level_at(*slot) && current_level >= item.item_level()
    });

    !unique_and_owned && !fully_covered
}
