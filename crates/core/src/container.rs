// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Result containers and the multi-criteria comparator.
//!
//! A container holds every candidate's [`LootResult`] for exactly one
//! dropped-item copy, sorted by the session ruling. The comparator is
//! a strict tie-break chain: Need/Greed category first, then each rule
//! of the ruling in configured order, scores descending. The
//! [`LootResultContainer::deciding_factor`] query exposes the same
//! chain separately from the sort, so the UI can explain *why* one
//! candidate outranked another.

use crate::result::LootResult;
use crate::ruling::LootRuling;
use crate::rules::{EvalContext, RuleKind};
use raid_loot_domain::{Item, Job, Participant, RolePriority};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Compares two results under a ruling.
///
/// Returns:
/// - `Ordering::Less` if `a` outranks `b` (should be listed first)
/// - `Ordering::Greater` if `b` outranks `a`
/// - `Ordering::Equal` if every rule ties (stable sort keeps insertion
///   order)
#[must_use]
pub fn compare_results(a: &LootResult, b: &LootResult, ruling: &LootRuling) -> Ordering {
    // 1. Category: Need sorts before Greed, ascending by weight.
    match a.status().weight().cmp(&b.status().weight()) {
        Ordering::Less => return Ordering::Less,
        Ordering::Greater => return Ordering::Greater,
        Ordering::Equal => {}
    }

    // 2. Each configured rule in precedence order, scores descending.
    for rule in ruling.rules() {
        let score_a: i32 = a.score(rule.kind()).score;
        let score_b: i32 = b.score(rule.kind()).score;
        match score_b.cmp(&score_a) {
            Ordering::Less => return Ordering::Less,
            Ordering::Greater => return Ordering::Greater,
            Ordering::Equal => {}
        }
    }

    Ordering::Equal
}

/// Draws the loot roll for a fresh candidate, in `[0, 100]` inclusive.
fn draw_roll() -> i32 {
    rand::random_range(0..=100)
}

/// All candidates for one specific dropped-item copy.
///
/// ## Invariants
///
/// - Once the award index is set it is permanent; the container
///   refuses further awards and skips re-evaluation.
/// - Sort order is entirely determined by the ruling passed to the
///   most recent [`Self::evaluate`] call.
#[derive(Debug, Clone)]
pub struct LootResultContainer {
    item: Item,
    copy_index: u32,
    results: Vec<LootResult>,
    awarded_index: Option<usize>,
}

impl LootResultContainer {
    /// Creates an empty container for one item copy.
    #[must_use]
    pub(crate) const fn new(item: Item, copy_index: u32) -> Self {
        Self {
            item,
            copy_index,
            results: Vec::new(),
            awarded_index: None,
        }
    }

    /// Returns the dropped item this container distributes.
    #[must_use]
    pub const fn item(&self) -> &Item {
        &self.item
    }

    /// Returns the 0-based copy index of this drop.
    #[must_use]
    pub const fn copy_index(&self) -> u32 {
        self.copy_index
    }

    /// Returns the items this drop can turn into for a candidate.
    #[must_use]
    pub fn droppable_items(&self) -> Vec<Item> {
        vec![self.item.clone()]
    }

    /// Returns the ranked candidate results, best first.
    #[must_use]
    pub fn results(&self) -> &[LootResult] {
        &self.results
    }

    /// Returns whether this copy has been awarded.
    #[must_use]
    pub const fn is_awarded(&self) -> bool {
        self.awarded_index.is_some()
    }

    /// Returns the winning result, if this copy has been awarded.
    #[must_use]
    pub fn awarded_to(&self) -> Option<&LootResult> {
        self.awarded_index.and_then(|index| self.results.get(index))
    }

    /// Rebuilds and re-sorts the candidate results.
    ///
    /// Results are replaced wholesale, but each candidate's roll is
    /// carried forward keyed by (player, job) so rolls are drawn
    /// exactly once per session. With `frozen` set the candidate list
    /// cannot grow or shrink; only the existing candidates' needs and
    /// scores are recomputed. An awarded container never re-evaluates.
    pub(crate) fn evaluate(
        &mut self,
        roster: &[Participant],
        ruling: &LootRuling,
        priorities: &RolePriority,
        manual_scores: &BTreeMap<usize, i32>,
        frozen: bool,
    ) {
        if self.is_awarded() {
            return;
        }

        let previous_rolls: BTreeMap<(String, Job), i32> = self
            .results
            .iter()
            .map(|result| ((result.player().to_string(), result.job()), result.roll()))
            .collect();

        let candidates: Vec<usize> = if frozen {
            self.results
                .iter()
                .map(LootResult::participant_index)
                .collect()
        } else {
            (0..roster.len()).collect()
        };

        let droppable: Vec<Item> = self.droppable_items();
        let mut fresh: Vec<LootResult> = candidates
            .into_iter()
            .filter_map(|index| {
                let participant: &Participant = roster.get(index)?;
                let key: (String, Job) = (participant.player().to_string(), participant.job());
                let roll: i32 = previous_rolls
                    .get(&key)
                    .copied()
                    .unwrap_or_else(draw_roll);
                let ctx: EvalContext<'_> = EvalContext {
                    participant,
                    priorities,
                    manual_score: manual_scores.get(&index).copied().unwrap_or(0),
                };
                Some(LootResult::evaluate(
                    index,
                    participant,
                    &droppable,
                    roll,
                    ruling,
                    &ctx,
                ))
            })
            .collect();

        fresh.sort_by(|a, b| compare_results(a, b, ruling));
        self.results = fresh;
    }

    /// Marks a candidate as the winner and records the awarded item on
    /// their result.
    ///
    /// Returns `false` without mutation if the container is already
    /// awarded or the index is out of range.
    pub(crate) fn mark_awarded(&mut self, index: usize, item: Item) -> bool {
        if self.awarded_index.is_some() {
            return false;
        }
        let Some(result) = self.results.get_mut(index) else {
            return false;
        };
        result.set_awarded_item(item);
        self.awarded_index = Some(index);
        true
    }

    /// Returns the first rule, in ruling order, whose scores differ
    /// between two ranked results.
    ///
    /// `None` means the pair is truly tied under every rule, or only
    /// the Need/Greed category separates them (the category is not a
    /// rule), or an index is out of range.
    #[must_use]
    pub fn deciding_factor(
        &self,
        upper: usize,
        lower: usize,
        ruling: &LootRuling,
    ) -> Option<RuleKind> {
        let a: &LootResult = self.results.get(upper)?;
        let b: &LootResult = self.results.get(lower)?;
        ruling
            .rules()
            .iter()
            .map(crate::rules::LootRule::kind)
            .find(|kind| a.score(*kind).score != b.score(*kind).score)
    }
}
