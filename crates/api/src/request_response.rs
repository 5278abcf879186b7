// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API response data transfer objects.
//!
//! These DTOs are distinct from engine types and represent the
//! operator contract: flat, serializable, and ordered the way the UI
//! renders them.

use raid_loot::{LootResult, LootSession};
use raid_loot_domain::ItemId;

/// One rule column of a ranked candidate row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RuleScoreView {
    /// The rule kind, as its canonical string.
    pub rule: String,
    /// The comparable score the rule produced.
    pub score: i32,
    /// The display label for the rule column.
    pub label: String,
}

/// One ranked candidate of a container.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CandidateView {
    /// The candidate's player name.
    pub player: String,
    /// The job the candidate loots on.
    pub job: String,
    /// The Need/Greed category.
    pub status: String,
    /// Per-rule scores in ruling order.
    pub rules: Vec<RuleScoreView>,
    /// The rule that separates this candidate from the next-ranked
    /// one, for the explanation tooltip. `None` on the last row or
    /// when only the Need/Greed category separates the pair.
    pub deciding_factor_vs_next: Option<String>,
}

/// One dropped-item copy and its ranked candidates.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContainerView {
    /// The dropped item's id.
    pub item_id: u32,
    /// The dropped item's display name.
    pub item_name: String,
    /// The 0-based copy index.
    pub copy_index: u32,
    /// Whether this copy has been awarded.
    pub is_awarded: bool,
    /// The winner's player name, if awarded.
    pub awarded_to: Option<String>,
    /// Ranked candidates, best first.
    pub candidates: Vec<CandidateView>,
}

/// One guaranteed item and its awarded flag.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GuaranteedView {
    /// The guaranteed item's id.
    pub item_id: u32,
    /// Whether it has been handed out.
    pub awarded: bool,
}

/// The full render model of one session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionView {
    /// The session id.
    pub session_id: String,
    /// The encounter name.
    pub instance: String,
    /// The lifecycle state, as its canonical string.
    pub state: String,
    /// One entry per dropped-item copy, keyed order (item, copy).
    pub containers: Vec<ContainerView>,
    /// The guaranteed loot and its awarded flags.
    pub guaranteed: Vec<GuaranteedView>,
}

impl SessionView {
    /// Renders a session into its response DTO.
    #[must_use]
    pub fn from_session(session_id: &str, session: &LootSession) -> Self {
        let containers: Vec<ContainerView> = session
            .results()
            .iter()
            .map(|(&(item_id, copy_index), container)| {
                let candidates: Vec<CandidateView> = container
                    .results()
                    .iter()
                    .enumerate()
                    .map(|(rank, result)| {
                        candidate_view(session, (item_id, copy_index), rank, result)
                    })
                    .collect();
                ContainerView {
                    item_id: item_id.value(),
                    item_name: container.item().name().to_string(),
                    copy_index,
                    is_awarded: container.is_awarded(),
                    awarded_to: container
                        .awarded_to()
                        .map(|result| result.player().to_string()),
                    candidates,
                }
            })
            .collect();

        let guaranteed: Vec<GuaranteedView> = session
            .guaranteed_loot()
            .iter()
            .map(|(item_id, awarded)| GuaranteedView {
                item_id: item_id.value(),
                awarded: *awarded,
            })
            .collect();

        Self {
            session_id: session_id.to_string(),
            instance: session.instance().name().to_string(),
            state: session.current_state().as_str().to_string(),
            containers,
            guaranteed,
        }
    }
}

fn candidate_view(
    session: &LootSession,
    drop: (ItemId, u32),
    rank: usize,
    result: &LootResult,
) -> CandidateView {
    let rules: Vec<RuleScoreView> = session
        .ruling()
        .rules()
        .iter()
        .map(|rule| {
            let score = result.score(rule.kind());
            RuleScoreView {
                rule: rule.kind().as_str().to_string(),
                score: score.score,
                label: score.label,
            }
        })
        .collect();

    CandidateView {
        player: result.player().to_string(),
        job: result.job().as_str().to_string(),
        status: result.status().as_str().to_string(),
        rules,
        deciding_factor_vs_next: session
            .deciding_factor(drop, rank, rank + 1)
            .map(|kind| kind.as_str().to_string()),
    }
}
