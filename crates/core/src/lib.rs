// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod container;
mod error;
mod result;
mod rules;
mod ruling;
mod session;

#[cfg(test)]
mod tests;

pub use container::{LootResultContainer, compare_results};
pub use error::CoreError;
pub use result::{LootResult, NeedStatus};
pub use rules::{EvalContext, LootRule, RuleKind, RuleScore};
pub use ruling::LootRuling;
pub use session::{LootSession, SessionState};
