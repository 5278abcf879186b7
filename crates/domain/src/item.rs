// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Equipment items and embedded materia.
//!
//! An [`Item`] is an instance of a catalog entry: its intrinsic data
//! (name, slots, item level, uniqueness, job applicability) is resolved
//! once from the [`crate::ItemCatalog`] at construction time, and the
//! instance may additionally carry melded materia. Item identity is the
//! catalog id alone; materia never affects equality.

use crate::error::DomainError;
use crate::job::{Job, JobCategory};
use crate::slot::GearSlot;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Stable numeric identity of an item, as assigned by the game data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct ItemId(u32);

impl ItemId {
    /// Creates a new `ItemId`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an item is acquired from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemSource {
    Raid,
    Tome,
    Crafted,
    Dungeon,
    Quest,
    #[default]
    Undefined,
}

impl ItemSource {
    /// Returns the string representation of the source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Raid => "raid",
            Self::Tome => "tome",
            Self::Crafted => "crafted",
            Self::Dungeon => "dungeon",
            Self::Quest => "quest",
            Self::Undefined => "undefined",
        }
    }

    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "raid" => Ok(Self::Raid),
            "tome" => Ok(Self::Tome),
            "crafted" => Ok(Self::Crafted),
            "dungeon" => Ok(Self::Dungeon),
            "quest" => Ok(Self::Quest),
            "undefined" => Ok(Self::Undefined),
            _ => Err(DomainError::InvalidSource(s.to_string())),
        }
    }
}

impl FromStr for ItemSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ItemSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The stat a materia modifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MateriaKind {
    CriticalHit,
    Determination,
    DirectHit,
    SkillSpeed,
    SpellSpeed,
    Tenacity,
    Piety,
}

impl MateriaKind {
    /// Returns the string representation of the materia kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CriticalHit => "critical_hit",
            Self::Determination => "determination",
            Self::DirectHit => "direct_hit",
            Self::SkillSpeed => "skill_speed",
            Self::SpellSpeed => "spell_speed",
            Self::Tenacity => "tenacity",
            Self::Piety => "piety",
        }
    }
}

impl std::fmt::Display for MateriaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stat-modifying sub-item melded into an equipment item.
///
/// Materia grades are domain constants numbered 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Materia {
    kind: MateriaKind,
    grade: u8,
}

impl Materia {
    /// Highest materia grade the game data defines.
    pub const MAX_GRADE: u8 = 12;

    /// Creates a new `Materia`.
    ///
    /// # Arguments
    ///
    /// * `kind` - The stat the materia modifies
    /// * `grade` - The materia grade (must be between 1 and 12 inclusive)
    ///
    /// # Errors
    ///
    /// Returns an error if the grade is not in the range 1-12.
    pub const fn new(kind: MateriaKind, grade: u8) -> Result<Self, DomainError> {
        if grade >= 1 && grade <= Self::MAX_GRADE {
            Ok(Self { kind, grade })
        } else {
            Err(DomainError::InvalidMateriaGrade { grade })
        }
    }

    /// Returns the stat this materia modifies.
    #[must_use]
    pub const fn kind(&self) -> MateriaKind {
        self.kind
    }

    /// Returns the materia grade.
    #[must_use]
    pub const fn grade(&self) -> u8 {
        self.grade
    }
}

/// Catalog-resolved intrinsic data for an item id.
///
/// Definitions are immutable game data. The ranking engine never stores
/// item level or slot sets redundantly; they live here and are embedded
/// into [`Item`] instances at the catalog boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    id: ItemId,
    name: String,
    slots: Vec<GearSlot>,
    item_level: u32,
    source: ItemSource,
    unique: bool,
    job_category: JobCategory,
}

impl ItemDefinition {
    /// Creates a new `ItemDefinition`.
    #[must_use]
    pub const fn new(
        id: ItemId,
        name: String,
        slots: Vec<GearSlot>,
        item_level: u32,
        source: ItemSource,
        unique: bool,
        job_category: JobCategory,
    ) -> Self {
        Self {
            id,
            name,
            slots,
            item_level,
            source,
            unique,
            job_category,
        }
    }

    /// Creates the degenerate definition used for ids the catalog cannot
    /// resolve: no slots, item level 0, applicable to no job.
    ///
    /// A single bad id must never abort evaluation of a session.
    #[must_use]
    pub const fn unresolved(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            slots: Vec::new(),
            item_level: 0,
            source: ItemSource::Undefined,
            unique: false,
            job_category: JobCategory::none(),
        }
    }

    /// Returns the item id.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the slots the item can occupy.
    #[must_use]
    pub fn slots(&self) -> &[GearSlot] {
        &self.slots
    }

    /// Returns the item level.
    #[must_use]
    pub const fn item_level(&self) -> u32 {
        self.item_level
    }

    /// Returns the source category.
    #[must_use]
    pub const fn source(&self) -> ItemSource {
        self.source
    }

    /// Returns whether at most one copy may be owned.
    #[must_use]
    pub const fn is_unique(&self) -> bool {
        self.unique
    }

    /// Returns the jobs that may equip this item.
    #[must_use]
    pub const fn job_category(&self) -> &JobCategory {
        &self.job_category
    }
}

/// An item instance: a catalog definition plus melded materia.
///
/// Two items are equal when their ids are equal; materia is cosmetic to
/// identity. A weapon whose slot set covers both hand slots is
/// two-handed and counts double in gear set item level aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    definition: ItemDefinition,
    materia: Vec<Materia>,
}

// Identity is the catalog id alone. Materia and resolved data never
// participate in equality or hashing.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.definition.id() == other.definition.id()
    }
}

impl Eq for Item {}

impl std::hash::Hash for Item {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.definition.id().hash(state);
    }
}

impl Item {
    /// Creates an item from an already-resolved definition.
    #[must_use]
    pub const fn new(definition: ItemDefinition) -> Self {
        Self {
            definition,
            materia: Vec::new(),
        }
    }

    /// Resolves an id through the catalog and creates an item.
    ///
    /// Ids the catalog does not know degrade to
    /// [`ItemDefinition::unresolved`] rather than failing.
    #[must_use]
    pub fn from_catalog(catalog: &dyn crate::ItemCatalog, id: ItemId) -> Self {
        let definition: ItemDefinition = catalog
            .lookup(id)
            .cloned()
            .unwrap_or_else(|| ItemDefinition::unresolved(id));
        Self::new(definition)
    }

    /// Returns the item id.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.definition.id()
    }

    /// Returns the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.definition.name()
    }

    /// Returns the slots the item can occupy.
    #[must_use]
    pub fn slots(&self) -> &[GearSlot] {
        self.definition.slots()
    }

    /// Returns the item level.
    #[must_use]
    pub const fn item_level(&self) -> u32 {
        self.definition.item_level()
    }

    /// Returns the source category.
    #[must_use]
    pub const fn source(&self) -> ItemSource {
        self.definition.source()
    }

    /// Returns whether at most one copy may be owned.
    #[must_use]
    pub const fn is_unique(&self) -> bool {
        self.definition.is_unique()
    }

    /// Returns whether the given job may equip this item.
    #[must_use]
    pub fn applicable_to(&self, job: Job) -> bool {
        self.definition.job_category().contains(job)
    }

    /// Returns whether the item occupies both hand slots.
    #[must_use]
    pub fn is_two_handed(&self) -> bool {
        let slots: &[GearSlot] = self.definition.slots();
        slots.contains(&GearSlot::MainHand) && slots.contains(&GearSlot::OffHand)
    }

    /// Returns the melded materia.
    #[must_use]
    pub fn materia(&self) -> &[Materia] {
        &self.materia
    }

    /// Melds a materia onto this item.
    pub fn add_materia(&mut self, materia: Materia) {
        self.materia.push(materia);
    }

    /// Replaces all melded materia, used when an award copies materia
    /// across from the winner's target gear.
    pub fn set_materia(&mut self, materia: Vec<Materia>) {
        self.materia = materia;
    }

    /// Builder-style variant of [`Self::add_materia`].
    #[must_use]
    pub fn with_materia(mut self, materia: Materia) -> Self {
        self.materia.push(materia);
        self
    }
}
