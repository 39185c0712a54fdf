//! The dream list model: the ordered dreams shown by the list screen plus its
//! favorite-creature selection

use crate::dream::{Creature, Dream, Effect, UnicornColor};
use crate::error::Result;
use crate::fields;
use crate::value::{Value, ValueMap};

const DREAMS: &str = "dreams";
const FAVORITE_CREATURE: &str = "favoriteCreature";

const DEFAULT_FAVORITE: Creature = Creature::Unicorn(UnicornColor::Pink);

/// The three dreams a brand-new list starts with
pub fn default_seed_dreams() -> Vec<Dream> {
    vec![
        Dream::new(
            "Dream 1",
            Creature::Unicorn(UnicornColor::Pink),
            [Effect::FireBreathing],
        ),
        Dream::new(
            "Dream 2",
            Creature::Unicorn(UnicornColor::Yellow),
            [Effect::LaserFocus, Effect::Magic],
        )
        .with_number_of_creatures(2),
        Dream::new(
            "Dream 3",
            Creature::Unicorn(UnicornColor::White),
            [Effect::FireBreathing, Effect::LaserFocus],
        )
        .with_number_of_creatures(3),
    ]
}

/// Ordered dreams plus the list screen's selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DreamListModel {
    /// Creature highlighted on the list screen
    pub favorite_creature: Creature,
    dreams: Vec<Dream>,
}

impl DreamListModel {
    /// Create a model from its parts
    pub fn new(favorite_creature: Creature, dreams: Vec<Dream>) -> Self {
        Self {
            favorite_creature,
            dreams,
        }
    }

    /// The model shown when nothing has been saved yet
    pub fn initial() -> Self {
        Self::new(DEFAULT_FAVORITE, default_seed_dreams())
    }

    /// All dreams, in display order
    pub fn dreams(&self) -> &[Dream] {
        &self.dreams
    }

    /// Dream at `index`
    pub fn get(&self, index: usize) -> Option<&Dream> {
        self.dreams.get(index)
    }

    /// Number of dreams
    pub fn len(&self) -> usize {
        self.dreams.len()
    }

    /// Whether the list holds no dreams
    pub fn is_empty(&self) -> bool {
        self.dreams.is_empty()
    }

    /// Add a dream at the end of the list
    pub fn append(&mut self, dream: Dream) {
        self.dreams.push(dream);
    }

    /// Remove and return the last dream
    pub fn remove_last(&mut self) -> Option<Dream> {
        self.dreams.pop()
    }

    /// Replace the dream at `index`, returning the previous one
    ///
    /// Returns `None` and leaves the list untouched when `index` is out of bounds.
    pub fn replace(&mut self, index: usize, dream: Dream) -> Option<Dream> {
        let slot = self.dreams.get_mut(index)?;
        Some(std::mem::replace(slot, dream))
    }

    /// Describe how `other` differs from this model
    pub fn diffed(&self, other: &DreamListModel) -> ModelDiff {
        ModelDiff {
            favorite_creature_changed: self.favorite_creature != other.favorite_creature,
            dream_change: DreamChange::between(&self.dreams, &other.dreams),
        }
    }

    /// Encode into the storage mapping
    pub fn encode(&self) -> ValueMap {
        let dreams: Vec<Value> = self.dreams.iter().map(Value::from).collect();

        let mut map = ValueMap::new();
        map.insert(DREAMS.to_string(), Value::List(dreams));
        map.insert(
            FAVORITE_CREATURE.to_string(),
            Value::Int(self.favorite_creature.code()),
        );
        map
    }

    /// Rebuild a model from a storage mapping
    ///
    /// Stops at the first dream that fails to decode. A missing favorite
    /// creature falls back to the initial model's; an invalid one fails.
    pub fn decode(map: &ValueMap) -> Result<Self> {
        let dreams = fields::list(map, DREAMS)?
            .iter()
            .map(|item| Dream::decode(fields::map(item, DREAMS)?))
            .collect::<Result<Vec<_>>>()?;

        let favorite_creature = match map.get(FAVORITE_CREATURE) {
            Some(value) => Creature::decode(value, FAVORITE_CREATURE)?,
            None => DEFAULT_FAVORITE,
        };

        Ok(Self::new(favorite_creature, dreams))
    }
}

impl Default for DreamListModel {
    fn default() -> Self {
        Self::initial()
    }
}

impl TryFrom<&ValueMap> for DreamListModel {
    type Error = crate::DecodeError;

    fn try_from(map: &ValueMap) -> Result<Self> {
        Self::decode(map)
    }
}

/// Difference between two list models
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDiff {
    /// Whether the favorite creature differs
    pub favorite_creature_changed: bool,
    /// How the dream sequence changed, if at all
    pub dream_change: Option<DreamChange>,
}

impl ModelDiff {
    /// Whether anything changed
    pub fn has_changes(&self) -> bool {
        self.favorite_creature_changed || self.dream_change.is_some()
    }
}

/// A change to the dream sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DreamChange {
    /// One dream was appended at `index`
    Inserted { index: usize, dream: Dream },
    /// The last dream, previously at `index`, was removed
    Removed { index: usize, dream: Dream },
    /// Same length; the dreams at these indices differ
    Updated { indices: Vec<usize> },
    /// Anything else; the list must be reloaded wholesale
    Replaced,
}

impl DreamChange {
    fn between(from: &[Dream], to: &[Dream]) -> Option<Self> {
        if from == to {
            return None;
        }

        let change = match (from.len(), to.len()) {
            (a, b) if a == b => DreamChange::Updated {
                indices: from
                    .iter()
                    .zip(to)
                    .enumerate()
                    .filter(|(_, (x, y))| x != y)
                    .map(|(i, _)| i)
                    .collect(),
            },
            (a, b) if b == a + 1 && to.starts_with(from) => DreamChange::Inserted {
                index: a,
                dream: to[a].clone(),
            },
            (a, b) if a == b + 1 && from.starts_with(to) => DreamChange::Removed {
                index: b,
                dream: from[b].clone(),
            },
            _ => DreamChange::Replaced,
        };
        Some(change)
    }
}
