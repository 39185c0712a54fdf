//! Dream records and their map codec
//!
//! A [`Dream`] is a value type: a description, the creature seen, the set of
//! effects attached to it and how many creatures appeared. It is stored as a
//! flat `ValueMap`:
//!
//! ```text
//! {
//!   "description": string,
//!   "creature": int (0..=5),
//!   "effects": [int (0..=5), ...],
//!   "numberOfCreatures": int (>= 1),
//! }
//! ```

use crate::error::{DecodeError, Result};
use crate::fields;
use crate::value::{Value, ValueMap};
use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroU32;

pub(crate) const DESCRIPTION: &str = "description";
pub(crate) const CREATURE: &str = "creature";
pub(crate) const EFFECTS: &str = "effects";
pub(crate) const NUMBER_OF_CREATURES: &str = "numberOfCreatures";

/// Color of a unicorn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnicornColor {
    Yellow,
    Pink,
    White,
}

/// The creature seen in a dream
///
/// In memory the unicorn keeps its color as a nested case; at the storage
/// boundary all six identities share one flat code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Creature {
    Unicorn(UnicornColor),
    Crusty,
    Shark,
    Dragon,
}

impl Creature {
    /// All creatures, in code order
    pub const ALL: [Creature; 6] = [
        Creature::Unicorn(UnicornColor::Yellow),
        Creature::Unicorn(UnicornColor::Pink),
        Creature::Unicorn(UnicornColor::White),
        Creature::Crusty,
        Creature::Shark,
        Creature::Dragon,
    ];

    /// Storage code for this creature
    pub fn code(&self) -> i64 {
        match self {
            Creature::Unicorn(UnicornColor::Yellow) => 0,
            Creature::Unicorn(UnicornColor::Pink) => 1,
            Creature::Unicorn(UnicornColor::White) => 2,
            Creature::Crusty => 3,
            Creature::Shark => 4,
            Creature::Dragon => 5,
        }
    }

    /// Look up a creature by its storage code
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub(crate) fn decode(value: &Value, field: &'static str) -> Result<Self> {
        let code = fields::int(value, field)?;
        Self::from_code(code).ok_or(DecodeError::InvalidCode { field, code })
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Creature::Unicorn(UnicornColor::Yellow) => "Yellow unicorn",
            Creature::Unicorn(UnicornColor::Pink) => "Pink unicorn",
            Creature::Unicorn(UnicornColor::White) => "White unicorn",
            Creature::Crusty => "Crusty",
            Creature::Shark => "Shark",
            Creature::Dragon => "Dragon",
        };
        f.write_str(name)
    }
}

/// Visual effect attached to a dream
///
/// Ordering follows declaration order, which is also the code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Effect {
    FireBreathing,
    LaserFocus,
    Magic,
    Fireflies,
    Rain,
    Snow,
}

impl Effect {
    /// All effects, in code order
    pub const ALL: [Effect; 6] = [
        Effect::FireBreathing,
        Effect::LaserFocus,
        Effect::Magic,
        Effect::Fireflies,
        Effect::Rain,
        Effect::Snow,
    ];

    /// Storage code for this effect
    pub fn code(&self) -> i64 {
        *self as i64
    }

    /// Look up an effect by its storage code
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }
}

/// One dream entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dream {
    /// Free-form text
    pub description: String,
    /// Creature seen
    pub creature: Creature,
    /// Effects, without duplicates
    pub effects: BTreeSet<Effect>,
    /// How many creatures appeared
    pub number_of_creatures: NonZeroU32,
}

impl Dream {
    /// Create a dream with a single creature
    pub fn new(
        description: impl Into<String>,
        creature: Creature,
        effects: impl IntoIterator<Item = Effect>,
    ) -> Self {
        Self {
            description: description.into(),
            creature,
            effects: effects.into_iter().collect(),
            number_of_creatures: NonZeroU32::MIN,
        }
    }

    /// Return this dream with a different creature count (raised to 1 if zero)
    pub fn with_number_of_creatures(mut self, count: u32) -> Self {
        self.number_of_creatures = NonZeroU32::new(count).unwrap_or(NonZeroU32::MIN);
        self
    }

    /// Encode into the storage mapping
    pub fn encode(&self) -> ValueMap {
        let effects: Vec<Value> = self.effects.iter().map(|e| Value::Int(e.code())).collect();

        let mut map = ValueMap::new();
        map.insert(DESCRIPTION.to_string(), Value::from(self.description.as_str()));
        map.insert(CREATURE.to_string(), Value::Int(self.creature.code()));
        map.insert(EFFECTS.to_string(), Value::List(effects));
        map.insert(
            NUMBER_OF_CREATURES.to_string(),
            Value::from(self.number_of_creatures.get()),
        );
        map
    }

    /// Rebuild a dream from a storage mapping
    ///
    /// Any missing field, wrongly shaped field or unknown code fails; nothing
    /// is substituted with a default.
    pub fn decode(map: &ValueMap) -> Result<Self> {
        let description = fields::string(map, DESCRIPTION)?.to_string();
        let creature = Creature::decode(fields::required(map, CREATURE)?, CREATURE)?;

        let mut effects = BTreeSet::new();
        for item in fields::list(map, EFFECTS)? {
            let code = fields::int(item, EFFECTS)?;
            let effect = Effect::from_code(code).ok_or(DecodeError::InvalidCode {
                field: EFFECTS,
                code,
            })?;
            effects.insert(effect);
        }

        let count = fields::int(
            fields::required(map, NUMBER_OF_CREATURES)?,
            NUMBER_OF_CREATURES,
        )?;
        let number_of_creatures = u32::try_from(count)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(DecodeError::OutOfRange {
                field: NUMBER_OF_CREATURES,
                value: count,
            })?;

        Ok(Self {
            description,
            creature,
            effects,
            number_of_creatures,
        })
    }
}

impl From<&Dream> for Value {
    fn from(dream: &Dream) -> Self {
        Value::Map(dream.encode())
    }
}

impl TryFrom<&ValueMap> for Dream {
    type Error = DecodeError;

    fn try_from(map: &ValueMap) -> Result<Self> {
        Self::decode(map)
    }
}
