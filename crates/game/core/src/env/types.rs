//! Type-effectiveness oracle and its lookup-table implementation.

use strum::EnumCount;

use crate::state::ElementType;

/// Type-effectiveness oracle.
pub trait TypeChartOracle: Send + Sync {
    /// Multiplier for an attack of `attack` type against a single defending type.
    fn multiplier(&self, attack: ElementType, defend: ElementType) -> f32;

    /// Combined multiplier against every defending type.
    ///
    /// Multipliers compound, so a 2.0 and a 0.5 cancel out and any 0.0 makes
    /// the defender immune. An empty slice is neutral.
    fn effectiveness(&self, attack: ElementType, defenders: &[ElementType]) -> f32 {
        defenders
            .iter()
            .map(|defend| self.multiplier(attack, *defend))
            .product()
    }
}

/// Dense attack-by-defend multiplier table.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeChart {
    table: [[f32; ElementType::COUNT]; ElementType::COUNT],
}

impl TypeChart {
    /// Every matchup at 1.0.
    pub fn neutral() -> Self {
        Self {
            table: [[1.0; ElementType::COUNT]; ElementType::COUNT],
        }
    }

    /// The conventional eighteen-type chart.
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_MATCHUPS.iter().copied())
    }

    /// Neutral table overridden by `(attack, defend, multiplier)` entries.
    ///
    /// Later entries win over earlier ones for the same pair.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ElementType, ElementType, f32)>,
    {
        let mut chart = Self::neutral();
        for (attack, defend, multiplier) in entries {
            chart.set(attack, defend, multiplier);
        }
        chart
    }

    /// Overrides one matchup. Negative multipliers are clamped to 0.
    pub fn set(&mut self, attack: ElementType, defend: ElementType, multiplier: f32) {
        self.table[attack.index()][defend.index()] = multiplier.max(0.0);
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::neutral()
    }
}

impl TypeChartOracle for TypeChart {
    fn multiplier(&self, attack: ElementType, defend: ElementType) -> f32 {
        self.table[attack.index()][defend.index()]
    }
}

use ElementType::*;

const STANDARD_MATCHUPS: &[(ElementType, ElementType, f32)] = &[
    // Normal
    (Normal, Rock, 0.5),
    (Normal, Ghost, 0.0),
    (Normal, Steel, 0.5),
    // Fire
    (Fire, Fire, 0.5),
    (Fire, Water, 0.5),
    (Fire, Grass, 2.0),
    (Fire, Ice, 2.0),
    (Fire, Bug, 2.0),
    (Fire, Rock, 0.5),
    (Fire, Dragon, 0.5),
    (Fire, Steel, 2.0),
    // Water
    (Water, Fire, 2.0),
    (Water, Water, 0.5),
    (Water, Grass, 0.5),
    (Water, Ground, 2.0),
    (Water, Rock, 2.0),
    (Water, Dragon, 0.5),
    // Grass
    (Grass, Fire, 0.5),
    (Grass, Water, 2.0),
    (Grass, Grass, 0.5),
    (Grass, Poison, 0.5),
    (Grass, Ground, 2.0),
    (Grass, Flying, 0.5),
    (Grass, Bug, 0.5),
    (Grass, Rock, 2.0),
    (Grass, Dragon, 0.5),
    (Grass, Steel, 0.5),
    // Electric
    (Electric, Water, 2.0),
    (Electric, Grass, 0.5),
    (Electric, Electric, 0.5),
    (Electric, Ground, 0.0),
    (Electric, Flying, 2.0),
    (Electric, Dragon, 0.5),
    // Ice
    (Ice, Fire, 0.5),
    (Ice, Water, 0.5),
    (Ice, Grass, 2.0),
    (Ice, Ice, 0.5),
    (Ice, Ground, 2.0),
    (Ice, Flying, 2.0),
    (Ice, Dragon, 2.0),
    (Ice, Steel, 0.5),
    // Fighting
    (Fighting, Normal, 2.0),
    (Fighting, Ice, 2.0),
    (Fighting, Poison, 0.5),
    (Fighting, Flying, 0.5),
    (Fighting, Psychic, 0.5),
    (Fighting, Bug, 0.5),
    (Fighting, Rock, 2.0),
    (Fighting, Ghost, 0.0),
    (Fighting, Dark, 2.0),
    (Fighting, Steel, 2.0),
    (Fighting, Fairy, 0.5),
    // Poison
    (Poison, Grass, 2.0),
    (Poison, Poison, 0.5),
    (Poison, Ground, 0.5),
    (Poison, Rock, 0.5),
    (Poison, Ghost, 0.5),
    (Poison, Steel, 0.0),
    (Poison, Fairy, 2.0),
    // Ground
    (Ground, Fire, 2.0),
    (Ground, Grass, 0.5),
    (Ground, Electric, 2.0),
    (Ground, Poison, 2.0),
    (Ground, Flying, 0.0),
    (Ground, Bug, 0.5),
    (Ground, Rock, 2.0),
    (Ground, Steel, 2.0),
    // Flying
    (Flying, Grass, 2.0),
    (Flying, Electric, 0.5),
    (Flying, Fighting, 2.0),
    (Flying, Bug, 2.0),
    (Flying, Rock, 0.5),
    (Flying, Steel, 0.5),
    // Psychic
    (Psychic, Fighting, 2.0),
    (Psychic, Poison, 2.0),
    (Psychic, Psychic, 0.5),
    (Psychic, Dark, 0.0),
    (Psychic, Steel, 0.5),
    // Bug
    (Bug, Fire, 0.5),
    (Bug, Grass, 2.0),
    (Bug, Fighting, 0.5),
    (Bug, Poison, 0.5),
    (Bug, Flying, 0.5),
    (Bug, Psychic, 2.0),
    (Bug, Ghost, 0.5),
    (Bug, Dark, 2.0),
    (Bug, Steel, 0.5),
    (Bug, Fairy, 0.5),
    // Rock
    (Rock, Fire, 2.0),
    (Rock, Ice, 2.0),
    (Rock, Fighting, 0.5),
    (Rock, Ground, 0.5),
    (Rock, Flying, 2.0),
    (Rock, Bug, 2.0),
    (Rock, Steel, 0.5),
    // Ghost
    (Ghost, Normal, 0.0),
    (Ghost, Psychic, 2.0),
    (Ghost, Ghost, 2.0),
    (Ghost, Dark, 0.5),
    // Dragon
    (Dragon, Dragon, 2.0),
    (Dragon, Steel, 0.5),
    (Dragon, Fairy, 0.0),
    // Dark
    (Dark, Fighting, 0.5),
    (Dark, Psychic, 2.0),
    (Dark, Ghost, 2.0),
    (Dark, Dark, 0.5),
    (Dark, Fairy, 0.5),
    // Steel
    (Steel, Fire, 0.5),
    (Steel, Water, 0.5),
    (Steel, Electric, 0.5),
    (Steel, Ice, 2.0),
    (Steel, Rock, 2.0),
    (Steel, Steel, 0.5),
    (Steel, Fairy, 2.0),
    // Fairy
    (Fairy, Fire, 0.5),
    (Fairy, Fighting, 2.0),
    (Fairy, Poison, 0.5),
    (Fairy, Dragon, 2.0),
    (Fairy, Dark, 2.0),
    (Fairy, Steel, 0.5),
];
