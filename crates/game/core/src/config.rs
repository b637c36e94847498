/// Compile-time capacities for the data model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_SKILLS: usize = 4;
    pub const MAX_ELEMENT_TYPES: usize = 2;
    pub const MAX_STATUS_EFFECTS: usize = 8;
    pub const MAX_PARTY_SLOTS: usize = 4;
}

/// Tunable parameters for ally decisions.
///
/// Every field has a default, so a partial TOML file only overrides the keys
/// it names.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiConfig {
    /// Maximum number of nodes the pathfinder expands before giving up.
    pub max_search_nodes: usize,

    /// Radius within which a FollowMe ally engages enemies.
    pub engage_radius: u32,

    /// Radius within which a GoAfterFoes ally hunts enemies.
    pub hunt_radius: u32,

    /// Probability that a FollowMe ally uses its best damaging skill when
    /// nothing is super-effective.
    pub skill_use_chance: f64,

    /// HP ratio below which an ally heals itself under any tactic.
    pub self_heal_ratio: f32,

    /// HP ratio below which a StayHere ally heals itself.
    pub hold_heal_ratio: f32,

    /// HP ratio below which an adjacent player counts as hurt.
    pub player_hurt_ratio: f32,

    /// HP ratio below which a FollowMe ally tops itself up beside a hurt player.
    pub escort_heal_ratio: f32,

    /// HP ratio below which a nearby party member counts as critical.
    pub party_critical_ratio: f32,

    /// HP ratio below which a FollowMe ally heals when a party member is critical.
    pub support_heal_ratio: f32,

    /// Radius within which party members are checked for critical HP.
    pub support_radius: u32,
}

impl AiConfig {
    pub const DEFAULT_MAX_SEARCH_NODES: usize = 400;
    pub const DEFAULT_ENGAGE_RADIUS: u32 = 3;
    pub const DEFAULT_HUNT_RADIUS: u32 = 8;
    pub const DEFAULT_SKILL_USE_CHANCE: f64 = 0.6;

    pub fn new() -> Self {
        Self {
            max_search_nodes: Self::DEFAULT_MAX_SEARCH_NODES,
            engage_radius: Self::DEFAULT_ENGAGE_RADIUS,
            hunt_radius: Self::DEFAULT_HUNT_RADIUS,
            skill_use_chance: Self::DEFAULT_SKILL_USE_CHANCE,
            self_heal_ratio: 0.4,
            hold_heal_ratio: 0.6,
            player_hurt_ratio: 0.5,
            escort_heal_ratio: 0.8,
            party_critical_ratio: 0.3,
            support_heal_ratio: 0.7,
            support_radius: 3,
        }
    }

    pub fn with_max_search_nodes(mut self, max_search_nodes: usize) -> Self {
        self.max_search_nodes = max_search_nodes;
        self
    }

    /// Sets the FollowMe skill roll. Non-finite values keep the default and
    /// finite ones are clamped to `0.0..=1.0`.
    pub fn with_skill_use_chance(mut self, skill_use_chance: f64) -> Self {
        self.skill_use_chance = skill_use_chance;
        self.skill_use_chance = self.skill_use_probability();
        self
    }

    /// `skill_use_chance` as a valid probability.
    pub fn skill_use_probability(&self) -> f64 {
        if self.skill_use_chance.is_finite() {
            self.skill_use_chance.clamp(0.0, 1.0)
        } else {
            Self::DEFAULT_SKILL_USE_CHANCE
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new()
    }
}
