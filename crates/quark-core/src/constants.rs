// Merge limits and proximity tuning shared by every frontend.

// Composition size
pub const MAX_CONSTITUENTS: usize = 5; // largest composition a merge may produce

// Optional cap on simultaneous multi-constituent entities (off unless enabled)
pub const DEFAULT_POPULATION_LIMIT: usize = 5;

// Interaction
pub const MERGE_DISTANCE: f32 = 50.0; // centre-to-centre distance (css px) that offers a merge

// Canonical key / display separator
pub const KEY_SEPARATOR: char = '+';
pub const ANTI_PREFIX: &str = "Anti-";
