// Layout, animation and decoration tuning for the web frontend.

// Element sizing (css px)
pub const SPAWN_MARGIN: f32 = 60.0; // keeps freshly spawned quarks inside the area
pub const DRAG_Z_INDEX: &str = "9999";

// Quark wobble animation
pub const WOBBLE_DELAY_MAX_SEC: f32 = 2.0;

// Background sparkles
pub const SPARKLE_INITIAL_COUNT: usize = 50;
pub const SPARKLE_SPAWN_INTERVAL_SEC: f32 = 2.0;
pub const SPARKLE_LIFETIME_SEC: f32 = 30.0;
pub const SPARKLE_DELAY_MAX_SEC: f32 = 5.0;
pub const SPARKLE_DURATION_MIN_SEC: f32 = 10.0;
pub const SPARKLE_DURATION_SPAN_SEC: f32 = 10.0;

// Clamp for frame time so a backgrounded tab does not burst-spawn on return
pub const MAX_FRAME_DT_SEC: f32 = 0.25;

// DOM hooks
pub const SIMULATION_AREA_ID: &str = "simulation-area";
pub const SPARKLES_CONTAINER_ID: &str = "sparkles-container";
pub const MERGE_MODAL_ID: &str = "mergeModal";
pub const KNOWN_PARTICLES_MODAL_ID: &str = "knownParticlesModal";
pub const KNOWN_PARTICLES_LIST_ID: &str = "knownParticlesList";
pub const SPARKLES_INFO_MODAL_ID: &str = "sparklesInfoModal";
pub const HIDDEN_CLASS: &str = "hidden";
