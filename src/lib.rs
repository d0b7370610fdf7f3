//! Shape Slash - a corner-spawn shape slicing arcade game
//!
//! Core modules:
//! - `sim`: gameplay simulation (entities, gesture slicing, round state)
//! - `render`: render-surface contract and shape path construction
//! - `platform`: driver supervision and browser bindings

pub mod platform;
pub mod render;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Simulation/render tick period in milliseconds (~60 Hz)
    pub const SIM_PERIOD_MS: i32 = 16;
    /// One fruit spawns per period
    pub const SPAWN_PERIOD_MS: i32 = 1000;
    /// Countdown decrements once per period
    pub const COUNTDOWN_PERIOD_MS: i32 = 1000;

    /// Round length in seconds
    pub const ROUND_SECONDS: u32 = 60;

    /// Bounding-square edge length for every fruit
    pub const FRUIT_SIZE: f32 = 40.0;
    /// Per-axis spawn speed is uniform in [MIN, MIN + RANGE), pixels per tick
    pub const SPAWN_SPEED_MIN: f32 = 3.0;
    pub const SPAWN_SPEED_RANGE: f32 = 2.0;
    /// A fruit is culled once it is this many sizes past any canvas edge
    pub const OFFSCREEN_MARGIN: f32 = 2.0;

    /// Particles in one shatter burst
    pub const BURST_COUNT: usize = 20;
    /// Life lost per particle tick (life starts at 1.0)
    pub const PARTICLE_DECAY: f32 = 0.02;
    /// Size lost per particle tick (floored at 0)
    pub const PARTICLE_SHRINK: f32 = 0.1;
}
