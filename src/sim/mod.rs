//! Gameplay simulation
//!
//! All game logic lives here, free of platform and drawing dependencies:
//! corner-spawned entities on ballistic trajectories, gesture-based hit
//! detection, burst particles and round state. Rendering goes through the
//! `RenderSurface` trait and notifications through `DisplaySink`, so every
//! piece runs in native tests.

pub mod fruit;
pub mod geom;
pub mod particle;
pub mod round;
pub mod slash;
pub mod tick;

pub use fruit::{Corner, Fruit, FruitColor, PENALTY_POINTS, Shape};
pub use geom::distance_point_to_segment;
pub use particle::Particle;
pub use round::{DisplaySink, Round};
pub use slash::{SlashTracker, SliceOutcome};
pub use tick::frame;
