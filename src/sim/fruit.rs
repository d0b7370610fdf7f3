//! Fruit entities: corner spawns with inward ballistic trajectories

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::geom::distance_point_to_segment;
use super::particle::Particle;
use crate::consts::{
    BURST_COUNT, FRUIT_SIZE, OFFSCREEN_MARGIN, SPAWN_SPEED_MIN, SPAWN_SPEED_RANGE,
};

/// Fruit silhouette. The point value is per shape unless the color overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Star,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Circle, Shape::Square, Shape::Triangle, Shape::Star];

    /// Base score for slicing this shape
    pub fn point_value(self) -> i32 {
        match self {
            Shape::Circle => 1,
            Shape::Square => 5,
            Shape::Triangle => 3,
            Shape::Star => 5,
        }
    }
}

/// Fixed 4-color palette. Red is the hazard color: slicing it always costs
/// points, whatever the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruitColor {
    Red,
    Amber,
    Green,
    Blue,
}

impl FruitColor {
    pub const ALL: [FruitColor; 4] = [
        FruitColor::Red,
        FruitColor::Amber,
        FruitColor::Green,
        FruitColor::Blue,
    ];

    /// CSS color handed to the render surface
    pub fn css(self) -> &'static str {
        match self {
            FruitColor::Red => "#ff4444",
            FruitColor::Amber => "#ffbb33",
            FruitColor::Green => "#00C851",
            FruitColor::Blue => "#33b5e5",
        }
    }

    pub fn is_penalty(self) -> bool {
        matches!(self, FruitColor::Red)
    }
}

/// Score for slicing a penalty-colored fruit, any shape
pub const PENALTY_POINTS: i32 = -5;

/// Score for slicing a fruit: the penalty color overrides the shape table.
pub fn point_value(shape: Shape, color: FruitColor) -> i32 {
    if color.is_penalty() {
        PENALTY_POINTS
    } else {
        shape.point_value()
    }
}

/// Screen corner a fruit enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

#[derive(Debug, Clone)]
pub struct Fruit {
    /// Top-left of the bounding square
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub shape: Shape,
    pub color: FruitColor,
    /// Score awarded on slice; fixed at spawn
    pub points: i32,
    /// One-way flag: a sliced fruit is inert (no hits, renders nothing)
    pub sliced: bool,
}

impl Fruit {
    /// Spawn one full size outside `corner` with velocity pointing diagonally
    /// inward. Per-axis speed is uniform in [3, 5), so every fruit crosses
    /// the visible area if nothing slices it.
    pub fn spawn(corner: Corner, viewport: Vec2, rng: &mut Pcg32) -> Self {
        let size = FRUIT_SIZE;
        let sx = rng.random_range(SPAWN_SPEED_MIN..SPAWN_SPEED_MIN + SPAWN_SPEED_RANGE);
        let sy = rng.random_range(SPAWN_SPEED_MIN..SPAWN_SPEED_MIN + SPAWN_SPEED_RANGE);
        let (pos, vel) = match corner {
            Corner::TopLeft => (Vec2::new(-size, -size), Vec2::new(sx, sy)),
            Corner::TopRight => (Vec2::new(viewport.x + size, -size), Vec2::new(-sx, sy)),
            Corner::BottomLeft => (Vec2::new(-size, viewport.y + size), Vec2::new(sx, -sy)),
            Corner::BottomRight => (
                Vec2::new(viewport.x + size, viewport.y + size),
                Vec2::new(-sx, -sy),
            ),
        };
        let shape = Shape::ALL[rng.random_range(0..Shape::ALL.len())];
        let color = FruitColor::ALL[rng.random_range(0..FruitColor::ALL.len())];
        Self {
            pos,
            vel,
            size,
            shape,
            color,
            points: point_value(shape, color),
            sliced: false,
        }
    }

    /// Center of the bounding square
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    /// Move one tick. Returns true when the fruit is far enough outside the
    /// canvas to discard (the wide margin lets it exit fully before removal).
    pub fn advance(&mut self, viewport: Vec2) -> bool {
        self.pos += self.vel;
        self.is_offscreen(viewport)
    }

    /// More than `OFFSCREEN_MARGIN` sizes past any edge. Strict comparison:
    /// sitting exactly on the margin is still onscreen.
    pub fn is_offscreen(&self, viewport: Vec2) -> bool {
        let margin = self.size * OFFSCREEN_MARGIN;
        self.pos.x < -margin
            || self.pos.x > viewport.x + margin
            || self.pos.y < -margin
            || self.pos.y > viewport.y + margin
    }

    /// True iff the segment passes through the fruit's bounding circle.
    /// The hit radius is size/2 for every shape. Sliced fruits never hit.
    pub fn hit_test(&self, a: Vec2, b: Vec2) -> bool {
        if self.sliced {
            return false;
        }
        distance_point_to_segment(self.center(), a, b) < self.size / 2.0
    }

    /// Burst of shine particles at the fruit center, in its color.
    pub fn shatter(&self, rng: &mut Pcg32) -> Vec<Particle> {
        (0..BURST_COUNT)
            .map(|_| Particle::new(self.center(), self.color, rng))
            .collect()
    }
}
