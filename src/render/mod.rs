//! Render contract and shape path construction
//!
//! The simulation never touches a drawing API directly; it renders through
//! `RenderSurface`, which the browser layer implements over the canvas 2D
//! context and tests implement with recorders.

use glam::Vec2;

use crate::sim::{Fruit, Particle, Shape};

/// Minimal drawing contract the game needs: a clear plus three filled
/// primitives with a settable fill color and opacity.
pub trait RenderSurface {
    fn clear(&mut self);
    /// Fill color (CSS string) and opacity for subsequent fills
    fn set_fill(&mut self, color: &str, alpha: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    /// `pos` is the top-left corner
    fn fill_rect(&mut self, pos: Vec2, size: Vec2);
    fn fill_polygon(&mut self, points: &[Vec2]);
}

/// Draw a fruit. Sliced fruits render nothing.
pub fn draw_fruit(fruit: &Fruit, surface: &mut dyn RenderSurface) {
    if fruit.sliced {
        return;
    }
    surface.set_fill(fruit.color.css(), 1.0);
    let size = fruit.size;
    match fruit.shape {
        Shape::Circle => surface.fill_circle(fruit.center(), size / 2.0),
        Shape::Square => surface.fill_rect(fruit.pos, Vec2::splat(size)),
        Shape::Triangle => surface.fill_polygon(&triangle_points(fruit.pos, size)),
        Shape::Star => {
            surface.fill_polygon(&star_points(fruit.center(), 5, size / 2.0, size / 4.0))
        }
    }
}

/// Draw a particle: a filled dot fading out with its remaining life.
pub fn draw_particle(particle: &Particle, surface: &mut dyn RenderSurface) {
    surface.set_fill(particle.color.css(), particle.life.clamp(0.0, 1.0));
    surface.fill_circle(particle.pos, particle.size);
}

/// Triangle inscribed in the bounding square: apex top-center, base corners.
pub fn triangle_points(pos: Vec2, size: f32) -> [Vec2; 3] {
    [
        Vec2::new(pos.x + size / 2.0, pos.y),
        Vec2::new(pos.x + size, pos.y + size),
        Vec2::new(pos.x, pos.y + size),
    ]
}

/// Star outline: `spikes` outer vertices alternating with inner ones at
/// evenly spaced angles, starting straight up from the center.
pub fn star_points(center: Vec2, spikes: usize, outer: f32, inner: f32) -> Vec<Vec2> {
    use std::f32::consts::{FRAC_PI_2, PI};
    let step = PI / spikes as f32;
    (0..spikes * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = -FRAC_PI_2 + i as f32 * step;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}
