//! Per-frame simulation pass

use glam::Vec2;

use super::round::Round;
use crate::render::{RenderSurface, draw_fruit, draw_particle};

/// One frame: clear the surface, then advance/render/cull particles, then
/// fruits. Every live entity is advanced and rendered exactly once per tick;
/// removal is retain-in-place so iteration order stays stable.
pub fn frame(round: &mut Round, surface: &mut dyn RenderSurface, viewport: Vec2) {
    surface.clear();

    round.particles.retain_mut(|particle| {
        particle.advance();
        if !particle.alive() {
            return false;
        }
        draw_particle(particle, surface);
        true
    });

    round.fruits.retain_mut(|fruit| {
        if fruit.advance(viewport) {
            return false;
        }
        draw_fruit(fruit, surface);
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRUIT_SIZE;
    use crate::sim::fruit::{Fruit, FruitColor, Shape, point_value};
    use crate::sim::round::DisplaySink;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        circles: usize,
        rects: usize,
        polygons: usize,
    }

    impl RenderSurface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn set_fill(&mut self, _color: &str, _alpha: f32) {}
        fn fill_circle(&mut self, _center: Vec2, _radius: f32) {
            self.circles += 1;
        }
        fn fill_rect(&mut self, _pos: Vec2, _size: Vec2) {
            self.rects += 1;
        }
        fn fill_polygon(&mut self, _points: &[Vec2]) {
            self.polygons += 1;
        }
    }

    struct NullSink;
    impl DisplaySink for NullSink {
        fn score_changed(&mut self, _score: i32) {}
        fn time_changed(&mut self, _seconds: u32) {}
        fn round_ended(&mut self) {}
    }

    fn fruit_at(center: Vec2, shape: Shape, color: FruitColor) -> Fruit {
        Fruit {
            pos: center - Vec2::splat(FRUIT_SIZE / 2.0),
            vel: Vec2::ZERO,
            size: FRUIT_SIZE,
            shape,
            color,
            points: point_value(shape, color),
            sliced: false,
        }
    }

    #[test]
    fn frame_clears_then_renders_live_entities() {
        let mut round = Round::new(1);
        round.fruits.push(fruit_at(Vec2::new(100.0, 100.0), Shape::Circle, FruitColor::Green));
        round.fruits.push(fruit_at(Vec2::new(200.0, 200.0), Shape::Square, FruitColor::Blue));

        let mut surface = RecordingSurface::default();
        frame(&mut round, &mut surface, VIEWPORT);

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles, 1);
        assert_eq!(surface.rects, 1);
        assert_eq!(round.fruits.len(), 2);
    }

    #[test]
    fn every_fruit_advances_exactly_once_per_frame() {
        let mut round = Round::new(2);
        let mut fruit = fruit_at(Vec2::new(100.0, 100.0), Shape::Circle, FruitColor::Green);
        fruit.vel = Vec2::new(4.0, 3.0);
        let start = fruit.pos;
        round.fruits.push(fruit);

        let mut surface = RecordingSurface::default();
        frame(&mut round, &mut surface, VIEWPORT);
        assert_eq!(round.fruits[0].pos, start + Vec2::new(4.0, 3.0));
    }

    #[test]
    fn offscreen_fruits_are_culled_without_rendering() {
        let mut round = Round::new(3);
        let mut fruit = fruit_at(Vec2::new(100.0, 100.0), Shape::Star, FruitColor::Amber);
        fruit.pos = Vec2::new(-2.0 * FRUIT_SIZE, 100.0);
        fruit.vel = Vec2::new(-5.0, 0.0);
        round.fruits.push(fruit);

        let mut surface = RecordingSurface::default();
        frame(&mut round, &mut surface, VIEWPORT);
        assert!(round.fruits.is_empty());
        assert_eq!(surface.polygons, 0);
    }

    #[test]
    fn sliced_fruits_stay_until_offscreen_but_render_nothing() {
        let mut round = Round::new(4);
        let mut fruit = fruit_at(Vec2::new(100.0, 100.0), Shape::Circle, FruitColor::Green);
        fruit.sliced = true;
        round.fruits.push(fruit);

        let mut surface = RecordingSurface::default();
        frame(&mut round, &mut surface, VIEWPORT);
        assert_eq!(round.fruits.len(), 1, "sliced fruit is culled lazily");
        assert_eq!(surface.circles, 0);
    }

    #[test]
    fn particles_advance_render_and_die() {
        let mut round = Round::new(5);
        let mut sink = NullSink;
        round.start(&mut sink);
        let center = Vec2::new(400.0, 300.0);
        round.fruits.push(fruit_at(center, Shape::Circle, FruitColor::Blue));
        round.pointer_press(center - Vec2::new(50.0, 0.0));
        round.pointer_move(center + Vec2::new(50.0, 0.0), &mut sink);
        let burst = round.particles.len();
        assert!(burst > 0);

        let mut surface = RecordingSurface::default();
        frame(&mut round, &mut surface, VIEWPORT);
        // Each particle rendered once this frame; the only fruit is sliced
        // so it contributes no circle
        assert_eq!(surface.circles, burst);
        assert!((round.particles[0].life - 0.98).abs() < 1e-6);

        // Life reaches zero after 50 decays; the whole burst dies together
        for _ in 0..50 {
            frame(&mut round, &mut surface, VIEWPORT);
        }
        assert!(round.particles.is_empty());
    }
}
