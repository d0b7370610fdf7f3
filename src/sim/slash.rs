//! Slice gesture tracking
//!
//! A drag is an ordered path of pointer samples. Only the most recent
//! segment is ever tested; every live fruit it crosses is sliced in the
//! same pass, each awarding its points independently.

use glam::Vec2;
use rand_pcg::Pcg32;

use super::fruit::Fruit;
use super::particle::Particle;

/// What one appended segment did to the world.
#[derive(Debug, Default)]
pub struct SliceOutcome {
    /// Net score change (sum of sliced fruits' point values; can be negative)
    pub score_delta: i32,
    /// Number of fruits sliced by this segment
    pub hits: u32,
    /// Shatter bursts for every sliced fruit
    pub particles: Vec<Particle>,
}

/// State machine over {idle, dragging} tracking the pointer path.
#[derive(Debug, Default)]
pub struct SlashTracker {
    dragging: bool,
    points: Vec<Vec2>,
}

impl SlashTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drag start: the path restarts at the press point.
    pub fn press(&mut self, p: Vec2) {
        self.dragging = true;
        self.points.clear();
        self.points.push(p);
    }

    /// Drag sample: append `p` and test the newest segment against every
    /// live fruit. Returns `None` while idle. When nothing was hit the path
    /// collapses to the single latest point, so distance never accumulates
    /// across misses.
    pub fn slice(
        &mut self,
        p: Vec2,
        fruits: &mut [Fruit],
        rng: &mut Pcg32,
    ) -> Option<SliceOutcome> {
        if !self.dragging {
            return None;
        }
        self.points.push(p);
        let n = self.points.len();
        let (a, b) = (self.points[n - 2], self.points[n - 1]);

        let mut outcome = SliceOutcome::default();
        for fruit in fruits.iter_mut() {
            if fruit.hit_test(a, b) {
                fruit.sliced = true;
                outcome.score_delta += fruit.points;
                outcome.hits += 1;
                outcome.particles.extend(fruit.shatter(rng));
            }
        }

        if outcome.hits == 0 {
            self.points.drain(..n - 1);
        }
        Some(outcome)
    }

    /// Drag end (release, or the pointer leaving the surface).
    pub fn release(&mut self) {
        self.dragging = false;
        self.points.clear();
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Number of samples currently on the path.
    pub fn path_len(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BURST_COUNT, FRUIT_SIZE};
    use crate::sim::fruit::{FruitColor, Shape, point_value};
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(11)
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
    fn idle_tracker_ignores_samples() {
        let mut tracker = SlashTracker::new();
        let mut fruits = vec![fruit_at(Vec2::new(5.0, 5.0), Shape::Circle, FruitColor::Green)];
        assert!(tracker.slice(Vec2::new(5.0, 5.0), &mut fruits, &mut rng()).is_none());
        assert!(!fruits[0].sliced);
        assert_eq!(tracker.path_len(), 0);
    }

    #[test]
    fn press_resets_the_path_to_one_point() {
        let mut tracker = SlashTracker::new();
        tracker.press(Vec2::new(1.0, 1.0));
        assert!(tracker.is_dragging());
        assert_eq!(tracker.path_len(), 1);
        tracker.press(Vec2::new(9.0, 9.0));
        assert_eq!(tracker.path_len(), 1);
    }

    #[test]
    fn miss_collapses_path_to_latest_point() {
        let mut tracker = SlashTracker::new();
        let mut fruits = vec![fruit_at(Vec2::new(700.0, 500.0), Shape::Square, FruitColor::Blue)];
        tracker.press(Vec2::new(0.0, 0.0));
        let outcome = tracker
            .slice(Vec2::new(10.0, 10.0), &mut fruits, &mut rng())
            .unwrap();
        assert_eq!(outcome.hits, 0);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(tracker.path_len(), 1);
        // Further misses keep collapsing
        tracker.slice(Vec2::new(20.0, 20.0), &mut fruits, &mut rng());
        assert_eq!(tracker.path_len(), 1);
    }

    #[test]
    fn hit_slices_and_keeps_the_path() {
        let mut rng = rng();
        let center = Vec2::new(100.0, 100.0);
        let mut fruits = vec![fruit_at(center, Shape::Triangle, FruitColor::Green)];
        let mut tracker = SlashTracker::new();
        tracker.press(center - Vec2::new(50.0, 0.0));
        let outcome = tracker
            .slice(center + Vec2::new(50.0, 0.0), &mut fruits, &mut rng)
            .unwrap();
        assert_eq!(outcome.hits, 1);
        assert_eq!(outcome.score_delta, 3);
        assert_eq!(outcome.particles.len(), BURST_COUNT);
        assert!(fruits[0].sliced);
        assert_eq!(tracker.path_len(), 2);
    }

    #[test]
    fn one_segment_slices_every_fruit_it_crosses() {
        let mut rng = rng();
        let mut fruits = vec![
            fruit_at(Vec2::new(80.0, 100.0), Shape::Square, FruitColor::Green),
            fruit_at(Vec2::new(120.0, 100.0), Shape::Star, FruitColor::Blue),
            fruit_at(Vec2::new(100.0, 400.0), Shape::Circle, FruitColor::Amber),
        ];
        let mut tracker = SlashTracker::new();
        tracker.press(Vec2::new(0.0, 100.0));
        let outcome = tracker
            .slice(Vec2::new(200.0, 100.0), &mut fruits, &mut rng)
            .unwrap();
        assert_eq!(outcome.hits, 2);
        assert_eq!(outcome.score_delta, 5 + 5);
        assert_eq!(outcome.particles.len(), 2 * BURST_COUNT);
        assert!(fruits[0].sliced && fruits[1].sliced);
        assert!(!fruits[2].sliced);
    }

    #[test]
    fn slicing_twice_has_no_further_effect() {
        let mut rng = rng();
        let center = Vec2::new(100.0, 100.0);
        let mut fruits = vec![fruit_at(center, Shape::Star, FruitColor::Green)];
        let mut tracker = SlashTracker::new();
        tracker.press(center - Vec2::new(50.0, 0.0));
        tracker.slice(center + Vec2::new(50.0, 0.0), &mut fruits, &mut rng);
        let again = tracker
            .slice(center - Vec2::new(50.0, 0.0), &mut fruits, &mut rng)
            .unwrap();
        assert_eq!(again.hits, 0);
        assert_eq!(again.score_delta, 0);
    }

    #[test]
    fn release_clears_everything() {
        let mut tracker = SlashTracker::new();
        tracker.press(Vec2::new(1.0, 1.0));
        tracker.release();
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.path_len(), 0);
    }
}
