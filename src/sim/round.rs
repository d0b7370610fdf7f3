//! Round state and lifecycle
//!
//! Owns everything one play session mutates: score, countdown, the fruit and
//! particle lists, the gesture tracker and the RNG. The three periodic
//! drivers (frame, spawn, countdown) call into the entry points here;
//! supervision of the drivers themselves lives in the platform layer.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::fruit::{Corner, Fruit};
use super::particle::Particle;
use super::slash::SlashTracker;
use crate::consts::ROUND_SECONDS;

/// Receives score/time/game-over notifications; the embedder decides how to
/// present them.
pub trait DisplaySink {
    fn score_changed(&mut self, score: i32);
    fn time_changed(&mut self, seconds: u32);
    fn round_ended(&mut self);
}

pub struct Round {
    /// Unclamped: penalty fruits can drive it negative
    pub score: i32,
    pub time_remaining: u32,
    /// One-way false -> true; reset only by start()
    pub over: bool,
    pub fruits: Vec<Fruit>,
    pub particles: Vec<Particle>,
    pub slash: SlashTracker,
    rng: Pcg32,
}

impl Round {
    pub fn new(seed: u64) -> Self {
        Self {
            score: 0,
            time_remaining: ROUND_SECONDS,
            over: false,
            fruits: Vec::new(),
            particles: Vec::new(),
            slash: SlashTracker::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// (Re)start the round: full state reset plus an initial display refresh.
    pub fn start(&mut self, sink: &mut dyn DisplaySink) {
        self.score = 0;
        self.time_remaining = ROUND_SECONDS;
        self.over = false;
        self.fruits.clear();
        self.particles.clear();
        self.slash.release();
        sink.score_changed(self.score);
        sink.time_changed(self.time_remaining);
        log::info!("round started");
    }

    /// Spawn driver: one fruit at a uniformly random corner while running.
    pub fn spawn_tick(&mut self, viewport: Vec2) {
        if self.over {
            return;
        }
        let corner = Corner::ALL[self.rng.random_range(0..Corner::ALL.len())];
        self.fruits.push(Fruit::spawn(corner, viewport, &mut self.rng));
    }

    /// Countdown driver: one second per tick; reaching zero ends the round.
    /// No-op once the timer has run out.
    pub fn countdown_tick(&mut self, sink: &mut dyn DisplaySink) {
        if self.time_remaining == 0 {
            return;
        }
        self.time_remaining -= 1;
        sink.time_changed(self.time_remaining);
        if self.time_remaining == 0 {
            self.end(sink);
        }
    }

    /// Terminal transition. The platform layer stops the drivers on this.
    pub fn end(&mut self, sink: &mut dyn DisplaySink) {
        self.over = true;
        sink.round_ended();
        log::info!("round over, final score {}", self.score);
    }

    pub fn pointer_press(&mut self, p: Vec2) {
        self.slash.press(p);
    }

    /// Pointer sample while dragging: evaluates the newest slice segment and
    /// applies its outcome. Inert once the round is over.
    pub fn pointer_move(&mut self, p: Vec2, sink: &mut dyn DisplaySink) {
        if self.over {
            return;
        }
        if let Some(outcome) = self.slash.slice(p, &mut self.fruits, &mut self.rng)
            && outcome.hits > 0
        {
            self.score += outcome.score_delta;
            self.particles.extend(outcome.particles);
            sink.score_changed(self.score);
        }
    }

    pub fn pointer_release(&mut self) {
        self.slash.release();
    }
}
