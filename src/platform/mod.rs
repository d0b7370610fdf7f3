//! Driver supervision and platform bindings
//!
//! A running round is driven by three independent periodic tasks (frame,
//! spawn, countdown) on a single-threaded event loop. Each handle must be
//! cancellable, and a restart must cancel the old set before installing a
//! new one, or stale loops keep double-applying updates.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// A handle to a scheduled periodic task. `cancel` must be idempotent: a
/// handle may be cancelled again after it already stopped.
pub trait CancelTask {
    fn cancel(&mut self);
}

/// The three driver handles for one running round.
///
/// `stop` cancels in place rather than dropping: a driver may stop the set
/// from inside its own callback, where dropping the executing closure would
/// not be sound. Cancelled handles are inert and freed on the next replace.
#[derive(Debug)]
pub struct RoundDrivers<T: CancelTask> {
    frame: Option<T>,
    spawn: Option<T>,
    countdown: Option<T>,
}

impl<T: CancelTask> RoundDrivers<T> {
    pub fn stopped() -> Self {
        Self {
            frame: None,
            spawn: None,
            countdown: None,
        }
    }

    /// Install a fresh driver set, cancelling any outstanding one first.
    pub fn replace(&mut self, frame: T, spawn: T, countdown: T) {
        self.stop();
        self.frame = Some(frame);
        self.spawn = Some(spawn);
        self.countdown = Some(countdown);
    }

    /// Cancel all outstanding drivers.
    pub fn stop(&mut self) {
        for slot in [&mut self.frame, &mut self.spawn, &mut self.countdown] {
            if let Some(task) = slot {
                task.cancel();
            }
        }
    }
}
