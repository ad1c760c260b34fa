use std::time::{Duration, Instant};

/// Caps the loop at a target frame rate by sleeping out whatever remains
/// of the per-frame budget. Update and render stay coupled 1:1 per
/// iteration; there is no fixed-timestep decoupling.
pub struct FrameClock {
    budget: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> FrameClock {
        FrameClock {
            budget: Duration::from_secs(1) / fps.max(1),
            last: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Block until the frame budget has elapsed since the previous tick.
    pub fn tick(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.budget {
            std::thread::sleep(self.budget - elapsed);
        }
        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_one_over_fps() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.budget(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn zero_fps_does_not_divide_by_zero() {
        let clock = FrameClock::new(0);
        assert_eq!(clock.budget(), Duration::from_secs(1));
    }

    #[test]
    fn tick_enforces_the_budget() {
        let mut clock = FrameClock::new(100);
        let start = Instant::now();
        clock.tick();
        clock.tick();
        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
