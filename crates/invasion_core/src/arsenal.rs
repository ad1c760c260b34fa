use invasion_common::{Frame, Rect};

use crate::bullet::Bullet;
use crate::settings::Settings;

/// Bounded pool of the ship's in-flight bullets.
///
/// Admission is reject-on-full: once `settings.bullet_amount` bullets are
/// live, further fire attempts are refused until one flies off screen.
#[derive(Default)]
pub struct Arsenal {
    bullets: Vec<Bullet>,
}

impl Arsenal {
    pub fn new() -> Arsenal {
        Arsenal::default()
    }

    /// Try to add a bullet at the ship's top edge. Returns whether one was
    /// actually fired, so the caller can decide on audio feedback.
    pub fn fire_bullet(&mut self, settings: &Settings, ship_rect: Rect) -> bool {
        if self.bullets.len() < settings.bullet_amount {
            self.bullets.push(Bullet::new(settings, ship_rect));
            return true;
        }
        false
    }

    /// Advance every bullet one tick, then drop the ones that have fully
    /// left the top of the screen.
    pub fn update_arsenal(&mut self, settings: &Settings) {
        for bullet in &mut self.bullets {
            bullet.update(settings);
        }
        self.bullets.retain(|bullet| bullet.rect().bottom() > 0);
    }

    pub fn render(&self, frame: &mut Frame) {
        for bullet in &self.bullets {
            bullet.render(frame);
        }
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }
}
