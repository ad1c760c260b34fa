use invasion_common::{Frame, Rect};

use crate::settings::{Settings, BULLET_IMAGE};

/// One projectile in flight. Moves straight up; the vertical position is
/// tracked as a float and truncated into the draw rect once per update.
pub struct Bullet {
    rect: Rect,
    y: f32,
}

impl Bullet {
    /// Spawn centered on the firing ship's top edge.
    pub fn new(settings: &Settings, ship_rect: Rect) -> Bullet {
        let (cx, cy) = ship_rect.midtop();
        let rect = Rect::from_midtop(cx, cy, settings.bullet_w, settings.bullet_h);
        Bullet {
            rect,
            y: rect.y as f32,
        }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
        self.rect.y = self.y as i32;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn render(&self, frame: &mut Frame) {
        frame.blit(BULLET_IMAGE, self.rect);
    }
}
