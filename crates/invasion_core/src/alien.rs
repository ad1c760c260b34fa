use invasion_common::{Frame, Rect};

use crate::settings::{Settings, ALIEN_IMAGE};

/// The lone alien. It sits where it was constructed; the update hook
/// exists for symmetry with the other entities but does nothing.
pub struct Alien {
    rect: Rect,
}

impl Alien {
    pub fn new(settings: &Settings, x: i32, y: i32) -> Alien {
        Alien {
            rect: Rect::new(x, y, settings.alien_w, settings.alien_h),
        }
    }

    pub fn update(&mut self) {}

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn render(&self, frame: &mut Frame) {
        frame.blit(ALIEN_IMAGE, self.rect);
    }
}
