use invasion_common::{Frame, Rect};

use crate::arsenal::Arsenal;
use crate::settings::{Settings, SHIP_IMAGE};

/// The player's ship: anchored to the bottom of the screen, moved left and
/// right by intent flags the input layer toggles, owner of the arsenal.
///
/// Horizontal position accumulates in `x` as a float and is truncated into
/// the draw rect each update, so fractional speeds still add up.
pub struct Ship {
    rect: Rect,
    x: f32,
    pub moving_right: bool,
    pub moving_left: bool,
    arsenal: Arsenal,
}

impl Ship {
    /// Ship at the bottom-center of the screen with an empty arsenal.
    pub fn new(settings: &Settings) -> Ship {
        let (cx, cy) = settings.screen_rect().midbottom();
        let rect = Rect::from_midbottom(cx, cy, settings.ship_w, settings.ship_h);
        Ship {
            rect,
            x: rect.x as f32,
            moving_right: false,
            moving_left: false,
            arsenal: Arsenal::new(),
        }
    }

    /// Apply movement intents, then advance the arsenal.
    pub fn update(&mut self, settings: &Settings) {
        self.update_movement(settings);
        self.arsenal.update_arsenal(settings);
    }

    // Both flags are applied independently: with both set mid-screen the
    // deltas cancel and the ship stays put. Boundary checks are strict and
    // happen before the move, so the ship stops on the first update that
    // finds its edge at or past the screen edge.
    fn update_movement(&mut self, settings: &Settings) {
        let bounds = settings.screen_rect();
        if self.moving_right && self.rect.right() < bounds.right() {
            self.x += settings.ship_speed;
        }
        if self.moving_left && self.rect.left() > bounds.left() {
            self.x -= settings.ship_speed;
        }
        self.rect.x = self.x as i32;
    }

    /// Try to fire a bullet; true means one actually left the ship.
    pub fn fire(&mut self, settings: &Settings) -> bool {
        self.arsenal.fire_bullet(settings, self.rect)
    }

    /// Bullets first, ship sprite on top.
    pub fn render(&self, frame: &mut Frame) {
        self.arsenal.render(frame);
        frame.blit(SHIP_IMAGE, self.rect);
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn arsenal(&self) -> &Arsenal {
        &self.arsenal
    }
}
