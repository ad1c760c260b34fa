use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use invasion_common::{App, Frame, Key};

use crate::alien::Alien;
use crate::settings::{Settings, BACKGROUND_IMAGE};
use crate::ship::Ship;
use crate::sound::SoundPlayer;

const LASER_VOLUME: f32 = 0.7;
const LASER_FADEOUT: Duration = Duration::from_millis(250);

/// The whole game behind the frontend's `App` trait: owns the settings,
/// the ship (and transitively the arsenal), the alien and the laser sound.
pub struct InvasionApp {
    settings: Settings,
    ship: Ship,
    alien: Alien,
    sound: Option<SoundPlayer>,
    should_exit: bool,
}

impl InvasionApp {
    /// Build the game, loading the laser sound. A missing sound file is a
    /// fatal startup error.
    pub fn new(settings: Settings) -> Result<InvasionApp> {
        let sound = SoundPlayer::new(&settings.laser_sound, LASER_VOLUME, LASER_FADEOUT)?;
        Ok(InvasionApp::with_sound(settings, Some(sound)))
    }

    fn with_sound(settings: Settings, sound: Option<SoundPlayer>) -> InvasionApp {
        let ship = Ship::new(&settings);
        let alien = Alien::new(&settings, settings.alien_x, settings.alien_y);
        InvasionApp {
            settings,
            ship,
            alien,
            sound,
            should_exit: false,
        }
    }

    fn fire(&mut self) {
        if self.ship.fire(&self.settings) {
            if let Some(sound) = &self.sound {
                sound.play();
            }
        }
    }
}

impl App for InvasionApp {
    fn init(&mut self) {
        log::info!("Alien Invasion init");
    }

    fn update(&mut self) {
        self.ship.update(&self.settings);
        self.alien.update();
    }

    /// Fixed paint order: background, bullets, ship, alien.
    fn render(&self, frame: &mut Frame) {
        frame.blit(BACKGROUND_IMAGE, self.settings.screen_rect());
        self.ship.render(frame);
        self.alien.render(frame);
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        match (key, is_down) {
            (Key::Right, true) => self.ship.moving_right = true,
            (Key::Right, false) => self.ship.moving_right = false,
            (Key::Left, true) => self.ship.moving_left = true,
            (Key::Left, false) => self.ship.moving_left = false,
            (Key::Space, true) => self.fire(),
            (Key::Q, true) => self.should_exit = true,
            _ => {}
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Alien Invasion exit");
    }

    fn width(&self) -> u32 {
        self.settings.screen_w
    }

    fn height(&self) -> u32 {
        self.settings.screen_h
    }

    fn fps(&self) -> u32 {
        self.settings.fps
    }

    fn title(&self) -> String {
        self.settings.name.clone()
    }

    fn images(&self) -> Vec<PathBuf> {
        self.settings.image_paths()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ALIEN_IMAGE, BULLET_IMAGE, SHIP_IMAGE};

    fn silent_app() -> InvasionApp {
        InvasionApp::with_sound(Settings::default(), None)
    }

    #[test]
    fn key_events_toggle_movement_intents() {
        let mut app = silent_app();

        app.handle_key_event(Key::Right, true);
        assert!(app.ship.moving_right);
        app.handle_key_event(Key::Left, true);
        assert!(app.ship.moving_left);

        app.handle_key_event(Key::Right, false);
        assert!(!app.ship.moving_right);
        app.handle_key_event(Key::Left, false);
        assert!(!app.ship.moving_left);
    }

    #[test]
    fn space_fires_up_to_capacity() {
        let mut app = silent_app();

        for _ in 0..6 {
            app.handle_key_event(Key::Space, true);
        }
        assert_eq!(app.ship.arsenal().len(), app.settings.bullet_amount);
    }

    #[test]
    fn q_requests_exit() {
        let mut app = silent_app();
        assert!(!app.should_exit());

        app.handle_key_event(Key::Q, true);
        assert!(app.should_exit());
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut app = silent_app();
        app.handle_key_event(Key::None, true);
        app.handle_key_event(Key::None, false);
        assert!(!app.should_exit());
        assert!(!app.ship.moving_left);
        assert!(!app.ship.moving_right);
    }

    #[test]
    fn paint_order_is_background_bullets_ship_alien() {
        let mut app = silent_app();
        app.handle_key_event(Key::Space, true);

        let mut frame = Frame::new();
        app.render(&mut frame);

        let ids: Vec<_> = frame.blits().iter().map(|b| b.image).collect();
        assert_eq!(
            ids,
            vec![BACKGROUND_IMAGE, BULLET_IMAGE, SHIP_IMAGE, ALIEN_IMAGE]
        );
    }

    #[test]
    fn update_moves_bullets_but_not_the_alien() {
        let mut app = silent_app();
        app.handle_key_event(Key::Space, true);
        let alien_rect = app.alien.rect();

        app.update();

        let mut frame = Frame::new();
        app.render(&mut frame);
        let bullet = frame
            .blits()
            .iter()
            .find(|b| b.image == BULLET_IMAGE)
            .expect("bullet should be rendered");
        assert!(bullet.dest.y < app.ship.rect().top());
        assert_eq!(app.alien.rect(), alien_rect);
    }
}
