use std::path::PathBuf;

use invasion_common::{ImageId, Rect};

/// Images in the order the frontend loads them; `Settings::image_paths`
/// must stay in the same order.
pub const BACKGROUND_IMAGE: ImageId = ImageId(0);
pub const SHIP_IMAGE: ImageId = ImageId(1);
pub const BULLET_IMAGE: ImageId = ImageId(2);
pub const ALIEN_IMAGE: ImageId = ImageId(3);

/// All tunables for the game, fixed at startup.
///
/// Constructed once by the launcher and passed by reference into entity
/// constructors and per-frame update calls. Speeds are in pixels per
/// frame; movement is frame-coupled, not time-based.
#[derive(Clone, Debug)]
pub struct Settings {
    pub name: String,
    pub screen_w: u32,
    pub screen_h: u32,
    pub fps: u32,
    pub bg_file: PathBuf,

    pub ship_file: PathBuf,
    pub ship_w: u32,
    pub ship_h: u32,
    pub ship_speed: f32,

    pub bullet_file: PathBuf,
    pub laser_sound: PathBuf,
    pub bullet_speed: f32,
    pub bullet_w: u32,
    pub bullet_h: u32,
    pub bullet_amount: usize,

    pub alien_file: PathBuf,
    pub alien_w: u32,
    pub alien_h: u32,
    pub alien_x: i32,
    pub alien_y: i32,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            name: "Alien Invasion".to_string(),
            screen_w: 1200,
            screen_h: 800,
            fps: 60,
            bg_file: PathBuf::from("assets/images/starbasesnow.png"),

            ship_file: PathBuf::from("assets/images/ship.png"),
            ship_w: 40,
            ship_h: 60,
            ship_speed: 5.0,

            bullet_file: PathBuf::from("assets/images/laser_blast.png"),
            laser_sound: PathBuf::from("assets/sounds/laser.wav"),
            bullet_speed: 7.0,
            bullet_w: 25,
            bullet_h: 80,
            bullet_amount: 5,

            alien_file: PathBuf::from("assets/images/alien.png"),
            alien_w: 40,
            alien_h: 40,
            alien_x: 10,
            alien_y: 10,
        }
    }
}

impl Settings {
    /// The window bounds every entity clamps against.
    pub fn screen_rect(&self) -> Rect {
        Rect::new(0, 0, self.screen_w, self.screen_h)
    }

    /// Image files in `ImageId` order: background, ship, bullet, alien.
    pub fn image_paths(&self) -> Vec<PathBuf> {
        vec![
            self.bg_file.clone(),
            self.ship_file.clone(),
            self.bullet_file.clone(),
            self.alien_file.clone(),
        ]
    }
}
