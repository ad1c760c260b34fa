pub mod alien;
pub mod app;
pub mod arsenal;
pub mod bullet;
pub mod settings;
pub mod ship;
pub mod sound;

pub use app::InvasionApp;
pub use settings::Settings;
