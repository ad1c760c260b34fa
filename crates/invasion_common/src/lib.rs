pub mod app;
pub mod key;
pub mod rect;

pub use app::{App, Blit, Frame, ImageId};
pub use key::Key;
pub use rect::Rect;
