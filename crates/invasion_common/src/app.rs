use std::path::PathBuf;

use crate::key::Key;
use crate::rect::Rect;

/// Index into the image list a frontend loaded at startup.
///
/// The order is fixed by `App::images`; game code keeps matching constants.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ImageId(pub usize);

/// A single draw command: composite `image` into the frame at `dest`,
/// scaling to the destination rect.
#[derive(Copy, Clone, Debug)]
pub struct Blit {
    pub image: ImageId,
    pub dest: Rect,
}

/// Draw-command buffer rebuilt from scratch every frame.
///
/// Commands are replayed by the frontend in insertion order, so painter's
/// ordering is whatever order the game pushed them in.
#[derive(Default)]
pub struct Frame {
    blits: Vec<Blit>,
}

impl Frame {
    pub fn new() -> Frame {
        Frame::default()
    }

    pub fn clear(&mut self) {
        self.blits.clear();
    }

    pub fn blit(&mut self, image: ImageId, dest: Rect) {
        self.blits.push(Blit { image, dest });
    }

    pub fn blits(&self) -> &[Blit] {
        &self.blits
    }
}

/// Contract between the game and a frontend driving it.
///
/// The frontend owns the window, textures, event pump and frame clock and
/// calls back into the game in a fixed per-frame order: key events first,
/// then `update`, then `render`.
pub trait App {
    fn init(&mut self);
    fn update(&mut self);
    fn render(&self, frame: &mut Frame);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn fps(&self) -> u32;
    fn title(&self) -> String;
    /// Image files the frontend must load before the loop starts, in
    /// `ImageId` order.
    fn images(&self) -> Vec<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_preserves_insertion_order() {
        let mut frame = Frame::new();
        frame.blit(ImageId(0), Rect::new(0, 0, 10, 10));
        frame.blit(ImageId(2), Rect::new(5, 5, 1, 1));
        frame.blit(ImageId(1), Rect::new(9, 9, 2, 2));

        let ids: Vec<usize> = frame.blits().iter().map(|b| b.image.0).collect();
        assert_eq!(ids, vec![0, 2, 1]);
    }

    #[test]
    fn clear_empties_the_frame() {
        let mut frame = Frame::new();
        frame.blit(ImageId(0), Rect::new(0, 0, 10, 10));
        frame.clear();
        assert!(frame.blits().is_empty());
    }
}
