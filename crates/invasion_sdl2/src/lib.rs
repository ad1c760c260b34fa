use std::path::PathBuf;

use anyhow::{anyhow, Context, Error, Result};
use sdl2::event::Event;
use sdl2::image::{InitFlag, LoadTexture};
use typed_builder::TypedBuilder;

use invasion_common::{App, Frame, Key, Rect};
pub use sdl2;

mod clock;
pub use clock::FrameClock;

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub title: String,
    /// Image files to load before the loop starts, in `ImageId` order.
    pub images: Vec<PathBuf>,
}

pub struct SdlContext;

impl SdlContext {
    /// Bring up the window and textures, then drive `app` until it asks to
    /// exit or the window receives a quit event.
    ///
    /// Any missing or undecodable image is a fatal startup error.
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            fps,
            title,
            images,
        } = sdl_init_info;
        let sdl_context = sdl2::init().map_err(Error::msg)?;
        let video_subsystem = sdl_context.video().map_err(Error::msg)?;
        let _image_context = sdl2::image::init(InitFlag::PNG).map_err(Error::msg)?;
        let window = video_subsystem
            .window(&title, width, height)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().build()?;
        let creator = canvas.texture_creator();

        let mut textures = Vec::with_capacity(images.len());
        for path in &images {
            let texture = creator
                .load_texture(path)
                .map_err(Error::msg)
                .with_context(|| format!("failed to load image {}", path.display()))?;
            textures.push(texture);
        }

        let mut event_pump = sdl_context.event_pump().map_err(Error::msg)?;
        let mut frame_clock = FrameClock::new(fps);
        let mut frame = Frame::new();

        app.init();
        loop {
            // Exit requests raised by a key event are observed here, so the
            // frame that saw the keypress still updates and renders once.
            if app.should_exit() {
                app.exit();
                break;
            }

            while let Some(event) = event_pump.poll_event() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), false);
                    }
                    _ => {}
                }
            }

            app.update();

            frame.clear();
            app.render(&mut frame);
            for blit in frame.blits() {
                let texture = textures
                    .get(blit.image.0)
                    .ok_or_else(|| anyhow!("no texture loaded for image id {}", blit.image.0))?;
                canvas
                    .copy(texture, None, Some(map_rect(blit.dest)))
                    .map_err(Error::msg)?;
            }
            canvas.present();

            frame_clock.tick();
        }

        Ok(())
    }
}

pub fn map_rect(rect: Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(rect.x, rect.y, rect.w, rect.h)
}

pub fn map_keycode(keycode: sdl2::keyboard::Keycode) -> Key {
    match keycode {
        sdl2::keyboard::Keycode::Left => Key::Left,
        sdl2::keyboard::Keycode::Right => Key::Right,
        sdl2::keyboard::Keycode::Space => Key::Space,
        sdl2::keyboard::Keycode::Q => Key::Q,
        _ => Key::None,
    }
}
