use std::fs;
use std::io::{BufReader, Cursor};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{error, warn};
use rodio::source::Source;
use rodio::{Decoder, OutputStream};

/// Message sent from the main thread to the audio thread. Every message
/// means "play the laser clip once".
struct PlayLaser;

struct SoundThread {
    receiver: Receiver<PlayLaser>,
    clip: Vec<u8>,
    volume: f32,
    fadeout: Duration,
}

impl SoundThread {
    fn run(self) {
        // Keep the stream alive as long as the audio thread runs. If no
        // output device is available the game runs silently.
        let Ok((stream, stream_handle)) = OutputStream::try_default() else {
            error!("Failed to open default audio output stream, disabling audio");
            return;
        };
        let _stream = stream;

        loop {
            match self.receiver.recv() {
                Ok(PlayLaser) => {
                    let cursor = Cursor::new(self.clip.clone());
                    let reader = BufReader::new(cursor);

                    match Decoder::new(reader) {
                        Ok(source) => {
                            // Cut the clip off at the fadeout window with a
                            // fade, matching the short laser blip. Playing
                            // raw on the mixer lets rapid shots overlap
                            // instead of queueing behind each other.
                            let mut source = source.take_duration(self.fadeout);
                            source.set_filter_fadeout();
                            let source = source.amplify(self.volume).convert_samples();
                            if let Err(e) = stream_handle.play_raw(source) {
                                error!("Failed to play laser sound: {e}");
                            }
                        }
                        Err(e) => {
                            error!("Failed to decode laser sound: {e}");
                        }
                    }
                }
                Err(e) => {
                    warn!("Audio channel closed: {e}");
                    break;
                }
            }
        }
    }
}

/// Handle living on the main thread; `play` is fire-and-forget and never
/// blocks the game loop.
pub struct SoundPlayer {
    sender: Sender<PlayLaser>,
}

impl SoundPlayer {
    /// Read the clip and start the audio thread. A missing or unreadable
    /// sound file is a fatal startup error.
    pub fn new(path: &Path, volume: f32, fadeout: Duration) -> Result<SoundPlayer> {
        let clip = fs::read(path)
            .with_context(|| format!("failed to load sound {}", path.display()))?;

        let (sender, receiver) = mpsc::channel::<PlayLaser>();
        let sound_thread = SoundThread {
            receiver,
            clip,
            volume,
            fadeout,
        };

        thread::Builder::new()
            .name("invasion_sound".into())
            .spawn(move || sound_thread.run())
            .context("failed to spawn audio thread")?;

        Ok(SoundPlayer { sender })
    }

    /// Queue one playback. If the audio thread has gone away we simply
    /// stop playing new sounds.
    pub fn play(&self) {
        let _ = self.sender.send(PlayLaser);
    }
}
