use std::time::Duration;

/// Short beeps emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Fire,
    PowerUp,
    Explosion,
}

impl Cue {
    pub fn frequency(&self) -> f32 {
        match self {
            Cue::Fire => 5000.0,
            Cue::PowerUp => 3000.0,
            Cue::Explosion => 800.0,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(50)
    }
}

/// Something that can play a tone. Playback must not block the game loop.
pub trait AudioCue {
    fn play_tone(&self, frequency: f32, duration: Duration);

    fn play(&self, cue: Cue) {
        self.play_tone(cue.frequency(), cue.duration());
    }

    /// Whether tones reach an output device
    fn is_audible(&self) -> bool {
        true
    }
}

/// No-op audio, used when muted or when no output device is available
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioCue for Silent {
    fn play_tone(&self, _frequency: f32, _duration: Duration) {}

    fn is_audible(&self) -> bool {
        false
    }
}

#[cfg(feature = "audio")]
pub use tone::ToneAudio;

#[cfg(feature = "audio")]
mod tone {
    use super::AudioCue;
    use rodio::source::SineWave;
    use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
    use std::time::Duration;

    /// Plays sine tones on the default output device
    pub struct ToneAudio {
        _stream: OutputStream,
        stream_handle: OutputStreamHandle,
        volume: f32,
    }

    impl ToneAudio {
        pub fn new() -> Result<Self, rodio::StreamError> {
            let (stream, stream_handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                stream_handle,
                volume: 0.05,
            })
        }
    }

    impl AudioCue for ToneAudio {
        fn play_tone(&self, frequency: f32, duration: Duration) {
            // Ignore errors for sound playback - don't want to crash the game
            if let Ok(sink) = Sink::try_new(&self.stream_handle) {
                sink.set_volume(self.volume);
                sink.append(SineWave::new(frequency).take_duration(duration));
                sink.detach();
            }
        }
    }
}

/// Picks the real output device unless muted, falling back to silence
pub fn open(mute: bool) -> Box<dyn AudioCue> {
    if mute {
        log::info!("Audio muted");
        return Box::new(Silent);
    }

    #[cfg(feature = "audio")]
    match ToneAudio::new() {
        Ok(audio) => return Box::new(audio),
        Err(err) => log::warn!("Failed to initialize audio, continuing without: {err}"),
    }

    Box::new(Silent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(f32, Duration)>>);

    impl AudioCue for Recorder {
        fn play_tone(&self, frequency: f32, duration: Duration) {
            self.0.borrow_mut().push((frequency, duration));
        }
    }

    #[test]
    fn test_cue_tones() {
        let recorder = Recorder::default();
        recorder.play(Cue::Fire);
        recorder.play(Cue::PowerUp);
        recorder.play(Cue::Explosion);

        let ms = Duration::from_millis(50);
        assert_eq!(
            *recorder.0.borrow(),
            vec![(5000.0, ms), (3000.0, ms), (800.0, ms)]
        );
    }

    #[test]
    fn test_muted_audio_is_silent() {
        let audio = open(true);
        assert!(!audio.is_audible());
        audio.play(Cue::Explosion);
    }

    #[test]
    fn test_recorder_is_audible_by_default() {
        assert!(Recorder::default().is_audible());
        assert!(!Silent.is_audible());
    }
}
