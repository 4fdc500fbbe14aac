use log::{error, info, warn};

use super::gate::InteractionGate;
use super::volume::{VolumeAction, VolumeState};
use crate::error::PageError;

/// A playable media output (the background `<video>` or `<audio>`).
pub trait MediaSink {
    fn play(&self) -> Result<(), PageError>;

    fn apply_volume(&self, level: f64, muted: bool) -> Result<(), PageError>;

    fn set_muted(&self, muted: bool) -> Result<(), PageError>;
}

/// Ties the interaction gate to the two background sinks.
pub struct MediaController<S: MediaSink> {
    gate: InteractionGate,
    video: S,
    audio: S,
}

impl<S: MediaSink> MediaController<S> {
    pub fn new(video: S, audio: S) -> Self {
        Self {
            gate: InteractionGate::default(),
            video,
            audio,
        }
    }

    pub fn has_interacted(&self) -> bool {
        self.gate.has_interacted()
    }

    /// The video is decorative and never carries sound. Call once the
    /// element is mounted; the `muted` attribute alone does not mute a
    /// script-created element.
    pub fn silence_video(&self) {
        if let Err(err) = self.video.set_muted(true) {
            warn!("Could not mute video: {}", err);
        }
    }

    /// First click or touch on the page. Starts both sinks once; play
    /// failures are logged and otherwise ignored.
    pub fn interact(&self) -> bool {
        if !self.gate.open() {
            return false;
        }
        info!("First interaction, starting background media");
        if let Err(err) = self.video.play() {
            warn!("Video play failed: {}", err);
        }
        if let Err(err) = self.audio.play() {
            error!("Audio play failed: {}", err);
        }
        true
    }

    /// Muting counts as an interaction so the audio is unlocked either way.
    pub fn toggle_mute(&self) -> VolumeAction {
        self.interact();
        VolumeAction::ToggleMute
    }

    /// Writes the full volume state onto the audio sink.
    pub fn sync(&self, state: &VolumeState) {
        if let Err(err) = self.audio.apply_volume(state.level, state.muted) {
            warn!("Could not sync volume: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Play,
        Volume(f64, bool),
        Muted(bool),
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        calls: Rc<RefCell<Vec<Call>>>,
        reject_play: bool,
    }

    impl RecordingSink {
        fn rejecting() -> Self {
            Self {
                reject_play: true,
                ..Self::default()
            }
        }

        fn plays(&self) -> usize {
            self.calls.borrow().iter().filter(|c| **c == Call::Play).count()
        }
    }

    impl MediaSink for RecordingSink {
        fn play(&self) -> Result<(), PageError> {
            self.calls.borrow_mut().push(Call::Play);
            if self.reject_play {
                return Err(PageError::PlayRejected("NotAllowedError".to_string()));
            }
            Ok(())
        }

        fn apply_volume(&self, level: f64, muted: bool) -> Result<(), PageError> {
            self.calls.borrow_mut().push(Call::Volume(level, muted));
            Ok(())
        }

        fn set_muted(&self, muted: bool) -> Result<(), PageError> {
            self.calls.borrow_mut().push(Call::Muted(muted));
            Ok(())
        }
    }

    #[test]
    fn interaction_plays_each_sink_once() {
        let video = RecordingSink::default();
        let audio = RecordingSink::default();
        let controller = MediaController::new(video.clone(), audio.clone());

        assert!(controller.interact());
        for _ in 0..5 {
            assert!(!controller.interact());
        }
        assert!(controller.has_interacted());
        assert_eq!(video.plays(), 1);
        assert_eq!(audio.plays(), 1);
    }

    #[test]
    fn rejected_audio_is_swallowed() {
        let video = RecordingSink::default();
        let audio = RecordingSink::rejecting();
        let controller = MediaController::new(video.clone(), audio.clone());

        assert!(controller.interact());
        assert!(controller.has_interacted());
        assert!(!controller.interact());
        assert_eq!(audio.plays(), 1);
        assert_eq!(video.plays(), 1);
    }

    #[test]
    fn toggle_before_interaction_unlocks_audio() {
        let audio = RecordingSink::default();
        let controller = MediaController::new(RecordingSink::default(), audio.clone());

        let state = VolumeState::default().apply(controller.toggle_mute());
        assert!(state.muted);
        assert!(controller.has_interacted());
        assert_eq!(audio.plays(), 1);

        let state = state.apply(controller.toggle_mute());
        assert!(!state.muted);
        assert_eq!(audio.plays(), 1);
    }

    #[test]
    fn sync_always_overwrites_both_fields() {
        let audio = RecordingSink::default();
        let controller = MediaController::new(RecordingSink::default(), audio.clone());
        let state = VolumeState::default();

        controller.sync(&state);
        controller.sync(&state);
        controller.sync(&state.apply(VolumeAction::SetLevel(0.0)));

        assert_eq!(
            *audio.calls.borrow(),
            vec![
                Call::Volume(0.25, false),
                Call::Volume(0.25, false),
                Call::Volume(0.0, true),
            ]
        );
    }

    #[test]
    fn video_is_muted_without_touching_audio() {
        let video = RecordingSink::default();
        let audio = RecordingSink::default();
        let controller = MediaController::new(video.clone(), audio.clone());

        controller.silence_video();
        controller.interact();
        controller.sync(&VolumeState::default());

        assert_eq!(*video.calls.borrow(), vec![Call::Muted(true), Call::Play]);
        assert!(!audio.calls.borrow().contains(&Call::Muted(true)));
        assert_eq!(audio.calls.borrow().last(), Some(&Call::Volume(0.25, false)));
    }
}
