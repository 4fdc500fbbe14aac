use std::rc::Rc;

use yew::Reducible;

use crate::config::DEFAULT_VOLUME;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeState {
    pub level: f64,
    pub muted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VolumeAction {
    SetLevel(f64),
    ToggleMute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    High,
}

impl Default for VolumeState {
    fn default() -> Self {
        Self {
            level: DEFAULT_VOLUME,
            muted: false,
        }
    }
}

impl VolumeState {
    /// Moving the level to zero mutes; moving it above zero unmutes.
    /// Toggling mute leaves the level alone.
    pub fn apply(self, action: VolumeAction) -> Self {
        match action {
            VolumeAction::SetLevel(level) => {
                let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
                Self {
                    level,
                    muted: level == 0.0,
                }
            }
            VolumeAction::ToggleMute => Self {
                muted: !self.muted,
                ..self
            },
        }
    }

    pub fn is_silent(&self) -> bool {
        self.muted || self.level == 0.0
    }

    pub fn icon(&self) -> VolumeIcon {
        if self.is_silent() {
            VolumeIcon::Muted
        } else if self.level < 0.5 {
            VolumeIcon::Low
        } else {
            VolumeIcon::High
        }
    }

    /// Position shown on the slider; a muted control reads as empty.
    pub fn slider_value(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }
}

impl Reducible for VolumeState {
    type Action = VolumeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_quarter_volume_unmuted() {
        let state = VolumeState::default();
        assert_eq!(state.level, 0.25);
        assert!(!state.muted);
        assert_eq!(state.icon(), VolumeIcon::Low);
    }

    #[test]
    fn zero_level_mutes() {
        let state = VolumeState::default().apply(VolumeAction::SetLevel(0.0));
        assert!(state.muted);
        assert_eq!(state.icon(), VolumeIcon::Muted);
    }

    #[test]
    fn nonzero_level_unmutes() {
        let muted = VolumeState::default().apply(VolumeAction::ToggleMute);
        assert!(muted.muted);
        let state = muted.apply(VolumeAction::SetLevel(0.6));
        assert!(!state.muted);
        assert_eq!(state.level, 0.6);
    }

    #[test]
    fn set_level_decides_mute_from_zero_crossing() {
        for start in [VolumeState::default(), VolumeState::default().apply(VolumeAction::ToggleMute)] {
            for level in [0.0, 0.01, 0.25, 0.49, 0.5, 1.0] {
                let state = start.apply(VolumeAction::SetLevel(level));
                assert_eq!(state.muted, level == 0.0, "start={:?} level={}", start, level);
            }
        }
    }

    #[test]
    fn toggling_twice_round_trips() {
        let start = VolumeState { level: 0.8, muted: false };
        let state = start
            .apply(VolumeAction::ToggleMute)
            .apply(VolumeAction::ToggleMute);
        assert_eq!(state, start);
    }

    #[test]
    fn mute_keeps_level_and_shows_muted_icon() {
        let state = VolumeState::default()
            .apply(VolumeAction::SetLevel(0.25))
            .apply(VolumeAction::ToggleMute);
        assert!(state.muted);
        assert_eq!(state.level, 0.25);
        assert_eq!(state.icon(), VolumeIcon::Muted);
        assert_eq!(state.slider_value(), 0.0);
    }

    #[test]
    fn icon_thresholds() {
        let at = |level| VolumeState { level, muted: false }.icon();
        assert_eq!(at(0.0), VolumeIcon::Muted);
        assert_eq!(at(0.01), VolumeIcon::Low);
        assert_eq!(at(0.49), VolumeIcon::Low);
        assert_eq!(at(0.5), VolumeIcon::High);
        assert_eq!(at(1.0), VolumeIcon::High);
    }

    #[test]
    fn out_of_range_levels_are_clamped() {
        let loud = VolumeState::default().apply(VolumeAction::SetLevel(3.0));
        assert_eq!(loud.level, 1.0);
        let negative = VolumeState::default().apply(VolumeAction::SetLevel(-0.5));
        assert_eq!(negative.level, 0.0);
        assert!(negative.muted);
        let nan = VolumeState::default().apply(VolumeAction::SetLevel(f64::NAN));
        assert_eq!(nan.level, 0.0);
    }

    #[test]
    fn reapplying_same_level_clears_manual_mute() {
        let state = VolumeState::default()
            .apply(VolumeAction::SetLevel(0.7))
            .apply(VolumeAction::ToggleMute)
            .apply(VolumeAction::SetLevel(0.7));
        assert!(!state.muted);
    }

    #[test]
    fn reducer_matches_apply() {
        let state = Rc::new(VolumeState::default());
        let reduced = state.reduce(VolumeAction::SetLevel(0.0));
        assert_eq!(*reduced, VolumeState::default().apply(VolumeAction::SetLevel(0.0)));
    }
}
