//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no audio files needed. Without an
//! audio context (insecure page, no output device) every call is a no-op.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A brick was destroyed
    BrickBreak,
    /// The board was emptied
    StageClear,
    /// Ball fell past the paddle
    GameOver,
}

impl SoundEffect {
    /// Sounds for one frame's events, in order
    ///
    /// A miss in the same frame as the final brick is not a game over, so
    /// it gets no sound.
    pub fn for_events(events: &[GameEvent]) -> Vec<SoundEffect> {
        let cleared = events.contains(&GameEvent::BoardCleared);
        events
            .iter()
            .filter_map(|event| match event {
                GameEvent::BrickDestroyed { .. } => Some(SoundEffect::BrickBreak),
                GameEvent::BoardCleared => Some(SoundEffect::StageClear),
                GameEvent::BallLost if !cleared => Some(SoundEffect::GameOver),
                GameEvent::BallLost => None,
            })
            .collect()
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;
    use crate::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        master_volume: f32,
        sfx_volume: f32,
        muted: bool,
        /// Voices of the break sound still ringing; cut when it replays
        break_voices: Vec<OscillatorNode>,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: settings.master_volume,
                sfx_volume: settings.sfx_volume,
                muted: settings.muted,
                break_voices: Vec::new(),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        fn effective_volume(&self) -> f32 {
            if self.muted {
                0.0
            } else {
                self.master_volume * self.sfx_volume
            }
        }

        /// Play a sound effect
        pub fn play(&mut self, effect: SoundEffect) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = self.ctx.clone() else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::BrickBreak => self.play_brick_break(&ctx, vol),
                SoundEffect::StageClear => play_stage_clear(&ctx, vol),
                SoundEffect::GameOver => play_game_over(&ctx, vol),
            }
        }

        /// Brick break - short crack with a thump, restarted on every hit
        fn play_brick_break(&mut self, ctx: &AudioContext, vol: f32) {
            for voice in self.break_voices.drain(..) {
                voice.stop().ok();
            }

            let t = ctx.current_time();

            if let Some((osc, gain)) = create_osc(ctx, 900.0, OscillatorType::Square) {
                gain.gain().set_value_at_time(vol * 0.2, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.08)
                    .ok();
                osc.frequency().set_value_at_time(900.0, t).ok();
                osc.frequency().set_value_at_time(2400.0, t + 0.01).ok();
                osc.frequency().set_value_at_time(600.0, t + 0.03).ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.1).ok();
                self.break_voices.push(osc);
            }

            if let Some((osc, gain)) = create_osc(ctx, 120.0, OscillatorType::Sine) {
                gain.gain().set_value_at_time(vol * 0.4, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.12)
                    .ok();
                osc.frequency()
                    .exponential_ramp_to_value_at_time(60.0, t + 0.1)
                    .ok();
                osc.start().ok();
                osc.stop_with_when(t + 0.15).ok();
                self.break_voices.push(osc);
            }
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Stage clear - rising fanfare
    fn play_stage_clear(ctx: &AudioContext, vol: f32) {
        for (i, freq) in [400.0, 500.0, 600.0, 800.0].iter().enumerate() {
            let delay = i as f64 * 0.1;
            if let Some((osc, gain)) = create_osc(ctx, *freq, OscillatorType::Triangle) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.3, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.4)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.5).ok();
            }
        }
    }

    /// Game over - sad descending
    fn play_game_over(ctx: &AudioContext, vol: f32) {
        for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
            let delay = i as f64 * 0.2;
            if let Some((osc, gain)) = create_osc(ctx, *freq, OscillatorType::Sine) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.3, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.4).ok();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_break_sound_per_brick() {
        let events = [
            GameEvent::BrickDestroyed { column: 0, row: 0 },
            GameEvent::BrickDestroyed { column: 0, row: 1 },
        ];
        assert_eq!(
            SoundEffect::for_events(&events),
            vec![SoundEffect::BrickBreak, SoundEffect::BrickBreak]
        );
    }

    #[test]
    fn test_clear_silences_same_frame_miss() {
        let events = [
            GameEvent::BrickDestroyed { column: 7, row: 4 },
            GameEvent::BoardCleared,
            GameEvent::BallLost,
        ];
        assert_eq!(
            SoundEffect::for_events(&events),
            vec![SoundEffect::BrickBreak, SoundEffect::StageClear]
        );
        assert_eq!(
            SoundEffect::for_events(&[GameEvent::BallLost]),
            vec![SoundEffect::GameOver]
        );
    }
}
