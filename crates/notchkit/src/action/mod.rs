//! Declarative action values.
//!
//! An [`Action`] describes what a host should run on a node; playback is
//! left to the host. Builders consume and return the action so they chain:
//!
//! ```
//! use std::time::Duration;
//! use notchkit::action::{Action, Easing, Phase};
//!
//! let blink = Action::fade_pulse(
//!     Phase::new(Duration::from_millis(300), Easing::EaseIn),
//!     Phase::new(Duration::from_millis(600), Easing::EaseOut),
//! );
//! assert_eq!(blink.duration(), None);
//! ```

mod easing;

use std::time::Duration;

pub use easing::Easing;

/// Duration and curve of one timed step.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Phase {
    pub duration: Duration,
    pub easing: Easing,
}

impl Phase {
    #[inline]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    #[inline]
    pub const fn linear(duration: Duration) -> Self {
        Self::new(duration, Easing::Linear)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FadeIn(Phase),
    FadeOut(Phase),
    /// Fades to an absolute alpha in `[0, 1]`.
    FadeAlphaTo { alpha: f32, phase: Phase },
    Wait(Duration),
    /// Children run one after another.
    Sequence(Vec<Action>),
    /// Children run together; the group lasts as long as its longest child.
    Group(Vec<Action>),
    Repeat { action: Box<Action>, count: u32 },
    RepeatForever(Box<Action>),
}

impl Action {
    #[inline]
    pub fn fade_in(duration: Duration) -> Self {
        Action::FadeIn(Phase::linear(duration))
    }

    #[inline]
    pub fn fade_out(duration: Duration) -> Self {
        Action::FadeOut(Phase::linear(duration))
    }

    #[inline]
    pub fn fade_alpha_to(alpha: f32, duration: Duration) -> Self {
        Action::FadeAlphaTo {
            alpha: alpha.clamp(0.0, 1.0),
            phase: Phase::linear(duration),
        }
    }

    #[inline]
    pub fn wait(duration: Duration) -> Self {
        Action::Wait(duration)
    }

    #[inline]
    pub fn sequence(actions: impl IntoIterator<Item = Action>) -> Self {
        Action::Sequence(actions.into_iter().collect())
    }

    #[inline]
    pub fn group(actions: impl IntoIterator<Item = Action>) -> Self {
        Action::Group(actions.into_iter().collect())
    }

    /// Fade in then fade out, repeated forever, each phase with its own curve.
    pub fn fade_pulse(fade_in: Phase, fade_out: Phase) -> Self {
        Action::sequence([Action::FadeIn(fade_in), Action::FadeOut(fade_out)]).forever()
    }

    /// Sets the curve of a timed action. Composite actions are left unchanged.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        if let Some(phase) = self.phase_mut() {
            phase.easing = easing;
        } else {
            log::debug!("with_easing ignored on composite action");
        }
        self
    }

    /// Sets the duration of a timed action or a wait.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        match &mut self {
            Action::Wait(d) => *d = duration,
            other => match other.phase_mut() {
                Some(phase) => phase.duration = duration,
                None => log::debug!("with_duration ignored on composite action"),
            },
        }
        self
    }

    #[must_use]
    pub fn repeated(self, count: u32) -> Self {
        Action::Repeat { action: Box::new(self), count }
    }

    #[must_use]
    pub fn forever(self) -> Self {
        Action::RepeatForever(Box::new(self))
    }

    /// Appends `next`, flattening into an existing sequence.
    #[must_use]
    pub fn then(self, next: Action) -> Self {
        match self {
            Action::Sequence(mut steps) => {
                steps.push(next);
                Action::Sequence(steps)
            }
            first => Action::Sequence(vec![first, next]),
        }
    }

    /// Total running time, or `None` when the action never finishes.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Action::FadeIn(p) | Action::FadeOut(p) | Action::FadeAlphaTo { phase: p, .. } => {
                Some(p.duration)
            }
            Action::Wait(d) => Some(*d),
            Action::Sequence(steps) => steps
                .iter()
                .try_fold(Duration::ZERO, |acc, a| Some(acc.saturating_add(a.duration()?))),
            Action::Group(steps) => steps
                .iter()
                .try_fold(Duration::ZERO, |acc, a| Some(acc.max(a.duration()?))),
            Action::Repeat { action, count } => {
                action.duration().map(|d| d.saturating_mul(*count))
            }
            Action::RepeatForever(_) => None,
        }
    }

    /// True when this action or any child repeats forever.
    pub fn is_endless(&self) -> bool {
        self.duration().is_none()
    }

    fn phase_mut(&mut self) -> Option<&mut Phase> {
        match self {
            Action::FadeIn(p) | Action::FadeOut(p) | Action::FadeAlphaTo { phase: p, .. } => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    // ── fade_pulse ────────────────────────────────────────────────────────

    #[test]
    fn pulse_structure() {
        let fade_in = Phase::new(ms(200), Easing::EaseIn);
        let fade_out = Phase::new(ms(400), Easing::EaseOut);
        let pulse = Action::fade_pulse(fade_in, fade_out);

        let Action::RepeatForever(inner) = &pulse else {
            panic!("pulse should repeat forever, got {pulse:?}");
        };
        assert_eq!(
            **inner,
            Action::Sequence(vec![Action::FadeIn(fade_in), Action::FadeOut(fade_out)])
        );
        assert_eq!(inner.duration(), Some(ms(600)));
        assert_eq!(pulse.duration(), None);
        assert!(pulse.is_endless());
    }

    // ── builders ──────────────────────────────────────────────────────────

    #[test]
    fn easing_and_duration_builders() {
        let a = Action::fade_out(ms(100))
            .with_easing(Easing::EaseInEaseOut)
            .with_duration(ms(250));
        assert_eq!(a, Action::FadeOut(Phase::new(ms(250), Easing::EaseInEaseOut)));

        assert_eq!(Action::wait(ms(1)).with_duration(ms(5)), Action::Wait(ms(5)));
    }

    #[test]
    fn builders_leave_composites_alone() {
        let seq = Action::sequence([Action::fade_in(ms(10))]);
        assert_eq!(seq.clone().with_easing(Easing::EaseIn), seq);
        assert_eq!(seq.clone().with_duration(ms(99)), seq);
    }

    #[test]
    fn fade_alpha_is_clamped() {
        let Action::FadeAlphaTo { alpha, .. } = Action::fade_alpha_to(1.5, ms(10)) else {
            panic!("expected FadeAlphaTo");
        };
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn then_flattens_sequences() {
        let a = Action::fade_in(ms(10)).then(Action::wait(ms(5))).then(Action::fade_out(ms(10)));
        let Action::Sequence(steps) = &a else {
            panic!("expected sequence");
        };
        assert_eq!(steps.len(), 3);
        assert_eq!(a.duration(), Some(ms(25)));
    }

    // ── duration ──────────────────────────────────────────────────────────

    #[test]
    fn group_lasts_as_long_as_longest_child() {
        let g = Action::group([Action::fade_in(ms(30)), Action::wait(ms(80))]);
        assert_eq!(g.duration(), Some(ms(80)));
    }

    #[test]
    fn repeat_multiplies() {
        assert_eq!(Action::wait(ms(15)).repeated(4).duration(), Some(ms(60)));
        assert_eq!(Action::wait(ms(15)).repeated(0).duration(), Some(Duration::ZERO));
    }

    #[test]
    fn endless_child_makes_parent_endless() {
        let s = Action::sequence([Action::wait(ms(1)), Action::fade_in(ms(1)).forever()]);
        assert_eq!(s.duration(), None);
        let g = Action::group([Action::wait(ms(1)), Action::fade_in(ms(1)).forever()]);
        assert!(g.is_endless());
    }
}
