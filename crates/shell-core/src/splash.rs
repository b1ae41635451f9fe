//! Custom splash sequencing
//!
//! The presenter runs two entrance animations in parallel (a spring on the
//! logo scale and a timed opacity fade) plus an independent cyclic loader
//! cadence. Completion fires exactly once, a fixed hold after the entrance
//! pair settles; the loader keeps cycling until the presenter is torn down.
//!
//! The presenter is a pure time-stepped model: the UI feeds it real frame
//! deltas via [`SplashPresenter::advance`] and paints whatever
//! [`SplashPresenter::frame`] reports. Dropping the presenter is the
//! cancellation path for the loader cadence on every exit.

use std::time::Duration;

/// Logo scale at mount.
pub const SCALE_START: f32 = 0.7;
/// Logo scale target.
pub const SCALE_TARGET: f32 = 1.0;
/// Duration of the opacity fade-in.
pub const FADE_DURATION: Duration = Duration::from_millis(700);
/// Cadence of the loading-dot indicator.
pub const LOADER_INTERVAL: Duration = Duration::from_millis(350);
/// Number of loading dots the indicator cycles through.
pub const LOADER_DOTS: u32 = 3;
/// Hold between entrance-pair completion and the finish signal.
pub const FINISH_HOLD: Duration = Duration::from_millis(1600);

const SPRING_TENSION: f32 = 40.0;
const SPRING_FRICTION: f32 = 5.0;
const SPRING_REST_THRESHOLD: f32 = 0.001;
/// Integration substep; frame deltas are consumed in whole substeps.
const SPRING_SUBSTEP: Duration = Duration::from_millis(1);
/// Upper bound on a single frame delta, so a stalled frame cannot warp the
/// animation past its settle point in one jump.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(64);

/// Signals emitted by the presenter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashEvent {
    /// The entrance pair settled and the hold elapsed. Emitted exactly once.
    Finished,
}

/// Snapshot of the animatable values for painting one frame.
#[derive(Clone, Copy, Debug)]
pub struct SplashFrame {
    /// Logo scale in `[SCALE_START, SCALE_TARGET]`.
    pub scale: f32,
    /// Logo opacity in `[0, 1]`.
    pub opacity: f32,
    /// Active loading dot, cycling `0..LOADER_DOTS`.
    pub loader_index: u32,
}

/// Damped spring integrated in fixed substeps.
///
/// Overshoot is clamped: the value snaps to the target on first crossing, so
/// progression toward the target is monotonic and the settle time is bounded.
struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    direction: f32,
    settled: bool,
    carry: Duration,
}

impl Spring {
    fn new(from: f32, target: f32) -> Self {
        Self {
            value: from,
            velocity: 0.0,
            target,
            direction: if target >= from { 1.0 } else { -1.0 },
            settled: from == target,
            carry: Duration::ZERO,
        }
    }

    fn advance(&mut self, dt: Duration) {
        if self.settled {
            return;
        }

        self.carry += dt.min(MAX_FRAME_DELTA);
        let step = SPRING_SUBSTEP.as_secs_f32();

        while self.carry >= SPRING_SUBSTEP {
            self.carry -= SPRING_SUBSTEP;

            let acceleration =
                SPRING_TENSION * (self.target - self.value) - SPRING_FRICTION * self.velocity;
            self.velocity += acceleration * step;
            self.value += self.velocity * step;

            let crossed = (self.value - self.target) * self.direction >= 0.0;
            let at_rest = (self.target - self.value).abs() < SPRING_REST_THRESHOLD
                && self.velocity.abs() < SPRING_REST_THRESHOLD;
            if crossed || at_rest {
                self.value = self.target;
                self.velocity = 0.0;
                self.settled = true;
                break;
            }
        }
    }
}

/// Timed fade with ease-in-out progression, clamped at its target.
struct Fade {
    elapsed: Duration,
    duration: Duration,
}

impl Fade {
    fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    fn complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        // Ease-in-out, monotonic on [0, 1].
        t * t * (3.0 - 2.0 * t)
    }
}

/// The custom splash, from mount to the single finish signal.
pub struct SplashPresenter {
    scale: Spring,
    opacity: Fade,
    elapsed: Duration,
    entrance_done_at: Option<Duration>,
    finished: bool,
}

impl Default for SplashPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashPresenter {
    pub fn new() -> Self {
        Self {
            scale: Spring::new(SCALE_START, SCALE_TARGET),
            opacity: Fade::new(FADE_DURATION),
            elapsed: Duration::ZERO,
            entrance_done_at: None,
            finished: false,
        }
    }

    /// Advance the presenter by one frame delta.
    ///
    /// Returns [`SplashEvent::Finished`] on the single frame where the
    /// post-entrance hold elapses. The loader cadence keeps advancing on
    /// subsequent calls; it only stops when the presenter is dropped.
    pub fn advance(&mut self, dt: Duration) -> Option<SplashEvent> {
        self.elapsed += dt;
        self.scale.advance(dt);
        self.opacity.advance(dt);

        if self.entrance_done_at.is_none() && self.scale.settled && self.opacity.complete() {
            self.entrance_done_at = Some(self.elapsed);
            tracing::debug!("splash entrance settled after {:?}", self.elapsed);
        }

        if !self.finished
            && let Some(done_at) = self.entrance_done_at
            && self.elapsed >= done_at + FINISH_HOLD
        {
            self.finished = true;
            return Some(SplashEvent::Finished);
        }

        None
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn frame(&self) -> SplashFrame {
        SplashFrame {
            scale: self.scale.value,
            opacity: self.opacity.value(),
            loader_index: ((self.elapsed.as_millis() / LOADER_INTERVAL.as_millis())
                % u128::from(LOADER_DOTS)) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    /// Advance until the finish event fires, returning (elapsed, event count).
    fn run_to_finish(presenter: &mut SplashPresenter) -> (Duration, u32) {
        let mut elapsed = Duration::ZERO;
        let mut events = 0;
        // Generous cap; the sequence is expected to finish in ~2.3 s.
        for _ in 0..1000 {
            elapsed += TICK;
            if presenter.advance(TICK) == Some(SplashEvent::Finished) {
                events += 1;
                break;
            }
        }
        (elapsed, events)
    }

    #[test]
    fn test_scale_progresses_monotonically_within_bounds() {
        let mut presenter = SplashPresenter::new();
        let mut previous = presenter.frame().scale;
        assert_eq!(previous, SCALE_START);

        for _ in 0..200 {
            presenter.advance(TICK);
            let scale = presenter.frame().scale;
            assert!(scale >= previous, "scale regressed: {previous} -> {scale}");
            assert!((SCALE_START..=SCALE_TARGET).contains(&scale));
            previous = scale;
        }
        assert_eq!(previous, SCALE_TARGET);
    }

    #[test]
    fn test_opacity_fades_in_and_clamps() {
        let mut presenter = SplashPresenter::new();
        assert_eq!(presenter.frame().opacity, 0.0);

        presenter.advance(FADE_DURATION / 2);
        let midway = presenter.frame().opacity;
        assert!(midway > 0.0 && midway < 1.0);

        presenter.advance(FADE_DURATION);
        assert_eq!(presenter.frame().opacity, 1.0);
        presenter.advance(FADE_DURATION);
        assert_eq!(presenter.frame().opacity, 1.0);
    }

    #[test]
    fn test_loader_cycles_on_the_fixed_interval() {
        let mut presenter = SplashPresenter::new();
        assert_eq!(presenter.frame().loader_index, 0);

        let mut seen = vec![0];
        // Step in whole intervals: the index must advance by one each time,
        // wrapping after the last dot.
        for _ in 0..7 {
            presenter.advance(LOADER_INTERVAL);
            seen.push(presenter.frame().loader_index);
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_loader_does_not_advance_between_ticks() {
        let mut presenter = SplashPresenter::new();
        presenter.advance(LOADER_INTERVAL - Duration::from_millis(1));
        assert_eq!(presenter.frame().loader_index, 0);
        presenter.advance(Duration::from_millis(1));
        assert_eq!(presenter.frame().loader_index, 1);
    }

    #[test]
    fn test_finish_fires_once_after_entrance_plus_hold() {
        let mut presenter = SplashPresenter::new();
        let (elapsed, events) = run_to_finish(&mut presenter);
        assert_eq!(events, 1);
        assert!(presenter.is_finished());

        // The spring settles well before the 700 ms fade, so the entrance
        // pair completes with the fade and the hold runs from there.
        let expected = FADE_DURATION + FINISH_HOLD;
        assert!(elapsed >= expected, "finished early at {elapsed:?}");
        assert!(elapsed <= expected + 2 * TICK, "finished late at {elapsed:?}");
    }

    #[test]
    fn test_finish_never_repeats_but_loader_keeps_cycling() {
        let mut presenter = SplashPresenter::new();
        run_to_finish(&mut presenter);

        let index_at_finish = presenter.frame().loader_index;
        let mut extra_events = 0;
        let mut index_moved = false;
        for _ in 0..100 {
            if presenter.advance(TICK).is_some() {
                extra_events += 1;
            }
            if presenter.frame().loader_index != index_at_finish {
                index_moved = true;
            }
        }
        assert_eq!(extra_events, 0);
        assert!(index_moved, "loader froze before teardown");
    }

    #[test]
    fn test_stalled_frame_does_not_warp_past_the_hold() {
        let mut presenter = SplashPresenter::new();
        // A single huge delta must not fire the finish signal before the
        // entrance pair has ever been observed as settled.
        let event = presenter.advance(Duration::from_secs(10));
        assert_eq!(event, None);
        assert!(!presenter.is_finished());

        // The following frame observes the settled entrance; the hold then
        // runs its full course.
        let mut fired = 0;
        let mut ticks = 0;
        for _ in 0..1000 {
            ticks += 1;
            if presenter.advance(TICK).is_some() {
                fired += 1;
                break;
            }
        }
        assert_eq!(fired, 1);
        assert!(ticks >= (FINISH_HOLD.as_millis() / TICK.as_millis()) as u32);
    }
}
