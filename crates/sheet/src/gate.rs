use std::time::{Duration, Instant};

pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Hidden,
    /// Animating in; `from` is the progress the animation started at.
    Entering { since: Instant, from: f32 },
    Visible,
    Exiting { since: Instant, from: f32 },
}

/// Mounts the help sheet while the owner's flag is set and plays the
/// enter/exit transitions around it.
///
/// There is only ever one mounted instance. The exit transition always
/// finishes before the gate reports [`Phase::Hidden`].
#[derive(Debug, Clone)]
pub struct VisibilityGate {
    phase: Phase,
    transition: Duration,
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION)
    }
}

impl VisibilityGate {
    pub fn new(transition: Duration) -> Self {
        Self {
            phase: Phase::Hidden,
            transition,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        !matches!(self.phase, Phase::Hidden)
    }

    /// Advances the state machine to `now` given the owner's current flag.
    pub fn sync(&mut self, visible: bool, now: Instant) {
        let progress = self.progress_at(now);

        self.phase = match (self.phase, visible) {
            (Phase::Hidden, false) => Phase::Hidden,
            (Phase::Visible, true) => Phase::Visible,
            (Phase::Hidden, true) => self.enter(now, 0.0),
            (Phase::Exiting { .. }, true) => self.enter(now, progress),
            (Phase::Entering { .. }, true) if progress >= 1.0 => Phase::Visible,
            (Phase::Entering { .. }, true) => self.phase,
            (Phase::Visible, false) => self.exit(now, 1.0),
            (Phase::Entering { .. }, false) => self.exit(now, progress),
            (Phase::Exiting { .. }, false) if progress <= 0.0 => Phase::Hidden,
            (Phase::Exiting { .. }, false) => self.phase,
        };

        if self.transition.is_zero() {
            self.phase = match self.phase {
                Phase::Entering { .. } => Phase::Visible,
                Phase::Exiting { .. } => Phase::Hidden,
                settled => settled,
            };
        }
    }

    /// Scale/opacity factor for the mounted sheet, from 0.0 to 1.0.
    pub fn progress(&self, now: Instant) -> f32 {
        self.progress_at(now)
    }

    fn enter(&self, now: Instant, from: f32) -> Phase {
        tracing::debug!(from, "help sheet entering");
        Phase::Entering { since: now, from }
    }

    fn exit(&self, now: Instant, from: f32) -> Phase {
        tracing::debug!(from, "help sheet exiting");
        Phase::Exiting { since: now, from }
    }

    fn progress_at(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Hidden => 0.0,
            Phase::Visible => 1.0,
            Phase::Entering { since, from } => (from + self.elapsed_fraction(since, now)).min(1.0),
            Phase::Exiting { since, from } => (from - self.elapsed_fraction(since, now)).max(0.0),
        }
    }

    fn elapsed_fraction(&self, since: Instant, now: Instant) -> f32 {
        if self.transition.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(since);
        (elapsed.as_nanos() as f64 / self.transition.as_nanos() as f64) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn stays_hidden_while_flag_is_off() {
        let mut gate = VisibilityGate::new(ms(200));
        let start = Instant::now();
        for step in 0..5 {
            gate.sync(false, start + ms(step * 100));
            assert_eq!(gate.phase(), Phase::Hidden);
        }
        assert!(!gate.is_mounted());
    }

    #[test]
    fn enters_then_settles_visible() {
        let mut gate = VisibilityGate::new(ms(200));
        let start = Instant::now();

        gate.sync(true, start);
        assert!(matches!(gate.phase(), Phase::Entering { .. }));
        assert!(gate.is_mounted());
        assert_eq!(gate.progress(start), 0.0);

        let halfway = gate.progress(start + ms(100));
        assert!((halfway - 0.5).abs() < 0.01);

        gate.sync(true, start + ms(250));
        assert_eq!(gate.phase(), Phase::Visible);
        assert_eq!(gate.progress(start + ms(250)), 1.0);
    }

    #[test]
    fn exit_completes_before_unmount() {
        let mut gate = VisibilityGate::new(ms(200));
        let start = Instant::now();
        gate.sync(true, start);
        gate.sync(true, start + ms(300));

        gate.sync(false, start + ms(400));
        assert!(matches!(gate.phase(), Phase::Exiting { .. }));
        assert!(gate.is_mounted());

        gate.sync(false, start + ms(500));
        assert!(gate.is_mounted(), "still animating out");

        gate.sync(false, start + ms(600));
        assert_eq!(gate.phase(), Phase::Hidden);
    }

    #[test]
    fn reshow_during_exit_reverses_the_same_instance() {
        let mut gate = VisibilityGate::new(ms(200));
        let start = Instant::now();
        gate.sync(true, start);
        gate.sync(true, start + ms(200));
        gate.sync(false, start + ms(300));

        // Halfway out, the owner flips back on.
        gate.sync(true, start + ms(400));
        match gate.phase() {
            Phase::Entering { from, .. } => assert!((from - 0.5).abs() < 0.01),
            other => panic!("expected entering, got {other:?}"),
        }

        gate.sync(true, start + ms(500));
        assert_eq!(gate.phase(), Phase::Visible);
    }

    #[test]
    fn zero_transition_switches_immediately() {
        let mut gate = VisibilityGate::new(Duration::ZERO);
        let now = Instant::now();
        gate.sync(true, now);
        assert_eq!(gate.phase(), Phase::Visible);
        gate.sync(false, now);
        assert_eq!(gate.phase(), Phase::Hidden);
    }
}
