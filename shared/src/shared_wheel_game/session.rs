use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::WheelConfig;
use super::sampler::{self, DrawOutcome};
use super::segments::{Segment, SegmentList};
use super::transition::{begin_transition, Transition, TransitionTicket};
use crate::constants::{SPINNING_LABEL, SPIN_LABEL};
use crate::error::WheelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawPhase {
    Idle,
    Spinning,
    Settled,
}

impl DrawPhase {
    /// Settled behaves like Idle; only a spin in flight refuses a draw.
    pub fn accepts_draw(&self) -> bool {
        !matches!(self, DrawPhase::Spinning)
    }

    pub fn trigger_label(&self) -> &'static str {
        match self {
            DrawPhase::Spinning => SPINNING_LABEL,
            DrawPhase::Idle | DrawPhase::Settled => SPIN_LABEL,
        }
    }
}

/// Published once per draw, when the spin settles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawResult {
    pub index: usize,
    pub label: String,
    pub outcome: DrawOutcome,
}

/// Draw state of one wheel instance.
///
/// Created Idle. `draw` moves it to Spinning and hands back the transition
/// the host has to animate and time; delivering that transition's ticket to
/// `complete` settles it. The phase is the only guard against overlapping
/// draws, there is no lock.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSession {
    segments: SegmentList,
    config: WheelConfig,
    phase: DrawPhase,
    current_outcome: Option<DrawOutcome>,
    transition: Option<Transition>,
    next_ticket: u64,
    disposed: bool,
}

impl DrawSession {
    pub fn new(segments: SegmentList, config: WheelConfig) -> Result<Self, WheelError> {
        let config = config.checked()?;
        Ok(Self {
            segments,
            config,
            phase: DrawPhase::Idle,
            current_outcome: None,
            transition: None,
            next_ticket: 0,
            disposed: false,
        })
    }

    pub fn from_labels<I, S>(labels: I, config: WheelConfig) -> Result<Self, WheelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(SegmentList::new(labels)?, config)
    }

    /// Starts a draw. Returns `None`, and changes nothing, while a spin is
    /// already in flight or after the session was disposed.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Transition> {
        if self.disposed {
            debug!("Draw ignored: session disposed");
            return None;
        }
        if !self.phase.accepts_draw() {
            debug!("Draw ignored: wheel is still spinning");
            return None;
        }

        let outcome = match sampler::sample(self.segments.len(), self.config.minimum_spin_turns, rng) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("Draw rejected: {}", err);
                return None;
            }
        };

        let ticket = TransitionTicket(self.next_ticket);
        self.next_ticket += 1;

        let transition = begin_transition(
            ticket,
            self.resting_rotation(),
            &outcome,
            self.config.nominal_duration_ms,
            self.config.easing,
        );

        debug!(
            "Draw {} started: {} full turns, settles at {} (segment {})",
            ticket.0,
            outcome.full_turns(),
            outcome.settled_angle_degrees,
            outcome.winning_index
        );

        self.phase = DrawPhase::Spinning;
        self.current_outcome = Some(outcome);
        self.transition = Some(transition);
        Some(transition)
    }

    /// Completion signal for the transition identified by `ticket`.
    ///
    /// Stale, duplicate and post-dispose signals are swallowed and return
    /// `None`; the matching signal settles the draw and returns the result
    /// to publish.
    pub fn complete(&mut self, ticket: TransitionTicket) -> Option<DrawResult> {
        if self.disposed {
            debug!("Completion {} dropped: session disposed", ticket.0);
            return None;
        }
        match self.transition {
            Some(transition) if transition.ticket == ticket => {}
            _ => {
                debug!("Completion {} dropped: no matching spin in flight", ticket.0);
                return None;
            }
        }

        self.transition = None;
        self.phase = DrawPhase::Settled;

        let result = self.result()?;
        info!("Wheel settled on segment {}: {}", result.index, result.label);
        Some(result)
    }

    /// Tears the session down. A spin in flight is abandoned and its
    /// completion will be ignored; returns the cancelled ticket, if any.
    pub fn dispose(&mut self) -> Option<TransitionTicket> {
        self.disposed = true;
        let cancelled = self.transition.take().map(|t| t.ticket);
        if cancelled.is_some() {
            // The abandoned outcome never became authoritative
            self.phase = DrawPhase::Idle;
            self.current_outcome = None;
        }
        cancelled
    }

    pub fn phase(&self) -> DrawPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == DrawPhase::Spinning
    }

    /// Number of draws accepted so far.
    pub fn draw_count(&self) -> u64 {
        self.next_ticket
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn current_outcome(&self) -> Option<&DrawOutcome> {
        self.current_outcome.as_ref()
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn segments(&self) -> &SegmentList {
        &self.segments
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// The winner, once the draw is authoritative. Hidden while spinning.
    pub fn winning_segment(&self) -> Option<&Segment> {
        if self.phase != DrawPhase::Settled {
            return None;
        }
        self.current_outcome
            .as_ref()
            .and_then(|o| self.segments.get(o.winning_index))
    }

    pub fn result(&self) -> Option<DrawResult> {
        let segment = self.winning_segment()?;
        let outcome = self.current_outcome?;
        Some(DrawResult {
            index: segment.index,
            label: segment.label.clone(),
            outcome,
        })
    }

    /// Orientation the wheel sits at between spins.
    pub fn resting_rotation(&self) -> f64 {
        match (self.phase, &self.current_outcome) {
            (DrawPhase::Settled, Some(outcome)) => outcome.settled_angle_degrees,
            _ => 0.0,
        }
    }

    /// Displayed rotation, derived from phase, outcome and the time since
    /// the current transition began.
    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        match (self.phase, &self.transition) {
            (DrawPhase::Spinning, Some(transition)) => transition.rotation_at(elapsed_ms),
            _ => self.resting_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Counts how often the session reaches for randomness.
    struct CountingRng {
        inner: StdRng,
        calls: usize,
    }

    impl CountingRng {
        fn new(seed: u64) -> Self {
            Self { inner: StdRng::seed_from_u64(seed), calls: 0 }
        }
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.calls += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.calls += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.calls += 1;
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.calls += 1;
            self.inner.try_fill_bytes(dest)
        }
    }

    /// Host-side timer queue: every accepted draw schedules one completion.
    #[derive(Default)]
    struct Timers {
        pending: Vec<(f64, TransitionTicket)>,
    }

    impl Timers {
        fn schedule(&mut self, now_ms: f64, transition: Option<Transition>) {
            if let Some(t) = transition {
                self.pending.push((now_ms + t.duration_ms as f64, t.ticket));
            }
        }

        fn fire_due(&mut self, now_ms: f64, session: &mut DrawSession) -> Vec<DrawResult> {
            let (due, later): (Vec<_>, Vec<_>) =
                self.pending.drain(..).partition(|(at, _)| *at <= now_ms);
            self.pending = later;
            due.into_iter().filter_map(|(_, ticket)| session.complete(ticket)).collect()
        }
    }

    fn prizes() -> DrawSession {
        DrawSession::from_labels((1..=6).map(|i| format!("Prize {}", i)), WheelConfig::default())
            .unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = prizes();
        assert_eq!(session.phase(), DrawPhase::Idle);
        assert!(session.current_outcome().is_none());
        assert!(session.winning_segment().is_none());
        assert_eq!(session.rotation_at(500.0), 0.0);
        assert_eq!(session.phase().trigger_label(), "Spin");
    }

    #[test]
    fn test_empty_segments_rejected_before_any_draw() {
        let err = DrawSession::from_labels(Vec::<String>::new(), WheelConfig::default()).unwrap_err();
        assert!(matches!(err, WheelError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = WheelConfig { nominal_duration_ms: 0, ..WheelConfig::default() };
        assert!(DrawSession::from_labels(["a"], config).is_err());
    }

    #[test]
    fn test_draw_starts_spinning() {
        let mut session = prizes();
        let mut rng = StdRng::seed_from_u64(3);
        let transition = session.draw(&mut rng).unwrap();

        assert_eq!(session.phase(), DrawPhase::Spinning);
        assert_eq!(session.phase().trigger_label(), "Spinning...");
        let outcome = *session.current_outcome().unwrap();
        assert_eq!(transition.to_degrees, outcome.angle_degrees);
        assert_eq!(transition.from_degrees, 0.0);
        assert_eq!(transition.duration_ms, 3000);
        // Result stays hidden until the spin settles
        assert!(session.winning_segment().is_none());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_second_draw_while_spinning_is_ignored() {
        let mut session = prizes();
        let mut rng = CountingRng::new(11);
        let mut timers = Timers::default();

        timers.schedule(0.0, session.draw(&mut rng));
        let calls_after_first = rng.calls;
        let before = session.clone();

        timers.schedule(0.0, session.draw(&mut rng));

        assert_eq!(rng.calls, calls_after_first, "no second outcome was sampled");
        assert_eq!(session, before);
        assert_eq!(session.draw_count(), 1);
        assert_eq!(timers.pending.len(), 1, "no second timer was scheduled");

        let published = timers.fire_due(3000.0, &mut session);
        assert_eq!(published.len(), 1);
    }

    #[test]
    fn test_full_cycle() {
        let mut session = prizes();
        let mut rng = StdRng::seed_from_u64(5);
        let mut timers = Timers::default();

        let first = session.draw(&mut rng);
        timers.schedule(0.0, first);
        assert!(timers.fire_due(2999.0, &mut session).is_empty());
        assert!(session.is_spinning());

        let published = timers.fire_due(3000.0, &mut session);
        assert_eq!(published.len(), 1);
        let result = &published[0];
        let outcome = *session.current_outcome().unwrap();

        assert_eq!(session.phase(), DrawPhase::Settled);
        assert_eq!(result.index, outcome.winning_index);
        assert_eq!(result.label, format!("Prize {}", outcome.winning_index + 1));
        assert_eq!(session.winning_segment().unwrap().index, result.index);
        // Snapped to the resting orientation, no matter the elapsed time
        assert_eq!(session.rotation_at(0.0), outcome.settled_angle_degrees);
        assert_eq!(session.rotation_at(9999.0), outcome.settled_angle_degrees);

        // Settled accepts a new draw like Idle
        let next = session.draw(&mut rng).unwrap();
        assert_eq!(session.phase(), DrawPhase::Spinning);
        assert_eq!(next.from_degrees, outcome.settled_angle_degrees);
        assert_ne!(Some(next.ticket), first.map(|t| t.ticket));
    }

    #[test]
    fn test_single_segment_cycle() {
        let mut session = DrawSession::from_labels(["Only"], WheelConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let transition = session.draw(&mut rng).unwrap();
            assert_eq!(transition.duration_ms, 3000);
            assert!(transition.travel_degrees() > 1000.0);
            let result = session.complete(transition.ticket).unwrap();
            assert_eq!(result.index, 0);
            assert_eq!(result.label, "Only");
        }
    }

    #[test]
    fn test_stale_and_duplicate_completions_are_ignored() {
        let mut session = prizes();
        let mut rng = StdRng::seed_from_u64(21);

        let first = session.draw(&mut rng).unwrap();
        assert!(session.complete(TransitionTicket(first.ticket.0 + 7)).is_none());
        assert!(session.is_spinning());

        assert!(session.complete(first.ticket).is_some());
        assert!(session.complete(first.ticket).is_none());

        let second = session.draw(&mut rng).unwrap();
        // The old ticket cannot settle the new spin
        assert!(session.complete(first.ticket).is_none());
        assert!(session.is_spinning());
        assert!(session.complete(second.ticket).is_some());
    }

    #[test]
    fn test_dispose_mid_spin_cancels_completion() {
        let mut session = prizes();
        let mut rng = StdRng::seed_from_u64(2);
        let transition = session.draw(&mut rng).unwrap();

        assert_eq!(session.dispose(), Some(transition.ticket));
        assert!(session.is_disposed());
        assert_eq!(session.phase(), DrawPhase::Idle);
        assert!(session.current_outcome().is_none());

        assert!(session.complete(transition.ticket).is_none());
        assert_eq!(session.phase(), DrawPhase::Idle);
        assert!(session.draw(&mut rng).is_none());
    }

    #[test]
    fn test_dispose_after_settle_keeps_result() {
        let mut session = prizes();
        let mut rng = StdRng::seed_from_u64(4);
        let transition = session.draw(&mut rng).unwrap();
        let result = session.complete(transition.ticket).unwrap();

        assert_eq!(session.dispose(), None);
        assert_eq!(session.result(), Some(result));
    }

    #[test]
    fn test_rotation_tracks_transition_while_spinning() {
        let mut session = prizes();
        let mut rng = StdRng::seed_from_u64(8);
        let transition = session.draw(&mut rng).unwrap();

        assert_eq!(session.rotation_at(0.0), 0.0);
        assert_eq!(session.rotation_at(3000.0), transition.to_degrees);
        let mid = session.rotation_at(1500.0);
        assert!(mid > 0.0 && mid < transition.to_degrees);
    }
}
