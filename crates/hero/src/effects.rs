//! Timed decorative effects: the staggered word reveal and click ripples.
//!
//! Both are plain-data schedulers driven by an explicit clock so the view
//! layer decides when frames happen. Dropping a scheduler cancels everything
//! still pending.

use std::time::{Duration, Instant};

/// Grace period before the word-reveal schedule starts counting.
pub const WORD_REVEAL_KICKOFF_DELAY: Duration = Duration::from_millis(100);
/// A ripple is pruned this long after it was spawned.
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(1_000);

/// Staggered reveal for the hero title words. Each entry carries its own
/// delay relative to the schedule start; `due` hands out every index exactly
/// once.
#[derive(Debug)]
pub struct WordRevealSchedule {
    delays: Vec<Duration>,
    revealed: Vec<bool>,
    started_at: Option<Instant>,
}

impl WordRevealSchedule {
    pub fn new(delays: impl IntoIterator<Item = Duration>) -> Self {
        let delays: Vec<Duration> = delays.into_iter().collect();
        let revealed = vec![false; delays.len()];
        Self {
            delays,
            revealed,
            started_at: None,
        }
    }

    /// Arms the schedule once the hero's first-motion latch fires.
    /// Re-arming a running schedule is a no-op.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now + WORD_REVEAL_KICKOFF_DELAY);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Indices of words whose delay has elapsed since `start`, each reported
    /// exactly once.
    pub fn due(&mut self, now: Instant) -> Vec<usize> {
        let Some(started_at) = self.started_at else {
            return Vec::new();
        };
        if now < started_at {
            return Vec::new();
        }

        let elapsed = now - started_at;
        let mut newly_due = Vec::new();
        for (index, delay) in self.delays.iter().enumerate() {
            if !self.revealed[index] && elapsed >= *delay {
                self.revealed[index] = true;
                newly_due.push(index);
            }
        }
        newly_due
    }

    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|revealed| *revealed)
    }
}

/// One active click ripple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    spawned_at: Instant,
}

/// Bookkeeping for click ripples: spawn on click, prune after the lifetime.
#[derive(Debug, Default)]
pub struct RippleTracker {
    next_id: u64,
    ripples: Vec<Ripple>,
}

impl RippleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a click ripple and returns its id.
    pub fn spawn(&mut self, x: f64, y: f64, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.ripples.push(Ripple {
            id,
            x,
            y,
            spawned_at: now,
        });
        id
    }

    /// Drops every ripple older than [`RIPPLE_LIFETIME`].
    pub fn prune(&mut self, now: Instant) {
        self.ripples
            .retain(|ripple| now.duration_since(ripple.spawned_at) < RIPPLE_LIFETIME);
    }

    pub fn active(&self) -> &[Ripple] {
        &self.ripples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staggered() -> WordRevealSchedule {
        WordRevealSchedule::new([
            Duration::from_millis(0),
            Duration::from_millis(150),
            Duration::from_millis(300),
        ])
    }

    #[test]
    fn words_are_not_due_before_the_schedule_starts() {
        let mut schedule = staggered();
        assert!(schedule.due(Instant::now()).is_empty());
    }

    #[test]
    fn words_become_due_in_delay_order_exactly_once() {
        let mut schedule = staggered();
        let start = Instant::now();
        schedule.start(start);

        let after_kickoff = start + WORD_REVEAL_KICKOFF_DELAY;
        assert_eq!(schedule.due(after_kickoff), vec![0]);
        assert_eq!(
            schedule.due(after_kickoff + Duration::from_millis(150)),
            vec![1]
        );

        // A late frame reveals everything left, but nothing twice.
        let late = after_kickoff + Duration::from_secs(5);
        assert_eq!(schedule.due(late), vec![2]);
        assert!(schedule.due(late).is_empty());
        assert!(schedule.is_complete());
    }

    #[test]
    fn restarting_a_running_schedule_is_a_no_op() {
        let mut schedule = staggered();
        let start = Instant::now();
        schedule.start(start);
        schedule.start(start + Duration::from_secs(10));

        assert_eq!(schedule.due(start + WORD_REVEAL_KICKOFF_DELAY), vec![0]);
    }

    #[test]
    fn ripples_expire_after_their_lifetime() {
        let mut tracker = RippleTracker::new();
        let now = Instant::now();

        let first = tracker.spawn(10.0, 20.0, now);
        let second = tracker.spawn(30.0, 40.0, now + Duration::from_millis(600));
        assert_ne!(first, second);
        assert_eq!(tracker.active().len(), 2);

        tracker.prune(now + RIPPLE_LIFETIME);
        let remaining: Vec<u64> = tracker.active().iter().map(|ripple| ripple.id).collect();
        assert_eq!(remaining, vec![second]);

        tracker.prune(now + Duration::from_secs(2));
        assert!(tracker.active().is_empty());
    }
}
