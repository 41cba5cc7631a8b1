/// Milliseconds on the deck's clock.
pub type Millis = f64;

#[derive(Debug)]
struct Timer<T> {
    due: Millis,
    seq: u64,
    task: T,
}

/// One-shot timer queue on a host-driven clock.
///
/// The host advances the clock (real elapsed time in the browser, a fake
/// clock in tests); timers fire in due order, ties broken by scheduling order.
/// Timers cannot be cancelled: tasks that may go stale carry their own
/// generation and are ignored by the receiver.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Millis,
    next_seq: u64,
    timers: Vec<Timer<T>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            next_seq: 0,
            timers: Vec::with_capacity(8),
        }
    }

    /// Current clock value.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Schedule `task` to fire `delay` ms from now. Negative delays fire on the next advance.
    pub fn schedule(&mut self, delay: Millis, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            due: self.now + delay.max(0.0),
            seq,
            task,
        });
    }

    /// Pop the earliest timer due at or before `deadline`, moving the clock to its due time.
    pub fn pop_until(&mut self, deadline: Millis) -> Option<T> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= deadline)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
            .map(|(i, _)| i)?;
        let timer = self.timers.remove(idx);
        self.now = self.now.max(timer.due);
        Some(timer.task)
    }

    /// Move the clock forward to `deadline`. The clock never runs backwards.
    pub fn set_now(&mut self, deadline: Millis) {
        self.now = self.now.max(deadline);
    }

    /// Milliseconds until the earliest pending timer, if any.
    pub fn time_until_next(&self) -> Option<Millis> {
        self.timers
            .iter()
            .map(|t| t.due)
            .min_by(|a, b| a.total_cmp(b))
            .map(|due| (due - self.now).max(0.0))
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let mut q = TimerQueue::new();
        q.schedule(250.0, "late");
        q.schedule(50.0, "early");
        assert_eq!(q.pop_until(1000.0), Some("early"));
        assert_eq!(q.now(), 50.0);
        assert_eq!(q.pop_until(1000.0), Some("late"));
        assert_eq!(q.now(), 250.0);
        assert!(q.is_empty());
    }

    #[test]
    fn ties_keep_scheduling_order() {
        let mut q = TimerQueue::new();
        q.schedule(10.0, 1);
        q.schedule(10.0, 2);
        q.schedule(10.0, 3);
        let fired: Vec<_> = std::iter::from_fn(|| q.pop_until(10.0)).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn holds_timers_past_deadline() {
        let mut q = TimerQueue::new();
        q.schedule(50.0, ());
        assert_eq!(q.pop_until(49.0), None);
        q.set_now(49.0);
        assert_eq!(q.time_until_next(), Some(1.0));
        assert_eq!(q.pop_until(50.0), Some(()));
    }

    #[test]
    fn delays_are_relative_to_current_clock() {
        let mut q = TimerQueue::new();
        q.set_now(100.0);
        q.schedule(50.0, ());
        assert_eq!(q.time_until_next(), Some(50.0));
        assert_eq!(q.pop_until(149.0), None);
        assert_eq!(q.pop_until(150.0), Some(()));
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut q: TimerQueue<()> = TimerQueue::new();
        q.set_now(20.0);
        q.set_now(5.0);
        assert_eq!(q.now(), 20.0);
    }
}
