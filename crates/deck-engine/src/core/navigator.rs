/// Where a slide change is in its animation sequence.
///
/// `Idle → Entering → Settling → Idle`. Anything but `Idle` holds the
/// transition lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    /// Outgoing classes cleared; waiting to activate `target`.
    Entering { target: usize },
    /// Target is active; waiting for the CSS transition to finish.
    Settling,
}

/// Current slide index plus the transition lock.
#[derive(Debug, Clone)]
pub struct SlideNavigator {
    current: usize,
    total: usize,
    phase: TransitionPhase,
}

impl SlideNavigator {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            phase: TransitionPhase::Idle,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.total
    }

    /// Target of a "next" request, if one is allowed right now.
    pub fn next_target(&self) -> Option<usize> {
        if self.is_locked() || self.is_last() {
            return None;
        }
        Some(self.current + 1)
    }

    /// Target of a "previous" request, if one is allowed right now.
    pub fn previous_target(&self) -> Option<usize> {
        if self.is_locked() || self.is_first() {
            return None;
        }
        Some(self.current - 1)
    }

    /// Start a transition to `target`. Returns false (and changes nothing) when
    /// locked, already there, or out of range.
    pub fn begin(&mut self, target: usize) -> bool {
        if self.is_locked() || target == self.current || target >= self.total {
            return false;
        }
        self.phase = TransitionPhase::Entering { target };
        true
    }

    /// Commit the pending target: `Entering → Settling`. Returns the new index.
    pub fn enter(&mut self) -> Option<usize> {
        match self.phase {
            TransitionPhase::Entering { target } => {
                self.current = target;
                self.phase = TransitionPhase::Settling;
                Some(target)
            }
            _ => None,
        }
    }

    /// Release the lock: `Settling → Idle`.
    pub fn settle(&mut self) -> bool {
        if self.phase == TransitionPhase::Settling {
            self.phase = TransitionPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Progress through the deck as a percentage: `(current + 1) / total * 100`.
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.current + 1) as f64 / self.total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_transition_cycle() {
        let mut nav = SlideNavigator::new(3);
        assert!(nav.begin(2));
        assert_eq!(nav.phase(), TransitionPhase::Entering { target: 2 });
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.enter(), Some(2));
        assert_eq!(nav.current(), 2);
        assert!(nav.is_locked());
        assert!(nav.settle());
        assert_eq!(nav.phase(), TransitionPhase::Idle);
    }

    #[test]
    fn rejects_same_out_of_range_and_locked() {
        let mut nav = SlideNavigator::new(3);
        assert!(!nav.begin(0));
        assert!(!nav.begin(3));
        assert!(nav.begin(1));
        assert!(!nav.begin(2));
        assert_eq!(nav.next_target(), None);
        assert_eq!(nav.previous_target(), None);
    }

    #[test]
    fn boundary_targets() {
        let mut nav = SlideNavigator::new(3);
        assert_eq!(nav.previous_target(), None);
        assert_eq!(nav.next_target(), Some(1));
        nav.begin(2);
        nav.enter();
        nav.settle();
        assert_eq!(nav.next_target(), None);
        assert_eq!(nav.previous_target(), Some(1));
    }

    #[test]
    fn steps_out_of_order_are_ignored() {
        let mut nav = SlideNavigator::new(3);
        assert_eq!(nav.enter(), None);
        assert!(!nav.settle());
        nav.begin(1);
        assert!(!nav.settle());
    }

    #[test]
    fn progress_tracks_index() {
        let mut nav = SlideNavigator::new(4);
        assert_eq!(nav.progress_percent(), 25.0);
        nav.begin(3);
        nav.enter();
        assert_eq!(nav.progress_percent(), 100.0);
    }
}
