/// Horizontal swipe direction, named by finger travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: advance.
    Left,
    /// Finger moved right: go back.
    Right,
}

/// Pairs touchstart/touchend positions into swipes.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, screen_x: f32) {
        self.start_x = Some(screen_x);
    }

    /// Finish a touch. Travel must exceed `threshold` pixels to count.
    /// A touchend without a matching touchstart is ignored.
    pub fn end(&mut self, screen_x: f32, threshold: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let difference = start - screen_x;
        if difference.abs() <= threshold {
            return None;
        }
        if difference > 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }
}
