/// Class flags on one `.slide` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideClasses {
    pub active: bool,
    pub prev: bool,
}

/// Mirror of the navigation-related DOM state.
///
/// The deck updates this alongside the commands it emits, so the
/// host-visible result of any input can be checked without a browser.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckView {
    pub slides: Vec<SlideClasses>,
    /// 1-based number in the `currentSlide` counter.
    pub counter: usize,
    /// Number in the `totalSlides` counter.
    pub total: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    /// Index of the `.slide-dot` carrying `active`.
    pub active_dot: usize,
    /// Width of `progressFill`, in percent.
    pub progress_percent: f64,
}

impl DeckView {
    /// The page as authored: first slide active, nothing else set yet.
    pub fn new(total: usize) -> Self {
        let mut slides = vec![SlideClasses::default(); total];
        if let Some(first) = slides.first_mut() {
            first.active = true;
        }
        Self {
            slides,
            counter: 1,
            total,
            prev_disabled: false,
            next_disabled: false,
            active_dot: 0,
            progress_percent: 0.0,
        }
    }

    /// Remove `active`/`prev` everywhere and mark slides before `target` as `prev`.
    pub fn clear_for(&mut self, target: usize) {
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.active = false;
            slide.prev = i < target;
        }
    }

    pub fn activate(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.active = true;
        }
    }

    /// Counter, button and dot state for `current`.
    pub fn sync_controls(&mut self, current: usize) {
        self.counter = current + 1;
        self.prev_disabled = current == 0;
        self.next_disabled = current + 1 >= self.total;
        self.active_dot = current;
    }

    pub fn active_count(&self) -> usize {
        self.slides.iter().filter(|s| s.active).count()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.slides.iter().position(|s| s.active)
    }

    pub fn counter_text(&self) -> String {
        self.counter.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_slide() {
        let view = DeckView::new(3);
        assert_eq!(view.active_index(), Some(0));
        assert_eq!(view.active_count(), 1);
        assert_eq!(view.counter_text(), "1");
    }

    #[test]
    fn clear_marks_earlier_slides_prev() {
        let mut view = DeckView::new(3);
        view.clear_for(2);
        assert_eq!(view.active_count(), 0);
        assert!(view.slides[0].prev && view.slides[1].prev);
        assert!(!view.slides[2].prev);
        view.activate(2);
        assert_eq!(view.active_index(), Some(2));
    }

    #[test]
    fn controls_follow_bounds() {
        let mut view = DeckView::new(3);
        view.sync_controls(0);
        assert!(view.prev_disabled && !view.next_disabled);
        view.sync_controls(2);
        assert!(!view.prev_disabled && view.next_disabled);
        assert_eq!(view.active_dot, 2);
    }
}
