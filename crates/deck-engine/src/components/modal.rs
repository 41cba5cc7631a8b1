/// Visibility lifecycle of the detail modal.
///
/// ```text
/// Hidden --open--> Opening --reveal--> Open --close--> Closing --hide--> Hidden
/// ```
/// `Opening` and `Closing` exist only while the fade transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Hidden,
    /// Displayed, waiting for the `active` class.
    Opening,
    /// Displayed with `active`.
    Open,
    /// `active` removed, waiting to be hidden.
    Closing,
}

/// Result of [`Modal::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalOpened {
    /// True the first time the modal is opened; the host must create the node.
    pub first_mount: bool,
    /// Generation the pending reveal belongs to.
    pub generation: u32,
}

/// The single, lazily mounted detail modal.
///
/// Every open or close bumps the generation. Delayed reveal/hide steps carry
/// the generation they were scheduled for, so a step left over from an
/// earlier open or close never overrides the latest request.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    mounted: bool,
    phase: ModalPhase,
    title: String,
    body: String,
    generation: u32,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content and start showing the modal.
    pub fn open(&mut self, title: impl Into<String>, body: impl Into<String>) -> ModalOpened {
        let first_mount = !self.mounted;
        self.mounted = true;
        self.title = title.into();
        self.body = body.into();
        self.phase = ModalPhase::Opening;
        self.generation = self.generation.wrapping_add(1);
        ModalOpened {
            first_mount,
            generation: self.generation,
        }
    }

    /// `Opening → Open`, if `generation` is still current.
    pub fn reveal(&mut self, generation: u32) -> bool {
        if self.phase == ModalPhase::Opening && generation == self.generation {
            self.phase = ModalPhase::Open;
            true
        } else {
            false
        }
    }

    /// Start closing. Returns the generation of the pending hide, or `None`
    /// when there is nothing to close.
    pub fn close(&mut self) -> Option<u32> {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => {
                self.phase = ModalPhase::Closing;
                self.generation = self.generation.wrapping_add(1);
                Some(self.generation)
            }
            ModalPhase::Hidden | ModalPhase::Closing => None,
        }
    }

    /// `Closing → Hidden`, if `generation` is still current.
    pub fn hide(&mut self, generation: u32) -> bool {
        if self.phase == ModalPhase::Closing && generation == self.generation {
            self.phase = ModalPhase::Hidden;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the node carries the `active` class.
    pub fn is_active(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// Whether the node is displayed (anything but `display: none`).
    pub fn is_displayed(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_reveal_close_hide() {
        let mut modal = Modal::new();
        let opened = modal.open("Title", "<p>body</p>");
        assert!(opened.first_mount);
        assert!(modal.is_displayed() && !modal.is_active());
        assert!(modal.reveal(opened.generation));
        assert!(modal.is_active());

        let gen = modal.close().unwrap();
        assert!(!modal.is_active() && modal.is_displayed());
        assert!(modal.hide(gen));
        assert_eq!(modal.phase(), ModalPhase::Hidden);
    }

    #[test]
    fn mounts_once() {
        let mut modal = Modal::new();
        assert!(modal.open("a", "").first_mount);
        assert!(!modal.open("b", "").first_mount);
    }

    #[test]
    fn stale_hide_does_not_hide_reopened_modal() {
        let mut modal = Modal::new();
        let first = modal.open("a", "one");
        modal.reveal(first.generation);
        let stale = modal.close().unwrap();
        let second = modal.open("b", "two");
        assert!(!modal.hide(stale));
        assert!(modal.reveal(second.generation));
        assert_eq!(modal.body(), "two");
    }

    #[test]
    fn close_before_reveal_cancels_reveal() {
        let mut modal = Modal::new();
        let opened = modal.open("a", "");
        let gen = modal.close().unwrap();
        assert!(!modal.reveal(opened.generation));
        assert!(modal.hide(gen));
    }

    #[test]
    fn closing_hidden_modal_is_noop() {
        let mut modal = Modal::new();
        assert_eq!(modal.close(), None);
        assert!(!modal.is_mounted());
    }
}
