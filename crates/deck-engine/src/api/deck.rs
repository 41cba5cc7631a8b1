use crate::api::config::DeckConfig;
use crate::api::presentation::Presentation;
use crate::bridge::protocol::DomCommand;
use crate::components::modal::Modal;
use crate::components::slide::DeckView;
use crate::core::navigator::{SlideNavigator, TransitionPhase};
use crate::core::time::{Millis, TimerQueue};
use crate::input::event::{InputEvent, Key};
use crate::input::swipe::{SwipeDirection, SwipeTracker};
use crate::systems::details::{phase_details_html, phase_title, player_details_html};

/// Delayed steps of the slide and modal animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    EnterSlide,
    SettleSlide,
    ExpandValueBars,
    RevealModal(u32),
    HideModal(u32),
}

/// The presentation controller: one per page, owned by the host.
///
/// Inputs go in through [`Deck::handle`] (or the named operations), time goes
/// in through [`Deck::advance`], and DOM changes come out of
/// [`Deck::drain_commands`]. [`Deck::view`] and [`Deck::modal`] mirror what
/// the page should look like after those commands are applied.
pub struct Deck<P: Presentation> {
    presentation: P,
    config: DeckConfig,
    navigator: SlideNavigator,
    view: DeckView,
    modal: Modal,
    swipe: SwipeTracker,
    timers: TimerQueue<Task>,
    commands: Vec<DomCommand>,
}

impl<P: Presentation> Deck<P> {
    /// Build a deck using the presentation's own config.
    pub fn new(presentation: P) -> Self {
        let config = presentation.config();
        Self::with_config(presentation, config)
    }

    /// Build a deck with an explicit config. An invalid config falls back to
    /// the default with a warning.
    pub fn with_config(presentation: P, config: DeckConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("{}; using default deck config", e);
                DeckConfig::default()
            }
        };
        Self {
            presentation,
            navigator: SlideNavigator::new(config.total_slides),
            view: DeckView::new(config.total_slides),
            modal: Modal::new(),
            swipe: SwipeTracker::new(),
            timers: TimerQueue::new(),
            commands: Vec::with_capacity(16),
            config,
        }
    }

    /// Bring the page in line with the initial state: counters, buttons,
    /// dots, progress bar, and the first value-bar animation.
    pub fn init(&mut self) {
        self.sync_display();
        self.sync_progress();
        self.replay_value_bars();
        log::info!("deck ready with {} slides", self.config.total_slides);
    }

    // -- Navigation --

    /// Advance one slide. Returns true if a transition started.
    pub fn next(&mut self) -> bool {
        match self.navigator.next_target() {
            Some(target) => self.go_to(target),
            None => false,
        }
    }

    /// Go back one slide. Returns true if a transition started.
    pub fn previous(&mut self) -> bool {
        match self.navigator.previous_target() {
            Some(target) => self.go_to(target),
            None => false,
        }
    }

    /// Jump to `target`. No-op while a transition runs, when already there,
    /// or when `target` is out of range.
    pub fn go_to(&mut self, target: usize) -> bool {
        if !self.navigator.begin(target) {
            return false;
        }
        log::debug!("slide {} -> {}", self.navigator.current(), target);
        self.view.clear_for(target);
        self.commands.push(DomCommand::ClearSlides { target });
        self.timers.schedule(self.config.enter_delay_ms, Task::EnterSlide);
        true
    }

    // -- Detail modal --

    /// Show the detail modal for a player card. Unknown names log a warning
    /// and leave the page untouched.
    pub fn show_player(&mut self, name: &str) -> bool {
        let name = name.trim();
        let body = match self.presentation.player(name) {
            Some(player) => player_details_html(player),
            None => {
                log::warn!("No data found for player: {}", name);
                return false;
            }
        };
        self.open_modal(name.to_string(), body);
        true
    }

    /// Show the detail modal for a phase card. Unknown keys are ignored.
    pub fn show_phase(&mut self, key: &str) -> bool {
        let key = key.trim();
        let (title, body) = match self.presentation.phase(key) {
            Some(phase) => (phase_title(key, phase), phase_details_html(phase)),
            None => return false,
        };
        self.open_modal(title, body);
        true
    }

    /// Start closing the modal. Returns false when no modal is showing.
    pub fn close_modal(&mut self) -> bool {
        match self.modal.close() {
            Some(generation) => {
                log::debug!("modal closing");
                self.commands.push(DomCommand::SetModalActive(false));
                self.timers
                    .schedule(self.config.modal_hide_delay_ms, Task::HideModal(generation));
                true
            }
            None => false,
        }
    }

    fn open_modal(&mut self, title: String, body: String) {
        let opened = self.modal.open(title.as_str(), body.as_str());
        if opened.first_mount {
            self.commands.push(DomCommand::MountModal);
        }
        log::debug!("modal opening: {}", title);
        self.commands.push(DomCommand::ShowModal { title, body });
        self.timers.schedule(
            self.config.modal_reveal_delay_ms,
            Task::RevealModal(opened.generation),
        );
    }

    // -- Input --

    /// Route one input event. Returns true if it changed anything.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PrevClicked => self.previous(),
            InputEvent::NextClicked => self.next(),
            InputEvent::DotClicked(index) => self.go_to(index),
            InputEvent::KeyDown(key) => match key {
                Key::ArrowLeft => self.previous(),
                Key::ArrowRight => self.next(),
                Key::Home => self.go_to(0),
                Key::End => self.go_to(self.config.last_slide()),
                Key::Escape => self.close_modal(),
            },
            InputEvent::TouchStart { screen_x } => {
                self.swipe.start(screen_x);
                false
            }
            InputEvent::TouchEnd { screen_x } => {
                match self.swipe.end(screen_x, self.config.swipe_threshold_px) {
                    Some(SwipeDirection::Left) => self.next(),
                    Some(SwipeDirection::Right) => self.previous(),
                    None => false,
                }
            }
            InputEvent::PlayerCardClicked(name) => self.show_player(&name),
            InputEvent::PhaseCardClicked(key) => self.show_phase(&key),
            InputEvent::ModalDismissed => self.close_modal(),
            InputEvent::Resized => {
                self.sync_progress();
                true
            }
        }
    }

    // -- Time --

    /// Advance the clock by `dt` ms, running every step that falls due.
    /// Steps scheduled by earlier steps run in the same call if they fall due too.
    pub fn advance(&mut self, dt: Millis) {
        let deadline = self.timers.now() + dt.max(0.0);
        while let Some(task) = self.timers.pop_until(deadline) {
            self.run(task);
        }
        self.timers.set_now(deadline);
    }

    /// Milliseconds until the next pending step, if any.
    pub fn next_wakeup(&self) -> Option<Millis> {
        self.timers.time_until_next()
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::EnterSlide => {
                if let Some(index) = self.navigator.enter() {
                    self.view.activate(index);
                    self.commands.push(DomCommand::ActivateSlide { index });
                    self.sync_display();
                    self.sync_progress();
                    self.replay_value_bars();
                    self.timers.schedule(self.config.settle_delay_ms, Task::SettleSlide);
                }
            }
            Task::SettleSlide => {
                if self.navigator.settle() {
                    log::debug!("slide {} settled", self.navigator.current());
                }
            }
            Task::ExpandValueBars => self.commands.push(DomCommand::ExpandValueBars),
            Task::RevealModal(generation) => {
                if self.modal.reveal(generation) {
                    self.commands.push(DomCommand::SetModalActive(true));
                }
            }
            Task::HideModal(generation) => {
                if self.modal.hide(generation) {
                    self.commands.push(DomCommand::HideModal);
                }
            }
        }
    }

    fn sync_display(&mut self) {
        let current = self.navigator.current();
        self.view.sync_controls(current);
        self.commands.push(DomCommand::UpdateCounter {
            current: self.view.counter,
            total: self.view.total,
        });
        self.commands.push(DomCommand::SetNavDisabled {
            prev: self.view.prev_disabled,
            next: self.view.next_disabled,
        });
        self.commands.push(DomCommand::SetActiveDot { index: current });
    }

    fn sync_progress(&mut self) {
        let percent = self.navigator.progress_percent();
        self.view.progress_percent = percent;
        self.commands.push(DomCommand::SetProgress { percent });
    }

    fn replay_value_bars(&mut self) {
        self.commands.push(DomCommand::CollapseValueBars);
        self.timers
            .schedule(self.config.value_bar_delay_ms, Task::ExpandValueBars);
    }

    // -- Output --

    /// Take every command emitted since the last drain, in order.
    pub fn drain_commands(&mut self) -> Vec<DomCommand> {
        std::mem::take(&mut self.commands)
    }

    // -- State --

    pub fn current_slide(&self) -> usize {
        self.navigator.current()
    }

    pub fn transition(&self) -> TransitionPhase {
        self.navigator.phase()
    }

    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_locked()
    }

    pub fn view(&self) -> &DeckView {
        &self.view
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Current clock value.
    pub fn now(&self) -> Millis {
        self.timers.now()
    }
}
