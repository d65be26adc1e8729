/// What the display loop draws each iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Scrolling column plot of the light level.
    #[default]
    Graph,
    /// Numeric readout of the light level.
    Text,
}

/// The two momentary inputs that select a [`DisplayMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeInput {
    /// Input 0: switch to [`DisplayMode::Graph`].
    Graph,
    /// Input 1: switch to [`DisplayMode::Text`].
    Text,
}

/// Source of mode-select input levels.
///
/// Implementations report the *current* level; no edge detection or
/// debouncing is expected.
pub trait ModeInputs {
    /// Returns `true` while `input` is pressed.
    fn is_active(&mut self, input: ModeInput) -> bool;
}

/// Input source for boards without mode buttons. Never active.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInputs;

impl ModeInputs for NoInputs {
    fn is_active(&mut self, _input: ModeInput) -> bool {
        false
    }
}

/// Display-state side effects requested by [`ModeController::poll`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeTransition {
    /// The whole frame buffer should be cleared.
    pub clear_display: bool,
    /// The graph cursor should return to column 0.
    pub reset_cursor: bool,
}

impl ModeTransition {
    /// Returns `true` if the poll selected a mode.
    pub fn any(&self) -> bool {
        self.clear_display || self.reset_cursor
    }
}

/// Polled mode selector.
///
/// Each [`poll()`](Self::poll) checks input 0 and then input 1. A held
/// input re-selects its mode (and requests another clear) on every poll;
/// this matches the board's plain level polling and is not debounced.
///
/// # Example
///
/// ```
/// use lightlcd::pipeline::{DisplayMode, ModeController, ModeInput, ModeInputs};
///
/// struct TextButton;
/// impl ModeInputs for TextButton {
///     fn is_active(&mut self, input: ModeInput) -> bool {
///         input == ModeInput::Text
///     }
/// }
///
/// let mut mode = ModeController::new();
/// let t = mode.poll(&mut TextButton);
/// assert_eq!(mode.mode(), DisplayMode::Text);
/// assert!(t.clear_display && !t.reset_cursor);
/// ```
#[derive(Debug, Default)]
pub struct ModeController {
    mode: DisplayMode,
}

impl ModeController {
    /// Start in [`DisplayMode::Graph`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Sample both inputs and apply any selection.
    ///
    /// - Input 0 active: mode becomes Graph, display cleared, cursor reset.
    /// - Input 1 active: mode becomes Text, display cleared.
    ///
    /// When both are active the Graph selection is applied first, so the
    /// poll ends in Text with both side effects requested.
    pub fn poll<I: ModeInputs>(&mut self, inputs: &mut I) -> ModeTransition {
        let mut transition = ModeTransition::default();

        if inputs.is_active(ModeInput::Graph) {
            self.select(DisplayMode::Graph);
            transition.clear_display = true;
            transition.reset_cursor = true;
        }

        if inputs.is_active(ModeInput::Text) {
            self.select(DisplayMode::Text);
            transition.clear_display = true;
        }

        transition
    }

    fn select(&mut self, mode: DisplayMode) {
        #[cfg(feature = "defmt")]
        if self.mode != mode {
            defmt::info!("Display mode: {}", mode);
        }
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Input levels fixed for the duration of a poll.
    struct Levels {
        graph: bool,
        text: bool,
    }

    impl ModeInputs for Levels {
        fn is_active(&mut self, input: ModeInput) -> bool {
            match input {
                ModeInput::Graph => self.graph,
                ModeInput::Text => self.text,
            }
        }
    }

    #[test]
    fn starts_in_graph_mode() {
        assert_eq!(ModeController::new().mode(), DisplayMode::Graph);
    }

    #[test]
    fn idle_poll_changes_nothing() {
        let mut m = ModeController::new();
        let t = m.poll(&mut Levels { graph: false, text: false });
        assert!(!t.any());
        assert_eq!(m.mode(), DisplayMode::Graph);
    }

    #[test]
    fn no_inputs_never_switch() {
        let mut m = ModeController::new();
        for _ in 0..10 {
            assert!(!m.poll(&mut NoInputs).any());
        }
        assert_eq!(m.mode(), DisplayMode::Graph);
    }

    #[test]
    fn text_input_selects_text_and_clears() {
        let mut m = ModeController::new();
        let t = m.poll(&mut Levels { graph: false, text: true });
        assert_eq!(m.mode(), DisplayMode::Text);
        assert!(t.clear_display);
        assert!(!t.reset_cursor);
    }

    #[test]
    fn graph_input_selects_graph_clears_and_resets() {
        let mut m = ModeController::new();
        m.poll(&mut Levels { graph: false, text: true });
        let t = m.poll(&mut Levels { graph: true, text: false });
        assert_eq!(m.mode(), DisplayMode::Graph);
        assert!(t.clear_display);
        assert!(t.reset_cursor);
    }

    #[test]
    fn held_input_retriggers_every_poll() {
        let mut m = ModeController::new();
        let mut held = Levels { graph: true, text: false };
        for _ in 0..3 {
            let t = m.poll(&mut held);
            assert!(t.clear_display);
            assert!(t.reset_cursor);
        }
    }

    #[test]
    fn both_inputs_end_in_text() {
        let mut m = ModeController::new();
        let t = m.poll(&mut Levels { graph: true, text: true });
        assert_eq!(m.mode(), DisplayMode::Text);
        assert!(t.clear_display);
        assert!(t.reset_cursor);
    }
}
