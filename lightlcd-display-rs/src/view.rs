//! Mode-switched view over the latest light reading.
//!
//! [`LightView`] is what the display loop calls once per iteration: it
//! polls the mode inputs, applies any transition, and draws with the
//! renderer for the current [`DisplayMode`].

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use lightlcd::pipeline::{DisplayMode, ModeController, ModeInputs, ScaledSample};

use crate::graph::GraphRenderer;
use crate::layout::{render_text, DisplayConfig};

/// Graph/text view with polled mode selection.
///
/// # Example
///
/// ```no_run
/// # use lightlcd_display_rs::{DisplayConfig, LightView};
/// # use lightlcd::pipeline::{NoInputs, ScaledSample};
/// # fn example(display: &mut impl embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::BinaryColor>) {
/// let mut view = LightView::new(DisplayConfig::default());
/// view.step(display, &mut NoInputs, ScaledSample::from_value(20)).ok();
/// # }
/// ```
pub struct LightView {
    mode: ModeController,
    graph: GraphRenderer,
    config: DisplayConfig,
}

impl LightView {
    /// Start in graph mode with the cursor at column 0.
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            mode: ModeController::new(),
            graph: GraphRenderer::new(&config),
            config,
        }
    }

    /// The currently selected mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode.mode()
    }

    /// The graph renderer, for inspecting its cursor.
    pub fn graph(&self) -> &GraphRenderer {
        &self.graph
    }

    /// One display-loop iteration.
    ///
    /// 1. Poll `inputs`. A selection clears the whole frame buffer; selecting
    ///    graph mode also returns the cursor to column 0.
    /// 2. Graph mode: plot `sample` and advance. Text mode: redraw the
    ///    readout.
    pub fn step<D, I>(
        &mut self,
        display: &mut D,
        inputs: &mut I,
        sample: ScaledSample,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
        I: ModeInputs,
    {
        let transition = self.mode.poll(inputs);
        if transition.clear_display {
            display.clear(BinaryColor::Off)?;
        }
        if transition.reset_cursor {
            self.graph.reset();
        }

        match self.mode.mode() {
            DisplayMode::Graph => self.graph.render_step(display, sample),
            DisplayMode::Text => render_text(display, sample, &self.config),
        }
    }
}
