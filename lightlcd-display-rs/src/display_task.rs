//! Display update task.
//!
//! Contains [`display_update_task`], the never-ending loop that reads the
//! shared [`LatestSample`], draws one view step and flushes the frame to
//! the panel.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::i2c::I2c;

use lightlcd::pipeline::{LatestSample, ModeInputs};

use crate::driver::{LcdDriver, PANEL_HEIGHT, PANEL_WIDTH};
use crate::layout::DisplayConfig;
use crate::view::LightView;

// ── Display update task ──────────────────────────────────────────────────

/// Free-running display loop.
///
/// This is a regular `async fn`, **not** an Embassy `#[task]`. Callers
/// should create a thin, concrete task wrapper that calls this function,
/// since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn lcd_task(
///     driver: LcdDriver<MyConcreteI2cType, Output<'static>>,
///     latest: &'static LatestSample,
///     buttons: Buttons,
///     config: DisplayConfig,
/// ) {
///     display_update_task(driver, latest, buttons, config).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Initialise the controller, switch the backlight on, set contrast.
/// 2. Loop with no timer; the pace is set by the I2C flush:
///    - **Step 1**: load the latest scaled sample. The sampler may have
///      published several values since the last iteration (only the last
///      is seen) or none (the same value is drawn again).
///    - **Step 2**: [`LightView::step`], poll buttons, plot or print.
///    - **Step 3**: flush the frame buffer to the panel.
///
/// # Errors
///
/// * Initialisation failure: logs the error and **returns** (the panel stays
///   blank; the sampler keeps running).
/// * Backlight or contrast failure: logged, the loop still starts.
/// * Render / flush failure: logs the error, waits
///   `config.retry_backoff_ms`, and continues.
///
/// # Panics
///
/// In debug builds, if `config` describes a different panel size than the
/// one [`LcdDriver`] drives.
pub async fn display_update_task<I2C, BL, IN>(
    mut driver: LcdDriver<I2C, BL>,
    latest: &'static LatestSample,
    mut inputs: IN,
    config: DisplayConfig,
) where
    I2C: I2c,
    BL: OutputPin,
    IN: ModeInputs,
{
    debug_assert!(
        config.display_width == PANEL_WIDTH && config.display_height == PANEL_HEIGHT,
        "DisplayConfig geometry does not match the panel"
    );

    // ── Initialisation ───────────────────────────────────────────────
    if let Err(_e) = driver.init().await {
        #[cfg(feature = "defmt")]
        defmt::error!("LCD init failed: {}", _e);
        return;
    }

    if let Err(_e) = driver.set_backlight(true) {
        #[cfg(feature = "defmt")]
        defmt::warn!("Backlight: {}", _e);
    }
    if let Err(_e) = driver.set_contrast(config.contrast).await {
        #[cfg(feature = "defmt")]
        defmt::warn!("Contrast: {}", _e);
    }

    driver.clear_buffer();

    #[cfg(feature = "defmt")]
    defmt::info!("LCD initialised");

    let backoff = embassy_time::Duration::from_millis(config.retry_backoff_ms);
    let mut view = LightView::new(config);

    // ── Main loop ────────────────────────────────────────────────────
    loop {
        // ── Step 1: latest sample (single atomic byte) ───────────────
        let sample = latest.load();

        // ── Step 2: draw into the frame buffer (no I2C) ──────────────
        if let Some(display) = driver.display_mut() {
            if let Err(_e) = view.step(display, &mut inputs, sample) {
                #[cfg(feature = "defmt")]
                defmt::error!("Render failed");
                embassy_time::Timer::after(backoff).await;
                continue;
            }
        } else {
            // init() succeeded, so this is unreachable in practice.
            return;
        }

        // ── Step 3: flush to hardware ────────────────────────────────
        if let Err(_e) = driver.flush().await {
            #[cfg(feature = "defmt")]
            defmt::error!("Flush failed: {}", _e);
            embassy_time::Timer::after(backoff).await;
        }
    }
}
