//! lightlcd-firmware
//!
//! Ambient light → scrolling graph firmware for the Raspberry Pi Pico 2.
//! Wires the three library crates into two free-running tasks:
//!
//! 1. The sampler task starts an ADC conversion on the light sensor and
//!    sleeps until the ADC FIFO interrupt reports completion.
//! 2. It scales the 12-bit reading to a display row and publishes it into
//!    the shared `LatestSample`, then immediately starts the next one.
//! 3. The LCD task loops without a timer: it loads the latest reading,
//!    polls the two mode buttons, draws one graph column (or the text
//!    readout) and flushes the frame over I2C.
//!
//! The two tasks share nothing but one atomic byte.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Async, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use light_sampler::{AdcConfig, Conversion, Reference, Sampler, LIGHT_SENSOR_CHANNEL};
use lightlcd::pipeline::{LatestSample, ModeInput, ModeInputs, ScaledSample};
use lightlcd_display_rs::{display_update_task, DisplayConfig, LcdDriver};

// ---------------------------------------------------------------------------
// Boot block and interrupt binding
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

// ADC completion wakes the sampler; I2C0 drives the async display flush.
bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

// ---------------------------------------------------------------------------
// Static storage
// ---------------------------------------------------------------------------

/// Most recent scaled reading. Written by the sampler task, read by the
/// LCD task.
static LATEST: StaticCell<LatestSample> = StaticCell::new();

/// SSD1306 address on the display module.
const LCD_ADDRESS: u8 = 0x3C;

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

/// Concrete I2C type for the display, which owns I2C0 outright.
type LcdI2c = I2c<'static, I2C0, i2c::Async>;

// ---------------------------------------------------------------------------
// Board adapters
// ---------------------------------------------------------------------------

/// ADC0 (GP26) on the RP2350 as a [`Conversion`] source.
struct LightAdc {
    adc: Adc<'static, Async>,
    channel: Channel<'static>,
}

/// Failures of the on-chip ADC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
enum LightAdcError {
    /// Conversion finished with the error flag set.
    Conversion,
    /// Only ADC0 is wired to the light sensor.
    UnsupportedChannel(u8),
}

impl Conversion for LightAdc {
    type Error = LightAdcError;

    fn configure(&mut self, config: &AdcConfig) -> Result<(), LightAdcError> {
        if config.channel != LIGHT_SENSOR_CHANNEL {
            return Err(LightAdcError::UnsupportedChannel(config.channel));
        }
        // The RP2350 ADC runs from the fixed 48 MHz ADC clock against the
        // ADC_VREF pin; neither is selectable.
        if config.reference != Reference::External {
            debug!("ADC reference {} not selectable, using ADC_VREF", config.reference);
        }
        debug!("ADC clock request {} Hz ignored", config.clock_rate_hz);
        Ok(())
    }

    async fn convert(&mut self) -> Result<u16, LightAdcError> {
        self.adc
            .read(&mut self.channel)
            .await
            .map_err(|_| LightAdcError::Conversion)
    }
}

/// Active-low mode buttons with internal pull-ups.
struct Buttons {
    graph: Input<'static>,
    text: Input<'static>,
}

impl ModeInputs for Buttons {
    fn is_active(&mut self, input: ModeInput) -> bool {
        match input {
            ModeInput::Graph => self.graph.is_low(),
            ModeInput::Text => self.text.is_low(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Thin wrapper that monomorphises the generic `display_update_task` so it can
/// be spawned as a concrete Embassy task.
#[embassy_executor::task]
async fn lcd_task(
    driver: LcdDriver<LcdI2c, Output<'static>>,
    latest: &'static LatestSample,
    buttons: Buttons,
    config: DisplayConfig,
) {
    display_update_task(driver, latest, buttons, config).await;
}

/// Free-running acquisition task.
///
/// Applies the conversion parameters once, then restarts a conversion from
/// every completion. If configuration fails the task exits and the display
/// keeps drawing the initial reading.
#[embassy_executor::task]
async fn sampler_task(mut sampler: Sampler<'static, LightAdc>, config: AdcConfig) {
    if let Err(e) = sampler.configure(&config) {
        error!("ADC configuration failed: {}", e);
        return;
    }
    info!("Sampler task started");
    sampler.run().await
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("lightlcd-firmware starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // LIGHT     → GP26  (p.PIN_26)  ADC0
    // I2C_SDA   → GP20  (p.PIN_20)
    // I2C_SCL   → GP21  (p.PIN_21)
    // BACKLIGHT → GP16  (p.PIN_16)  active-high
    // BTN_GRAPH → GP14  (p.PIN_14)  active-low, pull-up enabled
    // BTN_TEXT  → GP15  (p.PIN_15)  active-low, pull-up enabled
    // ———————————————————————————————————————————————————————————————————————

    // Light sensor on ADC0, completion signalled through ADC_IRQ_FIFO.
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let channel = Channel::new_pin(p.PIN_26, Pull::None);

    // I2C0 at fast-mode speed; the flush sets the graph scroll rate.
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c_config,
    );

    let backlight = Output::new(p.PIN_16, Level::Low);
    let lcd_driver = LcdDriver::new(i2c, LCD_ADDRESS, backlight);

    let buttons = Buttons {
        graph: Input::new(p.PIN_14, Pull::Up),
        text: Input::new(p.PIN_15, Pull::Up),
    };

    // Shared reading starts at the top row until the first conversion.
    let latest: &'static LatestSample = LATEST.init(LatestSample::new(ScaledSample::ZERO));

    let display_config = DisplayConfig::default(); // 128x32, 6-column clear-ahead

    // Readings are scaled to the same height the display task draws with.
    let sampler = Sampler::new(
        LightAdc { adc, channel },
        latest,
        display_config.display_height,
    );

    // —— Spawn tasks ————————————————————————————————————————————————————————

    spawner.spawn(unwrap!(sampler_task(sampler, AdcConfig::default())));
    spawner.spawn(unwrap!(lcd_task(lcd_driver, latest, buttons, display_config)));

    info!("All tasks spawned");
}
