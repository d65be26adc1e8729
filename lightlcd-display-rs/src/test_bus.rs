//! Host-side I2C bus with an SSD1306 on it, for driver and task tests.
//!
//! The controller model understands just enough of the command stream to
//! place data bytes: column and page address windows (`0x21`, `0x22`) in
//! horizontal addressing mode. Every transaction first yields once, so a
//! task driving the bus hands control back to its caller between writes.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_hal_async::i2c::{Error, ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

const COLUMNS: usize = 128;
const PAGES: usize = 4;

/// I2C control byte that prefixes a command write.
const CONTROL_COMMAND: u8 = 0x00;
/// I2C control byte that prefixes a data write.
const CONTROL_DATA: u8 = 0x40;

const SET_COLUMN_ADDRESS: u8 = 0x21;
const SET_PAGE_ADDRESS: u8 = 0x22;

/// Graphics RAM and address pointer of the modelled controller.
struct Gram {
    pages: [[u8; COLUMNS]; PAGES],
    columns: (u8, u8),
    page_window: (u8, u8),
    column: u8,
    page: u8,
}

impl Gram {
    fn new() -> Self {
        Self {
            pages: [[0; COLUMNS]; PAGES],
            columns: (0, COLUMNS as u8 - 1),
            page_window: (0, PAGES as u8 - 1),
            column: 0,
            page: 0,
        }
    }

    fn command(&mut self, bytes: &[u8]) {
        match bytes {
            [SET_COLUMN_ADDRESS, start, end, ..] => {
                self.columns = (*start, *end);
                self.column = *start;
            }
            [SET_PAGE_ADDRESS, start, end, ..] => {
                self.page_window = (*start, *end);
                self.page = *start;
            }
            _ => {}
        }
    }

    fn data(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if let Some(cell) = self
                .pages
                .get_mut(usize::from(self.page))
                .and_then(|row| row.get_mut(usize::from(self.column)))
            {
                *cell = byte;
            }
            if self.column >= self.columns.1 {
                self.column = self.columns.0;
                self.page = if self.page >= self.page_window.1 {
                    self.page_window.0
                } else {
                    self.page + 1
                };
            } else {
                self.column += 1;
            }
        }
    }
}

/// Shared state of the fake bus: panel contents, counters and failure plan.
pub(crate) struct PanelBus {
    gram: RefCell<Gram>,
    transactions: Cell<u32>,
    flushes: Cell<u32>,
    failures: Cell<u32>,
    fail_all: Cell<bool>,
    fail_flush: Cell<Option<u32>>,
}

impl PanelBus {
    pub(crate) fn new() -> Self {
        Self {
            gram: RefCell::new(Gram::new()),
            transactions: Cell::new(0),
            flushes: Cell::new(0),
            failures: Cell::new(0),
            fail_all: Cell::new(false),
            fail_flush: Cell::new(None),
        }
    }

    /// NAK every transaction while `on`.
    pub(crate) fn fail_all(&self, on: bool) {
        self.fail_all.set(on);
    }

    /// NAK the first data write of the `n`th frame transfer (1-based).
    pub(crate) fn fail_flush(&self, n: u32) {
        self.fail_flush.set(Some(n));
    }

    /// Transactions attempted, failed ones included.
    pub(crate) fn transactions(&self) -> u32 {
        self.transactions.get()
    }

    /// Frame transfers started (column window commands seen).
    pub(crate) fn flushes(&self) -> u32 {
        self.flushes.get()
    }

    /// Transactions answered with a NAK.
    pub(crate) fn failures(&self) -> u32 {
        self.failures.get()
    }

    /// Whether the panel shows pixel `(x, y)`.
    pub(crate) fn is_lit(&self, x: usize, y: usize) -> bool {
        let gram = self.gram.borrow();
        gram.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Lit rows of column `x`, top to bottom.
    pub(crate) fn lit_rows(&self, x: usize) -> impl Iterator<Item = usize> + '_ {
        (0..PAGES * 8).filter(move |&y| self.is_lit(x, y))
    }

    fn write(&self, bytes: &[u8]) -> Result<(), BusFault> {
        match bytes.split_first() {
            Some((&CONTROL_COMMAND, command)) => {
                if command.first() == Some(&SET_COLUMN_ADDRESS) {
                    self.flushes.set(self.flushes.get() + 1);
                }
                self.gram.borrow_mut().command(command);
            }
            Some((&CONTROL_DATA, data)) => {
                if self.fail_flush.get() == Some(self.flushes.get()) {
                    self.fail_flush.set(None);
                    return Err(BusFault);
                }
                self.gram.borrow_mut().data(data);
            }
            _ => {}
        }
        Ok(())
    }
}

/// Bus-level failure reported by [`FakeI2c`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BusFault;

impl Error for BusFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// `embedded-hal-async` I2C handle onto a [`PanelBus`].
pub(crate) struct FakeI2c<'a> {
    bus: &'a PanelBus,
}

impl<'a> FakeI2c<'a> {
    pub(crate) fn new(bus: &'a PanelBus) -> Self {
        Self { bus }
    }
}

impl ErrorType for FakeI2c<'_> {
    type Error = BusFault;
}

impl I2c<SevenBitAddress> for FakeI2c<'_> {
    async fn transaction(
        &mut self,
        _address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), BusFault> {
        embassy_futures::yield_now().await;

        let bus = self.bus;
        bus.transactions.set(bus.transactions.get() + 1);
        let result = if bus.fail_all.get() {
            Err(BusFault)
        } else {
            operations.iter_mut().try_for_each(|op| match op {
                Operation::Write(bytes) => bus.write(bytes),
                Operation::Read(buf) => {
                    buf.fill(0);
                    Ok(())
                }
            })
        };
        if result.is_err() {
            bus.failures.set(bus.failures.get() + 1);
        }
        result
    }
}

/// Backlight enable line recorded in a shared flag.
pub(crate) struct FakeBacklight<'a> {
    on: &'a Cell<bool>,
}

impl<'a> FakeBacklight<'a> {
    pub(crate) fn new(on: &'a Cell<bool>) -> Self {
        Self { on }
    }
}

impl PinErrorType for FakeBacklight<'_> {
    type Error = Infallible;
}

impl OutputPin for FakeBacklight<'_> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.on.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.on.set(true);
        Ok(())
    }
}
