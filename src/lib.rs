#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `no_std` driver for the resistive touch panel found on ILI9341 display
//! modules (XPT2046 / ADS7843 style controller), talking to the controller over
//! a bit-banged serial link on five plain GPIO lines.
//!
//! The driver is deliberately simple:
//!
//! - No hardware SPI peripheral is needed, only `embedded-hal` 1.0 digital pins
//! - A press is sampled many times and only accepted when the pen stays down
//!   for the whole batch
//! - Averaged counts are mapped to pixels with a fixed integer transform
//!   configured through [`Calibration`]
//! - No runtime calibration, filtering, or multi-touch
//!
//! The calibration assumes the display's first vertical rotation. Other
//! rotations need a different [`Calibration::screen_width`] or
//! [`Calibration::swap_axes`].
//!
//! ```no_run
//! use embedded_hal::{delay::DelayNs, digital::{InputPin, OutputPin}};
//! use ili9341_touch::{Config, Pins, Status, Touchscreen};
//!
//! fn example<CLK, MOSI, MISO, CS, IRQ, D>(clk: CLK, mosi: MOSI, miso: MISO, cs: CS, irq: IRQ, delay: D)
//! where
//!   CLK: OutputPin,
//!   MOSI: OutputPin,
//!   MISO: InputPin,
//!   CS: OutputPin,
//!   IRQ: InputPin,
//!   D: DelayNs,
//! {
//!   let pins = Pins::new(clk, mosi, miso, cs, irq);
//!   let mut touch = Touchscreen::new(pins, delay, Config::default());
//!
//!   if let Ok(true) = touch.is_pressed() {
//!     if let Ok((point, Status::Ok)) = touch.read_coordinates() {
//!       let _ = (point.x, point.y);
//!     }
//!   }
//! }
//! ```
mod config;
pub mod lines;
mod sample;
#[cfg(test)]
mod sim;
mod transport;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, ErrorKind, InputPin, OutputPin};
use embedded_hal_async::digital::Wait;

pub use config::*;
pub use lines::{Lines, Pins};
pub use sample::{Point, RawPoint, Status};

/// Errors that can occur while driving the controller lines.
///
/// Touch quality is never an error; see [`Status`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A GPIO read or write failed.
  Pin(ErrorKind),
}

impl From<ErrorKind> for Error {
  fn from(kind: ErrorKind) -> Self {
    Error::Pin(kind)
  }
}

/// Resistive touch panel driver.
///
/// Owns the controller lines and a delay provider for clock timing. Calls are
/// blocking and bounded: one coordinate read runs `samples` command/response
/// cycles at most. The driver has no internal locking, so every call must come
/// from one execution context.
pub struct Touchscreen<L, D> {
  lines: L,
  delay: D,
  config: Config,
}

impl<L, D> Touchscreen<L, D>
where
  L: Lines,
  D: DelayNs,
{
  /// Create a driver over already configured lines.
  pub fn new(lines: L, delay: D, config: Config) -> Self {
    Self { lines, delay, config }
  }

  /// Release the lines and the delay provider.
  pub fn release(self) -> (L, D) {
    (self.lines, self.delay)
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn set_config(&mut self, config: Config) {
    self.config = config;
  }

  /// `true` while the panel is pressed (ready line low).
  ///
  /// A single read of the ready line; no other line is touched and no
  /// debouncing is done.
  pub fn is_pressed(&mut self) -> Result<bool, Error> {
    Ok(!self.lines.read(lines::Input::Ready)?)
  }
}

impl<CLK, MOSI, MISO, CS, IRQ, D> Touchscreen<Pins<CLK, MOSI, MISO, CS, IRQ>, D>
where
  CLK: OutputPin,
  MOSI: OutputPin,
  MISO: InputPin,
  CS: OutputPin,
  IRQ: InputPin + Wait,
  D: DelayNs,
{
  /// Wait until the panel is pressed.
  ///
  /// Needs an interrupt-capable ready pin. Resolves immediately when the panel
  /// is already pressed.
  pub async fn wait_for_press(&mut self) -> Result<(), Error> {
    self.lines.irq.wait_for_low().await.map_err(|e| Error::Pin(e.kind()))
  }
}
