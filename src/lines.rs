//! GPIO capability used by the driver.
//!
//! The touch controller is wired to five plain digital lines. The driver never
//! touches a pin directly; it goes through [`Lines`] so the same sampling code
//! runs against real `embedded-hal` pins ([`Pins`]) or a simulated controller.

use embedded_hal::digital::{Error as _, ErrorKind, InputPin, OutputPin};

/// Lines driven by the MCU.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
  /// Serial clock (CLK).
  Clock,
  /// Controller data input (MOSI / DIN).
  DataOut,
  /// Chip select (CS), active low.
  ChipSelect,
}

/// Lines sampled by the MCU.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
  /// Controller data output (MISO / DOUT).
  DataIn,
  /// Pen interrupt (IRQ / PENIRQ), low while the panel is pressed.
  Ready,
}

/// Drive and sample the touch controller lines.
pub trait Lines {
  /// Drive an output line high.
  fn set(&mut self, line: Output) -> Result<(), ErrorKind>;

  /// Drive an output line low.
  fn clear(&mut self, line: Output) -> Result<(), ErrorKind>;

  /// Sample an input line, `true` when high.
  fn read(&mut self, line: Input) -> Result<bool, ErrorKind>;
}

impl<T: Lines + ?Sized> Lines for &mut T {
  fn set(&mut self, line: Output) -> Result<(), ErrorKind> {
    T::set(self, line)
  }

  fn clear(&mut self, line: Output) -> Result<(), ErrorKind> {
    T::clear(self, line)
  }

  fn read(&mut self, line: Input) -> Result<bool, ErrorKind> {
    T::read(self, line)
  }
}

/// The five touch lines backed by `embedded-hal` digital pins.
///
/// Pins must already be configured for their direction. Configure the outputs
/// for the fastest slew rate the MCU offers; the bit-banged clock has no
/// hardware timing of its own.
#[derive(Debug)]
pub struct Pins<CLK, MOSI, MISO, CS, IRQ> {
  pub clk: CLK,
  pub mosi: MOSI,
  pub miso: MISO,
  pub cs: CS,
  pub irq: IRQ,
}

impl<CLK, MOSI, MISO, CS, IRQ> Pins<CLK, MOSI, MISO, CS, IRQ> {
  pub const fn new(clk: CLK, mosi: MOSI, miso: MISO, cs: CS, irq: IRQ) -> Self {
    Self { clk, mosi, miso, cs, irq }
  }

  /// Give the pins back.
  pub fn release(self) -> (CLK, MOSI, MISO, CS, IRQ) {
    (self.clk, self.mosi, self.miso, self.cs, self.irq)
  }
}

impl<CLK, MOSI, MISO, CS, IRQ> Lines for Pins<CLK, MOSI, MISO, CS, IRQ>
where
  CLK: OutputPin,
  MOSI: OutputPin,
  MISO: InputPin,
  CS: OutputPin,
  IRQ: InputPin,
{
  fn set(&mut self, line: Output) -> Result<(), ErrorKind> {
    match line {
      Output::Clock => self.clk.set_high().map_err(|e| e.kind()),
      Output::DataOut => self.mosi.set_high().map_err(|e| e.kind()),
      Output::ChipSelect => self.cs.set_high().map_err(|e| e.kind()),
    }
  }

  fn clear(&mut self, line: Output) -> Result<(), ErrorKind> {
    match line {
      Output::Clock => self.clk.set_low().map_err(|e| e.kind()),
      Output::DataOut => self.mosi.set_low().map_err(|e| e.kind()),
      Output::ChipSelect => self.cs.set_low().map_err(|e| e.kind()),
    }
  }

  fn read(&mut self, line: Input) -> Result<bool, ErrorKind> {
    match line {
      Input::DataIn => self.miso.is_high().map_err(|e| e.kind()),
      Input::Ready => self.irq.is_high().map_err(|e| e.kind()),
    }
  }
}
