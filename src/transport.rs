use embedded_hal::delay::DelayNs;

use crate::lines::{Input, Lines, Output};
use crate::{Error, Touchscreen};

impl<L, D> Touchscreen<L, D>
where
  L: Lines,
  D: DelayNs,
{
  /// Shift one command byte out, MSB first.
  ///
  /// The clock is forced low before the first bit. Each bit is put on the data
  /// line and latched by the controller on the following clock pulse.
  pub(crate) fn write_command(&mut self, command: u8) -> Result<(), Error> {
    self.lines.clear(Output::Clock)?;

    for bit in (0..8).rev() {
      if command & (1 << bit) != 0 {
        self.lines.set(Output::DataOut)?;
      } else {
        self.lines.clear(Output::DataOut)?;
      }
      self.pulse_clock()?;
    }

    Ok(())
  }

  /// Shift one 16-bit response in, MSB first. Data is sampled after each
  /// clock pulse.
  pub(crate) fn read_response(&mut self) -> Result<u16, Error> {
    let mut value = 0u16;

    for _ in 0..16 {
      value <<= 1;
      self.pulse_clock()?;
      if self.lines.read(Input::DataIn)? {
        value |= 1;
      }
    }

    Ok(value)
  }

  fn pulse_clock(&mut self) -> Result<(), Error> {
    self.lines.set(Output::Clock)?;
    self.settle();
    self.lines.clear(Output::Clock)?;
    self.settle();
    Ok(())
  }

  fn settle(&mut self) {
    let ns = self.config.timing.clock_settle_ns;
    if ns > 0 {
      self.delay.delay_ns(ns);
    }
  }
}
