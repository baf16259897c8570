use embedded_hal::delay::DelayNs;

use crate::lines::{Lines, Output};
use crate::{Error, Touchscreen};

/// Screen position in pixels.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
  pub x: u16,
  pub y: u16,
}

impl Point {
  pub const fn new(x: u16, y: u16) -> Self {
    Self { x, y }
  }
}

impl core::fmt::Debug for Point {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// Averaged controller counts, exactly as shifted in (before negation).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawPoint {
  pub x: u16,
  pub y: u16,
}

impl RawPoint {
  pub const fn new(x: u16, y: u16) -> Self {
    Self { x, y }
  }
}

/// Outcome of a sample batch.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
  /// Every cycle completed and the panel was still pressed afterwards.
  Ok,
  /// The press was missing, lost during the batch, or gone at the end.
  Noisy,
}

impl Status {
  pub const fn is_ok(self) -> bool {
    matches!(self, Status::Ok)
  }
}

/// Running sums of one sample batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Accumulator {
  x: u32,
  y: u32,
  count: u32,
}

impl Accumulator {
  pub(crate) fn push(&mut self, x: u16, y: u16) {
    self.x += x as u32;
    self.y += y as u32;
    self.count += 1;
  }

  pub(crate) const fn count(&self) -> u32 {
    self.count
  }

  /// Truncating mean of each axis, `None` for an empty batch.
  pub(crate) const fn average(&self) -> Option<RawPoint> {
    if self.count == 0 {
      return None;
    }
    Some(RawPoint::new((self.x / self.count) as u16, (self.y / self.count) as u16))
  }
}

impl<L, D> Touchscreen<L, D>
where
  L: Lines,
  D: DelayNs,
{
  /// Sample the panel and convert the averaged position to pixels.
  ///
  /// Runs `samples` Y/X read cycles for as long as the panel stays pressed.
  /// The batch only counts when every cycle ran and the panel is still pressed
  /// once chip select is released; anything else is [`Status::Noisy`] with a
  /// zero point. Call [`Touchscreen::is_pressed`] first to avoid a wasted
  /// transaction.
  pub fn read_coordinates(&mut self) -> Result<(Point, Status), Error> {
    let (raw, status) = self.read_raw()?;
    if !status.is_ok() {
      return Ok((Point::default(), status));
    }
    Ok((self.config.calibration.to_screen(raw), status))
  }

  /// Same transaction as [`Touchscreen::read_coordinates`], returning the
  /// averaged counts without calibration. Useful for fitting calibration
  /// constants.
  pub fn read_raw(&mut self) -> Result<(RawPoint, Status), Error> {
    let acc = self.sample()?;
    let target = self.config.sample_target() as u32;

    let pressed = self.is_pressed()?;
    match acc.average() {
      Some(raw) if acc.count() == target && pressed => {
        #[cfg(feature = "defmt")]
        defmt::trace!("touch raw average {} over {} cycles", raw, target);
        Ok((raw, Status::Ok))
      }
      _ => {
        #[cfg(feature = "defmt")]
        defmt::debug!("touch batch rejected: {}/{} cycles, pressed: {}", acc.count(), target, pressed);
        Ok((RawPoint::default(), Status::Noisy))
      }
    }
  }

  /// Check for a press and read it.
  ///
  /// `None` when the panel is not pressed or the batch came out noisy.
  pub fn touch(&mut self) -> Result<Option<Point>, Error> {
    if !self.is_pressed()? {
      return Ok(None);
    }
    match self.read_coordinates()? {
      (point, Status::Ok) => Ok(Some(point)),
      (_, Status::Noisy) => Ok(None),
    }
  }

  fn sample(&mut self) -> Result<Accumulator, Error> {
    self.lines.set(Output::Clock)?;
    self.lines.set(Output::DataOut)?;
    self.lines.set(Output::ChipSelect)?;
    self.lines.clear(Output::ChipSelect)?;

    let result = self.sample_cycles();

    self.lines.set(Output::ChipSelect)?;
    result
  }

  fn sample_cycles(&mut self) -> Result<Accumulator, Error> {
    let mut acc = Accumulator::default();
    let mut remaining = self.config.sample_target();

    while remaining > 0 && self.is_pressed()? {
      self.write_command(self.config.read_y)?;
      let y = self.read_response()?;
      self.write_command(self.config.read_x)?;
      let x = self.read_response()?;

      acc.push(x, y);
      remaining -= 1;
    }

    Ok(acc)
  }
}
