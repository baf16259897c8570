use crate::{Point, RawPoint};

/// Fixed-point scale factor `numerator / denominator`.
///
/// The product is taken before the truncating division, so `116 / 100` turns
/// 176 into 204 exactly as a float multiply by 1.16 followed by truncation.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude {
  pub numerator: u16,
  pub denominator: u16,
}

impl Magnitude {
  /// A zero denominator is stored as 1.
  pub const fn new(numerator: u16, denominator: u16) -> Self {
    let denominator = if denominator == 0 { 1 } else { denominator };
    Self { numerator, denominator }
  }

  /// Whole-number multiplier.
  pub const fn times(factor: u16) -> Self {
    Self::new(factor, 1)
  }

  pub(crate) const fn apply(self, value: i64) -> i64 {
    let denominator = if self.denominator == 0 { 1 } else { self.denominator };
    value * self.numerator as i64 / denominator as i64
  }
}

impl Default for Magnitude {
  fn default() -> Self {
    Self::new(116, 100)
  }
}

/// Per-axis conversion from controller counts to pixels.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
  /// Divisor taking the negated raw count into pixel range. Zero acts as 1.
  pub translation: u16,
  /// Pixel offset subtracted after translation.
  pub offset: i16,
  /// Pixel-space scale applied last.
  pub magnitude: Magnitude,
}

impl Axis {
  /// A zero translation is stored as 1.
  pub const fn new(translation: u16, offset: i16, magnitude: Magnitude) -> Self {
    let translation = if translation == 0 { 1 } else { translation };
    Self { translation, offset, magnitude }
  }

  const fn scaled(self, raw: u16) -> i64 {
    let translation = if self.translation == 0 { 1 } else { self.translation };
    (raw.wrapping_neg() / translation) as i64
  }
}

/// Linear mapping from averaged raw samples to screen pixels.
///
/// The mapping assumes the panel is mounted for the display's first vertical
/// rotation: X is mirrored against `screen_width`, Y is not. Other mountings
/// either adjust `screen_width` or set `swap_axes`; anything beyond that is up
/// to the caller.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
  pub x: Axis,
  pub y: Axis,
  pub screen_width: u16,
  /// Exchange x and y after the transform.
  pub swap_axes: bool,
}

impl Calibration {
  pub const fn new(x: Axis, y: Axis) -> Self {
    Self { x, y, screen_width: 240, swap_axes: false }
  }

  pub const fn with_screen_width(mut self, screen_width: u16) -> Self {
    self.screen_width = screen_width;
    self
  }

  pub const fn with_swapped_axes(mut self, swap_axes: bool) -> Self {
    self.swap_axes = swap_axes;
    self
  }

  /// Convert averaged raw counts, as shifted in from the controller, into
  /// pixels.
  ///
  /// Raw counts are negated modulo 2^16 first; the controller reports with the
  /// opposite polarity to the screen. Results outside `0..=u16::MAX` wrap.
  pub const fn to_screen(&self, raw: RawPoint) -> Point {
    let x = (self.screen_width as i64 - self.x.scaled(raw.x)) - self.x.offset as i64;
    let y = self.y.scaled(raw.y) - self.y.offset as i64;

    let x = self.x.magnitude.apply(x) as u16;
    let y = self.y.magnitude.apply(y) as u16;

    if self.swap_axes {
      Point::new(y, x)
    } else {
      Point::new(x, y)
    }
  }
}

impl Default for Calibration {
  fn default() -> Self {
    Self::new(Axis::new(585, 13, Magnitude::new(116, 100)), Axis::new(476, 15, Magnitude::new(116, 100)))
  }
}
