mod calibration;
mod timing;

pub use calibration::*;
pub use timing::*;

/// Controller command requesting an X-axis conversion.
pub const CMD_READ_X: u8 = 0xD0;
/// Controller command requesting a Y-axis conversion.
pub const CMD_READ_Y: u8 = 0x90;

/// Complete driver configuration.
///
/// All values are read-only inputs to the sampling routine; the driver never
/// mutates them.
///
/// # Example
/// ```no_run
/// use ili9341_touch::{Axis, Calibration, Config, Magnitude, Timing};
///
/// let calibration = Calibration::new(
///   Axis::new(585, 13, Magnitude::new(116, 100)),
///   Axis::new(476, 15, Magnitude::new(116, 100)),
/// );
/// let config = Config::default()
///   .with_samples(64)
///   .with_calibration(calibration)
///   .with_timing(Timing::new(250));
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  /// Read cycles per coordinate fetch. More samples reject more noise and take
  /// longer. Zero acts as 1.
  pub samples: u16,
  /// Command byte for an X conversion.
  pub read_x: u8,
  /// Command byte for a Y conversion.
  pub read_y: u8,
  pub calibration: Calibration,
  pub timing: Timing,
}

impl Config {
  pub const fn new(samples: u16, calibration: Calibration, timing: Timing) -> Self {
    Self { samples: clamp_samples(samples), read_x: CMD_READ_X, read_y: CMD_READ_Y, calibration, timing }
  }

  /// A zero sample count is stored as 1.
  pub const fn with_samples(mut self, samples: u16) -> Self {
    self.samples = clamp_samples(samples);
    self
  }

  pub const fn with_commands(mut self, read_x: u8, read_y: u8) -> Self {
    self.read_x = read_x;
    self.read_y = read_y;
    self
  }

  pub const fn with_calibration(mut self, calibration: Calibration) -> Self {
    self.calibration = calibration;
    self
  }

  pub const fn with_timing(mut self, timing: Timing) -> Self {
    self.timing = timing;
    self
  }

  /// Sample count actually run per read, at least 1 even when `samples` was
  /// zeroed directly.
  pub const fn sample_target(&self) -> u16 {
    clamp_samples(self.samples)
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new(1000, Calibration::default(), Timing::default())
  }
}

const fn clamp_samples(samples: u16) -> u16 {
  if samples == 0 {
    1
  } else {
    samples
  }
}
