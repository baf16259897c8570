//! Building a configuration for a panel mounted in landscape.
#![allow(unused)]
use ili9341_touch::{Axis, Calibration, Config, Magnitude, Timing};

fn main() {
  let calibration = Calibration::new(
    Axis::new(585, 13, Magnitude::new(116, 100)),
    Axis::new(476, 15, Magnitude::new(116, 100)),
  )
  .with_screen_width(320)
  .with_swapped_axes(true);

  let _config = Config::default()
    .with_samples(128)
    .with_calibration(calibration)
    .with_timing(Timing::new(200));
}
