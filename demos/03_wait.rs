//! Sleeping on the pen interrupt before sampling.
#![allow(unused)]
use embedded_hal::{
  delay::DelayNs,
  digital::{InputPin, OutputPin},
};
use embedded_hal_async::digital::Wait;
use ili9341_touch::{Config, Pins, Touchscreen};

#[allow(dead_code)]
async fn run<CLK, MOSI, MISO, CS, IRQ, D>(
  pins: Pins<CLK, MOSI, MISO, CS, IRQ>,
  delay: D,
) -> Result<(), ili9341_touch::Error>
where
  CLK: OutputPin,
  MOSI: OutputPin,
  MISO: InputPin,
  CS: OutputPin,
  IRQ: InputPin + Wait,
  D: DelayNs,
{
  let mut touch = Touchscreen::new(pins, delay, Config::default().with_samples(64));

  loop {
    touch.wait_for_press().await?;
    if let Some(point) = touch.touch()? {
      let _ = (point.x, point.y);
      // handle touch
    }
  }
}

fn main() {}
