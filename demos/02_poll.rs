//! Polling loop: check for a press, then read a calibrated point.
#![allow(unused)]
use embedded_hal::{
  delay::DelayNs,
  digital::{InputPin, OutputPin},
};
use ili9341_touch::{Config, Pins, Status, Touchscreen};

#[allow(dead_code)]
fn run<CLK, MOSI, MISO, CS, IRQ, D>(pins: Pins<CLK, MOSI, MISO, CS, IRQ>, delay: D) -> Result<(), ili9341_touch::Error>
where
  CLK: OutputPin,
  MOSI: OutputPin,
  MISO: InputPin,
  CS: OutputPin,
  IRQ: InputPin,
  D: DelayNs,
{
  let mut touch = Touchscreen::new(pins, delay, Config::default());

  loop {
    if !touch.is_pressed()? {
      continue;
    }
    match touch.read_coordinates()? {
      (point, Status::Ok) => {
        let _ = (point.x, point.y);
        // draw at point
      }
      (_, Status::Noisy) => {
        // lifted or bounced, try again
      }
    }
  }
}

fn main() {}
