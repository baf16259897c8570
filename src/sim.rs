//! Simulated touch controller for unit tests.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::ErrorKind;

use crate::config::{CMD_READ_X, CMD_READ_Y};
use crate::lines::{Input, Lines, Output};

const MAX_RESPONSES: usize = 8;
const MAX_LOG: usize = 32;

/// Controller behind the five lines.
///
/// Command bits are latched on armed clock falling edges (a rising edge seen
/// while chip select is low). Once eight bits are in, the matching response is
/// shifted out MSB first, one bit per following falling edge. The ready line
/// reads low for the first `held` samples and high afterwards.
pub(crate) struct Panel {
  cs_low: bool,
  clk_high: bool,
  mosi: bool,
  miso: bool,
  armed: bool,
  shift: u8,
  bits_in: u8,
  out: u16,
  bits_out: u8,
  xs: [u16; MAX_RESPONSES],
  x_len: usize,
  x_next: usize,
  ys: [u16; MAX_RESPONSES],
  y_len: usize,
  y_next: usize,
  held: u32,
  commands: [u8; MAX_LOG],
  pub command_count: usize,
  outputs: [(Output, bool); MAX_LOG],
  pub output_count: usize,
  pub last_output: Option<(Output, bool)>,
  pub ready_reads: u32,
  pub clock_pulses: u32,
}

impl Panel {
  fn with_held(held: u32) -> Self {
    Self {
      cs_low: false,
      clk_high: false,
      mosi: false,
      miso: false,
      armed: false,
      shift: 0,
      bits_in: 0,
      out: 0,
      bits_out: 0,
      xs: [0; MAX_RESPONSES],
      x_len: 0,
      x_next: 0,
      ys: [0; MAX_RESPONSES],
      y_len: 0,
      y_next: 0,
      held,
      commands: [0; MAX_LOG],
      command_count: 0,
      outputs: [(Output::Clock, false); MAX_LOG],
      output_count: 0,
      last_output: None,
      ready_reads: 0,
      clock_pulses: 0,
    }
  }

  /// Pressed for good.
  pub fn pressed() -> Self {
    Self::with_held(u32::MAX)
  }

  /// Never pressed.
  pub fn released() -> Self {
    Self::with_held(0)
  }

  /// Pressed for the first `reads` samples of the ready line.
  pub fn pressed_for(reads: u32) -> Self {
    Self::with_held(reads)
  }

  /// Responses handed out in turn for X and Y commands.
  pub fn with_responses(mut self, xs: &[u16], ys: &[u16]) -> Self {
    debug_assert!(xs.len() <= MAX_RESPONSES && ys.len() <= MAX_RESPONSES);
    self.x_len = xs.len().min(MAX_RESPONSES);
    self.xs[..self.x_len].copy_from_slice(&xs[..self.x_len]);
    self.y_len = ys.len().min(MAX_RESPONSES);
    self.ys[..self.y_len].copy_from_slice(&ys[..self.y_len]);
    self
  }

  pub fn commands(&self) -> &[u8] {
    &self.commands[..self.command_count.min(MAX_LOG)]
  }

  pub fn outputs(&self) -> &[(Output, bool)] {
    &self.outputs[..self.output_count.min(MAX_LOG)]
  }

  fn next_response(&mut self, command: u8) -> u16 {
    match command {
      CMD_READ_X if self.x_len > 0 => {
        let value = self.xs[self.x_next % self.x_len];
        self.x_next += 1;
        value
      }
      CMD_READ_Y if self.y_len > 0 => {
        let value = self.ys[self.y_next % self.y_len];
        self.y_next += 1;
        value
      }
      _ => 0,
    }
  }

  fn falling_edge(&mut self) {
    if !self.armed {
      return;
    }
    self.armed = false;
    self.clock_pulses += 1;

    if self.bits_out > 0 {
      self.bits_out -= 1;
      self.miso = (self.out >> self.bits_out) & 1 != 0;
      return;
    }

    self.shift = (self.shift << 1) | self.mosi as u8;
    self.bits_in += 1;
    if self.bits_in == 8 {
      let command = self.shift;
      if self.command_count < MAX_LOG {
        self.commands[self.command_count] = command;
      }
      self.command_count += 1;
      self.out = self.next_response(command);
      self.bits_out = 16;
      self.bits_in = 0;
      self.shift = 0;
    }
  }

  fn drive(&mut self, line: Output, high: bool) {
    if self.output_count < MAX_LOG {
      self.outputs[self.output_count] = (line, high);
    }
    self.output_count += 1;
    self.last_output = Some((line, high));

    match line {
      Output::Clock => {
        if high && !self.clk_high && self.cs_low {
          self.armed = true;
        }
        if !high && self.clk_high {
          self.falling_edge();
        }
        self.clk_high = high;
      }
      Output::DataOut => self.mosi = high,
      Output::ChipSelect => {
        self.cs_low = !high;
        if high {
          self.armed = false;
          self.bits_in = 0;
          self.bits_out = 0;
          self.shift = 0;
        }
      }
    }
  }
}

impl Lines for Panel {
  fn set(&mut self, line: Output) -> Result<(), ErrorKind> {
    self.drive(line, true);
    Ok(())
  }

  fn clear(&mut self, line: Output) -> Result<(), ErrorKind> {
    self.drive(line, false);
    Ok(())
  }

  fn read(&mut self, line: Input) -> Result<bool, ErrorKind> {
    match line {
      Input::DataIn => Ok(self.miso),
      Input::Ready => {
        let released = self.ready_reads >= self.held;
        self.ready_reads = self.ready_reads.saturating_add(1);
        Ok(released)
      }
    }
  }
}

/// Delay that records what was asked of it.
#[derive(Default)]
pub(crate) struct NoDelay {
  pub calls: u32,
  pub total_ns: u64,
}

impl DelayNs for NoDelay {
  fn delay_ns(&mut self, ns: u32) {
    self.calls += 1;
    self.total_ns += ns as u64;
  }
}
