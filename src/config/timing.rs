/// Bit-bang clock timing.
///
/// The controller latches on clock edges and needs the line to settle for a
/// minimum time (200 ns high/low on the XPT2046). Slow GPIO writes usually
/// cover this on their own; faster MCUs can add an explicit settle delay after
/// every edge.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
  /// Delay after each clock edge, in nanoseconds. 0 disables the delay.
  pub clock_settle_ns: u32,
}

impl Timing {
  pub const fn new(clock_settle_ns: u32) -> Self {
    Self { clock_settle_ns }
  }
}

impl Default for Timing {
  fn default() -> Self {
    Self::new(0)
  }
}
