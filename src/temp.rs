//! Temporary names for three-address instructions.
//!
//! Every binary operation the parser recognises gets a destination
//! temporary. Numbering follows recognition order, so it doubles as a
//! record of the order operators appeared in the source.

use std::fmt;

/// A compiler-generated temporary. Renders as `t<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Temp(u32);

impl fmt::Display for Temp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "t{}", self.0)
  }
}

/// Hands out temporaries counting up from `t0`.
///
/// Each allocator belongs to a single parse. A fresh parse gets a fresh
/// allocator, so numbering restarts at `t0` and never leaks between
/// expressions.
#[derive(Debug, Default)]
pub struct TempAllocator {
  next: u32,
}

impl TempAllocator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn allocate(&mut self) -> Temp {
    let temp = Temp(self.next);
    self.next += 1;
    temp
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn numbering_starts_at_zero_and_increases() {
    let mut temps = TempAllocator::new();
    assert_eq!(temps.allocate().to_string(), "t0");
    assert_eq!(temps.allocate().to_string(), "t1");
    assert_eq!(temps.allocate().to_string(), "t2");
  }

  #[test]
  fn fresh_allocator_restarts_numbering() {
    let mut first = TempAllocator::new();
    first.allocate();
    first.allocate();
    let mut second = TempAllocator::new();
    assert_eq!(second.allocate().to_string(), "t0");
  }
}
