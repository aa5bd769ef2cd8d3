// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt;
use std::hash::{Hash, Hasher};

/// A parsed numeric dimension usable as a map key.
///
/// Equality and hashing go through the bit pattern, with `-0.0` folded onto
/// `0.0`, so values that compare equal as numbers land in the same bucket.
#[derive(Debug, Clone, Copy)]
pub struct Coord(f64);

impl Coord {
    /// Wrap a value
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The wrapped value
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    fn key_bits(self) -> u64 {
        if self.0 == 0.0 { 0 } else { self.0.to_bits() }
    }
}

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        self.key_bits() == other.key_bits()
    }
}

impl Eq for Coord {}

impl Hash for Coord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_bits().hash(state);
    }
}

impl From<f64> for Coord {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Composite problem-size key `(n, r, m)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeKey {
    /// First dimension
    pub n: Coord,
    /// Second dimension
    pub r: Coord,
    /// Third dimension
    pub m: Coord,
}

impl SizeKey {
    /// Build a key from raw dimensions
    #[must_use]
    pub const fn new(n: f64, r: f64, m: f64) -> Self {
        Self {
            n: Coord::new(n),
            r: Coord::new(r),
            m: Coord::new(m),
        }
    }

    /// Operation count `n * r * m`
    #[must_use]
    pub fn ops(&self) -> f64 {
        self.n.get() * self.r.get() * self.m.get()
    }

    /// Plotted x-coordinate `n * r`
    #[must_use]
    pub fn x(&self) -> Coord {
        Coord::new(self.n.get() * self.r.get())
    }
}

impl fmt::Display for SizeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.n, self.r, self.m)
    }
}
