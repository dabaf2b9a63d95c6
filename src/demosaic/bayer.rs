//! Bayer image definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::demosaic::{BayerError, BayerResult};

/// The 2x2 colour filter array (CFA) pattern.
///
/// The sequence of R, G, B describe the colours of the top-left,
/// top-right, bottom-left, and bottom-right pixels in the 2x2 block,
/// in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorFilterArray {
    /// Red at even column, even row.
    Rggb,
    /// Red at odd column, odd row.
    Bggr,
    /// Red at odd column, even row.
    Grbg,
    /// Red at even column, odd row.
    Gbrg,
}

/// The colour sampled at one mosaic site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

/// Which of the four sub-lattices a mosaic coordinate belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Site {
    /// Red sample.
    Red,
    /// Green sample sharing its row with red samples.
    GreenRed,
    /// Green sample sharing its row with blue samples.
    GreenBlue,
    /// Blue sample.
    Blue,
}

impl Site {
    /// The colour sampled at this site.
    pub fn channel(self) -> Channel {
        match self {
            Site::Red => Channel::Red,
            Site::GreenRed | Site::GreenBlue => Channel::Green,
            Site::Blue => Channel::Blue,
        }
    }
}

impl ColorFilterArray {
    /// All four layouts.
    pub const ALL: [ColorFilterArray; 4] = [
        ColorFilterArray::Rggb,
        ColorFilterArray::Bggr,
        ColorFilterArray::Grbg,
        ColorFilterArray::Gbrg,
    ];

    /// Map the row order index of the legacy capture software.
    ///
    /// The indices describe these geometries: `0` red at even/even, `1` red at
    /// odd/odd, `2` red on odd rows at even columns, `3` red on even rows at odd
    /// columns.
    ///
    /// # Errors
    /// [`BayerError::InvalidLayout`] for any index above 3.
    pub fn from_row_order(index: usize) -> BayerResult<Self> {
        match index {
            0 => Ok(ColorFilterArray::Rggb),
            1 => Ok(ColorFilterArray::Bggr),
            2 => Ok(ColorFilterArray::Gbrg),
            3 => Ok(ColorFilterArray::Grbg),
            _ => Err(BayerError::InvalidLayout(index)),
        }
    }

    /// The row order index understood by [`ColorFilterArray::from_row_order`].
    pub fn row_order(self) -> usize {
        match self {
            ColorFilterArray::Rggb => 0,
            ColorFilterArray::Bggr => 1,
            ColorFilterArray::Gbrg => 2,
            ColorFilterArray::Grbg => 3,
        }
    }

    /// Coordinate of the red sample inside the 2x2 tile, as `(x, y)`.
    pub fn red_origin(self) -> (usize, usize) {
        match self {
            ColorFilterArray::Rggb => (0, 0),
            ColorFilterArray::Bggr => (1, 1),
            ColorFilterArray::Grbg => (1, 0),
            ColorFilterArray::Gbrg => (0, 1),
        }
    }

    /// Coordinate of the blue sample inside the 2x2 tile, as `(x, y)`.
    pub fn blue_origin(self) -> (usize, usize) {
        let (x, y) = self.red_origin();
        (x ^ 1, y ^ 1)
    }

    /// Classify the mosaic coordinate `(x, y)`.
    #[inline(always)]
    pub fn site_at(self, x: usize, y: usize) -> Site {
        let (rx, ry) = self.red_origin();
        let same_col = (x & 1) == rx;
        let same_row = (y & 1) == ry;
        match (same_col, same_row) {
            (true, true) => Site::Red,
            (false, true) => Site::GreenRed,
            (true, false) => Site::GreenBlue,
            (false, false) => Site::Blue,
        }
    }

    /// The colour sampled at `(x, y)`.
    #[inline(always)]
    pub fn channel_at(self, x: usize, y: usize) -> Channel {
        self.site_at(x, y).channel()
    }

    /// Whether `(x, y)` holds a native green sample.
    #[inline(always)]
    pub fn is_green(self, x: usize, y: usize) -> bool {
        self.channel_at(x, y) == Channel::Green
    }

    /// The same tile with red and blue exchanged.
    pub fn swap_chroma(self) -> Self {
        match self {
            ColorFilterArray::Rggb => ColorFilterArray::Bggr,
            ColorFilterArray::Bggr => ColorFilterArray::Rggb,
            ColorFilterArray::Grbg => ColorFilterArray::Gbrg,
            ColorFilterArray::Gbrg => ColorFilterArray::Grbg,
        }
    }

    /// The 2x2 pixel block obtained when moving right 1 column.
    pub fn next_x(self) -> Self {
        match self {
            ColorFilterArray::Bggr => ColorFilterArray::Gbrg,
            ColorFilterArray::Gbrg => ColorFilterArray::Bggr,
            ColorFilterArray::Grbg => ColorFilterArray::Rggb,
            ColorFilterArray::Rggb => ColorFilterArray::Grbg,
        }
    }

    /// The 2x2 pixel block obtained when moving down 1 row.
    pub fn next_y(self) -> Self {
        match self {
            ColorFilterArray::Bggr => ColorFilterArray::Grbg,
            ColorFilterArray::Gbrg => ColorFilterArray::Rggb,
            ColorFilterArray::Grbg => ColorFilterArray::Bggr,
            ColorFilterArray::Rggb => ColorFilterArray::Gbrg,
        }
    }

    /// Lattice of red samples.
    pub(crate) fn red_lattice(self) -> Lattice {
        Lattice::at(self.red_origin())
    }

    /// Lattice of blue samples.
    pub(crate) fn blue_lattice(self) -> Lattice {
        Lattice::at(self.blue_origin())
    }
}

impl fmt::Display for ColorFilterArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFilterArray::Rggb => f.write_str("RGGB"),
            ColorFilterArray::Bggr => f.write_str("BGGR"),
            ColorFilterArray::Grbg => f.write_str("GRBG"),
            ColorFilterArray::Gbrg => f.write_str("GBRG"),
        }
    }
}

/// Displacements to the four edge-sharing neighbours.
pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const HORIZONTAL: [(isize, isize); 2] = [(-1, 0), (1, 0)];
const VERTICAL: [(isize, isize); 2] = [(0, -1), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Where a cell sits relative to a red or blue sub-lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Placement {
    /// The cell holds a native sample.
    Native,
    /// Native samples lie left and right.
    Horizontal,
    /// Native samples lie above and below.
    Vertical,
    /// Native samples lie on the four diagonals.
    Diagonal,
}

impl Placement {
    /// Displacements to the nearest native samples.
    pub(crate) fn neighbours(self) -> &'static [(isize, isize)] {
        match self {
            Placement::Native => &[(0, 0)],
            Placement::Horizontal => &HORIZONTAL,
            Placement::Vertical => &VERTICAL,
            Placement::Diagonal => &DIAGONAL,
        }
    }
}

/// A red or blue sub-lattice, one sample every second row and column.
///
/// Algorithms are written once against this and run for both chroma channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Lattice {
    ox: usize,
    oy: usize,
}

impl Lattice {
    fn at((ox, oy): (usize, usize)) -> Self {
        Self { ox, oy }
    }

    #[inline(always)]
    pub(crate) fn placement(self, x: usize, y: usize) -> Placement {
        match ((x & 1) == self.ox, (y & 1) == self.oy) {
            (true, true) => Placement::Native,
            (false, true) => Placement::Horizontal,
            (true, false) => Placement::Vertical,
            (false, false) => Placement::Diagonal,
        }
    }

    /// The native sample replicated into `(x, y)`: the one at or before the
    /// cell on each axis, or the one after when the cell is on the first row or column.
    #[inline(always)]
    pub(crate) fn replicate_source(self, x: usize, y: usize) -> (usize, usize) {
        (snap(x, self.ox), snap(y, self.oy))
    }
}

/// Move `c` onto the lattice line with parity `origin`.
#[inline(always)]
pub(crate) fn snap(c: usize, origin: usize) -> usize {
    if (c & 1) == origin {
        c
    } else if c > 0 {
        c - 1
    } else {
        c + 1
    }
}
