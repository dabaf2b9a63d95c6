//! Green plane reconstruction shared by the interpolating algorithms.
//!
//! Every chroma site is surrounded by four green samples. Neighbours outside
//! the mosaic are dropped from the average, so the first and last rows and
//! columns average three samples and the corners two.

use crate::demosaic::bayer::ORTHOGONAL;
use crate::demosaic::ColorFilterArray;
use crate::traits::get_mean;
use crate::{Sample, SampleGrid};

/// Truncating average of the in-bounds green neighbours of a chroma site.
#[inline(always)]
pub(crate) fn distance_average<T: Sample>(src: &SampleGrid<T>, x: usize, y: usize) -> T {
    get_mean(src.gather(x, y, &ORTHOGONAL).as_slice())
}

/// Green plane by plain neighbour averaging.
pub(crate) fn averaged<T: Sample>(src: &SampleGrid<T>, cfa: ColorFilterArray) -> SampleGrid<T> {
    let green = SampleGrid::from_fn(src.width(), src.height(), |x, y| {
        if cfa.is_green(x, y) {
            src.at(x, y)
        } else {
            distance_average(src, x, y)
        }
    });
    log::trace!("Green pass complete");
    green
}

/// Interpolation direction chosen at a chroma site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    North,
    South,
    East,
    West,
}

/// Samples around a chroma site at `c`:
///
/// ```text
///             cn
///             gn
///     cw  gw  c   ge  ce
///             gs
///             cs
/// ```
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cross {
    pub c: f64,
    pub gn: f64,
    pub gs: f64,
    pub ge: f64,
    pub gw: f64,
    pub cn: f64,
    pub cs: f64,
    pub ce: f64,
    pub cw: f64,
}

impl Cross {
    /// Read the cross at `(x, y)`; `None` when any arm reaches outside the mosaic.
    pub(crate) fn read<T: Sample>(src: &SampleGrid<T>, x: usize, y: usize) -> Option<Self> {
        let at = |dx: isize, dy: isize| src.offset(x, y, dx, dy).map(Sample::to_f64);
        Some(Self {
            c: src.get(x, y)?.to_f64(),
            gn: at(0, -1)?,
            gs: at(0, 1)?,
            ge: at(1, 0)?,
            gw: at(-1, 0)?,
            cn: at(0, -2)?,
            cs: at(0, 2)?,
            ce: at(2, 0)?,
            cw: at(-2, 0)?,
        })
    }

    /// Gradient scores in north, south, east, west order.
    pub(crate) fn scores(&self) -> [f64; 4] {
        let vertical = (self.gn - self.gs).abs();
        let horizontal = (self.gw - self.ge).abs();
        [
            (self.cn - self.c).abs() * 2.0 + vertical,
            (self.c - self.cs).abs() * 2.0 + vertical,
            (self.c - self.ce).abs() * 2.0 + horizontal,
            (self.cw - self.c).abs() * 2.0 + horizontal,
        ]
    }

    /// The direction whose score is strictly below the other three, if any.
    pub(crate) fn flattest(&self) -> Option<Direction> {
        const DIRS: [Direction; 4] = [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ];
        let scores = self.scores();
        (0..4)
            .find(|&i| (0..4).all(|j| j == i || scores[i] < scores[j]))
            .map(|i| DIRS[i])
    }

    /// Green along `dir`: three parts the aligned neighbour, one part the
    /// opposite neighbour, corrected by the chroma step in that direction.
    pub(crate) fn along(&self, dir: Direction) -> f64 {
        let sum = match dir {
            Direction::North => self.gn * 3.0 + self.c + self.gs - self.cn,
            Direction::South => self.gs * 3.0 + self.c + self.gn - self.cs,
            Direction::West => self.gw * 3.0 + self.c + self.ge - self.cw,
            Direction::East => self.ge * 3.0 + self.c + self.gw - self.ce,
        };
        sum / 4.0
    }
}

/// Green plane interpolated along local edges.
///
/// The distance average is computed first and kept wherever no direction is
/// strictly flattest or the cross does not fit inside the mosaic.
pub(crate) fn edge_directed<T: Sample>(
    src: &SampleGrid<T>,
    cfa: ColorFilterArray,
) -> SampleGrid<T> {
    let green = SampleGrid::from_fn(src.width(), src.height(), |x, y| {
        if cfa.is_green(x, y) {
            return src.at(x, y);
        }
        let fallback = distance_average(src, x, y);
        Cross::read(src, x, y)
            .and_then(|cross| cross.flattest().map(|dir| T::from_f64(cross.along(dir))))
            .unwrap_or(fallback)
    });
    log::trace!("Edge-directed green pass complete");
    green
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borders_average_fewer_neighbours() {
        // Blue at even/even: (0,0) has two green neighbours, (2,0) three, (2,2) four.
        #[rustfmt::skip]
        let src = [
            0, 10, 0, 20,
            30, 0, 40, 0,
            0, 50, 0, 61,
            70, 0, 80, 0u16,
        ];
        let raw = SampleGrid::from_ref(&src, 4, 4).unwrap();
        let green = averaged(&raw, ColorFilterArray::Bggr);
        assert_eq!(green.get(0, 0), Some(20));
        assert_eq!(green.get(2, 0), Some(23));
        assert_eq!(green.get(2, 2), Some(57));
        assert_eq!(green.get(3, 3), Some(70));
        assert_eq!(green.get(1, 0), Some(10));
    }

    #[test]
    fn test_flattest_requires_strict_minimum() {
        let flat = Cross {
            c: 5.0,
            gn: 5.0,
            gs: 5.0,
            ge: 5.0,
            gw: 5.0,
            cn: 5.0,
            cs: 5.0,
            ce: 5.0,
            cw: 5.0,
        };
        assert_eq!(flat.flattest(), None);

        let north = Cross { cs: 9.0, ce: 9.0, cw: 9.0, ..flat };
        assert_eq!(north.flattest(), Some(Direction::North));
        assert_eq!(north.along(Direction::North), 5.0);

        let tie = Cross { cs: 9.0, ce: 9.0, ..flat };
        assert_eq!(tie.flattest(), None);
    }

    #[test]
    fn test_along_each_arm() {
        let cross = Cross {
            c: 40.0,
            gn: 10.0,
            gs: 20.0,
            ge: 30.0,
            gw: 50.0,
            cn: 8.0,
            cs: 16.0,
            ce: 24.0,
            cw: 4.0,
        };
        // (3 * 10 + 40 + 20 - 8) / 4
        assert_eq!(cross.along(Direction::North), 20.5);
        // (3 * 20 + 40 + 10 - 16) / 4
        assert_eq!(cross.along(Direction::South), 23.5);
        // (3 * 30 + 40 + 50 - 24) / 4
        assert_eq!(cross.along(Direction::East), 39.0);
        // (3 * 50 + 40 + 30 - 4) / 4
        assert_eq!(cross.along(Direction::West), 54.0);

        let flat = Cross {
            c: 5.0,
            gn: 5.0,
            gs: 5.0,
            ge: 5.0,
            gw: 5.0,
            cn: 5.0,
            cs: 5.0,
            ce: 5.0,
            cw: 5.0,
        };
        let south = Cross { cn: 9.0, ce: 9.0, cw: 9.0, gs: 7.0, ..flat };
        assert_eq!(south.flattest(), Some(Direction::South));
        let east = Cross { cn: 9.0, cs: 9.0, cw: 9.0, ge: 7.0, ..flat };
        assert_eq!(east.flattest(), Some(Direction::East));
    }

    #[test]
    fn test_cross_needs_two_cells_each_way() {
        let raw = SampleGrid::from_owned(vec![1u16; 36], 6, 6).unwrap();
        assert!(Cross::read(&raw, 2, 2).is_some());
        assert!(Cross::read(&raw, 1, 2).is_none());
        assert!(Cross::read(&raw, 2, 4).is_none());
    }
}
