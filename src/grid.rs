#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::demosaic::{BayerError, BayerResult};
use crate::Sample;

/// A rectangular grid of unsigned samples, stored row-major.
///
/// Used both for the raw Bayer mosaic handed to the demosaicer and for each of
/// the three colour planes it returns.
///
/// # Usage
/// ```
/// use scidemosaic::SampleGrid;
///
/// let data = vec![1u16, 2, 3, 4, 5, 6];
/// let grid = SampleGrid::from_owned(data, 3, 2).unwrap();
/// assert_eq!(grid.get(2, 1), Some(6));
/// assert_eq!(grid.get(3, 0), None);
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SampleGrid<T: Sample> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Sample> SampleGrid<T> {
    fn new(data: Vec<T>, width: usize, height: usize) -> BayerResult<Self> {
        if data.is_empty() {
            return Err(BayerError::EmptyData);
        }
        if width == 0 || height == 0 {
            return Err(BayerError::WrongResolution { width, height });
        }
        let expected = width.checked_mul(height).ok_or(BayerError::SizeMismatch {
            expected: usize::MAX,
            got: data.len(),
        })?;
        if data.len() != expected {
            return Err(BayerError::SizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Create a new [`SampleGrid`] from owned data.
    ///
    /// # Errors
    /// - If the data is empty.
    /// - If the width or height is zero.
    /// - If the data length does not match `width * height`.
    pub fn from_owned(data: Vec<T>, width: usize, height: usize) -> BayerResult<Self> {
        Self::new(data, width, height)
    }

    /// Create a new [`SampleGrid`] from a slice of data. The data is copied.
    ///
    /// # Errors
    /// Same as [`SampleGrid::from_owned`].
    pub fn from_ref(data: &[T], width: usize, height: usize) -> BayerResult<Self> {
        Self::new(data.to_vec(), width, height)
    }

    /// Allocate a grid and write every cell exactly once with `f(x, y)`.
    ///
    /// Rows are filled in parallel when the `rayon` feature is enabled.
    pub(crate) fn from_fn<F>(width: usize, height: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> T + Send + Sync,
    {
        let mut data = vec![T::zero(); width * height];
        if width > 0 {
            #[cfg(feature = "rayon")]
            let rows = data.par_chunks_exact_mut(width);
            #[cfg(not(feature = "rayon"))]
            let rows = data.chunks_exact_mut(width);
            rows.enumerate().for_each(|(y, row)| {
                row.iter_mut()
                    .enumerate()
                    .for_each(|(x, v)| *v = f(x, y));
            });
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Get the width of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of samples, `width * height`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the underlying data as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the underlying data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get the underlying data as a vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a u8 slice of the data, in native byte order.
    pub fn as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.width.max(1))
    }

    /// Iterate mutably over the rows of the grid.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, T> {
        self.data.chunks_exact_mut(self.width.max(1))
    }

    /// Bounds-checked read of the sample at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Bounds-checked mutable access to the sample at column `x`, row `y`.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x < self.width && y < self.height {
            Some(&mut self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Read with coordinates clamped to the nearest edge sample.
    pub fn get_clamped(&self, x: isize, y: isize) -> T {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        self.data[y * self.width + x]
    }

    /// The largest sample in the grid.
    pub fn max_sample(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &v| if v > acc { v } else { acc })
    }

    /// Read the sample at `(x, y)`. The caller guarantees the coordinate is inside the grid.
    #[inline(always)]
    pub(crate) fn at(&self, x: usize, y: usize) -> T {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    /// Read the sample displaced by `(dx, dy)` from `(x, y)`, if it lies inside the grid.
    #[inline(always)]
    pub(crate) fn offset(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<T> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.get(nx, ny)
    }

    /// Collect the in-bounds samples at the given displacements from `(x, y)`.
    #[inline(always)]
    pub(crate) fn gather(&self, x: usize, y: usize, offsets: &[(isize, isize)]) -> Neighbours<T> {
        let mut out = Neighbours {
            buf: [T::zero(); 4],
            len: 0,
        };
        for &(dx, dy) in offsets.iter().take(4) {
            if let Some(v) = self.offset(x, y, dx, dy) {
                out.buf[out.len] = v;
                out.len += 1;
            }
        }
        out
    }
}

/// Up to four neighbouring samples, those outside the grid omitted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Neighbours<T: Sample> {
    buf: [T; 4],
    len: usize,
}

impl<T: Sample> Neighbours<T> {
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert_eq!(
            SampleGrid::<u16>::from_owned(vec![], 0, 0),
            Err(BayerError::EmptyData)
        );
        assert_eq!(
            SampleGrid::from_owned(vec![1u16; 4], 0, 4),
            Err(BayerError::WrongResolution {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            SampleGrid::from_owned(vec![1u16; 5], 2, 2),
            Err(BayerError::SizeMismatch {
                expected: 4,
                got: 5
            })
        );
        assert!(SampleGrid::from_ref(&[1u8, 2, 3, 4], 2, 2).is_ok());
    }

    #[test]
    fn test_access() {
        let mut grid = SampleGrid::from_owned((0u16..12).collect(), 4, 3).unwrap();
        assert_eq!(grid.get(3, 2), Some(11));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get_clamped(-2, 7), 8);
        assert_eq!(grid.get_clamped(9, -1), 3);
        *grid.get_mut(1, 1).unwrap() = 100;
        assert_eq!(grid.at(1, 1), 100);
        assert!(grid.get_mut(0, 3).is_none());
        assert_eq!(grid.max_sample(), 100);
        assert_eq!(grid.rows().count(), 3);
        assert_eq!(grid.as_u8_slice().len(), 24);
    }

    #[test]
    fn test_mutable_rows() {
        let mut grid = SampleGrid::from_owned(vec![0u8; 6], 3, 2).unwrap();
        for (y, row) in grid.rows_mut().enumerate() {
            row.fill(y as u8 + 1);
        }
        grid.as_mut_slice()[5] = 9;
        assert_eq!(grid.rows().nth(1), Some(&[2u8, 2, 9][..]));
        assert_eq!(grid.into_vec(), vec![1, 1, 1, 2, 2, 9]);
    }

    #[test]
    fn test_clamped_read_on_smallest_grid() {
        assert!(SampleGrid::<u16>::from_owned(vec![], 0, 0).is_err());
        let grid = SampleGrid::from_owned(vec![7u16], 1, 1).unwrap();
        assert_eq!(grid.get_clamped(0, 0), 7);
        assert_eq!(grid.get_clamped(-5, 5), 7);
    }

    #[test]
    fn test_gather_omits_outside() {
        let grid = SampleGrid::from_owned((0u16..16).collect(), 4, 4).unwrap();
        let orth = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        assert_eq!(grid.gather(0, 0, &orth).as_slice(), &[1, 4]);
        assert_eq!(grid.gather(1, 1, &orth).as_slice(), &[4, 6, 1, 9]);
        assert_eq!(grid.gather(3, 3, &orth).as_slice(), &[14, 11]);
        assert_eq!(grid.offset(0, 0, -1, 0), None);
    }

    #[test]
    fn test_from_fn_fills_every_cell() {
        let grid: SampleGrid<u32> = SampleGrid::from_fn(5, 3, |x, y| (y * 10 + x) as u32);
        assert_eq!(grid.len(), 15);
        assert_eq!(grid.get(4, 2), Some(24));
        assert_eq!(grid.get(0, 1), Some(10));
    }
}
