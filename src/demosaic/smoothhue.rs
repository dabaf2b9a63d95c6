//! Demosaicing using smooth hue transition interpolation.
//!
//! Green is reconstructed first. Red and blue are then interpolated as a
//! ratio to green: each missing chroma value is the reconstructed green at
//! the cell times the mean chroma/green ratio of the nearest native chroma
//! samples. A green denominator of zero is read as one.

use crate::demosaic::bayer::{Lattice, Placement};
use crate::demosaic::green;
use crate::demosaic::ColorFilterArray;
use crate::{RgbPlanes, Sample, SampleGrid};

pub(crate) fn run<T: Sample>(src: &SampleGrid<T>, cfa: ColorFilterArray) -> RgbPlanes<T> {
    let green = green::averaged(src, cfa);
    with_green(src, cfa, green)
}

/// Build red and blue against an already complete green plane.
pub(crate) fn with_green<T: Sample>(
    src: &SampleGrid<T>,
    cfa: ColorFilterArray,
    green: SampleGrid<T>,
) -> RgbPlanes<T> {
    let red = ratio_chroma(src, &green, cfa.red_lattice());
    let blue = ratio_chroma(src, &green, cfa.blue_lattice());
    log::trace!("Chroma ratio pass complete");
    RgbPlanes::new(red, green, blue)
}

/// Chroma/green ratio at a native chroma site.
#[inline(always)]
fn hue<T: Sample>(chroma: T, green: T) -> f64 {
    let green = if green == T::zero() { 1.0 } else { green.to_f64() };
    chroma.to_f64() / green
}

fn ratio_chroma<T: Sample>(
    src: &SampleGrid<T>,
    green: &SampleGrid<T>,
    lattice: Lattice,
) -> SampleGrid<T> {
    SampleGrid::from_fn(src.width(), src.height(), |x, y| {
        let placement = lattice.placement(x, y);
        if placement == Placement::Native {
            return src.at(x, y);
        }
        let (sum, count) = placement
            .neighbours()
            .iter()
            .filter_map(|&(dx, dy)| {
                let c = src.offset(x, y, dx, dy)?;
                let g = green.offset(x, y, dx, dy)?;
                Some(hue(c, g))
            })
            .fold((0.0, 0usize), |(sum, count), ratio| (sum + ratio, count + 1));
        if count == 0 {
            return T::zero();
        }
        T::from_f64(green.at(x, y).to_f64() / count as f64 * sum)
    })
}

#[cfg(test)]
mod tests {
    use super::{hue, run};
    use crate::demosaic::ColorFilterArray;
    use crate::SampleGrid;

    #[test]
    fn test_zero_green_reads_as_one() {
        assert_eq!(hue(30u16, 0), 30.0);
        assert_eq!(hue(30u16, 60), 0.5);
        assert_eq!(hue(0u16, 0), 0.0);
    }

    #[test]
    fn test_flat_field() {
        for k in [0u16, 1, 37, 4095, u16::MAX] {
            let raw = SampleGrid::from_owned(vec![k; 64], 8, 8).unwrap();
            for cfa in ColorFilterArray::ALL {
                let planes = run(&raw, cfa);
                for plane in planes.iter() {
                    assert!(plane.as_slice().iter().all(|&v| v == k), "k = {k}, {cfa}");
                }
            }
        }
    }

    #[test]
    fn test_hue_follows_green() {
        // Red at even/even is always half of the local green.
        #[rustfmt::skip]
        let src = [
            50, 100, 50, 100,
            100, 9, 100, 9,
            50, 100, 50, 100,
            100, 9, 100, 9u16,
        ];
        let raw = SampleGrid::from_ref(&src, 4, 4).unwrap();
        let planes = run(&raw, ColorFilterArray::Rggb);
        let green = planes.green();
        assert_eq!(green.get(1, 1), Some(100));
        assert_eq!(green.get(0, 0), Some(100));
        assert_eq!(green.get(2, 2), Some(100));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(planes.red().get(x, y), Some(50), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_ratio_scales_with_target_green() {
        // Blue at odd/odd equals the green reconstructed there, so every
        // ratio is one and interpolated blue copies green.
        #[rustfmt::skip]
        let src = [
            1, 40, 1, 40,
            40, 40, 40, 40,
            1, 40, 1, 40,
            40, 40, 40, 40u16,
        ];
        let raw = SampleGrid::from_ref(&src, 4, 4).unwrap();
        let planes = run(&raw, ColorFilterArray::Rggb);
        assert_eq!(planes.green().get(1, 1), Some(40));
        assert_eq!(planes.blue().get(1, 0), Some(40));
        assert_eq!(planes.blue().get(0, 0), Some(40));
        assert_eq!(planes.blue().get(2, 2), Some(40));
    }
}
