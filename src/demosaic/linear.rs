//! Demosaicing using linear interpolation.
//!
//! ```text
//!   green_kernel = (1 / 4) *
//!       [ 0 1 0
//!       ; 1 4 1
//!       ; 0 1 0 ];
//!
//!   red/blue_kernel = (1 / 4) *
//!       [ 1 2 1
//!       ; 2 4 2
//!       ; 1 2 1 ];
//! ```
//!
//! Averages truncate. Taps outside the mosaic are dropped and the remaining
//! taps are averaged.

use crate::demosaic::bayer::{Lattice, Placement};
use crate::demosaic::green;
use crate::demosaic::ColorFilterArray;
use crate::traits::get_mean;
use crate::{RgbPlanes, Sample, SampleGrid};

pub(crate) fn run<T: Sample>(src: &SampleGrid<T>, cfa: ColorFilterArray) -> RgbPlanes<T> {
    let green = green::averaged(src, cfa);
    let red = average_chroma(src, cfa.red_lattice());
    let blue = average_chroma(src, cfa.blue_lattice());
    RgbPlanes::new(red, green, blue)
}

fn average_chroma<T: Sample>(src: &SampleGrid<T>, lattice: Lattice) -> SampleGrid<T> {
    SampleGrid::from_fn(src.width(), src.height(), |x, y| {
        match lattice.placement(x, y) {
            Placement::Native => src.at(x, y),
            placement => get_mean(src.gather(x, y, placement.neighbours()).as_slice()),
        }
    })
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::run;
    use crate::demosaic::ColorFilterArray;
    use crate::SampleGrid;

    #[test]
    fn test_interior() {
        // Red at even/even.
        #[rustfmt::skip]
        let src = [
            100,  7, 200,  7, 300,  7,
              7,  1,   7,  3,   7,  5,
            400,  7, 501,  7, 600,  7,
              7,  1,   7,  3,   7,  5,
            100,  7, 200,  7, 300,  7,
              7,  1,   7,  3,   7,  5u16,
        ];
        let raw = SampleGrid::from_ref(&src, 6, 6).unwrap();
        let planes = run(&raw, ColorFilterArray::Rggb);
        let red = planes.red();
        assert_eq!(red.get(1, 0), Some(150));
        assert_eq!(red.get(2, 1), Some(350));
        assert_eq!(red.get(1, 1), Some(300));
        assert_eq!(red.get(3, 3), Some(400));
        // Last column: only the left neighbour exists.
        assert_eq!(red.get(5, 0), Some(300));
        assert_eq!(red.get(5, 5), Some(300));
        assert_eq!(planes.green().get(2, 2), Some(7));
        assert_eq!(planes.blue().get(2, 1), Some(2));
        assert_eq!(planes.blue().get(0, 0), Some(1));
    }

    #[test]
    fn test_native_samples_preserved() {
        let mut rng = thread_rng();
        let (w, h) = (10, 8);
        let data: Vec<u16> = (0..w * h).map(|_| rng.gen_range(0..4096)).collect();
        let raw = SampleGrid::from_ref(&data, w, h).unwrap();
        for cfa in ColorFilterArray::ALL {
            let planes = run(&raw, cfa);
            for y in 0..h {
                for x in 0..w {
                    let plane = planes.channel(cfa.channel_at(x, y));
                    assert_eq!(plane.get(x, y), raw.get(x, y), "{cfa} at ({x}, {y})");
                }
            }
        }
    }
}
