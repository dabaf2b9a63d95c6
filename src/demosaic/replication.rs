//! Demosaicing by pixel replication.
//!
//! Each red and blue sample is copied over its 2x2 tile; each green sample is
//! copied into the chroma site beside it. No value is blended.

use crate::demosaic::bayer::{snap, Lattice};
use crate::demosaic::ColorFilterArray;
use crate::{RgbPlanes, Sample, SampleGrid};

pub(crate) fn run<T: Sample>(src: &SampleGrid<T>, cfa: ColorFilterArray) -> RgbPlanes<T> {
    let (w, h) = (src.width(), src.height());
    let red = replicate_chroma(src, cfa.red_lattice());
    let blue = replicate_chroma(src, cfa.blue_lattice());
    let green = SampleGrid::from_fn(w, h, |x, y| {
        if cfa.is_green(x, y) {
            src.at(x, y)
        } else {
            // Green sits at the opposite column parity on every row.
            src.at(snap(x, (x & 1) ^ 1), y)
        }
    });
    RgbPlanes::new(red, green, blue)
}

fn replicate_chroma<T: Sample>(src: &SampleGrid<T>, lattice: Lattice) -> SampleGrid<T> {
    SampleGrid::from_fn(src.width(), src.height(), |x, y| {
        let (sx, sy) = lattice.replicate_source(x, y);
        src.at(sx, sy)
    })
}
