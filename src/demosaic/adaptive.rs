//! Demosaicing using adaptive (edge-directed) smooth hue interpolation.
//!
//! At each chroma site four gradient scores are formed from the chroma step
//! two cells away and the green step across the site:
//!
//! ```text
//!   N = 2|Cn - C| + |Gn - Gs|      S = 2|C - Cs| + |Gn - Gs|
//!   E = 2|C - Ce| + |Gw - Ge|      W = 2|Cw - C| + |Gw - Ge|
//! ```
//!
//! Green is interpolated along the direction with the strictly smallest
//! score; on a tie, and within two cells of the border, the plain neighbour
//! average is used. Red and blue follow the smooth hue ratio pass.

use crate::demosaic::{green, smoothhue, ColorFilterArray};
use crate::{RgbPlanes, Sample, SampleGrid};

pub(crate) fn run<T: Sample>(src: &SampleGrid<T>, cfa: ColorFilterArray) -> RgbPlanes<T> {
    let green = green::edge_directed(src, cfa);
    smoothhue::with_green(src, cfa, green)
}
