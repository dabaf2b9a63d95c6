mod adaptive;
mod bayer;
mod errcode;
mod green;
mod linear;
mod replication;
mod smoothhue;

pub use bayer::{Channel, ColorFilterArray, Site};
pub use errcode::{BayerError, BayerResult};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{RgbPlanes, Sample, SampleGrid};

/// The demosaicing algorithm to use to fill in the missing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Demosaic {
    /// Copy each native sample over its 2x2 tile.
    Replication,
    /// Truncating average of the nearest native samples.
    Bilinear,
    /// Averaged green, then red and blue scaled by their ratio to green.
    SmoothHue,
    /// Smooth hue with green interpolated along the flattest of four directions.
    AdaptiveSmoothHue,
}

impl Demosaic {
    /// All four algorithms.
    pub const ALL: [Demosaic; 4] = [
        Demosaic::Replication,
        Demosaic::Bilinear,
        Demosaic::SmoothHue,
        Demosaic::AdaptiveSmoothHue,
    ];

    /// Map the algorithm index of the legacy capture software.
    ///
    /// # Errors
    /// [`BayerError::InvalidAlgorithm`] for any index above 3.
    pub fn from_index(index: usize) -> BayerResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(BayerError::InvalidAlgorithm(index))
    }
}

impl fmt::Display for Demosaic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Demosaic::Replication => f.write_str("Replication"),
            Demosaic::Bilinear => f.write_str("Bilinear"),
            Demosaic::SmoothHue => f.write_str("Smooth Hue"),
            Demosaic::AdaptiveSmoothHue => f.write_str("Adaptive Smooth Hue"),
        }
    }
}

/// Demosaic a single-channel Bayer mosaic into red, green and blue planes.
///
/// Every plane has the dimensions of `src` and every cell is written. The
/// mosaic is not modified and no state survives the call.
///
/// # Errors
/// [`BayerError::WrongResolution`] if `src` is smaller than 2x2.
///
/// # Usage
/// ```
/// use scidemosaic::{run_demosaic, ColorFilterArray, Demosaic, SampleGrid};
///
/// let raw = SampleGrid::from_owned(vec![512u16; 16], 4, 4).unwrap();
/// let planes = run_demosaic(&raw, ColorFilterArray::Rggb, Demosaic::SmoothHue).unwrap();
/// assert!(planes.green().as_slice().iter().all(|&v| v == 512));
/// ```
pub fn run_demosaic<T: Sample>(
    src: &SampleGrid<T>,
    cfa: ColorFilterArray,
    alg: Demosaic,
) -> BayerResult<RgbPlanes<T>> {
    if src.width() < 2 || src.height() < 2 {
        return Err(BayerError::WrongResolution {
            width: src.width(),
            height: src.height(),
        });
    }
    log::debug!(
        "Demosaicing {}x{} {} mosaic with {}",
        src.width(),
        src.height(),
        cfa,
        alg
    );
    let planes = match alg {
        Demosaic::Replication => replication::run(src, cfa),
        Demosaic::Bilinear => linear::run(src, cfa),
        Demosaic::SmoothHue => smoothhue::run(src, cfa),
        Demosaic::AdaptiveSmoothHue => adaptive::run(src, cfa),
    };
    Ok(planes)
}
