#![deny(missing_docs)]
//! Bayer demosaicing for raw frames from scientific colour cameras.
//!
//! A raw frame is a single-channel [`SampleGrid`] in which every cell saw
//! only red, green or blue through a repeating 2x2 [`ColorFilterArray`].
//! [`run_demosaic`] rebuilds full-resolution red, green and blue planes with
//! one of four [`Demosaic`] algorithms:
//!
//! - [`Replication`](Demosaic::Replication) copies each sample over its tile.
//! - [`Bilinear`](Demosaic::Bilinear) averages the nearest native samples.
//! - [`SmoothHue`](Demosaic::SmoothHue) interpolates red and blue as a ratio to green.
//! - [`AdaptiveSmoothHue`](Demosaic::AdaptiveSmoothHue) additionally steers green along edges.
//!
//! All arithmetic is on unsigned integers with truncating division, so
//! results are reproducible bit for bit. Planes are filled row-parallel
//! when the `rayon` feature (default) is enabled.
//!
//! # Usage
//! ```
//! use scidemosaic::{run_demosaic, ColorFilterArray, Demosaic, SampleGrid};
//!
//! let raw = SampleGrid::from_owned(vec![100u16; 8 * 6], 8, 6).unwrap();
//! let planes = run_demosaic(&raw, ColorFilterArray::Bggr, Demosaic::Bilinear).unwrap();
//! assert_eq!(planes.width(), 8);
//! assert_eq!(planes.blue().get(7, 5), Some(100));
//! ```

mod config;
mod demosaic;
mod grid;
#[cfg(feature = "image")]
mod image_interop;
mod planes;
mod traits;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use config::DemosaicConfig;
pub use demosaic::{
    run_demosaic, BayerError, BayerResult, Channel, ColorFilterArray, Demosaic, Site,
};
pub use grid::SampleGrid;
pub use planes::{intensity_scale, Assembled, InterleavedRgb8, RgbPlanes};
pub use traits::Sample;

/// How the three reconstructed planes are handed back.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum OutputArrangement {
    /// Interleaved 8-bit RGB.
    Rgb8,
    /// Separate red, green and blue planes at full depth.
    SeparateChannels,
    /// A single plane holding the sum of the three channels.
    SummedChannels,
}

impl OutputArrangement {
    /// Map the output type index of the legacy capture software.
    ///
    /// # Errors
    /// [`BayerError::InvalidOutput`] for any index above 2.
    pub fn from_index(index: usize) -> BayerResult<Self> {
        match index {
            0 => Ok(OutputArrangement::Rgb8),
            1 => Ok(OutputArrangement::SeparateChannels),
            2 => Ok(OutputArrangement::SummedChannels),
            _ => Err(BayerError::InvalidOutput(index)),
        }
    }
}

impl fmt::Display for OutputArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputArrangement::Rgb8 => f.write_str("Colour RGB 8 bits"),
            OutputArrangement::SeparateChannels => f.write_str("Mono separate channels"),
            OutputArrangement::SummedChannels => f.write_str("Mono summed channels"),
        }
    }
}
