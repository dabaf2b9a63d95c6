use serde::{Deserialize, Serialize};

use crate::demosaic::{run_demosaic, BayerResult, ColorFilterArray, Demosaic};
use crate::planes::{intensity_scale, Assembled};
use crate::{OutputArrangement, Sample, SampleGrid};

/// Everything needed to turn one raw mosaic into output.
///
/// Built once, validated at construction, then applied unchanged to every
/// frame.
///
/// # Usage
/// ```
/// use scidemosaic::{Assembled, DemosaicConfig, SampleGrid};
///
/// let config = DemosaicConfig::from_indices(1, 3, 1).unwrap();
/// let raw = SampleGrid::from_owned(vec![300u16; 64], 8, 8).unwrap();
/// match config.run(&raw).unwrap() {
///     Assembled::Channels(planes) => assert_eq!(planes.red().get(7, 7), Some(300)),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DemosaicConfig {
    /// Bayer tile layout of the sensor.
    pub cfa: ColorFilterArray,
    /// Reconstruction algorithm.
    pub method: Demosaic,
    /// How the three planes are handed back.
    pub output: OutputArrangement,
}

impl Default for DemosaicConfig {
    fn default() -> Self {
        Self {
            cfa: ColorFilterArray::Grbg,
            method: Demosaic::Replication,
            output: OutputArrangement::Rgb8,
        }
    }
}

impl DemosaicConfig {
    /// Create a new configuration.
    pub fn new(cfa: ColorFilterArray, method: Demosaic, output: OutputArrangement) -> Self {
        Self {
            cfa,
            method,
            output,
        }
    }

    /// Build from the row order, algorithm and output type indices of the
    /// legacy capture software.
    ///
    /// # Errors
    /// - [`BayerError::InvalidLayout`](crate::BayerError::InvalidLayout) if `row_order > 3`.
    /// - [`BayerError::InvalidAlgorithm`](crate::BayerError::InvalidAlgorithm) if `algorithm > 3`.
    /// - [`BayerError::InvalidOutput`](crate::BayerError::InvalidOutput) if `output > 2`.
    pub fn from_indices(row_order: usize, algorithm: usize, output: usize) -> BayerResult<Self> {
        Ok(Self {
            cfa: ColorFilterArray::from_row_order(row_order)?,
            method: Demosaic::from_index(algorithm)?,
            output: OutputArrangement::from_index(output)?,
        })
    }

    /// Demosaic one raw frame and assemble the result.
    ///
    /// For [`OutputArrangement::Rgb8`] the intensity scale is taken from the
    /// brightest sample of `raw`.
    ///
    /// # Errors
    /// Propagates [`run_demosaic`] errors; nothing is produced on failure.
    pub fn run<T: Sample>(&self, raw: &SampleGrid<T>) -> BayerResult<Assembled<T>> {
        let planes = run_demosaic(raw, self.cfa, self.method)?;
        let scale = match self.output {
            OutputArrangement::Rgb8 => intensity_scale(raw.max_sample()),
            _ => 1,
        };
        Ok(planes.assemble(self.output, scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BayerError;

    #[test]
    fn test_default() {
        let config = DemosaicConfig::default();
        assert_eq!(config, DemosaicConfig::from_indices(3, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_indices() {
        assert_eq!(
            DemosaicConfig::from_indices(4, 0, 0),
            Err(BayerError::InvalidLayout(4))
        );
        assert_eq!(
            DemosaicConfig::from_indices(0, 9, 0),
            Err(BayerError::InvalidAlgorithm(9))
        );
        assert_eq!(
            DemosaicConfig::from_indices(0, 0, 3),
            Err(BayerError::InvalidOutput(3))
        );
    }

    #[test]
    fn test_deserialize() {
        let config: DemosaicConfig = serde_json::from_str(
            r#"{"cfa": "Bggr", "method": "AdaptiveSmoothHue", "output": "SummedChannels"}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            DemosaicConfig::new(
                ColorFilterArray::Bggr,
                Demosaic::AdaptiveSmoothHue,
                OutputArrangement::SummedChannels
            )
        );
        assert!(serde_json::from_str::<DemosaicConfig>(
            r#"{"cfa": "Rgbg", "method": "Bilinear", "output": "Rgb8"}"#
        )
        .is_err());
    }

    #[test]
    fn test_run_rgb8_scales_by_frame_maximum() {
        // Brightest sample 1024 gives a scale of 4.
        let mut data = vec![400u16; 16];
        data[0] = 1024;
        let raw = SampleGrid::from_owned(data, 4, 4).unwrap();
        let config = DemosaicConfig::new(
            ColorFilterArray::Rggb,
            Demosaic::Replication,
            OutputArrangement::Rgb8,
        );
        match config.run(&raw).unwrap() {
            Assembled::Rgb8(img) => {
                assert_eq!((img.width, img.height), (4, 4));
                // Pixel (0,0): red saturates, green and blue are 400 / 4.
                assert_eq!(img.data[0..3], [255, 100, 100]);
                // Pixel (2,0): red 400 / 4.
                assert_eq!(img.data[6..9], [100, 100, 100]);
            }
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn test_run_rejects_tiny_frame() {
        let raw = SampleGrid::from_owned(vec![1u8; 2], 1, 2).unwrap();
        assert!(matches!(
            DemosaicConfig::default().run(&raw),
            Err(BayerError::WrongResolution { .. })
        ));
    }
}
