use image::{ImageBuffer, Luma, RgbImage};

use crate::{InterleavedRgb8, RgbPlanes, SampleGrid};

impl TryFrom<InterleavedRgb8> for RgbImage {
    type Error = &'static str;

    fn try_from(img: InterleavedRgb8) -> Result<Self, Self::Error> {
        let width = u32::try_from(img.width).map_err(|_| "Image too wide.")?;
        let height = u32::try_from(img.height).map_err(|_| "Image too tall.")?;
        ImageBuffer::from_raw(width, height, img.data)
            .ok_or("Data length does not match image size.")
    }
}

impl TryFrom<&SampleGrid<u16>> for ImageBuffer<Luma<u16>, Vec<u16>> {
    type Error = &'static str;

    fn try_from(grid: &SampleGrid<u16>) -> Result<Self, Self::Error> {
        let width = u32::try_from(grid.width()).map_err(|_| "Image too wide.")?;
        let height = u32::try_from(grid.height()).map_err(|_| "Image too tall.")?;
        ImageBuffer::from_raw(width, height, grid.as_slice().to_vec())
            .ok_or("Data length does not match image size.")
    }
}

impl TryFrom<&RgbPlanes<u16>> for ImageBuffer<image::Rgb<u16>, Vec<u16>> {
    type Error = &'static str;

    fn try_from(planes: &RgbPlanes<u16>) -> Result<Self, Self::Error> {
        let width = u32::try_from(planes.width()).map_err(|_| "Image too wide.")?;
        let height = u32::try_from(planes.height()).map_err(|_| "Image too tall.")?;
        ImageBuffer::from_raw(width, height, planes.to_interleaved())
            .ok_or("Data length does not match image size.")
    }
}
