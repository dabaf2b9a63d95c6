use itertools::izip;

use crate::traits::do_sum;
use crate::{Channel, OutputArrangement, Sample, SampleGrid};

/// The red, green and blue planes produced by one demosaic call.
///
/// All three planes share the dimensions of the mosaic they came from.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RgbPlanes<T: Sample> {
    red: SampleGrid<T>,
    green: SampleGrid<T>,
    blue: SampleGrid<T>,
}

/// Output of [`RgbPlanes::assemble`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Assembled<T: Sample> {
    /// Interleaved 8-bit colour.
    Rgb8(InterleavedRgb8),
    /// The three planes, red first.
    Channels(RgbPlanes<T>),
    /// One plane holding the saturating sum of red, green and blue.
    Summed(SampleGrid<T>),
}

/// Interleaved `[R, G, B, R, G, B, ...]` 8-bit image.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct InterleavedRgb8 {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// `3 * width * height` bytes, row-major.
    pub data: Vec<u8>,
}

impl<T: Sample> RgbPlanes<T> {
    pub(crate) fn new(red: SampleGrid<T>, green: SampleGrid<T>, blue: SampleGrid<T>) -> Self {
        debug_assert_eq!(red.len(), green.len());
        debug_assert_eq!(red.len(), blue.len());
        Self { red, green, blue }
    }

    /// Width of every plane.
    pub fn width(&self) -> usize {
        self.red.width()
    }

    /// Height of every plane.
    pub fn height(&self) -> usize {
        self.red.height()
    }

    /// The red plane.
    pub fn red(&self) -> &SampleGrid<T> {
        &self.red
    }

    /// The green plane.
    pub fn green(&self) -> &SampleGrid<T> {
        &self.green
    }

    /// The blue plane.
    pub fn blue(&self) -> &SampleGrid<T> {
        &self.blue
    }

    /// The plane holding `channel`.
    pub fn channel(&self, channel: Channel) -> &SampleGrid<T> {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// Iterate over the planes in red, green, blue order.
    pub fn iter(&self) -> impl Iterator<Item = &SampleGrid<T>> {
        [&self.red, &self.green, &self.blue].into_iter()
    }

    /// Take the planes as `[red, green, blue]`.
    pub fn into_array(self) -> [SampleGrid<T>; 3] {
        [self.red, self.green, self.blue]
    }

    /// Planar CHW layout: `[R plane, G plane, B plane]`.
    pub fn to_planar(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(3 * self.red.len());
        for plane in self.iter() {
            out.extend_from_slice(plane.as_slice());
        }
        out
    }

    /// Interleaved HWC layout: `[R, G, B, R, G, B, ...]`.
    pub fn to_interleaved(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(3 * self.red.len());
        for (&r, &g, &b) in izip!(self.red.as_slice(), self.green.as_slice(), self.blue.as_slice()) {
            out.extend_from_slice(&[r, g, b]);
        }
        out
    }

    /// Interleaved 8-bit colour. Every sample is divided by `scale`
    /// (truncating) and saturated at 255.
    pub fn to_rgb8(&self, scale: u32) -> InterleavedRgb8 {
        let scale = scale.max(1);
        let mut clipped = 0usize;
        let mut narrow = |v: T| {
            let v = v.to_u32() / scale;
            if v > u8::MAX as u32 {
                clipped += 1;
                u8::MAX
            } else {
                v as u8
            }
        };
        let mut data = Vec::with_capacity(3 * self.red.len());
        for (&r, &g, &b) in izip!(self.red.as_slice(), self.green.as_slice(), self.blue.as_slice()) {
            data.extend_from_slice(&[narrow(r), narrow(g), narrow(b)]);
        }
        if clipped > 0 {
            log::warn!("{clipped} samples saturated converting to 8-bit RGB with scale {scale}");
        }
        InterleavedRgb8 {
            width: self.width(),
            height: self.height(),
            data,
        }
    }

    /// One plane holding `red + green + blue`, saturating per cell.
    pub fn summed(&self) -> SampleGrid<T> {
        let (w, h) = (self.width(), self.height());
        SampleGrid::from_fn(w, h, |x, y| {
            do_sum(&[self.red.at(x, y), self.green.at(x, y), self.blue.at(x, y)])
        })
    }

    /// Package the planes as requested. `scale` is only used by [`OutputArrangement::Rgb8`].
    pub fn assemble(self, arrangement: OutputArrangement, scale: u32) -> Assembled<T> {
        match arrangement {
            OutputArrangement::Rgb8 => Assembled::Rgb8(self.to_rgb8(scale)),
            OutputArrangement::SeparateChannels => Assembled::Channels(self),
            OutputArrangement::SummedChannels => Assembled::Summed(self.summed()),
        }
    }
}

/// Divisor bringing a frame whose brightest sample is `max` into 8 bits.
///
/// Frames peaking at 256 or below are not scaled.
pub fn intensity_scale<T: Sample>(max: T) -> u32 {
    let max = max.to_u32();
    if max > 256 {
        max / 256
    } else {
        1
    }
}
