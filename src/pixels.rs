use std::hash::Hash;

use half::f16;
use ndarray::{Array, ArrayD, Dimension};

/// Element type of a pixel array, as reported in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Dtype {
    Uint8,
    Uint16,
    Float16,
    Float32,
}

/// Pixel storage for one image stack. Axes are object/depth, height,
/// width, channel. Dimensionality stays dynamic so malformed inputs can
/// be represented and then rejected by validation.
#[derive(Debug, Clone)]
pub enum PixelData {
    Uint8(ArrayD<u8>),
    Uint16(ArrayD<u16>),
    Float16(ArrayD<f16>),
    Float32(ArrayD<f32>),
}

impl PixelData {
    pub fn dtype(&self) -> Dtype {
        match self {
            PixelData::Uint8(_) => Dtype::Uint8,
            PixelData::Uint16(_) => Dtype::Uint16,
            PixelData::Float16(_) => Dtype::Float16,
            PixelData::Float32(_) => Dtype::Float32,
        }
    }

    pub fn ndim(&self) -> usize {
        match self {
            PixelData::Uint8(arr) => arr.ndim(),
            PixelData::Uint16(arr) => arr.ndim(),
            PixelData::Float16(arr) => arr.ndim(),
            PixelData::Float32(arr) => arr.ndim(),
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            PixelData::Uint8(arr) => arr.shape(),
            PixelData::Uint16(arr) => arr.shape(),
            PixelData::Float16(arr) => arr.shape(),
            PixelData::Float32(arr) => arr.shape(),
        }
    }

    /// Size of the channel axis, when the stack is 4-dimensional.
    pub fn channels(&self) -> Option<usize> {
        if self.ndim() == 4 {
            Some(self.shape()[3])
        } else {
            None
        }
    }

    /// Number of unique element values over the whole array. Floats
    /// compare by bit pattern: NaNs with equal payloads collapse into one
    /// value and 0.0 / -0.0 stay distinct.
    pub fn distinct_count(&self) -> usize {
        match self {
            PixelData::Uint8(arr) => count_distinct(arr.iter().copied()),
            PixelData::Uint16(arr) => count_distinct(arr.iter().copied()),
            PixelData::Float16(arr) => count_distinct(arr.iter().map(|v| v.to_bits())),
            PixelData::Float32(arr) => count_distinct(arr.iter().map(|v| v.to_bits())),
        }
    }
}

fn count_distinct<T: Hash + Eq>(values: impl IntoIterator<Item = T>) -> usize {
    values.into_iter().collect::<ahash::AHashSet<_>>().len()
}

impl<D: Dimension> From<Array<u8, D>> for PixelData {
    fn from(arr: Array<u8, D>) -> Self {
        PixelData::Uint8(arr.into_dyn())
    }
}

impl<D: Dimension> From<Array<u16, D>> for PixelData {
    fn from(arr: Array<u16, D>) -> Self {
        PixelData::Uint16(arr.into_dyn())
    }
}

impl<D: Dimension> From<Array<f16, D>> for PixelData {
    fn from(arr: Array<f16, D>) -> Self {
        PixelData::Float16(arr.into_dyn())
    }
}

impl<D: Dimension> From<Array<f32, D>> for PixelData {
    fn from(arr: Array<f32, D>) -> Self {
        PixelData::Float32(arr.into_dyn())
    }
}
