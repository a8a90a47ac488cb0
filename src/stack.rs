use thiserror::Error;

use crate::palette::{Palette, PaletteWarning};
use crate::pixels::{Dtype, PixelData};
use crate::ValidationError;

/// How pixel values relate to palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ImageKind {
    /// Categorical labels. Each pixel is an integer index naming an object.
    Object,
    /// Continuous measurements, potentially across several channels.
    Scalar,
}

impl ImageKind {
    /// Element type this kind of image must carry.
    pub fn dtype(self) -> Dtype {
        match self {
            ImageKind::Object => Dtype::Uint8,
            ImageKind::Scalar => Dtype::Float16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("image has {actual} dimensions but should have 4")]
    Dimensionality { actual: usize },
    #[error("image has {actual} pixels but should have {expected}")]
    DtypeMismatch { expected: Dtype, actual: Dtype },
    #[error("image has {actual} channels but should have 1")]
    ChannelCount { actual: usize },
    #[error("image has {palette} palette colors but {distinct} distinct pixel values")]
    PaletteCardinality { palette: usize, distinct: usize },
}

/// A named 4-D pixel stack bound to the palette that annotates it.
/// Axes are object/depth, height, width, channel.
///
/// Construction binds the parts and checks nothing; call [`Image::validate`]
/// when the stack should be proven well-formed. Validation is read-only and
/// idempotent.
#[derive(Debug, Clone)]
pub struct Image<'a> {
    /// Human-readable identifier used in diagnostics.
    pub name: String,
    pub kind: ImageKind,
    /// Annotation palette. Borrowed, its lifecycle is independent of the image.
    pub palette: &'a Palette,
    pub data: PixelData,
}

impl<'a> Image<'a> {
    pub fn new(
        name: impl Into<String>,
        kind: ImageKind,
        palette: &'a Palette,
        data: impl Into<PixelData>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            palette,
            data: data.into(),
        }
    }

    /// An [`ImageKind::Object`] stack of categorical labels.
    pub fn object(
        name: impl Into<String>,
        palette: &'a Palette,
        data: impl Into<PixelData>,
    ) -> Self {
        Self::new(name, ImageKind::Object, palette, data)
    }

    /// An [`ImageKind::Scalar`] stack of continuous measurements.
    pub fn scalar(
        name: impl Into<String>,
        palette: &'a Palette,
        data: impl Into<PixelData>,
    ) -> Self {
        Self::new(name, ImageKind::Scalar, palette, data)
    }

    /// Check the stack invariants for this image's kind. The shared
    /// dimensionality check runs first, then the kind-specific checks; the
    /// first violation aborts.
    pub fn validate(&self) -> Result<(), ImageError> {
        self.validate_base()?;
        match self.kind {
            ImageKind::Object => self.validate_object(),
            ImageKind::Scalar => self.validate_scalar(),
        }
    }

    fn validate_base(&self) -> Result<(), ImageError> {
        let actual = self.data.ndim();
        if actual != 4 {
            return Err(ImageError::Dimensionality { actual });
        }
        Ok(())
    }

    fn validate_object(&self) -> Result<(), ImageError> {
        self.check_dtype()?;
        // base check ran, axis 3 exists
        let channels = self.data.shape()[3];
        if channels != 1 {
            return Err(ImageError::ChannelCount { actual: channels });
        }
        self.check_cardinality()
    }

    fn validate_scalar(&self) -> Result<(), ImageError> {
        self.check_dtype()?;
        self.check_cardinality()
    }

    fn check_dtype(&self) -> Result<(), ImageError> {
        let expected = self.kind.dtype();
        let actual = self.data.dtype();
        if actual != expected {
            return Err(ImageError::DtypeMismatch { expected, actual });
        }
        Ok(())
    }

    /// Every distinct pixel value needs a palette color and every palette
    /// color needs a pixel value using it.
    fn check_cardinality(&self) -> Result<(), ImageError> {
        let palette = self.palette.len();
        let distinct = self.data.distinct_count();
        if palette != distinct {
            return Err(ImageError::PaletteCardinality { palette, distinct });
        }
        Ok(())
    }

    /// Validate the stack and then its palette in one call. Palette
    /// warnings ride along on success.
    pub fn validate_all(&self) -> Result<Vec<PaletteWarning>, ValidationError> {
        self.validate()?;
        Ok(self.palette.validate()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_pins_the_element_type() {
        assert_eq!(ImageKind::Object.dtype(), Dtype::Uint8);
        assert_eq!(ImageKind::Scalar.dtype(), Dtype::Float16);
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(ImageKind::Object.to_string(), "object");
        assert_eq!(ImageKind::Scalar.to_string(), "scalar");
    }

    #[test]
    fn error_messages_carry_the_counts() {
        let err = ImageError::PaletteCardinality {
            palette: 2,
            distinct: 3,
        };
        assert_eq!(
            err.to_string(),
            "image has 2 palette colors but 3 distinct pixel values"
        );

        let err = ImageError::DtypeMismatch {
            expected: Dtype::Uint8,
            actual: Dtype::Uint16,
        };
        assert_eq!(err.to_string(), "image has uint16 pixels but should have uint8");
    }
}
