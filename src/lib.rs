//! Typed model and validation for palette-annotated scientific image stacks.
//!
//! A [`Palette`] is an ordered list of hexadecimal color codes. An [`Image`]
//! binds a name, a borrowed palette and a 4-D [`PixelData`] array, tagged as
//! either categorical ([`ImageKind::Object`]) or continuous
//! ([`ImageKind::Scalar`]). Nothing is checked at construction; calling
//! [`Palette::validate`] or [`Image::validate`] runs the invariant checks on
//! demand, and [`Image::validate_all`] runs both.
//!
//! Reading or writing pixel data from files is the caller's business. The
//! crate only judges arrays already in memory.

use thiserror::Error;

pub mod palette;
pub mod pixels;
pub mod stack;

pub use crate::palette::{Palette, PaletteError, PaletteWarning};
pub use crate::pixels::{Dtype, PixelData};
pub use crate::stack::{Image, ImageError, ImageKind};

/// Any failure from validating an image together with its palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Image(#[from] ImageError),
}
