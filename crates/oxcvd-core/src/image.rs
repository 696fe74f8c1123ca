//! Image buffers at the two precisions the pipeline uses
//!
//! Images enter and leave the system as 8-bit sRGB; all simulation happens
//! on 32-bit linear RGB. The two buffer types keep that distinction in the
//! type system since samples themselves are never tagged with their space.

use crate::batch;
use crate::error::{Error, Result};

/// An 8-bit sRGB image, interleaved RGB rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrgbImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl SrgbImage {
    /// Create an image from an interleaved RGB8 buffer
    ///
    /// The buffer length must be exactly width × height × 3.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Interleaved RGB8 pixel data
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, returning the interleaved buffer
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Decode to a linear RGB image (sRGB gamma removed)
    pub fn to_linear(&self) -> LinearImage {
        let mut samples = vec![[0.0f32; 3]; self.width * self.height];
        batch::rgb8_to_f32_batch(&self.data, &mut samples);
        batch::srgb_decode_batch(&mut samples);
        LinearImage {
            width: self.width,
            height: self.height,
            data: samples,
        }
    }
}

/// A 32-bit float linear RGB image
///
/// Values are nominally in [0,1] but may transiently leave the range
/// between a simulation step and gamut fitting.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearImage {
    width: usize,
    height: usize,
    data: Vec<[f32; 3]>,
}

impl LinearImage {
    /// Create an image from a buffer of linear RGB samples
    pub fn from_samples(width: usize, height: usize, data: Vec<[f32; 3]>) -> Result<Self> {
        let expected = width * height;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Linear RGB samples, row-major
    #[inline]
    pub fn samples(&self) -> &[[f32; 3]] {
        &self.data
    }

    /// Mutable access to the samples
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [[f32; 3]] {
        &mut self.data
    }

    /// Build a new image of the same shape from a sample buffer
    ///
    /// Used by simulators that compute into a fresh buffer.
    pub(crate) fn with_samples(&self, data: Vec<[f32; 3]>) -> Self {
        debug_assert_eq!(data.len(), self.data.len());
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }

    /// Encode to an 8-bit sRGB image, clamping to [0,1] first
    pub fn to_srgb(&self) -> SrgbImage {
        let mut encoded = self.data.clone();
        batch::srgb_encode_batch(&mut encoded);
        let mut data = vec![0u8; self.width * self.height * 3];
        batch::f32_to_rgb8_batch(&encoded, &mut data);
        SrgbImage {
            width: self.width,
            height: self.height,
            data,
        }
    }
}
