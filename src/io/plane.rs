use std::path::Path;

use anyhow::{Context, Result};
use image::DynamicImage;

/// Which stain a plane is extracted for: the biomarker lives in the red
/// channel of RGB captures, the nuclear counterstain in the blue channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelRole {
    Red,
    Blue,
}

impl ChannelRole {
    fn channel_index(self) -> usize {
        match self {
            ChannelRole::Red => 0,
            ChannelRole::Blue => 2,
        }
    }
}

/// A single intensity plane normalized into [0,1], together with the
/// bit-depth-derived scale that was divided out.
#[derive(Debug, Clone)]
pub struct NormalizedPlane {
    pub values: Vec<f32>,
    pub width: u32,
    pub height: u32,
    pub scale: f32,
}

impl NormalizedPlane {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Decode an image file and extract one normalized intensity plane.
///
/// RGB(A) captures yield the role's channel; single-channel 8/16-bit
/// captures yield the raw plane for either role; anything else falls back
/// to a role-independent grayscale luminance plane. The ceiling is 255 for
/// 8-bit storage, 65535 for 16-bit, and the observed maximum otherwise
/// (1.0 when that maximum is zero).
pub fn load_plane(path: &Path, role: ChannelRole) -> Result<NormalizedPlane> {
    let img = image::open(path).with_context(|| format!("failed to decode {}", path.display()))?;
    let width = img.width();
    let height = img.height();
    let idx = role.channel_index();

    let (raw, ceiling): (Vec<f32>, Option<f32>) = match img {
        DynamicImage::ImageRgb8(buf) => (channel_f32(buf.as_raw(), 3, idx), Some(255.0)),
        DynamicImage::ImageRgba8(buf) => (channel_f32(buf.as_raw(), 4, idx), Some(255.0)),
        DynamicImage::ImageRgb16(buf) => (channel_f32(buf.as_raw(), 3, idx), Some(65535.0)),
        DynamicImage::ImageRgba16(buf) => (channel_f32(buf.as_raw(), 4, idx), Some(65535.0)),
        DynamicImage::ImageLuma8(buf) => (channel_f32(buf.as_raw(), 1, 0), Some(255.0)),
        DynamicImage::ImageLumaA8(buf) => (channel_f32(buf.as_raw(), 2, 0), Some(255.0)),
        DynamicImage::ImageLuma16(buf) => (channel_f32(buf.as_raw(), 1, 0), Some(65535.0)),
        DynamicImage::ImageLumaA16(buf) => (channel_f32(buf.as_raw(), 2, 0), Some(65535.0)),
        DynamicImage::ImageRgb32F(buf) => (channel_f32(buf.as_raw(), 3, idx), None),
        DynamicImage::ImageRgba32F(buf) => (channel_f32(buf.as_raw(), 4, idx), None),
        other => (other.to_luma32f().into_raw(), None),
    };

    let scale = ceiling.unwrap_or_else(|| observed_ceiling(&raw));
    let values = raw.into_iter().map(|v| v / scale).collect();
    Ok(NormalizedPlane {
        values,
        width,
        height,
        scale,
    })
}

fn channel_f32<T: Into<f32> + Copy>(samples: &[T], stride: usize, idx: usize) -> Vec<f32> {
    samples
        .chunks_exact(stride)
        .map(|px| px[idx].into())
        .collect()
}

fn observed_ceiling(values: &[f32]) -> f32 {
    let max = values.iter().copied().fold(0.0f32, f32::max);
    if max > 0.0 { max } else { 1.0 }
}
