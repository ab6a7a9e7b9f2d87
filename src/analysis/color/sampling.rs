use image::{DynamicImage, Rgb};
use indexmap::IndexMap;

use crate::config::ColorEngineConfig;

/// Where the color engine reads pixels from
#[derive(Debug, Clone)]
pub enum PixelSource {
    /// An encoded image file (PNG, JPEG, WebP, ...) decoded with the `image` crate
    Encoded(Vec<u8>),
    /// Interleaved, already-decoded pixels; `channels` is 3 for RGB or 4 for RGBA
    Raw { data: Vec<u8>, channels: usize },
    Image(DynamicImage),
}

/// Quantized color frequencies in first-seen order
#[derive(Debug, Clone, Default)]
pub struct ColorHistogram {
    counts: IndexMap<Rgb<u8>, u32>,
    total: u32,
}

impl ColorHistogram {
    pub fn record(&mut self, color: Rgb<u8>) {
        *self.counts.entry(color).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of samples recorded, across all colors.
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, color: &Rgb<u8>) -> u32 {
        self.counts.get(color).copied().unwrap_or(0)
    }

    /// Colors by descending frequency; ties keep first-seen order.
    pub fn ranked(&self) -> Vec<(Rgb<u8>, u32)> {
        let mut sorted: Vec<_> = self.counts.iter().map(|(c, n)| (*c, *n)).collect();
        sorted.sort_by_key(|&(_, n)| std::cmp::Reverse(n));
        sorted
    }
}

fn quantize_channel(value: u8, step: u8) -> u8 {
    let step = step as u32;
    let rounded = (value as u32 + step / 2) / step * step;
    rounded.min(255) as u8
}

fn quantize_rgb(px: [u8; 3], step: u8) -> Rgb<u8> {
    Rgb(px.map(|c| quantize_channel(c, step)))
}

/// Samples at most `sample_budget` pixels evenly across the source, quantizes them and drops
/// near-black/near-white noise. Undecodable or truncated input yields an empty histogram.
pub fn sample(source: &PixelSource, config: &ColorEngineConfig) -> ColorHistogram {
    match source {
        PixelSource::Encoded(bytes) => match image::load_from_memory(bytes) {
            Ok(decoded) => sample_image(&decoded, config),
            Err(e) => {
                tracing::warn!("Could not decode image ({} bytes): {}", bytes.len(), e);
                ColorHistogram::default()
            }
        },
        PixelSource::Raw { data, channels } => sample_interleaved(data, *channels, config),
        PixelSource::Image(img) => sample_image(img, config),
    }
}

fn sample_image(img: &DynamicImage, config: &ColorEngineConfig) -> ColorHistogram {
    let rgb = img.to_rgb8();
    sample_interleaved(rgb.as_raw(), 3, config)
}

fn sample_interleaved(data: &[u8], channels: usize, config: &ColorEngineConfig) -> ColorHistogram {
    let mut histogram = ColorHistogram::default();
    if channels < 3 {
        tracing::warn!("Unsupported pixel layout with {} channels", channels);
        return histogram;
    }

    let pixel_count = data.len() / channels;
    if pixel_count == 0 {
        return histogram;
    }
    let stride = pixel_count.div_ceil(config.sample_budget).max(1);

    for pixel in data.chunks_exact(channels).step_by(stride) {
        let color = quantize_rgb([pixel[0], pixel[1], pixel[2]], config.quantization_step);
        let sum: u16 = color.0.iter().map(|&c| c as u16).sum();
        if sum < config.noise_floor || sum > config.noise_ceiling {
            continue;
        }
        histogram.record(color);
    }

    tracing::debug!(
        "Sampled {} pixels (stride {}), kept {} in {} buckets",
        pixel_count.div_ceil(stride),
        stride,
        histogram.total(),
        histogram.len()
    );
    histogram
}
