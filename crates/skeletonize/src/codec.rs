use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use sk_core::{Image, Rgba};

use crate::{PipelineError, Stage};

/// Container decode/encode boundary around the pipeline.
pub trait ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Image<Rgba>, PipelineError>;

    fn encode(&self, img: &Image<Rgba>) -> Result<Vec<u8>, PipelineError>;

    fn content_type(&self) -> &'static str;
}

/// Decodes any format the `image` crate recognizes; encodes PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Image<Rgba>, PipelineError> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| PipelineError::Decode(Box::new(e)))?;
        let rgba = decoded.to_rgba8();
        let (w, h) = rgba.dimensions();
        let data = rgba
            .into_raw()
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();

        Image::from_vec(w as usize, h as usize, data).map_err(|source| PipelineError::Core {
            stage: Stage::Decode,
            source,
        })
    }

    fn encode(&self, img: &Image<Rgba>) -> Result<Vec<u8>, PipelineError> {
        let w = u32::try_from(img.width()).map_err(|e| PipelineError::Encode(Box::new(e)))?;
        let h = u32::try_from(img.height()).map_err(|e| PipelineError::Encode(Box::new(e)))?;
        let raw = img.data().iter().flatten().copied().collect();

        let buf = RgbaImage::from_raw(w, h, raw)
            .ok_or_else(|| PipelineError::Encode("pixel buffer does not match dimensions".into()))?;

        let mut out = Cursor::new(Vec::new());
        buf.write_to(&mut out, ImageFormat::Png)
            .map_err(|e| PipelineError::Encode(Box::new(e)))?;
        Ok(out.into_inner())
    }

    fn content_type(&self) -> &'static str {
        "image/png"
    }
}
