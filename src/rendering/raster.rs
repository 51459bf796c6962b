/// Canvas fill and PNG encoding

use image::codecs::png::PngEncoder;
use image::RgbaImage;
use sha2::{Digest, Sha256};

use super::paint::{PaintCommand, TRANSPARENT};
use crate::Result;

/// Fill the commands, in order, into a fresh transparent `size`×`size`
/// canvas. Anything past the canvas edge is clipped.
pub fn rasterize(size: u32, commands: &[PaintCommand]) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(size, size, TRANSPARENT);
    for cmd in commands {
        match cmd {
            PaintCommand::SolidRect { x, y, width, height, rgba } => {
                let x_end = x.saturating_add(*width).min(size);
                let y_end = y.saturating_add(*height).min(size);
                for py in *y..y_end {
                    for px in *x..x_end {
                        canvas.put_pixel(px, py, *rgba);
                    }
                }
            }
        }
    }
    canvas
}

/// Encode the canvas as an RGBA PNG held in memory
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut png_data = Vec::new();
    canvas.write_with_encoder(PngEncoder::new(&mut png_data))?;
    Ok(png_data)
}

/// Hex SHA-256 over the raw RGBA bytes, row-major
pub fn pixel_digest(canvas: &RgbaImage) -> String {
    hex::encode(Sha256::digest(canvas.as_raw()))
}
