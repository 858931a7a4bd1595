use std::io::Cursor;

use pigment_mix::Rgb;

use crate::error::RenderError;

/// Render colors as a horizontal strip of solid swatches.
///
/// Each swatch is `swatch_width` pixels wide and the strip is `height`
/// pixels tall. Output is an 8-bit RGB PNG.
pub fn render_swatches(
    colors: &[Rgb],
    swatch_width: u32,
    height: u32,
) -> Result<Vec<u8>, RenderError> {
    if colors.is_empty() {
        return Err(RenderError::EmptySwatches);
    }

    let width = u32::try_from(colors.len())
        .ok()
        .and_then(|n| n.checked_mul(swatch_width))
        .filter(|&w| w > 0 && height > 0)
        .ok_or(RenderError::UnsupportedDimensions {
            width: swatch_width,
            height,
        })?;

    let mut row = Vec::with_capacity(width as usize * 3);
    for color in colors {
        for _ in 0..swatch_width {
            row.extend_from_slice(&color.to_array());
        }
    }

    let mut pixels = Vec::with_capacity(row.len() * height as usize);
    for _ in 0..height {
        pixels.extend_from_slice(&row);
    }

    encode_png(width, height, &pixels)
}

fn encode_png(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(pixels)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
