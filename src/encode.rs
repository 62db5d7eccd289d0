use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context;

use crate::{
    compose::FrameRgba,
    error::{TraitforgeError, TraitforgeResult},
};

/// Output format chosen from the file extension; PNG when unrecognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Gif,
}

pub fn output_format(path: &Path) -> OutputFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpeg") | Some("jpg") => OutputFormat::Jpeg,
        Some("gif") => OutputFormat::Gif,
        _ => OutputFormat::Png,
    }
}

/// Encode the flattened canvas to `path`, selecting the codec from the
/// extension. The canvas is unpremultiplied before encoding.
pub fn encode_to_file(frame: &FrameRgba, path: &Path) -> TraitforgeResult<()> {
    let mut rgba = frame.data.clone();
    unpremultiply_rgba8_in_place(&mut rgba);

    let img = image::RgbaImage::from_raw(frame.width, frame.height, rgba).ok_or_else(|| {
        TraitforgeError::encode("canvas byte length does not match dimensions")
    })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("create output '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);

    let written = match output_format(path) {
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel; flatten to RGB.
            let rgb = image::DynamicImage::ImageRgba8(img).to_rgb8();
            rgb.write_with_encoder(image::codecs::jpeg::JpegEncoder::new_with_quality(
                &mut writer,
                95,
            ))
        }
        OutputFormat::Gif => {
            let mut encoder = image::codecs::gif::GifEncoder::new(&mut writer);
            encoder.encode_frame(image::Frame::new(img))
        }
        OutputFormat::Png => {
            img.write_with_encoder(image::codecs::png::PngEncoder::new(&mut writer))
        }
    };

    written.map_err(|e| TraitforgeError::encode(format!("{e}")))?;
    Ok(())
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 0 || a == 255 {
            continue;
        }
        for c in px.iter_mut().take(3) {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_selection_by_extension() {
        assert_eq!(output_format(Path::new("a.png")), OutputFormat::Png);
        assert_eq!(output_format(Path::new("a.JPG")), OutputFormat::Jpeg);
        assert_eq!(output_format(Path::new("a.jpeg")), OutputFormat::Jpeg);
        assert_eq!(output_format(Path::new("a.gif")), OutputFormat::Gif);
        assert_eq!(output_format(Path::new("a.webp")), OutputFormat::Png);
        assert_eq!(output_format(Path::new("a")), OutputFormat::Png);
    }

    #[test]
    fn unpremultiply_inverts_premultiply() {
        // 50% alpha premultiplied channel values round-trip within 1 step.
        let mut px = vec![64u8, 32u8, 16u8, 128u8];
        unpremultiply_rgba8_in_place(&mut px);
        assert!(px[0].abs_diff(128) <= 1);
        assert!(px[1].abs_diff(64) <= 1);
        assert!(px[2].abs_diff(32) <= 1);
        assert_eq!(px[3], 128);
    }

    #[test]
    fn opaque_and_transparent_pixels_untouched() {
        let mut px = vec![10u8, 20u8, 30u8, 255u8, 0u8, 0u8, 0u8, 0u8];
        let before = px.clone();
        unpremultiply_rgba8_in_place(&mut px);
        assert_eq!(px, before);
    }
}
