use crate::{
    composite_cpu,
    decode::{self, PreparedImage},
    error::TraitforgeResult,
    store::AssetStore,
    variant::CanvasSize,
};

/// Flattened output canvas: premultiplied RGBA8, row-major, tightly packed.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Fully transparent canvas of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 4],
        }
    }
}

/// Composite `ordered_asset_paths` onto a fresh canvas, in order, using
/// source-over alpha blending anchored at the origin.
///
/// Layers are decoded one at a time; any decode failure aborts the whole
/// generation and no partial image is returned.
pub fn composite_layers<S: AssetStore>(
    store: &S,
    canvas: CanvasSize,
    ordered_asset_paths: &[String],
) -> TraitforgeResult<FrameRgba> {
    let mut frame = FrameRgba::new(canvas.width, canvas.height);

    for path in ordered_asset_paths {
        let bytes = store.read_bytes(path)?;
        let layer = decode::decode_image(&bytes)?;
        draw_over(&mut frame, &layer)?;
    }

    Ok(frame)
}

/// Draw `src` over `dst` anchored at the origin, clipped to the canvas.
fn draw_over(dst: &mut FrameRgba, src: &PreparedImage) -> TraitforgeResult<()> {
    let rows = dst.height.min(src.height) as usize;
    let cols = dst.width.min(src.width) as usize;
    let dst_stride = dst.width as usize * 4;
    let src_stride = src.width as usize * 4;

    for y in 0..rows {
        let dst_row = &mut dst.data[y * dst_stride..y * dst_stride + cols * 4];
        let src_row = &src.rgba8_premul[y * src_stride..y * src_stride + cols * 4];
        composite_cpu::over_in_place(dst_row, src_row)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, px: [u8; 4]) -> PreparedImage {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&px);
        }
        PreparedImage {
            width,
            height,
            rgba8_premul: data,
        }
    }

    #[test]
    fn later_opaque_layer_replaces_earlier() {
        let mut frame = FrameRgba::new(2, 2);
        draw_over(&mut frame, &solid(2, 2, [0, 255, 0, 255])).unwrap();
        draw_over(&mut frame, &solid(2, 2, [255, 0, 0, 255])).unwrap();
        assert_eq!(&frame.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn order_is_not_commutative() {
        let mut ab = FrameRgba::new(1, 1);
        draw_over(&mut ab, &solid(1, 1, [0, 255, 0, 255])).unwrap();
        draw_over(&mut ab, &solid(1, 1, [255, 0, 0, 255])).unwrap();

        let mut ba = FrameRgba::new(1, 1);
        draw_over(&mut ba, &solid(1, 1, [255, 0, 0, 255])).unwrap();
        draw_over(&mut ba, &solid(1, 1, [0, 255, 0, 255])).unwrap();

        assert_ne!(ab.data, ba.data);
        // Each equals drawing only its final opaque layer.
        assert_eq!(&ab.data, &vec![255, 0, 0, 255]);
        assert_eq!(&ba.data, &vec![0, 255, 0, 255]);
    }

    #[test]
    fn transparent_layer_leaves_canvas_untouched() {
        let mut frame = FrameRgba::new(1, 1);
        draw_over(&mut frame, &solid(1, 1, [0, 0, 255, 255])).unwrap();
        draw_over(&mut frame, &solid(1, 1, [0, 0, 0, 0])).unwrap();
        assert_eq!(&frame.data, &vec![0, 0, 255, 255]);
    }

    #[test]
    fn oversized_layer_is_clipped_to_canvas() {
        let mut frame = FrameRgba::new(2, 1);
        draw_over(&mut frame, &solid(4, 3, [9, 9, 9, 255])).unwrap();
        assert_eq!(frame.data.len(), 2 * 1 * 4);
        assert_eq!(&frame.data[4..8], &[9, 9, 9, 255]);
    }

    #[test]
    fn undersized_layer_only_covers_top_left() {
        let mut frame = FrameRgba::new(2, 2);
        draw_over(&mut frame, &solid(1, 1, [7, 7, 7, 255])).unwrap();
        assert_eq!(&frame.data[0..4], &[7, 7, 7, 255]);
        assert_eq!(&frame.data[4..8], &[0, 0, 0, 0]);
    }
}
