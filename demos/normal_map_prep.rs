//! Normal map preparation demo
//!
//! Builds a synthetic tangent-space normal map, runs the export preparation
//! pipeline over its raw bytes (invert the green channel for a
//! DirectX-to-OpenGL convention switch, flip the rows, renormalize), and
//! writes the result as a PNG.

use anyhow::Result;
use image::{Rgba, RgbaImage};
use texture_prep::{
    ChannelInvert, NormalizeScaling, OperationPipeline, PixelFormat, PixelLayout, VectorNormalize,
    VerticalFlip,
};

const SIZE: u32 = 64;

fn main() -> Result<()> {
    let mut img = RgbaImage::new(SIZE, SIZE);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        // Tilt the normal across the image, z kept dominant.
        let nx = x as f64 / SIZE as f64 - 0.5;
        let ny = y as f64 / SIZE as f64 - 0.5;
        let nz = 1.0;
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        *pixel = Rgba([
            ((nx / len) * 127.0 + 128.0) as u8,
            ((ny / len) * 127.0 + 128.0) as u8,
            ((nz / len) * 127.0 + 128.0) as u8,
            255,
        ]);
    }
    img.save("normal_in.png")?;

    // RGBA bytes are RGB plus a trailing byte the color operations never
    // touch, which is exactly the Rgb32 layout.
    let layout = PixelLayout::new(PixelFormat::Rgb32, (SIZE * 4) as usize, SIZE as usize);
    let pipeline = OperationPipeline::new()
        .with_op(ChannelInvert::new(1)?)
        .with_op(VerticalFlip::new())
        .with_op(VectorNormalize::with_scaling(NormalizeScaling::Rescale));

    let mut buffer = img.into_raw();
    pipeline.apply(&mut buffer, &layout)?;
    println!("applied operations: {:?}", pipeline.names());

    let out = RgbaImage::from_raw(SIZE, SIZE, buffer).expect("buffer length unchanged");
    out.save("normal_out.png")?;
    println!("wrote normal_in.png and normal_out.png");
    Ok(())
}
