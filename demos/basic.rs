//! Basic usage of linear-resize: one resize, then a kernel comparison.

use linear_resize::{benchmark, resize, Mode, Rgba8};

fn main() {
    // A small gradient image to resize.
    let (wi, hi) = (64, 64);
    let src: Vec<Rgba8> = (0..wi * hi)
        .map(|i| {
            let x = (i % wi) as u8 * 4;
            let y = (i / wi) as u8 * 4;
            Rgba8::new(x, y, 128, 255)
        })
        .collect();

    // Upscale it 4x with the 8-wide kernel.
    println!("=== Resize ===");
    let (wo, ho) = (256, 256);
    let mut dst = vec![Rgba8::default(); wo * ho];
    resize(Mode::Wide, &src, wi, hi, &mut dst, wo, ho).unwrap();
    println!(
        "{}x{} -> {}x{}: corner {:?}, center {:?}",
        wi,
        hi,
        wo,
        ho,
        dst[0],
        dst[ho / 2 * wo + wo / 2]
    );

    // All four kernels agree byte for byte.
    println!("\n=== Cross-kernel check ===");
    let mut reference = vec![Rgba8::default(); wo * ho];
    resize(Mode::Scalar, &src, wi, hi, &mut reference, wo, ho).unwrap();
    for mode in Mode::ALL {
        let mut out = vec![Rgba8::default(); wo * ho];
        resize(mode, &src, wi, hi, &mut out, wo, ho).unwrap();
        println!(
            "{:>13}: {}",
            mode.name(),
            if out == reference { "identical" } else { "DIVERGED" }
        );
    }

    // And they can be timed against each other.
    println!("\n=== Timing (mean of 20 iterations) ===");
    for mode in Mode::ALL {
        let ms = benchmark(mode, &src, wi, hi, &mut dst, wo, ho, 20).unwrap();
        println!("{:>13}: {:8.3} ms per {}x{} image", mode.name(), ms, wo, ho);
    }
}
