//! Integer-factor upscaling of a terrain
//!
//! The upscaler expands a terrain to `width * n` by `depth * n` samples
//! with two separable linear-interpolation passes, first along X, then
//! along Z. Interpolation happens on height-above-base rather than
//! absolute height, so a large `base_height` does not compound rounding
//! into the interpolants.

use crate::error::{Result, TerError};
use crate::types::TerrainFile;

/// Upscales `terrain` in place by a positive integer factor
///
/// The last column and row repeat themselves at the edges (zero slope).
/// The old buffer is discarded and replaced wholesale by the expanded one;
/// there is no state in which both are visible.
///
/// The header's `min_height`/`max_height` are updated by the affine
/// rescale `base + (extreme - base) * factor` of the pre-scale extremes,
/// not recomputed from the interpolated samples, so they can drift from
/// the true range of the new grid. Downstream consumers rely on the
/// drifted values, so the behavior is kept as-is.
///
/// A factor of 1 leaves every sample unchanged up to float rounding.
pub fn upscale(terrain: &mut TerrainFile, factor: u32) -> Result<()> {
    if factor == 0 {
        return Err(TerError::InvalidScaleFactor);
    }

    let n = factor as usize;
    let step = factor as f32;
    let old_width = terrain.header.width as usize;
    let old_depth = terrain.header.depth as usize;

    // A parsed file without an ALTW chunk carries dimensions but no
    // samples; refuse it instead of indexing past the buffer
    if terrain.heights.len() != old_width * old_depth {
        return Err(TerError::ValidationError(format!(
            "height buffer holds {} samples, expected {}x{} = {}",
            terrain.heights.len(),
            terrain.header.width,
            terrain.header.depth,
            old_width * old_depth
        )));
    }

    let width = old_width * n;
    let depth = old_depth * n;
    let base = terrain.header.base_height;

    let mut heights = vec![0.0f32; width * depth];

    // Pass 1: expand along X into the new buffer. Only the original rows
    // (z, z*n in the new buffer) are filled; pass 2 fills the rest.
    for z in 0..old_depth {
        for x in 0..old_width {
            let h = terrain.heights[z * old_width + x] - base;
            let x2 = (x + 1).min(old_width - 1);
            let h2 = terrain.heights[z * old_width + x2] - base;
            let increment = (h2 - h) / step;

            for i in 0..n {
                heights[z * n * width + x * n + i] = base + h + i as f32 * increment;
            }
        }
    }

    // Install the new buffer; the old one is dropped here
    terrain.heights = heights;
    terrain.header.width = width as u32;
    terrain.header.depth = depth as u32;
    terrain.header.max_height = base + (terrain.header.max_height - base) * step;
    terrain.header.min_height = base + (terrain.header.min_height - base) * step;

    // Pass 2: expand along Z in place, interpolating between the rows
    // pass 1 produced. The clamp lands on the last pass-1 row so the
    // bottom edge repeats with zero slope, mirroring the X pass.
    for z in 0..old_depth {
        for x in 0..width {
            let h = terrain.heights[z * n * width + x] - base;
            let z2 = ((z + 1) * n).min((old_depth - 1) * n);
            let h2 = terrain.heights[z2 * width + x] - base;
            let increment = (h2 - h) / step;

            for i in 0..n {
                terrain.heights[(z * n + i) * width + x] = base + h + i as f32 * increment;
            }
        }
    }

    log::debug!(
        "upscaled terrain by {}: {}x{} -> {}x{}",
        factor,
        old_width,
        old_depth,
        width,
        depth
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_terrain() -> TerrainFile {
        let mut terrain = TerrainFile::new(2, 2);
        terrain.header.height_scale = 1.0 / 65536.0;
        terrain.heights = vec![0.0, 100.0, 200.0, 300.0];
        terrain.header.min_height = 0.0;
        terrain.header.max_height = 300.0;
        terrain
    }

    #[test]
    fn test_factor_zero_rejected() {
        let mut terrain = sample_terrain();
        assert!(matches!(
            upscale(&mut terrain, 0),
            Err(TerError::InvalidScaleFactor)
        ));
        // Untouched on failure
        assert_eq!(terrain.width(), 2);
        assert_eq!(terrain.heights.len(), 4);
    }

    #[test]
    fn test_buffer_length_mismatch_rejected() {
        let mut terrain = sample_terrain();
        terrain.heights.pop();
        let result = upscale(&mut terrain, 2);
        assert!(matches!(result, Err(TerError::ValidationError(_))));
        // Untouched on failure
        assert_eq!(terrain.width(), 2);
        assert_eq!(terrain.heights.len(), 3);
    }

    #[test]
    fn test_factor_one_is_identity() {
        let mut terrain = sample_terrain();
        let before = terrain.heights.clone();
        upscale(&mut terrain, 1).unwrap();
        assert_eq!(terrain.width(), 2);
        assert_eq!(terrain.depth(), 2);
        assert_eq!(terrain.heights, before);
    }

    #[test]
    fn test_two_by_two_doubled() {
        let mut terrain = sample_terrain();
        upscale(&mut terrain, 2).unwrap();

        assert_eq!(terrain.width(), 4);
        assert_eq!(terrain.depth(), 4);
        assert_eq!(terrain.heights.len(), 16);

        // Original samples survive at the lattice points
        assert_eq!(terrain[(0, 0)], 0.0);
        assert_eq!(terrain[(2, 0)], 100.0);
        assert_eq!(terrain[(0, 2)], 200.0);
        assert_eq!(terrain[(2, 2)], 300.0);

        // Interior interpolants along X
        assert_eq!(terrain[(1, 0)], 50.0);
        assert_eq!(terrain[(1, 2)], 250.0);
        // Along Z
        assert_eq!(terrain[(0, 1)], 100.0);
        assert_eq!(terrain[(2, 1)], 200.0);
        // Diagonal midpoint interpolates the X-pass values
        assert_eq!(terrain[(1, 1)], 150.0);

        // The last column/row repeat themselves (zero slope at the edge)
        assert_eq!(terrain[(3, 0)], 100.0);
        assert_eq!(terrain[(3, 3)], 300.0);
        assert_eq!(terrain[(0, 3)], 200.0);
    }

    #[test]
    fn test_lattice_points_preserved_factor_three() {
        let mut terrain = TerrainFile::new(3, 2);
        terrain.heights = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

        let original = terrain.clone();
        upscale(&mut terrain, 3).unwrap();

        assert_eq!(terrain.width(), 9);
        assert_eq!(terrain.depth(), 6);
        for z in 0..2 {
            for x in 0..3 {
                assert_eq!(terrain[(x * 3, z * 3)], original[(x, z)]);
            }
        }
    }

    #[test]
    fn test_extremes_rescaled_affinely() {
        let mut terrain = sample_terrain();
        terrain.header.base_height = 100.0;
        terrain.header.min_height = 0.0;
        terrain.header.max_height = 300.0;

        upscale(&mut terrain, 2).unwrap();

        // base + (extreme - base) * factor, regardless of the actual
        // interpolated contents
        assert_eq!(terrain.header.min_height, -100.0);
        assert_eq!(terrain.header.max_height, 500.0);
    }

    #[test]
    fn test_base_height_anchoring() {
        // Interpolation runs on height-above-base, so shifting every
        // sample and the base by the same offset shifts the result
        let mut plain = TerrainFile::new(2, 1);
        plain.heights = vec![0.0, 10.0];

        let mut shifted = TerrainFile::new(2, 1);
        shifted.header.base_height = 1000.0;
        shifted.heights = vec![1000.0, 1010.0];

        upscale(&mut plain, 2).unwrap();
        upscale(&mut shifted, 2).unwrap();

        for x in 0..4 {
            assert_eq!(shifted[(x, 0)], plain[(x, 0)] + 1000.0);
        }
    }
}
