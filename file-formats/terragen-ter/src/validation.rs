//! Validation functions for decoded terrains

use crate::error::{Result, TerError};
use crate::types::TerrainFile;

/// Validates a terrain against the format's invariants
///
/// Checks that the grid has been populated, that the height buffer matches
/// the header dimensions, that the horizontal scale is positive, and that
/// the recorded extremes are ordered.
pub fn validate_terrain_file(terrain: &TerrainFile) -> Result<()> {
    if terrain.header.width == 0 || terrain.header.depth == 0 {
        return Err(TerError::ValidationError(
            "terrain has no dimensions; SIZE or XPTS+YPTS missing".to_string(),
        ));
    }

    let expected = terrain.header.width as usize * terrain.header.depth as usize;
    if terrain.heights.len() != expected {
        return Err(TerError::ValidationError(format!(
            "height buffer holds {} samples, expected {}x{} = {}",
            terrain.heights.len(),
            terrain.header.width,
            terrain.header.depth,
            expected
        )));
    }

    if terrain.header.scale <= 0.0 {
        return Err(TerError::ValidationError(format!(
            "horizontal scale is not positive: {}",
            terrain.header.scale
        )));
    }

    if terrain.header.min_height > terrain.header.max_height {
        return Err(TerError::ValidationError(format!(
            "min height {} exceeds max height {}",
            terrain.header.min_height, terrain.header.max_height
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_terrain() {
        let terrain = TerrainFile::new(4, 4);
        assert!(validate_terrain_file(&terrain).is_ok());
    }

    #[test]
    fn test_missing_dimensions() {
        let terrain = TerrainFile::new(0, 0);
        assert!(validate_terrain_file(&terrain).is_err());
    }

    #[test]
    fn test_buffer_length_mismatch() {
        let mut terrain = TerrainFile::new(4, 4);
        terrain.heights.pop();
        let result = validate_terrain_file(&terrain);
        assert!(matches!(result, Err(TerError::ValidationError(_))));
    }

    #[test]
    fn test_unordered_extremes() {
        let mut terrain = TerrainFile::new(2, 2);
        terrain.header.min_height = 10.0;
        terrain.header.max_height = -10.0;
        assert!(validate_terrain_file(&terrain).is_err());
    }

    #[test]
    fn test_non_positive_scale() {
        let mut terrain = TerrainFile::new(2, 2);
        terrain.header.scale = 0.0;
        assert!(validate_terrain_file(&terrain).is_err());
    }
}
