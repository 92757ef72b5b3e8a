//! Core types for the Terragen TER file format

use std::fmt;
use std::ops::{Index, IndexMut};

/// 16-byte ASCII signature at the start of every TER file
pub const SIGNATURE: &[u8; 16] = b"TERRAGENTERRAIN ";

/// Marker for the XPTS chunk (grid width)
pub const XPTS_MARKER: [u8; 4] = *b"XPTS";
/// Marker for the YPTS chunk (grid depth)
pub const YPTS_MARKER: [u8; 4] = *b"YPTS";
/// Marker for the SIZE chunk (square grid side length minus one)
pub const SIZE_MARKER: [u8; 4] = *b"SIZE";
/// Marker for the SCAL chunk (horizontal step, one float per axis)
pub const SCAL_MARKER: [u8; 4] = *b"SCAL";
/// Marker for the CRAD chunk (planet radius)
pub const CRAD_MARKER: [u8; 4] = *b"CRAD";
/// Marker for the CRVM chunk (render mode)
pub const CRVM_MARKER: [u8; 4] = *b"CRVM";
/// Marker for the ALTW chunk (quantized elevation samples)
pub const ALTW_MARKER: [u8; 4] = *b"ALTW";
/// Marker terminating the chunk stream; the on-disk tag is `"EOF "`
pub const EOF_MARKER: [u8; 4] = *b"EOF ";

/// Header metadata of a TER terrain
///
/// `height_scale`, `base_height`, `min_height`, and `max_height` are only
/// meaningful after an ALTW chunk has been decoded (or before one is
/// written); until then they hold their zero defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainHeader {
    /// Grid width in samples
    pub width: u32,
    /// Grid depth in samples
    pub depth: u32,
    /// Render mode from the CRVM chunk
    pub mode: u16,
    /// Horizontal step between samples, identical for all three axes
    pub scale: f32,
    /// Planet radius from the CRAD chunk
    pub planet_radius: f32,
    /// Quantization step: real height = `base_height + height_scale * raw`
    pub height_scale: f32,
    /// Reference elevation of the quantized samples
    pub base_height: f32,
    /// Smallest decoded elevation
    pub min_height: f32,
    /// Largest decoded elevation
    pub max_height: f32,
}

impl Default for TerrainHeader {
    fn default() -> Self {
        Self {
            width: 0,
            depth: 0,
            mode: 0,
            scale: 30.0,
            planet_radius: 6370.0,
            height_scale: 0.0,
            base_height: 0.0,
            min_height: 0.0,
            max_height: 0.0,
        }
    }
}

/// A decoded TER terrain: header metadata plus the dense heightmap
///
/// Heights are stored row-major, `(x, z)` at index `z * width + x`. The
/// buffer is exclusively owned by this value and always holds exactly
/// `width * depth` samples once the terrain has been created.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainFile {
    /// Header metadata
    pub header: TerrainHeader,
    /// Elevation samples in row-major order
    pub heights: Vec<f32>,
}

impl TerrainFile {
    /// Creates a flat terrain of the given dimensions with all heights zero
    pub fn new(width: u32, depth: u32) -> Self {
        let header = TerrainHeader {
            width,
            depth,
            ..TerrainHeader::default()
        };
        let heights = vec![0.0; width as usize * depth as usize];
        Self { header, heights }
    }

    /// Creates a terrain from an already-decoded header and height buffer
    pub fn from_parts(header: TerrainHeader, heights: Vec<f32>) -> Self {
        Self { header, heights }
    }

    /// Grid width in samples
    pub fn width(&self) -> u32 {
        self.header.width
    }

    /// Grid depth in samples
    pub fn depth(&self) -> u32 {
        self.header.depth
    }

    /// Returns the height at `(x, z)`, or `None` if out of bounds
    pub fn height(&self, x: u32, z: u32) -> Option<f32> {
        if x < self.header.width && z < self.header.depth {
            let index = z as usize * self.header.width as usize + x as usize;
            self.heights.get(index).copied()
        } else {
            None
        }
    }
}

impl Index<(u32, u32)> for TerrainFile {
    type Output = f32;

    /// Direct element access; `(x, z)` must be in bounds
    fn index(&self, (x, z): (u32, u32)) -> &f32 {
        &self.heights[z as usize * self.header.width as usize + x as usize]
    }
}

impl IndexMut<(u32, u32)> for TerrainFile {
    fn index_mut(&mut self, (x, z): (u32, u32)) -> &mut f32 {
        &mut self.heights[z as usize * self.header.width as usize + x as usize]
    }
}

impl fmt::Display for TerrainFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Terragen terrain ({}x{}, heights {}..{}, base {})",
            self.header.width,
            self.header.depth,
            self.header.min_height,
            self.header.max_height,
            self.header.base_height
        )
    }
}
