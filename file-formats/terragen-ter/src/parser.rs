//! Parser implementation for TER files
//!
//! This module provides the main functionality for reading and writing TER
//! files. The [`TerParser`] struct is the primary entry point for working
//! with the chunked container format.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Result, TerError};
use crate::io::{ReadLittleEndian, WriteLittleEndian};
use crate::types::*;

/// Fixed-point denominator of the ALTW height scale field
const HEIGHT_SCALE_DENOM: f32 = 65536.0;

/// Parser for TER (Terragen terrain) files
///
/// The `TerParser` provides methods to read and write TER files. The chunk
/// dispatch handles every documented marker; anything else is rejected as a
/// format error.
///
/// # Examples
///
/// ```rust,no_run
/// use std::fs::File;
/// use std::io::{BufReader, BufWriter};
/// use terragen_ter::parser::TerParser;
///
/// // Parse a TER file
/// let file = File::open("input.ter").unwrap();
/// let mut reader = BufReader::new(file);
/// let parser = TerParser::new();
/// let terrain = parser.parse(&mut reader).unwrap();
///
/// // Write a TER file
/// let output = File::create("output.ter").unwrap();
/// let mut writer = BufWriter::new(output);
/// parser.write(&mut writer, &terrain).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct TerParser;

impl TerParser {
    /// Creates a new TER parser
    pub fn new() -> Self {
        Self
    }

    /// Parses a TER file from a reader
    ///
    /// Reads the 16-byte signature, then dispatches on 4-byte chunk markers
    /// until the EOF marker. Dimensions must be known (via SIZE or
    /// XPTS+YPTS) before the ALTW elevation chunk arrives. Any transport
    /// failure, including a short read, aborts the parse; no partially
    /// decoded terrain is ever returned.
    ///
    /// Markers are read back-to-back: every documented chunk pads itself to
    /// a 4-byte boundary, so no alignment seek is needed and `reader` only
    /// has to implement `Read`.
    pub fn parse<R: Read>(&self, reader: &mut R) -> Result<TerrainFile> {
        let mut signature = [0u8; 16];
        reader.read_exact(&mut signature)?;
        if &signature != SIGNATURE {
            return Err(TerError::SignatureMismatch);
        }

        let mut header = TerrainHeader::default();
        let mut heights = Vec::new();

        loop {
            let mut marker = [0u8; 4];
            reader.read_exact(&mut marker)?;

            match marker {
                XPTS_MARKER => {
                    header.width = reader.read_u16_le()? as u32;
                    reader.skip_padding()?;
                }
                YPTS_MARKER => {
                    header.depth = reader.read_u16_le()? as u32;
                    reader.skip_padding()?;
                }
                SIZE_MARKER => {
                    // Square side length minus one; a later XPTS/YPTS
                    // overrides this
                    let side = reader.read_u16_le()? as u32 + 1;
                    header.width = side;
                    header.depth = side;
                    reader.skip_padding()?;
                }
                SCAL_MARKER => {
                    let step_x = reader.read_f32_le()?;
                    let step_y = reader.read_f32_le()?;
                    let step_z = reader.read_f32_le()?;
                    if step_y != step_x || step_z != step_x {
                        return Err(TerError::InconsistentScale {
                            x: step_x,
                            y: step_y,
                            z: step_z,
                        });
                    }
                    if step_x <= 0.0 {
                        return Err(TerError::NonPositiveScale(step_x));
                    }
                    header.scale = step_x;
                }
                CRAD_MARKER => {
                    header.planet_radius = reader.read_f32_le()?;
                }
                CRVM_MARKER => {
                    header.mode = reader.read_u16_le()?;
                    reader.skip_padding()?;
                }
                ALTW_MARKER => {
                    heights = Self::parse_elevations(reader, &mut header)?;
                }
                EOF_MARKER => break,
                other => {
                    return Err(TerError::UnexpectedChunk(
                        String::from_utf8_lossy(&other).into_owned(),
                    ));
                }
            }
        }

        log::debug!(
            "parsed terrain: {}x{}, {} samples",
            header.width,
            header.depth,
            heights.len()
        );

        Ok(TerrainFile::from_parts(header, heights))
    }

    /// Decodes the ALTW chunk body into a height buffer
    fn parse_elevations<R: Read>(reader: &mut R, header: &mut TerrainHeader) -> Result<Vec<f32>> {
        if header.width == 0 || header.depth == 0 {
            return Err(TerError::MissingDimensions);
        }

        header.height_scale = reader.read_i16_le()? as f32 / HEIGHT_SCALE_DENOM;
        header.base_height = reader.read_i16_le()? as f32;

        let width = header.width as usize;
        let depth = header.depth as usize;
        let mut heights = vec![0.0f32; width * depth];
        let mut min_height = f32::MAX;
        let mut max_height = f32::MIN;

        for z in 0..depth {
            for x in 0..width {
                let raw = reader.read_i16_le()?;
                let h = header.base_height + header.height_scale * raw as f32;
                min_height = min_height.min(h);
                max_height = max_height.max(h);
                heights[z * width + x] = h;
            }
        }

        header.min_height = min_height;
        header.max_height = max_height;

        // The sample array is padded back to a 4-byte boundary
        if width * depth % 2 != 0 {
            reader.skip_padding()?;
        }

        Ok(heights)
    }

    /// Writes a TER file to a writer
    ///
    /// The emission order is fixed: signature, SIZE, XPTS, YPTS, SCAL,
    /// CRAD, CRVM, ALTW, EOF. Dimension preconditions are checked before
    /// any byte is written.
    pub fn write<W: Write>(&self, writer: &mut W, terrain: &TerrainFile) -> Result<()> {
        let width = terrain.header.width;
        let depth = terrain.header.depth;

        if width >= 65536 || depth >= 65536 {
            return Err(TerError::TooLarge { width, depth });
        }
        if width == 0 || depth == 0 {
            return Err(TerError::EmptyRegion);
        }
        let count = width as usize * depth as usize;
        if terrain.heights.len() != count {
            return Err(TerError::ValidationError(format!(
                "height buffer holds {} samples, expected {}",
                terrain.heights.len(),
                count
            )));
        }

        writer.write_all(SIGNATURE)?;

        writer.write_all(&SIZE_MARKER)?;
        writer.write_u16_le((width.min(depth) - 1) as u16)?;
        writer.write_u16_le(0)?; // padding

        writer.write_all(&XPTS_MARKER)?;
        writer.write_u16_le(width as u16)?;
        writer.write_u16_le(0)?; // padding

        writer.write_all(&YPTS_MARKER)?;
        writer.write_u16_le(depth as u16)?;
        writer.write_u16_le(0)?; // padding

        writer.write_all(&SCAL_MARKER)?;
        writer.write_f32_le(terrain.header.scale)?;
        writer.write_f32_le(terrain.header.scale)?;
        writer.write_f32_le(terrain.header.scale)?;

        writer.write_all(&CRAD_MARKER)?;
        writer.write_f32_le(terrain.header.planet_radius)?;

        writer.write_all(&CRVM_MARKER)?;
        writer.write_u16_le(terrain.header.mode)?;
        writer.write_u16_le(0)?; // padding

        writer.write_all(&ALTW_MARKER)?;
        writer.write_i16_le(quantize(terrain.header.height_scale * HEIGHT_SCALE_DENOM))?;
        writer.write_i16_le(quantize(terrain.header.base_height))?;

        let base_height = terrain.header.base_height;
        let height_scale = terrain.header.height_scale;
        for &h in &terrain.heights {
            writer.write_i16_le(quantize((h - base_height) / height_scale))?;
        }

        if count % 2 != 0 {
            writer.write_u16_le(0)?; // padding
        }

        writer.write_all(&EOF_MARKER)?;
        Ok(())
    }
}

/// Rounds a value to the nearest signed 16-bit integer, saturating at the
/// type bounds (NaN maps to 0)
fn quantize(value: f32) -> i16 {
    value.round() as i16
}

impl TerrainFile {
    /// Loads a terrain from a TER file on disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        TerParser::new().parse(&mut reader)
    }

    /// Writes this terrain to a TER file on disk
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        TerParser::new().write(&mut writer, self)
    }
}
