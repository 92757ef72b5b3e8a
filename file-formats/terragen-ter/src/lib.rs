//! Parser and upscaler for Terragen TER terrain files
//!
//! This crate provides functionality to read, write, validate, and upscale
//! Terragen TER files. TER files store a heightmap as a chunked binary
//! container: a fixed 16-byte signature followed by tagged chunks carrying
//! the grid dimensions, horizontal scale, planet radius, render mode, and
//! the quantized elevation samples.
//!
//! ## Features
//!
//! - Parse TER files from any `Read` source
//! - Write TER files to any `Write` sink
//! - Validate the decoded terrain against the format's invariants
//! - Upscale a terrain by an integer factor with separable linear
//!   interpolation
//!
//! ## Example
//!
//! ```no_run
//! use terragen_ter::{TerrainFile, upscale};
//!
//! let mut terrain = TerrainFile::from_path("Alps.ter").unwrap();
//! println!("{}", terrain);
//!
//! upscale(&mut terrain, 2).unwrap();
//! terrain.save("Alps_2x.ter").unwrap();
//! ```

pub mod error;
pub mod io;
pub mod parser;
pub mod scale;
pub mod types;
pub mod validation;

pub use error::{Result, TerError};
pub use parser::TerParser;
pub use scale::upscale;
pub use types::{TerrainFile, TerrainHeader};
pub use validation::validate_terrain_file;
