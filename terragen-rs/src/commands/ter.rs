//! TER terrain command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;

use terragen_ter::{TerrainFile, upscale, validate_terrain_file};

#[derive(Subcommand)]
pub enum TerCommands {
    /// Display a summary of a TER file
    Info {
        /// Path to the TER file
        file: PathBuf,
    },

    /// Validate a TER file
    Validate {
        /// Path to the TER file
        file: PathBuf,
    },

    /// Upscale a TER file by an integer factor
    Scale {
        /// Path to the input TER file
        input: PathBuf,

        /// Path to write the upscaled TER file
        output: PathBuf,

        /// Integer upscale factor applied to both dimensions
        #[arg(short = 'n', long, default_value_t = 2)]
        factor: u32,
    },
}

pub fn execute(command: TerCommands) -> Result<()> {
    match command {
        TerCommands::Info { file } => execute_info(file),
        TerCommands::Validate { file } => execute_validate(file),
        TerCommands::Scale {
            input,
            output,
            factor,
        } => execute_scale(input, output, factor),
    }
}

fn execute_info(path: PathBuf) -> Result<()> {
    use console::style;

    let terrain = TerrainFile::from_path(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    println!("\n{}", style("TER File Summary").bold().underlined());
    println!("File: {}", style(path.display()).cyan());
    println!("Width: {}", style(terrain.width()).green());
    println!("Depth: {}", style(terrain.depth()).green());
    println!("Mode: {}", terrain.header.mode);
    println!("Scale: {}", terrain.header.scale);
    println!("Planet radius: {}", terrain.header.planet_radius);
    println!("Height scale: {}", terrain.header.height_scale);
    println!("Base height: {}", terrain.header.base_height);
    println!("Min height: {}", terrain.header.min_height);
    println!("Max height: {}", terrain.header.max_height);

    Ok(())
}

fn execute_validate(path: PathBuf) -> Result<()> {
    use console::style;

    let terrain = TerrainFile::from_path(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match validate_terrain_file(&terrain) {
        Ok(()) => {
            println!(
                "✓ TER file '{}' is valid ({}x{})",
                style(path.display()).cyan(),
                style(terrain.width()).green(),
                style(terrain.depth()).green()
            );
        }
        Err(err) => {
            anyhow::bail!("Validation failed: {}", err);
        }
    }

    Ok(())
}

fn execute_scale(input: PathBuf, output: PathBuf, factor: u32) -> Result<()> {
    use console::style;

    let mut terrain = TerrainFile::from_path(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let old_width = terrain.width();
    let old_depth = terrain.depth();
    log::info!(
        "upscaling {} by factor {}",
        input.display(),
        factor
    );

    upscale(&mut terrain, factor)
        .with_context(|| format!("Failed to upscale {}", input.display()))?;

    terrain
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "✓ Upscaled {}x{} -> {}x{}, written to {}",
        old_width,
        old_depth,
        style(terrain.width()).green(),
        style(terrain.depth()).green(),
        style(output.display()).cyan()
    );

    Ok(())
}
