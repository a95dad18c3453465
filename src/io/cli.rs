//! Command-line interface for batch tiling of JSON level files

use crate::algorithm::completion::complete_and_resolve;
use crate::algorithm::resolution::ResolveOptions;
use crate::io::configuration::{
    DEFAULT_BLOCK_SCALE, DEFAULT_SCATTER_RADIUS, DEFAULT_SEED, LEVEL_EXTENSION, OUTPUT_SUFFIX,
    PREVIEW_CELL_SIZE, PREVIEW_SUFFIX,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::export_layer_preview;
use crate::io::level::{LevelFile, load_level, write_json};
use crate::io::progress::ProgressManager;
use crate::io::report::TilingReport;
use crate::spatial::scatter::scatter_placements;
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "cladtile")]
#[command(
    author,
    version,
    about = "Wrap placed blocks in cladding and resolve visible mesh segments"
)]
/// Command-line arguments for the tiling tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Level file or directory of level files to tile
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Also resolve the core shape segments of placed tiles
    #[arg(short, long)]
    pub full_detail: bool,

    /// Write a PNG preview for every layer
    #[arg(short, long)]
    pub preview: bool,

    /// Size of one grid cell in world units, as X,Y,Z [default: 1,1,1]
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_scale)]
    pub scale: Option<[f32; 3]>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Write a random level of this many placements to TARGET before tiling it
    #[arg(long, value_name = "COUNT")]
    pub scatter: Option<usize>,

    /// Random seed for scattered levels
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Block scale for world positions, falling back to the unit block
    pub fn block_scale(&self) -> [f32; 3] {
        self.scale.unwrap_or(DEFAULT_BLOCK_SCALE)
    }

    /// Resolution options selected by the flags
    pub const fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            full_detail: self.full_detail,
        }
    }
}

/// Parse a block scale written as `X,Y,Z`
///
/// # Errors
///
/// Returns an error unless the text holds exactly three positive finite numbers
pub fn parse_scale(text: &str) -> Result<[f32; 3]> {
    let parts = text
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|err| invalid_parameter("scale", &text, &err))?;

    let &[x, y, z] = parts.as_slice() else {
        return Err(invalid_parameter(
            "scale",
            &text,
            &"expected three comma-separated numbers",
        ));
    };

    if [x, y, z].iter().any(|v| !v.is_finite() || *v <= 0.0) {
        return Err(invalid_parameter(
            "scale",
            &text,
            &"every component must be positive",
        ));
    }

    Ok([x, y, z])
}

/// Orchestrates batch tiling of level files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the number of level files tiled.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<usize> {
        if let Some(count) = self.cli.scatter {
            self.write_scattered_level(count)?;
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            info!("Nothing to tile in {}", self.cli.target.display());
            return Ok(0);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(files.len())
    }

    fn write_scattered_level(&self, count: usize) -> Result<()> {
        let target = &self.cli.target;
        if !has_level_extension(target) {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"scattered levels are written to a .json file",
            ));
        }

        let placements = scatter_placements(count, DEFAULT_SCATTER_RADIUS, self.cli.seed);
        if placements.len() < count {
            warn!(
                "Only {} of {count} placements fit in the scatter area",
                placements.len()
            );
        }

        let file = LevelFile {
            placements: placements.iter().map(Into::into).collect(),
        };
        write_json(&file, target)?;
        info!(
            "Scattered {} placements into {} (seed {})",
            file.placements.len(),
            target.display(),
            self.cli.seed
        );
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !has_level_extension(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"level files must be JSON",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target)
                .map_err(|source| file_system_error(target, "read directory", source))?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if has_level_extension(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a level file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if Self::report_path(input_path).exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let level = load_level(input_path)?;
        let generated = complete_and_resolve(level.placements(), self.cli.resolve_options());

        let report = TilingReport::new(
            &generated,
            self.cli.full_detail,
            self.cli.block_scale(),
        );
        let report_path = Self::report_path(input_path);
        write_json(&report, &report_path)?;
        info!(
            "Wrote {} tiles for {} to {}",
            generated.len(),
            input_path.display(),
            report_path.display()
        );

        if self.cli.preview {
            for layer in generated.layers() {
                let preview_path = Self::preview_path(input_path, layer);
                export_layer_preview(&generated, layer, PREVIEW_CELL_SIZE, &preview_path)?;
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(generated.len(), start_time.elapsed());
        }

        Ok(())
    }

    /// Path of the tiling report written for a level file
    pub fn report_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        sibling(
            input_path,
            format!(
                "{}{OUTPUT_SUFFIX}.{LEVEL_EXTENSION}",
                stem.to_string_lossy()
            ),
        )
    }

    /// Path of the preview image written for one layer of a level file
    pub fn preview_path(input_path: &Path, layer: i32) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        sibling(
            input_path,
            format!("{}{PREVIEW_SUFFIX}{layer}.png", stem.to_string_lossy()),
        )
    }
}

fn sibling(input_path: &Path, name: String) -> PathBuf {
    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

fn has_level_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(LEVEL_EXTENSION)
}

// Reports share the level extension, so directory scans must not re-tile them
fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
