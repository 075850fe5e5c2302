//! Command-line interface for batch segmentation of icon sheet PNGs

use crate::io::configuration::{
    DEFAULT_BINARIZATION_THRESHOLD, DEFAULT_MIN_RUN_LENGTH, SHEET_EXTENSION,
};
use crate::io::error::{ExtractError, Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::writer::write_icons;
use crate::segment::binarize::foreground_mask;
use crate::segment::grid::assemble_grid;
use crate::segment::profile::{col_profile, row_profile};
use crate::segment::runs::find_runs;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "iconcarve")]
#[command(
    author,
    version,
    about = "Split icon sheets into individual icon images"
)]
/// Command-line arguments for the icon sheet segmentation tool
pub struct Cli {
    /// Input sheet PNG or directory of sheet PNGs
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory that receives the extracted icons
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Minimum contiguous profile length counted as a grid row or column
    #[arg(long, default_value_t = DEFAULT_MIN_RUN_LENGTH)]
    pub min_run_length: usize,

    /// Binarization threshold applied to inverted luminance
    #[arg(short, long, default_value_t = DEFAULT_BINARIZATION_THRESHOLD)]
    pub threshold: u8,

    /// Detect and report grids without writing any icons
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch segmentation of sheet PNGs with progress tracking
pub struct SheetProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SheetProcessor {
    /// Create a new sheet processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process sheets according to CLI arguments
    ///
    /// Sheets that fail to decode are reported and skipped; a sheet with no
    /// detectable grid writes nothing and is not a failure. An unwritable
    /// output directory aborts the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter or target validation fails, or if icons
    /// cannot be written to the output directory.
    // Allow print for user feedback on skipped sheets and the batch summary
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        self.validate()?;
        let sheets = self.collect_sheets()?;

        if sheets.is_empty() {
            if !self.cli.quiet {
                eprintln!("No sheets found in {}", self.cli.target.display());
            }
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(sheets.len());
        }

        let mut extracted = 0;
        let mut failed = 0;
        for sheet in &sheets {
            if let Some(ref pm) = self.progress_manager {
                pm.start_sheet(sheet);
            }

            match self.process_sheet(sheet) {
                Ok(count) => extracted += count,
                Err(err) if err.is_per_sheet() => {
                    failed += 1;
                    eprintln!("Skipping: {err}");
                }
                Err(err) => {
                    if let Some(ref pm) = self.progress_manager {
                        pm.finish();
                    }
                    return Err(err);
                }
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_sheet();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        if !self.cli.quiet {
            eprintln!(
                "Extracted {extracted} icons from {} sheets ({failed} failed)",
                sheets.len()
            );
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cli.min_run_length == 0 {
            return Err(invalid_parameter(
                "min-run-length",
                &self.cli.min_run_length,
                &"must be at least 1",
            ));
        }
        Ok(())
    }

    fn collect_sheets(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some(SHEET_EXTENSION) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let entries =
                std::fs::read_dir(&self.cli.target).map_err(|e| ExtractError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "list source directory",
                    source: e,
                })?;

            let mut sheets = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| ExtractError::FileSystem {
                        path: self.cli.target.clone(),
                        operation: "list source directory",
                        source: e,
                    })?
                    .path();
                if path.extension().and_then(|s| s.to_str()) == Some(SHEET_EXTENSION) {
                    sheets.push(path);
                }
            }
            sheets.sort();
            Ok(sheets)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    // Allow print for user feedback on no-grid sheets and dry runs
    #[allow(clippy::print_stderr)]
    fn process_sheet(&self, path: &Path) -> Result<usize> {
        let sheet = image::open(path).map_err(|e| ExtractError::SheetLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mask = foreground_mask(&sheet, self.cli.threshold);
        let row_runs = find_runs(row_profile(&mask).iter().copied(), self.cli.min_run_length);
        let col_runs = find_runs(col_profile(&mask).iter().copied(), self.cli.min_run_length);

        if row_runs.is_empty() || col_runs.is_empty() {
            if !self.cli.quiet {
                eprintln!("No grid detected in {}", path.display());
            }
            return Ok(0);
        }

        let cells = assemble_grid(&row_runs, &col_runs);

        if self.cli.dry_run {
            if !self.cli.quiet {
                eprintln!(
                    "{}: {} rows x {} columns, {} icons (dry run, nothing written)",
                    path.display(),
                    row_runs.len(),
                    col_runs.len(),
                    cells.len()
                );
            }
            return Ok(0);
        }

        let written = write_icons(&sheet, &cells, &self.cli.output)?;
        Ok(written.len())
    }
}
