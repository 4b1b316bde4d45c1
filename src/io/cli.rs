//! Command-line interface for checking every region of a puzzle file

use crate::algorithm::budget::SearchBudget;
use crate::algorithm::executor::{
    Agreement, Orchestrator, OrchestratorConfig, RegionReport, SolverRun, Summary,
};
use crate::io::configuration::DEFAULT_INPUT;
use crate::io::error::{PackError, Result, invalid_parameter};
use crate::io::parse::Puzzle;
use crate::io::progress::ProgressManager;
use crate::spatial::region::Region;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Solvers to run on each region
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SolverSelection {
    /// Run both solvers and compare their answers
    #[default]
    Both,
    /// Bitmask backtracker only
    Bitmask,
    /// Dancing Links exact-cover search only
    Dlx,
}

#[derive(Parser)]
#[command(name = "polypack")]
#[command(
    author,
    version,
    about = "Check which regions can hold their polyomino shapes"
)]
/// Command-line arguments for the packing checker
pub struct Cli {
    /// Puzzle file with shape drawings followed by region lines
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Solvers to run on each region
    #[arg(short, long, value_enum, default_value_t = SolverSelection::Both)]
    pub solver: SolverSelection,

    /// Give up on a region after visiting this many search nodes per solver
    #[arg(short = 'n', long)]
    pub max_nodes: Option<u64>,

    /// Give up on a region after this many milliseconds per solver
    #[arg(short, long)]
    pub time_limit_ms: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print every shape and its number of orientations before solving
    #[arg(long)]
    pub show_shapes: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Orchestrator settings implied by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is zero
    pub fn orchestrator_config(&self) -> Result<OrchestratorConfig> {
        let mut budget = SearchBudget::UNLIMITED;
        if let Some(max_nodes) = self.max_nodes {
            if max_nodes == 0 {
                return Err(invalid_parameter(
                    "max-nodes",
                    &max_nodes,
                    &"must be at least 1",
                ));
            }
            budget = budget.with_max_nodes(max_nodes);
        }
        if let Some(time_limit_ms) = self.time_limit_ms {
            if time_limit_ms == 0 {
                return Err(invalid_parameter(
                    "time-limit-ms",
                    &time_limit_ms,
                    &"must be at least 1",
                ));
            }
            budget = budget.with_time_limit(Duration::from_millis(time_limit_ms));
        }

        Ok(OrchestratorConfig {
            run_bitmask: self.solver != SolverSelection::Dlx,
            run_exact_cover: self.solver != SolverSelection::Bitmask,
            budget,
        })
    }
}

/// Loads a puzzle, evaluates every region and prints the results
pub struct PuzzleRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Evaluate every region of the input file
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, the input cannot be
    /// read or parsed, or the solvers disagree on any region
    pub fn process(&self) -> Result<Summary> {
        let config = self.cli.orchestrator_config()?;
        let puzzle = Puzzle::from_path(&self.cli.input)?;
        let (shapes, regions) = puzzle.into_parts();

        self.emit(&format!(
            "Loaded {} shapes, {} regions from {}",
            shapes.len(),
            regions.len(),
            self.cli.input.display()
        ));
        if self.cli.show_shapes {
            for shape in &shapes {
                self.emit(&format!(
                    "{shape}({} cells, {} orientations)",
                    shape.cell_count(),
                    shape.orientations().len()
                ));
            }
        }

        let mut orchestrator = Orchestrator::new(shapes, config);
        self.progress_manager.initialize(regions.len());
        for region in &regions {
            self.progress_manager.start_region(region);
            self.emit(&format!("\n{}", region_banner(region)));
            let report = orchestrator.evaluate(region);
            self.emit_report(&report);
            self.progress_manager.complete_region();
        }
        self.progress_manager.finish();

        let summary = *orchestrator.summary();
        self.emit_summary(&summary, &config);

        match summary.first_mismatch {
            Some(first) => Err(PackError::SolverMismatch {
                regions: summary.mismatches,
                first,
            }),
            None => Ok(summary),
        }
    }

    fn emit_report(&self, report: &RegionReport) {
        if let Some(run) = &report.bitmask {
            self.emit(&solver_line("Bitmask solver:", run));
        }
        if let Some(run) = &report.exact_cover {
            self.emit(&solver_line("DLX solver:    ", run));
        }
        if let Agreement::Mismatch {
            bitmask,
            exact_cover,
        } = report.agreement()
        {
            self.emit(&format!(
                "  MISMATCH: bitmask says {bitmask}, DLX says {exact_cover}"
            ));
        }
    }

    fn emit_summary(&self, summary: &Summary, config: &OrchestratorConfig) {
        self.emit("\nSummary:");
        if config.run_bitmask {
            self.emit(&format!(
                "  Bitmask solver found {} packable regions",
                summary.bitmask_fits
            ));
        }
        if config.run_exact_cover {
            self.emit(&format!(
                "  DLX solver found     {} packable regions",
                summary.exact_cover_fits
            ));
        }
        if summary.inconclusive > 0 {
            self.emit(&format!(
                "  {} regions left undecided by the search budget",
                summary.inconclusive
            ));
        }
        if summary.mismatches > 0 {
            self.emit(&format!(
                "  {} regions with conflicting answers",
                summary.mismatches
            ));
        }
    }

    // Results are the program's output, written around the progress bar
    #[allow(clippy::print_stdout)]
    fn emit(&self, line: &str) {
        self.progress_manager.suspend(|| println!("{line}"));
    }
}

/// Heading printed before a region is solved
pub fn region_banner(region: &Region) -> String {
    format!(
        "Region {}x{} counts={:?}",
        region.width(),
        region.height(),
        region.counts()
    )
}

fn solver_line(label: &str, run: &SolverRun) -> String {
    format!(
        "  {label} {} (time {:.4}s, {} nodes)",
        run.verdict(),
        run.elapsed.as_secs_f64(),
        run.outcome.nodes
    )
}
