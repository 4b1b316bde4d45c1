use crate::algorithm::backtrack::BitmaskBacktracker;
use crate::algorithm::budget::{SearchBudget, SearchOutcome, Verdict};
use crate::algorithm::cache::{CacheStats, PlacementCache};
use crate::algorithm::exact_cover::ExactCoverSolver;
use crate::spatial::region::Region;
use crate::spatial::shape::Shape;
use std::time::{Duration, Instant};

/// Which solvers to run and how much work each may do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Run the bitmask backtracker
    pub run_bitmask: bool,
    /// Run the Dancing Links exact-cover search
    pub run_exact_cover: bool,
    /// Budget applied to each solver separately
    pub budget: SearchBudget,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            run_bitmask: true,
            run_exact_cover: true,
            budget: SearchBudget::UNLIMITED,
        }
    }
}

/// One solver's result for one region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverRun {
    /// Answer and visited nodes
    pub outcome: SearchOutcome,
    /// Wall-clock time including placement lookup and model construction
    pub elapsed: Duration,
}

impl SolverRun {
    fn timed(run: impl FnOnce() -> SearchOutcome) -> Self {
        let start = Instant::now();
        let outcome = run();
        Self {
            outcome,
            elapsed: start.elapsed(),
        }
    }

    /// Answer reached
    pub const fn verdict(&self) -> Verdict {
        self.outcome.verdict
    }
}

/// How the solvers' answers relate for one region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Agreement {
    /// Every conclusive solver found a packing
    Fits,
    /// Every conclusive solver proved there is none
    DoesNotFit,
    /// The solvers reached opposite conclusions
    Mismatch {
        /// Answer of the bitmask backtracker
        bitmask: bool,
        /// Answer of the exact-cover search
        exact_cover: bool,
    },
    /// No solver finished within its budget
    Inconclusive,
}

/// Results of evaluating one region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionReport {
    /// Bitmask backtracker result, if it was run
    pub bitmask: Option<SolverRun>,
    /// Exact-cover search result, if it was run
    pub exact_cover: Option<SolverRun>,
}

impl RegionReport {
    /// Classify the pair of answers
    pub fn agreement(&self) -> Agreement {
        let bitmask = self.bitmask.and_then(|run| run.verdict().conclusion());
        let exact_cover = self.exact_cover.and_then(|run| run.verdict().conclusion());
        match (bitmask, exact_cover) {
            (Some(bitmask), Some(exact_cover)) if bitmask != exact_cover => Agreement::Mismatch {
                bitmask,
                exact_cover,
            },
            (Some(true), _) | (None, Some(true)) => Agreement::Fits,
            (Some(false), _) | (None, Some(false)) => Agreement::DoesNotFit,
            (None, None) => Agreement::Inconclusive,
        }
    }
}

/// Running totals over evaluated regions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Regions evaluated
    pub regions: usize,
    /// Regions the bitmask backtracker packed
    pub bitmask_fits: usize,
    /// Regions the exact-cover search packed
    pub exact_cover_fits: usize,
    /// Regions with conflicting answers
    pub mismatches: usize,
    /// 1-based index of the first conflicting region
    pub first_mismatch: Option<usize>,
    /// Regions no solver could decide
    pub inconclusive: usize,
}

impl Summary {
    /// Add one region's report
    pub fn record(&mut self, report: &RegionReport) {
        self.regions += 1;
        if report.bitmask.is_some_and(|run| run.verdict() == Verdict::Fits) {
            self.bitmask_fits += 1;
        }
        if report
            .exact_cover
            .is_some_and(|run| run.verdict() == Verdict::Fits)
        {
            self.exact_cover_fits += 1;
        }
        match report.agreement() {
            Agreement::Mismatch { .. } => {
                self.mismatches += 1;
                if self.first_mismatch.is_none() {
                    self.first_mismatch = Some(self.regions);
                }
            }
            Agreement::Inconclusive => self.inconclusive += 1,
            Agreement::Fits | Agreement::DoesNotFit => {}
        }
    }
}

/// Runs both solvers over the same regions as a cross-check
///
/// Owns the placement cache, which both solvers share across regions of
/// equal size.
pub struct Orchestrator {
    shapes: Vec<Shape>,
    cache: PlacementCache,
    config: OrchestratorConfig,
    summary: Summary,
}

impl Orchestrator {
    /// Create an orchestrator for a dense list of shapes
    pub fn new(shapes: Vec<Shape>, config: OrchestratorConfig) -> Self {
        Self {
            shapes,
            cache: PlacementCache::new(),
            config,
            summary: Summary::default(),
        }
    }

    /// Evaluate one region with the configured solvers
    pub fn evaluate(&mut self, region: &Region) -> RegionReport {
        let budget = self.config.budget;
        let bitmask = self.config.run_bitmask.then(|| {
            SolverRun::timed(|| {
                BitmaskBacktracker::new(region, &self.shapes).solve(&mut self.cache, budget)
            })
        });
        let exact_cover = self.config.run_exact_cover.then(|| {
            SolverRun::timed(|| {
                ExactCoverSolver::new(region, &self.shapes).solve(&mut self.cache, budget)
            })
        });

        let report = RegionReport {
            bitmask,
            exact_cover,
        };
        self.summary.record(&report);
        report
    }

    /// Shapes in dense order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Totals over every region evaluated so far
    pub const fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Placement cache statistics
    pub const fn cache_stats(&self) -> CacheStats {
        self.cache.stats
    }

    /// Active configuration
    pub const fn config(&self) -> &OrchestratorConfig {
        &self.config
    }
}
