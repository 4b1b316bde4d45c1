use crate::io::configuration::CLOCK_CHECK_INTERVAL;
use std::fmt;
use std::time::{Duration, Instant};

/// Limits on how much work a single search may do
///
/// The default is unlimited. Pathological inputs (large regions filled with
/// small, highly symmetric shapes) can otherwise keep a search busy for a
/// very long time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchBudget {
    /// Maximum number of search nodes to visit
    pub max_nodes: Option<u64>,
    /// Maximum wall-clock time to spend
    pub time_limit: Option<Duration>,
}

impl SearchBudget {
    /// No limits
    pub const UNLIMITED: Self = Self {
        max_nodes: None,
        time_limit: None,
    };

    /// Limit the number of visited nodes
    #[must_use]
    pub const fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Limit the wall-clock time
    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }
}

/// Answer of one solver for one region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// All required copies can be placed without overlap
    Fits,
    /// No non-overlapping arrangement exists
    DoesNotFit,
    /// The search budget ran out before an answer was found
    Exhausted,
}

impl Verdict {
    /// Convert a definite answer
    pub const fn from_fits(fits: bool) -> Self {
        if fits { Self::Fits } else { Self::DoesNotFit }
    }

    /// The definite answer, if the search finished
    pub const fn conclusion(self) -> Option<bool> {
        match self {
            Self::Fits => Some(true),
            Self::DoesNotFit => Some(false),
            Self::Exhausted => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fits => write!(f, "fits"),
            Self::DoesNotFit => write!(f, "does NOT fit"),
            Self::Exhausted => write!(f, "gave up (budget exhausted)"),
        }
    }
}

/// Verdict of a search together with the work it took
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Answer reached
    pub verdict: Verdict,
    /// Search nodes visited
    pub nodes: u64,
}

impl SearchOutcome {
    /// Outcome decided before any search node was visited
    pub const fn immediate(verdict: Verdict) -> Self {
        Self { verdict, nodes: 0 }
    }
}

/// Counts visited nodes against a budget
pub struct SearchMeter {
    budget: SearchBudget,
    nodes: u64,
    started: Instant,
}

impl SearchMeter {
    /// Start metering now
    pub fn new(budget: SearchBudget) -> Self {
        Self {
            budget,
            nodes: 0,
            started: Instant::now(),
        }
    }

    /// Record one visited node, returning `false` once the budget is spent
    pub fn tick(&mut self) -> bool {
        self.nodes += 1;
        if self.budget.max_nodes.is_some_and(|max| self.nodes > max) {
            return false;
        }
        match self.budget.time_limit {
            Some(limit) if self.nodes % CLOCK_CHECK_INTERVAL == 0 => {
                self.started.elapsed() <= limit
            }
            _ => true,
        }
    }

    /// Nodes visited so far
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Finish metering with the given verdict
    pub const fn outcome(&self, verdict: Verdict) -> SearchOutcome {
        SearchOutcome {
            verdict,
            nodes: self.nodes,
        }
    }
}
