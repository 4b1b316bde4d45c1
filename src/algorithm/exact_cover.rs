//! Exact-cover formulation of the packing problem, solved with Dancing Links

use crate::algorithm::budget::{SearchBudget, SearchMeter, SearchOutcome, Verdict};
use crate::algorithm::cache::PlacementCache;
use crate::algorithm::dancing::DancingLinks;
use crate::algorithm::demand::{demands, exceeds_area};
use crate::algorithm::model::ExactCoverModel;
use crate::spatial::region::Region;
use crate::spatial::shape::Shape;

/// Decide feasibility with the exact-cover solver and no search budget
pub fn fits_exact_cover(region: &Region, shapes: &[Shape], cache: &mut PlacementCache) -> bool {
    ExactCoverSolver::new(region, shapes)
        .solve(cache, SearchBudget::UNLIMITED)
        .verdict
        == Verdict::Fits
}

/// Exact-cover solver for one region
pub struct ExactCoverSolver<'a> {
    region: &'a Region,
    shapes: &'a [Shape],
}

impl<'a> ExactCoverSolver<'a> {
    /// Prepare a search of `shapes` into `region`
    pub const fn new(region: &'a Region, shapes: &'a [Shape]) -> Self {
        Self { region, shapes }
    }

    /// Build the model and mesh, then search within `budget`
    ///
    /// The mesh is built fresh for this call and dropped afterwards.
    pub fn solve(&self, cache: &mut PlacementCache, budget: SearchBudget) -> SearchOutcome {
        let Some(demands) = demands(self.region, self.shapes) else {
            return SearchOutcome::immediate(Verdict::DoesNotFit);
        };
        if exceeds_area(self.region, &demands) {
            return SearchOutcome::immediate(Verdict::DoesNotFit);
        }
        if demands.is_empty() {
            return SearchOutcome::immediate(Verdict::Fits);
        }

        let model = ExactCoverModel::build(self.region, self.shapes, cache);
        if model.has_uncoverable_slot() {
            return SearchOutcome::immediate(Verdict::DoesNotFit);
        }

        let mut mesh = DancingLinks::from_model(&model);
        let mut meter = SearchMeter::new(budget);
        let verdict = mesh.search(&mut meter);
        meter.outcome(verdict)
    }
}
