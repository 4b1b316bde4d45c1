//! Ordered, pruned combinatorial search over per-shape placement masks

use crate::algorithm::bitset::CellMask;
use crate::algorithm::budget::{SearchBudget, SearchMeter, SearchOutcome, Verdict};
use crate::algorithm::cache::PlacementCache;
use crate::algorithm::demand::{demands, exceeds_area};
use crate::spatial::region::Region;
use crate::spatial::shape::Shape;
use std::rc::Rc;

/// Decide feasibility with the bitmask backtracker and no search budget
pub fn fits_bitmask(region: &Region, shapes: &[Shape], cache: &mut PlacementCache) -> bool {
    BitmaskBacktracker::new(region, shapes)
        .solve(cache, SearchBudget::UNLIMITED)
        .verdict
        == Verdict::Fits
}

/// One shape's share of the search: its placements and how many to pick
struct Task {
    placements: Rc<[CellMask]>,
    count: usize,
    cells: usize,
}

/// A placement committed to the occupancy mask
struct Pick {
    task: usize,
    index: usize,
    /// Copies of the task's shape still unpicked before this pick was made
    remaining: usize,
}

/// Search cursor: the next slot to fill
#[derive(Clone, Copy)]
struct Cursor {
    task: usize,
    remaining: usize,
    start: usize,
}

/// Bitmask backtracking solver for one region
///
/// Shapes are visited hardest first (fewest placements). Within a shape,
/// copies are chosen in increasing placement index so every set of copies is
/// tried once rather than once per permutation. The search keeps an explicit
/// stack of picks, so its depth is bounded by the total number of copies
/// without growing the call stack.
pub struct BitmaskBacktracker<'a> {
    region: &'a Region,
    shapes: &'a [Shape],
}

impl<'a> BitmaskBacktracker<'a> {
    /// Prepare a search of `shapes` into `region`
    pub const fn new(region: &'a Region, shapes: &'a [Shape]) -> Self {
        Self { region, shapes }
    }

    /// Run the search within `budget`
    pub fn solve(&self, cache: &mut PlacementCache, budget: SearchBudget) -> SearchOutcome {
        let Some(demands) = demands(self.region, self.shapes) else {
            return SearchOutcome::immediate(Verdict::DoesNotFit);
        };
        if exceeds_area(self.region, &demands) {
            return SearchOutcome::immediate(Verdict::DoesNotFit);
        }

        let mut tasks = Vec::with_capacity(demands.len());
        for demand in &demands {
            let placements =
                cache.placements_for(demand.shape, self.region.width(), self.region.height());
            if placements.is_empty() {
                return SearchOutcome::immediate(Verdict::DoesNotFit);
            }
            tasks.push(Task {
                placements,
                count: demand.count,
                cells: demand.shape.cell_count(),
            });
        }
        tasks.sort_by_key(|task| task.placements.len());

        let mut meter = SearchMeter::new(budget);
        let verdict = self.search(&tasks, &mut meter);
        meter.outcome(verdict)
    }

    fn search(&self, tasks: &[Task], meter: &mut SearchMeter) -> Verdict {
        // suffix_cells[i] = cells needed by tasks[i..]
        let mut suffix_cells = vec![0; tasks.len() + 1];
        for (i, task) in tasks.iter().enumerate().rev() {
            let later = suffix_cells.get(i + 1).copied().unwrap_or(0);
            if let Some(slot) = suffix_cells.get_mut(i) {
                *slot = later + task.cells * task.count;
            }
        }

        let total_cells = self.region.cell_count();
        let mut occupancy = CellMask::new(total_cells);
        let mut used_cells = 0;
        let mut picks: Vec<Pick> = Vec::new();
        let mut cursor = Cursor {
            task: 0,
            remaining: tasks.first().map_or(0, |task| task.count),
            start: 0,
        };

        loop {
            let Some(task) = tasks.get(cursor.task) else {
                return Verdict::Fits;
            };
            if !meter.tick() {
                return Verdict::Exhausted;
            }

            let still_needed = task.cells * cursor.remaining
                + suffix_cells.get(cursor.task + 1).copied().unwrap_or(0);
            let candidate = if total_cells - used_cells < still_needed {
                None
            } else {
                next_disjoint(task, cursor, &occupancy)
            };

            if let Some(index) = candidate {
                if let Some(mask) = task.placements.get(index) {
                    occupancy.union_with(mask);
                }
                used_cells += task.cells;
                picks.push(Pick {
                    task: cursor.task,
                    index,
                    remaining: cursor.remaining,
                });
                cursor = if cursor.remaining > 1 {
                    Cursor {
                        task: cursor.task,
                        remaining: cursor.remaining - 1,
                        start: index + 1,
                    }
                } else {
                    Cursor {
                        task: cursor.task + 1,
                        remaining: tasks.get(cursor.task + 1).map_or(0, |next| next.count),
                        start: 0,
                    }
                };
                continue;
            }

            // Undo the latest pick and resume after it
            let Some(pick) = picks.pop() else {
                return Verdict::DoesNotFit;
            };
            if let Some(undone) = tasks.get(pick.task) {
                if let Some(mask) = undone.placements.get(pick.index) {
                    occupancy.remove_all(mask);
                }
                used_cells -= undone.cells;
            }
            cursor = Cursor {
                task: pick.task,
                remaining: pick.remaining,
                start: pick.index + 1,
            };
        }
    }
}

/// First placement at or after `cursor.start` that avoids every occupied cell
///
/// Stops early once too few placements are left to supply the copies still
/// required of this shape.
fn next_disjoint(task: &Task, cursor: Cursor, occupancy: &CellMask) -> Option<usize> {
    let last = task.placements.len().checked_sub(cursor.remaining)?;
    (cursor.start..=last).find(|&index| {
        task.placements
            .get(index)
            .is_some_and(|mask| mask.is_disjoint(occupancy))
    })
}
