//! Dancing Links mesh for exact cover with secondary columns
//!
//! Nodes live in one arena and refer to each other by index; a node that is
//! alone in a list links to itself. Node 0 is the root, nodes `1..=n` are
//! the column headers of columns `0..n`, and row nodes follow.
//!
//! Only primary column headers are linked into the root's list. Secondary
//! headers link to themselves horizontally, so the search never picks them
//! and never needs them covered, while covering a row still detaches every
//! other row sharing one of its secondary columns.

use crate::algorithm::budget::{SearchMeter, Verdict};
use crate::algorithm::model::ExactCoverModel;

const ROOT: usize = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    /// Header node of the column this node belongs to
    column: usize,
}

/// Reversible sparse 0/1 matrix
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DancingLinks {
    nodes: Vec<Node>,
    /// Live rows per column, indexed by header node
    sizes: Vec<usize>,
    column_count: usize,
}

// Every index used below is a link written by the constructor, so it always
// addresses an arena slot.
#[allow(clippy::indexing_slicing)]
impl DancingLinks {
    /// Build the mesh for `column_count` columns
    ///
    /// Columns listed in `primary` must be covered exactly once; all others
    /// at most once. The columns of a row must be distinct; column numbers
    /// outside `0..column_count` are ignored.
    pub fn new(column_count: usize, primary: &[usize], rows: &[Vec<usize>]) -> Self {
        let row_nodes: usize = rows.iter().map(Vec::len).sum();
        let mut nodes = Vec::with_capacity(1 + column_count + row_nodes);
        for header in 0..=column_count {
            nodes.push(Node {
                left: header,
                right: header,
                up: header,
                down: header,
                column: header,
            });
        }

        let mut mesh = Self {
            nodes,
            sizes: vec![0; column_count + 1],
            column_count,
        };

        let mut primary: Vec<usize> = primary
            .iter()
            .copied()
            .filter(|&column| column < column_count)
            .collect();
        primary.sort_unstable();
        primary.dedup();
        for column in primary {
            mesh.link_header(column + 1);
        }

        for row in rows {
            mesh.append_row(row);
        }
        mesh
    }

    /// Build the mesh for an exact-cover model
    pub fn from_model(model: &ExactCoverModel) -> Self {
        Self::new(model.column_count(), model.primary_columns(), model.rows())
    }

    /// Number of columns
    pub const fn column_count(&self) -> usize {
        self.column_count
    }

    /// Rows currently live in `column`
    pub fn column_size(&self, column: usize) -> usize {
        self.sizes.get(column + 1).copied().unwrap_or(0)
    }

    /// Test if some primary column is still uncovered
    pub fn has_live_primary(&self) -> bool {
        self.nodes[ROOT].right != ROOT
    }

    fn link_header(&mut self, header: usize) {
        let last = self.nodes[ROOT].left;
        self.nodes[header].left = last;
        self.nodes[header].right = ROOT;
        self.nodes[last].right = header;
        self.nodes[ROOT].left = header;
    }

    fn append_row(&mut self, columns: &[usize]) {
        let mut first: Option<usize> = None;
        for &column in columns {
            if column >= self.column_count {
                continue;
            }
            let header = column + 1;
            let node = self.nodes.len();
            let up = self.nodes[header].up;
            self.nodes.push(Node {
                left: node,
                right: node,
                up,
                down: header,
                column: header,
            });
            self.nodes[up].down = node;
            self.nodes[header].up = node;
            self.sizes[header] += 1;

            if let Some(first) = first {
                let last = self.nodes[first].left;
                self.nodes[node].left = last;
                self.nodes[node].right = first;
                self.nodes[last].right = node;
                self.nodes[first].left = node;
            } else {
                first = Some(node);
            }
        }
    }

    /// Remove a column header and every row that uses the column
    ///
    /// Nothing is deallocated; the removed nodes keep their own links so
    /// [`Self::uncover`] can splice them back.
    pub fn cover(&mut self, header: usize) {
        let Node { left, right, .. } = self.nodes[header];
        self.nodes[left].right = right;
        self.nodes[right].left = left;

        let mut row = self.nodes[header].down;
        while row != header {
            let mut node = self.nodes[row].right;
            while node != row {
                let Node { up, down, column, .. } = self.nodes[node];
                self.nodes[up].down = down;
                self.nodes[down].up = up;
                self.sizes[column] -= 1;
                node = self.nodes[node].right;
            }
            row = self.nodes[row].down;
        }
    }

    /// Exact inverse of [`Self::cover`], restoring links in reverse order
    pub fn uncover(&mut self, header: usize) {
        let mut row = self.nodes[header].up;
        while row != header {
            let mut node = self.nodes[row].left;
            while node != row {
                let Node { up, down, column, .. } = self.nodes[node];
                self.sizes[column] += 1;
                self.nodes[up].down = node;
                self.nodes[down].up = node;
                node = self.nodes[node].left;
            }
            row = self.nodes[row].up;
        }

        let Node { left, right, .. } = self.nodes[header];
        self.nodes[left].right = header;
        self.nodes[right].left = header;
    }

    fn select_row(&mut self, row: usize) {
        let mut node = self.nodes[row].right;
        while node != row {
            self.cover(self.nodes[node].column);
            node = self.nodes[node].right;
        }
    }

    fn deselect_row(&mut self, row: usize) {
        let mut node = self.nodes[row].left;
        while node != row {
            self.uncover(self.nodes[node].column);
            node = self.nodes[node].left;
        }
    }

    /// Live primary column with the fewest live rows, first one on ties
    fn choose_column(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        let mut header = self.nodes[ROOT].right;
        while header != ROOT {
            if best.is_none_or(|current| self.sizes[header] < self.sizes[current]) {
                best = Some(header);
                if self.sizes[header] == 0 {
                    break;
                }
            }
            header = self.nodes[header].right;
        }
        best
    }

    /// Look for a row selection covering every primary column exactly once
    ///
    /// Stops at the first solution. Chosen rows are kept on an explicit
    /// stack, one entry per covered primary column. Whatever the verdict,
    /// the mesh is returned to the state it had before the call.
    pub fn search(&mut self, meter: &mut SearchMeter) -> Verdict {
        let mut chosen: Vec<usize> = Vec::new();

        let verdict = loop {
            if !meter.tick() {
                break Verdict::Exhausted;
            }
            let Some(header) = self.choose_column() else {
                break Verdict::Fits;
            };
            if self.sizes[header] > 0 {
                self.cover(header);
                let row = self.nodes[header].down;
                self.select_row(row);
                chosen.push(row);
                continue;
            }

            // Dead end: move the most recent choice that has a row left to it
            let mut advanced = false;
            while let Some(row) = chosen.pop() {
                self.deselect_row(row);
                let column = self.nodes[row].column;
                let next = self.nodes[row].down;
                if next != column {
                    self.select_row(next);
                    chosen.push(next);
                    advanced = true;
                    break;
                }
                self.uncover(column);
            }
            if !advanced {
                break Verdict::DoesNotFit;
            }
        };

        while let Some(row) = chosen.pop() {
            self.deselect_row(row);
            self.uncover(self.nodes[row].column);
        }
        verdict
    }
}
