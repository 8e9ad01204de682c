// Nearest-target distance fields.
//
// Multi-source BFS: seed the frontier with every cell holding the target
// value, then expand outward one ring at a time. FIFO order guarantees the
// first distance written to a cell is minimal, so no cell is revisited or
// lowered after its first assignment.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{DistError, Result};
use crate::grid::{filled, find_positions, grid_dimensions, neighbors4, Grid, Pos};

/// Distance reported for every cell when the grid holds no target at all.
pub const UNREACHABLE: i32 = -1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub rows: usize,
    pub cols: usize,
    pub matrix: Grid,
    pub target: i32,
}

impl Problem {
    /// Build a problem from a matrix, deriving the declared dimensions.
    pub fn new(matrix: Grid, target: i32) -> Result<Self> {
        let (rows, cols) = grid_dimensions(&matrix);
        let problem = Self { rows, cols, matrix, target };
        problem.validate()?;
        Ok(problem)
    }

    /// Fail fast when the declared dimensions disagree with the actual
    /// matrix shape. Silent truncation or padding would corrupt the
    /// distance semantics downstream.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 || self.matrix.is_empty() {
            return Err(DistError::EmptyGrid);
        }
        let expected = (self.rows, self.cols);
        if self.matrix.len() != self.rows {
            return Err(DistError::ShapeMismatch {
                expected,
                actual: (self.matrix.len(), self.matrix[0].len()),
            });
        }
        for row in &self.matrix {
            if row.len() != self.cols {
                return Err(DistError::ShapeMismatch {
                    expected,
                    actual: (self.matrix.len(), row.len()),
                });
            }
        }
        Ok(())
    }
}

/// Minimum Manhattan-step distance from every cell to the nearest cell whose
/// value equals `problem.target`, as a grid of the same shape.
///
/// Sources enter the frontier in row-major scan order and each cell expands
/// its neighbors in the fixed order up, down, left, right. That order only
/// affects enqueue order, never the distances: all cells of a ring get the
/// same value regardless. When no cell holds the target, every cell of the
/// result is [`UNREACHABLE`].
pub fn solve(problem: &Problem) -> Result<Grid> {
    problem.validate()?;
    let (rows, cols) = (problem.rows, problem.cols);

    let sources = find_positions(&problem.matrix, problem.target);
    if sources.is_empty() {
        return Ok(filled(rows, cols, UNREACHABLE));
    }

    let mut distances = filled(rows, cols, 0);
    // Visited is a separate layer: a source cell is distance 0 AND done,
    // never mistaken for an untouched cell that happens to read 0.
    let mut visited = vec![vec![false; cols]; rows];
    let mut frontier: VecDeque<Pos> = VecDeque::with_capacity(sources.len());

    for &(r, c) in &sources {
        visited[r][c] = true;
        frontier.push_back((r, c));
    }

    while let Some((r, c)) = frontier.pop_front() {
        let next = distances[r][c] + 1;
        for (nr, nc) in neighbors4((r, c), rows, cols) {
            if !visited[nr][nc] {
                visited[nr][nc] = true;
                distances[nr][nc] = next;
                frontier.push_back((nr, nc));
            }
        }
    }

    Ok(distances)
}

/// Cell count per distance ring of a solved grid.
pub fn distance_histogram(grid: &Grid) -> FxHashMap<i32, usize> {
    let mut counts: FxHashMap<i32, usize> = FxHashMap::default();
    for row in grid {
        for &d in row {
            *counts.entry(d).or_default() += 1;
        }
    }
    counts
}
