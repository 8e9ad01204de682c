// Batch loading and solution printing.
//
// Text batches follow the judge format: the first line is the problem
// count, each problem has a "<rows> <cols>" header followed by `rows`
// lines of contiguous single digits. Text batches always search for the
// value 1. JSON batches deserialize straight into problems and may carry
// a different target per problem.

use anyhow::{anyhow, bail};

use crate::grid::{grid_to_string, Grid};
use crate::solver::Problem;

/// Target value fixed by the text batch format.
pub const TEXT_TARGET: i32 = 1;

pub fn load_batch(path: &str) -> anyhow::Result<Vec<Problem>> {
    let content = std::fs::read_to_string(path)?;
    parse_batch(&content)
}

pub fn parse_batch(input: &str) -> anyhow::Result<Vec<Problem>> {
    let mut lines = input.lines();
    let total: usize = lines
        .next()
        .ok_or_else(|| anyhow!("empty batch"))?
        .trim()
        .parse()
        .map_err(|_| anyhow!("invalid problem count"))?;

    let mut problems = Vec::with_capacity(total);
    for i in 0..total {
        let header = lines
            .next()
            .ok_or_else(|| anyhow!("problem {i}: missing header line"))?;
        let mut parts = header.split_whitespace();
        let rows = parse_dimension(parts.next(), i, "row")?;
        let cols = parse_dimension(parts.next(), i, "column")?;

        let mut matrix: Grid = Vec::with_capacity(rows);
        for j in 0..rows {
            let line = lines
                .next()
                .ok_or_else(|| anyhow!("problem {i}: missing grid row {j}"))?
                .trim();
            let mut row = Vec::with_capacity(cols);
            for ch in line.chars() {
                let digit = ch
                    .to_digit(10)
                    .ok_or_else(|| anyhow!("problem {i}: non-digit cell '{ch}' in row {j}"))?;
                row.push(digit as i32);
            }
            if row.len() != cols {
                bail!(
                    "problem {i}: row {j} has {} cells, expected {cols}",
                    row.len()
                );
            }
            matrix.push(row);
        }

        problems.push(Problem {
            rows,
            cols,
            matrix,
            target: TEXT_TARGET,
        });
    }
    Ok(problems)
}

fn parse_dimension(part: Option<&str>, problem: usize, name: &str) -> anyhow::Result<usize> {
    part.ok_or_else(|| anyhow!("problem {problem}: missing {name} count"))?
        .parse()
        .map_err(|_| anyhow!("problem {problem}: invalid {name} count"))
}

pub fn load_batch_json(path: &str) -> anyhow::Result<Vec<Problem>> {
    let content = std::fs::read_to_string(path)?;
    let problems: Vec<Problem> = serde_json::from_str(&content)?;
    Ok(problems)
}

/// One line per row, cells space-joined.
pub fn print_solution(solution: &Grid) {
    println!("{}", grid_to_string(solution));
}
