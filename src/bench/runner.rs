// Batch benchmark runner.
// Solves every problem in a batch, timing each solve and summarizing
// ring occupancy per problem. Used for scale regression checks on large
// grids where the per-solve wall time matters.

use std::time::Instant;

use crate::solver::{distance_histogram, solve, Problem, UNREACHABLE};

#[derive(Debug)]
pub struct BatchReport {
    pub total: usize,
    pub elapsed_ms: u64,
    pub per_problem: Vec<ProblemReport>,
}

#[derive(Debug, Clone)]
pub struct ProblemReport {
    pub index: usize,
    pub rows: usize,
    pub cols: usize,
    pub sources: usize,
    pub max_distance: i32,
    pub rings: usize,
    pub elapsed_ms: u64,
}

pub fn run_batch(problems: &[Problem]) -> anyhow::Result<BatchReport> {
    let total_start = Instant::now();
    let mut per_problem = Vec::with_capacity(problems.len());

    for (index, problem) in problems.iter().enumerate() {
        let start = Instant::now();
        let solution = solve(problem)?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let histogram = distance_histogram(&solution);
        let max_distance = histogram
            .keys()
            .copied()
            .max()
            .unwrap_or(UNREACHABLE);
        per_problem.push(ProblemReport {
            index,
            rows: problem.rows,
            cols: problem.cols,
            sources: histogram.get(&0).copied().unwrap_or(0),
            max_distance,
            rings: histogram.len(),
            elapsed_ms,
        });
    }

    Ok(BatchReport {
        total: problems.len(),
        elapsed_ms: total_start.elapsed().as_millis() as u64,
        per_problem,
    })
}

pub fn print_report(report: &BatchReport) {
    println!("solved {} problems in {} ms", report.total, report.elapsed_ms);
    for p in &report.per_problem {
        println!(
            "  #{}: {}x{}, {} sources, max distance {}, {} rings, {} ms",
            p.index, p.rows, p.cols, p.sources, p.max_distance, p.rings, p.elapsed_ms
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_per_problem_stats() {
        let problems = vec![
            Problem::new(
                vec![
                    vec![0, 0, 0],
                    vec![0, 1, 0],
                    vec![0, 0, 0],
                ],
                1,
            )
            .unwrap(),
            Problem::new(vec![vec![0, 0, 0, 0, 0, 1]], 1).unwrap(),
        ];

        let report = run_batch(&problems).unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.per_problem.len(), 2);

        let first = &report.per_problem[0];
        assert_eq!((first.rows, first.cols), (3, 3));
        assert_eq!(first.sources, 1);
        assert_eq!(first.max_distance, 2);
        assert_eq!(first.rings, 3);

        let second = &report.per_problem[1];
        assert_eq!(second.max_distance, 5);
        assert_eq!(second.rings, 6);
    }

    #[test]
    fn no_target_batch_reports_unreachable() {
        let problems = vec![Problem::new(vec![vec![0, 0], vec![0, 0]], 1).unwrap()];
        let report = run_batch(&problems).unwrap();
        assert_eq!(report.per_problem[0].sources, 0);
        assert_eq!(report.per_problem[0].max_distance, UNREACHABLE);
        assert_eq!(report.per_problem[0].rings, 1);
    }
}
