use distfield::batch::{load_batch, load_batch_json, print_solution};
use distfield::bench::{print_report, run_batch};
use distfield::solver::solve;

fn main() -> anyhow::Result<()> {
    let mut path = String::from("input.txt");
    let mut json = false;
    let mut report = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--report" => report = true,
            other => path = other.to_string(),
        }
    }

    let problems = if json {
        load_batch_json(&path)?
    } else {
        load_batch(&path)?
    };

    if report {
        print_report(&run_batch(&problems)?);
        return Ok(());
    }

    for problem in &problems {
        let solution = solve(problem)?;
        print_solution(&solution);
    }

    Ok(())
}
