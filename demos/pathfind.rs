//! Command-line planner: load a text map, run a search, print the result.
//!
//! ```text
//! pathfind MAP_FILE ALGORITHM [HEURISTIC]
//! ```
//!
//! Algorithms: `bfs`, `dfs`, `ucs`, `greedy`, `astar`. The informed
//! strategies also take a heuristic: `euclidean` or `manhattan`.
//! Try `pathfind maps/weighted.txt astar euclidean`.

use std::process::ExitCode;

use wayfind_search::{Algorithm, Heuristic, Level, plan};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("pathfind: {msg}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let (Some(file), Some(algo)) = (args.next(), args.next()) else {
        return Err("usage: pathfind MAP_FILE ALGORITHM [HEURISTIC]".into());
    };

    let map = std::fs::read_to_string(&file).map_err(|e| format!("{file}: {e}"))?;
    let algorithm: Algorithm = algo.parse().map_err(|e: wayfind_search::Error| e.to_string())?;
    let heuristic = match args.next() {
        Some(h) => Some(h.parse::<Heuristic>().map_err(|e| e.to_string())?),
        None => None,
    };

    let found = plan(&map, algorithm, heuristic).map_err(|e| e.to_string())?;
    let level = Level::parse(&map).map_err(|e| e.to_string())?;

    print!("{}", level.render(&found.path));
    if found.path.is_empty() {
        println!("no path ({} cells visited)", found.visited.len());
    } else {
        println!(
            "{algorithm}: {} cells, cost {:.3}, {} visited",
            found.path.len(),
            found.cost,
            found.visited.len()
        );
    }
    Ok(())
}
