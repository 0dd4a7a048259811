//! Basic example of using the Lights Out engine

use lightsout_core::{Puzzle, PuzzleError, Solver};

fn main() -> Result<(), PuzzleError> {
    // Start a seeded 5x5 game
    let mut puzzle = Puzzle::with_seed(5, 2024)?;
    puzzle.randomize();

    println!("Randomized puzzle:");
    println!("{}\n", puzzle.grid());
    println!("Lit cells: {}", puzzle.grid().lit_count());

    // Not every 5x5 board can be cleared
    let solver = Solver::new();
    match solver.solve(puzzle.grid()) {
        Some(solution) => {
            println!("Solvable in {} presses\n", solution.len());
            for pos in solution.presses() {
                let state = puzzle.toggle_at(*pos)?;
                println!("Press {} -> {}", pos, state);
            }
            println!("\n{}", puzzle.grid());
        }
        None => println!("This board has no solution"),
    }

    // Out-of-range presses are rejected
    if let Err(e) = puzzle.toggle(-1, 0) {
        println!("\nRejected: {}", e);
    }

    // Quiet patterns leave the board unchanged
    println!("\n--- Quiet patterns for 5x5 ---\n");
    for pattern in solver.quiet_patterns(5)? {
        println!("{}\n", pattern);
    }

    Ok(())
}
