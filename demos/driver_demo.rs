/// Demonstrates the anytime re-solve loop an external driver would run: call `solve` with a
/// small expansion budget, feed the tail of each partial path back in as the next initial
/// state, and stop once solved or no further progress is possible.
///
/// This is the in-process analogue of an HTTP auto-solve driver's event stream — same shape
/// (solve, step through the path, detect "no progress", retry), no networking, no real
/// sleeping.
///
/// Usage:
///   cargo run --example driver_demo -- [size] [budget]
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use sliding_puzzle_solver::{solve, SolveConfig, State};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let size: usize = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(4);
    let budget: u32 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(200);

    let mut rng = StdRng::seed_from_u64(7);
    let mut state = scramble(size, size * size * 4, &mut rng);

    println!("Starting board (N={size}): {:?}", state.to_vec());

    let mut total_steps = 0usize;
    let mut retried = false;

    loop {
        let config = SolveConfig::with_update(budget, 25);
        let outcome = solve(state.clone(), &config);

        log::debug!(
            "driver step: path_len={} solved={}",
            outcome.path.len(),
            outcome.solved
        );

        total_steps += outcome.path.len().saturating_sub(1);

        if outcome.solved {
            println!("Solved in {total_steps} total move(s).");
            return;
        }

        if outcome.path.len() <= 1 {
            if !retried {
                log::debug!("no progress with budget {budget}, retrying with doubled budget");
                retried = true;
                let doubled = SolveConfig::with_update(budget * 2, 25);
                let retry = solve(state.clone(), &doubled);
                if retry.path.len() > 1 {
                    state = retry.path.last().unwrap().clone();
                    total_steps += retry.path.len() - 1;
                    continue;
                }
            }
            println!("No progress possible after {total_steps} move(s); giving up.");
            return;
        }

        retried = false;
        state = outcome.path.last().unwrap().clone();
    }
}

/// Random-walk scramble that never immediately undoes its previous move, guaranteeing a
/// solvable board without a separate solvability check.
fn scramble(size: usize, moves: usize, rng: &mut StdRng) -> State {
    let mut state = State::goal(size);
    let mut previous_blank = None;

    for _ in 0..moves {
        let candidates = state.neighbours();
        let choices: Vec<&State> = candidates
            .iter()
            .filter(|n| Some(n.blank_index()) != previous_blank)
            .collect();

        let chosen = if choices.is_empty() {
            candidates.choose(rng).expect("every state has at least one neighbour")
        } else {
            choices.choose(rng).expect("non-empty after filtering")
        };

        previous_blank = Some(state.blank_index());
        state = (*chosen).clone();
    }

    state
}
