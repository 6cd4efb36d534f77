//! # sliding_puzzle_solver
//!
//! An anytime A* search engine for the N×N sliding-tile puzzle (the "fifteen puzzle"
//! family), with an online heuristic-tightening rule that strengthens the admissible
//! Manhattan-distance heuristic as the search discovers more of the state graph.
//!
//! ## What's here
//!
//! - **Model** ([`model`]): board encoding and neighbour generation, the Manhattan
//!   heuristic, the state arena, and the A* loop itself with its father's-rule updater.
//! - **Error handling** ([`error`]): the one fallible boundary in the engine — constructing
//!   a [`State`] from untrusted input.
//! - **Configuration** ([`config`]): the small settings struct bundling a solve call's
//!   expansion budget, update-batch size, and update-rule toggle.
//!
//! ## Quick start
//!
//! ```
//! use sliding_puzzle_solver::{solve, SolveConfig, State};
//!
//! let scrambled = State::new(vec![1, 2, 3, 4, 5, 6, 7, 0, 8], 3).unwrap();
//! let outcome = solve(scrambled, &SolveConfig::default());
//! assert!(outcome.solved);
//! ```
//!
//! ## Scope
//!
//! This crate is the search core only: it has no notion of an HTTP surface, a shuffle
//! generator, or a solvability check, and it is not thread-safe across concurrent calls to
//! [`solve`] (each call owns its own arena and tables, so concurrent calls are independent,
//! but nothing here coordinates them). A driver wanting anytime behaviour — repeatedly
//! calling `solve`, consuming the tail of a partial path as the next initial state — is
//! demonstrated in `demos/driver_demo.rs`, which is not part of this crate's public API.
//!
//! The father's rule is not exposed behind a pluggable heuristic trait: its admissibility
//! proof depends on the N-puzzle's unit-move cost and symmetric neighbour structure, so
//! generalizing it to arbitrary heuristics would silently invite unsound ones.

pub mod config;
pub mod error;
pub mod model;

pub use config::SolveConfig;
pub use error::StateError;
pub use model::{solve, SolveOutcome, State};
