//! Pursuit-evasion game analysis on undirected graphs
//!
//! This crate provides:
//! - An undirected base graph with a mandatory self-loop at every vertex
//!   (the "stay in place" move)
//! - The derived two-player configuration game between an evader and a
//!   pursuer moving alternately on the graph
//! - A retrograde solver that labels every configuration winning or losing
//!   and derives the set of starting vertices safe for the evader
//! - A reproducible synthetic-graph generator for benchmarks and fixtures
//! - An edge-list loader/writer and a CLI wrapping all of the above

pub mod cli;
pub mod error;
pub mod game;
pub mod generator;
pub mod graph;
pub mod io;
pub mod solver;

pub use error::{Error, Result};
pub use game::{Configuration, ConfigurationGraph, Turn};
pub use generator::{EdgeList, GeneratorOptions, generate};
pub use graph::Graph;
pub use solver::{Analysis, Outcome, OutcomeCounts, solve};
