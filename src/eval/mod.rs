//! Evaluation module for Gomoku positions
//!
//! Pattern recognition on lines of stones and the two heuristics built on it:
//! - Line scans (run length and open ends)
//! - Pattern tallies (open two/three/four, half-open four, five)
//! - Single-move ranking score with a center bonus
//! - Full static evaluation for the search frontier

pub mod heuristic;
pub mod patterns;

pub use heuristic::{quick_score, static_score};
pub use patterns::{scan_line, tally_patterns, LineScan, PatternScore, PatternTally};
