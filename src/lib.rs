//! syai-rank - Multi-criterion aggregation and agreement engine.
//!
//! Scores a decision matrix under seven multi-criteria methods (TOPSIS,
//! VIKOR, SAW, SYAI, COBRA, WASPAS, MOORA), ranks each method's output,
//! and measures cross-method agreement with Pearson and Spearman
//! correlation plus two-tailed significance.
//!
//! The engine is a pure batch computation: given a matrix, criterion
//! specs, a weighting policy, and method parameters it returns
//! deterministic structured results with no I/O and no shared state.

pub mod application;
pub mod domain;
