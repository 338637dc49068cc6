//! Importance ranking for directed graphs built from flat edge lists.
//!
//! Records flow one way: [`input`] produces [`graph::EdgeRecord`]s, the
//! [`graph`] builder resolves their direction into a [`graph::Graph`], and the
//! [`rank`] engine iterates to a converged [`rank::RankTable`].

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod input;
pub mod logging;
pub mod rank;
pub mod reporting;
