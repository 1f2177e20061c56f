//! CLI infrastructure for the pursuit research toolkit
//!
//! This module provides the command-line interface for solving, generating,
//! and analyzing pursuit-evasion graphs.

pub mod commands;
pub mod output;
