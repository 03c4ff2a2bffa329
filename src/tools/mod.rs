//! The tools module provides several helper functions for kzip.
//!
//! The tools are:
//! - cli: Command line interface and output file naming.
//! - freq_count: Frequency count of the input bytes.
//!
pub mod cli;
pub mod freq_count;
