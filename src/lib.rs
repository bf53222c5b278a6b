//! Chart-based Earley recognition for context-free grammars.

pub mod chart;
pub mod earley;
pub mod grammar;
pub mod samples;
pub mod types;

mod util;
