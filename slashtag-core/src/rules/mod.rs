//! Rule compilation for slashtag.
//!
//! `pattern` turns a single pattern string into a `MatchSpec`; `compiler`
//! turns a whole rule table into the priority-ordered list the engine scans.

pub mod compiler;
pub mod pattern;
