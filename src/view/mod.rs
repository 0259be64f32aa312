//! Output renderers for the triage result.
//!
//! Each renderer consumes the final bug sequence and writes to any
//! `io::Write`; none of them can reorder or re-request the sequence.

pub mod csv;
pub mod json;
pub mod terminal;
