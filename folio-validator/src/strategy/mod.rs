//! Source discovery strategies.
//!
//! Only the filesystem strategy exists. Both validators take their input as
//! plain text read through `fs`, never as a parsed syntax tree.

pub mod fs;
