//! I/O layer: reading source text from standard input and writing transform
//! results (code plus optional source maps) to files or standard output.
pub mod stdin;
pub use stdin::read_source;

pub mod writers;
pub use writers::write_result;
