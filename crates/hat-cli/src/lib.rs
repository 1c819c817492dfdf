//! Library surface of the `hat` binary: the clap command definition, split
//! out so completions generation can rebuild the command tree.

pub mod cli;
