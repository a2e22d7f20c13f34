//! CLI argument parsing module

mod args;

pub use args::{Args, SubCommand};
