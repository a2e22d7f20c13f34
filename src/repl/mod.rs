//! Interactive REPL module (enabled with the "repl" feature)

mod interactive;

pub use interactive::run_repl;
