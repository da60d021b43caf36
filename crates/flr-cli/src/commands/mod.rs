pub mod check;
pub mod dump;
pub mod event_loader;
pub mod generate;
pub mod run_common;
pub mod schema;

#[cfg(test)]
mod event_loader_tests;
