pub mod app;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod loader;
pub mod model;
pub mod output;
pub mod render;
pub mod runner;
pub mod summary;

#[cfg(test)]
mod tests;
