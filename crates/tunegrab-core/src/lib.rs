pub mod config;
pub mod error;
pub mod exec;
pub mod fetch;
pub mod logging;
pub mod processor;
pub mod rules;
pub mod tags;
pub mod title;
