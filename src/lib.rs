pub mod args;
pub mod config;
pub mod error;
pub mod parsers;
pub mod presentation;
