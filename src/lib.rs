pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod join;
pub mod models;
pub mod output;
pub mod parse;
