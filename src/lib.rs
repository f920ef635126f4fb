//! Stars the most recently created repositories of a list of target GitHub
//! users, noting when the acting account is the first star.

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod sweep;
pub mod types;
