pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod extract;
pub mod reporting;
pub mod safelist;
pub mod scan;
pub mod validate;
