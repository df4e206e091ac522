pub mod config;
pub mod page;
pub mod report;
pub mod scoring;
