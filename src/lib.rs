pub mod cli;
pub mod config;
pub mod error;
pub mod client;
pub mod cropper;
pub mod storage;
pub mod analytics;
pub mod render;
pub mod export;
pub mod dashboard;
