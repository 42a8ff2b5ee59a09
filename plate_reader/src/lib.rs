pub mod config;
pub mod error;
pub mod plate_detection;
