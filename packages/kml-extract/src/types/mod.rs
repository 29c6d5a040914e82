//! Record and configuration types.

pub mod config;
pub mod placemark;
