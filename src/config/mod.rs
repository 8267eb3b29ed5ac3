//! Configuration module for listkeeper
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::KeeperPaths;
pub use settings::Settings;
