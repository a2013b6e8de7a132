pub mod checks;
pub mod config;
pub mod manifest;
pub mod module;
pub mod pylint;
pub mod reporter;
