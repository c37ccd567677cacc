//! Deplens - module dependency extraction for source files
//!
//! Deplens is a CLI tool and library for listing the modules a source file
//! imports. Each file is tokenized by a language-specific lexer and walked
//! once by a small state machine that collects and normalizes import
//! targets.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, dispatch, output)
//! - `commands`: Command implementations (scan, offline-count, init)
//! - `config`: Configuration file loading and parsing
//! - `engine`: Core extraction engine (state machine + name normalization)
//! - `file_scanner`: Source file discovery
//! - `lang`: Supported languages, lexers, and extraction profiles
//! - `offline`: Offline heartbeat queue inspection
//! - `report`: Report types and formatting

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod file_scanner;
pub mod lang;
pub mod offline;
pub mod report;
