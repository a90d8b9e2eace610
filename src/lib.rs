//! Boggle Solver
//!
//! Random Boggle boards and exhaustive, dictionary-pruned word search over
//! 8-connected tile paths.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::core::Board;
//! use boggle_solver::dictionary::loader::dictionary_from_slice;
//! use boggle_solver::search::{count_all_words, locate_path, check_path};
//!
//! let board = Board::from_rows(&["cat", "rxx", "exx"]).unwrap();
//! let dict = dictionary_from_slice(&["cat", "car", "care"]);
//!
//! assert_eq!(count_all_words(&board, &dict), 3);
//!
//! let path = locate_path(&board, "care").unwrap();
//! assert!(check_path(&board, &path, "care"));
//! ```

// Core domain types
pub mod core;

// Prefix dictionaries
pub mod dictionary;

// Word search engine
pub mod search;

// Board and dictionary context
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
