//! rcontacts: a command-line contact manager over a single JSON file.
//!
//! Layers, bottom-up: `domain` (entities), `infrastructure` (storage and
//! clock boundaries), `application` (the contact store), `cli` (flags and
//! dispatch).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
