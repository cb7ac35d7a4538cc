//! Timetable Library
//!
//! Parses a school timetable spreadsheet into per-class, per-weekday lessons
//! and caches spreadsheet downloads. The binary and integration tests use
//! these modules.

pub mod cache;
pub mod cli;
pub mod data;
pub mod fetch;
pub mod parser;
pub mod server;
pub mod service;
