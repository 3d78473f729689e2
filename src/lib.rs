//! Tournament Organizer Library
//!
//! This library provides the organizer aggregate and its tournament rules,
//! pluggable match pairing strategies, the repository port with an
//! in-memory adapter, and the unit-of-work handlers that tie them together.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
