//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the directory rules so route handlers can stay
//! focused on request extraction and response shaping.

pub mod activity;
pub mod seed;
