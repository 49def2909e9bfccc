//! Utility helpers.

pub mod mime;
