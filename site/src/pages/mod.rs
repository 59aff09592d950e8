//! Page composition roots
//!
//! Developed by The Site Authors (c)2026

mod home;

pub use home::{HomePage, ROOT_CLASS, root_style};
