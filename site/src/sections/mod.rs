//! Home page sections
//!
//! Developed by The Site Authors (c)2026

mod footer;
mod hero;

pub use footer::Footer;
pub use hero::Hero;
