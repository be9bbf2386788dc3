//! Input/output utilities for point sets and hull faces.
//!
//! Provides parsing of whitespace-separated text input and rendering of
//! face lists and statistics.

mod text;

pub use text::{
    format_faces, format_significant, parse_point_sets, parse_sites, read_point_sets, read_sites,
    write_faces,
};
