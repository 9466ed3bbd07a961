//! # Trackforge SVG
//!
//! Extracts parametric centerline paths from SVG documents. Only the
//! path elements are read; the first path in a multi-path file is used
//! as the track centerline.
//!
//! Supported path commands: M/m, L/l, H/h, V/v, C/c, Q/q, Z/z. Numbers
//! are parsed leniently (malformed values fall back to 0, matching the
//! tolerance of common vector tool output).

mod parser;

pub use parser::{extract_paths, first_path, tokenize_path_data};
