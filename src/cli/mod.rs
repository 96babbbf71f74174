//! CLI implementation for the geourl binary.

pub mod output;
pub mod translate_cmd;
