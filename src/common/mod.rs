mod fs;
mod json;

pub use fs::AcsDir;
pub use json::{read_json_file, write_json_file};
