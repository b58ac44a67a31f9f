pub mod json;

pub use json::{export_topic_to_path, import_topic};
