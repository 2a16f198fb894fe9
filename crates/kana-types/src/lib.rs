pub mod types;

pub use types::{AudioClip, ScriptMode};
