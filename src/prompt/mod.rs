// src/prompt/mod.rs
// System prompt construction

pub mod builder;

pub use builder::build_system_prompt;
