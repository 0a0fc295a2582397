pub mod file;
pub mod prompts;
