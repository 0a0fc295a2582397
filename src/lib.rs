// Core modules
mod config;
mod defaults;
mod error;
mod language;
mod prompt;
mod store;
#[cfg(test)]
mod test_support;

// CLI module
pub mod cli;

// Public exports
pub use config::{
    default_prompt_file_path, get_app_config_dir, LANGUAGE_ENV, PROMPT_FILE_ENV, PROMPT_FILE_NAME,
};
pub use defaults::builtin as builtin_defaults;
pub use error::AppError;
pub use language::{resolve_language, Language};
pub use prompt::{PromptEntry, PromptKey, PromptTable};
pub use store::{GenerateOutcome, LoadOutcome, PromptStore, PromptStoreOptions};
