use std::path::PathBuf;

use crate::error::AppError;

/// File name of the prompt file inside the config directory.
pub const PROMPT_FILE_NAME: &str = "config_prompt.yaml";

/// Environment variable consulted for the active language when none is given explicitly.
pub const LANGUAGE_ENV: &str = "HUGEGRAPH_PROMPT_LANGUAGE";

/// Environment variable overriding the prompt file location (CLI only).
pub const PROMPT_FILE_ENV: &str = "HUGEGRAPH_PROMPT_FILE";

/// `~/.hugegraph-llm`
pub fn get_app_config_dir() -> Result<PathBuf, AppError> {
    dirs::home_dir()
        .map(|home| home.join(".hugegraph-llm"))
        .ok_or_else(|| AppError::Config("unable to determine the user home directory".into()))
}

/// `~/.hugegraph-llm/config_prompt.yaml`
pub fn default_prompt_file_path() -> Result<PathBuf, AppError> {
    Ok(get_app_config_dir()?.join(PROMPT_FILE_NAME))
}
