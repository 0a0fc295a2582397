use std::fs;
use std::path::Path;

use crate::cli::i18n::{self, texts};
use crate::cli::ui::{error, highlight, success, warning};
use crate::cli::GlobalArgs;
use crate::error::AppError;
use crate::store::GenerateOutcome;

/// Rewrites the prompt file from the built-in defaults. The existing file is
/// not loaded first, so confirming discards local edits.
pub fn generate(global: &GlobalArgs, force: bool) -> Result<(), AppError> {
    let store = global.store_options()?.detached();
    i18n::set_language(store.language());

    let outcome = store.generate(|path| {
        if force {
            return Ok(true);
        }
        confirm_overwrite(path)
    })?;

    match outcome {
        GenerateOutcome::Created => {
            println!("{}", success(&texts::prompt_file_created(store.path())))
        }
        GenerateOutcome::Overwritten => {
            println!("{}", success(&texts::prompt_file_overwritten(store.path())))
        }
        GenerateOutcome::Kept => println!("{}", warning(texts::prompt_file_kept())),
    }
    Ok(())
}

pub(crate) fn confirm_overwrite(path: &Path) -> Result<bool, AppError> {
    inquire::Confirm::new(&texts::overwrite_confirm(path))
        .with_default(false)
        .prompt()
        .map_err(|e| AppError::Message(format!("Prompt failed: {}", e)))
}

pub fn show_path(global: &GlobalArgs) -> Result<(), AppError> {
    let path = global.prompt_file()?;
    i18n::set_language(global.store_options()?.detached().language());

    println!("{}: {}", highlight(texts::prompt_file_label()), path.display());
    match fs::metadata(&path) {
        Ok(metadata) => println!("{}", success(&texts::file_exists(metadata.len()))),
        Err(_) => println!("{}", error(texts::file_missing())),
    }
    Ok(())
}
