use crate::cli::i18n::{self, texts};
use crate::cli::ui::success;
use crate::error::AppError;
use crate::language::Language;
use crate::store::PromptStore;

use super::prompt_select;

/// Changes the active language for this session only; nothing is persisted.
pub fn switch_language(store: &mut PromptStore) -> Result<(), AppError> {
    let Some(selected) = prompt_select(texts::select_language(), Language::ALL.to_vec())? else {
        return Ok(());
    };

    store.set_active_language(selected);
    i18n::set_language(selected);

    println!("\n{}", success(texts::language_changed()));
    Ok(())
}
