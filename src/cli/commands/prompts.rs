use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::Read;

use crate::cli::i18n::texts;
use crate::cli::ui::{highlight, success, truncate_display};
use crate::cli::GlobalArgs;
use crate::error::AppError;
use crate::language::Language;
use crate::prompt::PromptKey;

const CELL_WIDTH: usize = 40;

pub fn list_keys() -> Result<(), AppError> {
    for key in PromptKey::ALL {
        println!("{}", key);
    }
    Ok(())
}

pub fn show_prompts(global: &GlobalArgs) -> Result<(), AppError> {
    let store = global.open_store()?;

    println!(
        "{}: {}",
        texts::active_language_label(),
        highlight(store.language().display_name())
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            texts::header_key(),
            Language::English.code(),
            Language::Chinese.code(),
            texts::header_active(),
        ]);

    for (key, entry) in store.prompts().iter() {
        table.add_row(vec![
            key.to_string(),
            cell(&entry.en),
            cell(&entry.zh),
            cell(store.get(key)),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn cell(value: &str) -> String {
    if value.is_empty() {
        texts::empty_value().to_string()
    } else {
        truncate_display(value, CELL_WIDTH)
    }
}

pub fn get_prompt(global: &GlobalArgs, key: PromptKey) -> Result<(), AppError> {
    let store = global.open_store()?;
    let value = store.get(key);
    if value.ends_with('\n') {
        print!("{value}");
    } else {
        println!("{value}");
    }
    Ok(())
}

pub fn set_prompt(
    global: &GlobalArgs,
    key: PromptKey,
    lang: Language,
    value: Option<String>,
    from_stdin: bool,
) -> Result<(), AppError> {
    let value = match (value, from_stdin) {
        (_, true) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| AppError::io("<stdin>", e))?;
            buf
        }
        (Some(value), false) => value,
        (None, false) => return Err(AppError::InvalidInput(texts::missing_value().into())),
    };

    let mut store = global.open_store()?;
    store.set(key, lang, value);
    store.update_file()?;

    println!("{}", success(&texts::prompt_updated(&key.field_name(lang))));
    Ok(())
}
