mod settings;

use inquire::{InquireError, Select};

use crate::cli::commands::file::confirm_overwrite;
use crate::cli::i18n::texts;
use crate::cli::ui::{error, highlight, info, success};
use crate::cli::GlobalArgs;
use crate::error::AppError;
use crate::language::Language;
use crate::prompt::PromptKey;
use crate::store::{GenerateOutcome, PromptStore};

pub fn run(global: &GlobalArgs) -> Result<(), AppError> {
    let mut store = global.open_store()?;

    print_welcome(&store);

    loop {
        let Some(choice) = prompt_select(texts::menu_prompt(), MenuChoice::all())? else {
            break;
        };

        let result = match choice {
            MenuChoice::View => view_prompt(&store),
            MenuChoice::Edit => edit_prompt(&mut store),
            MenuChoice::SwitchLanguage => settings::switch_language(&mut store),
            MenuChoice::Regenerate => regenerate(global, &mut store),
            MenuChoice::Exit => break,
        };
        if let Err(e) = result {
            println!("\n{}", error(&e.to_string()));
        }
    }

    println!("\n{}", success(texts::goodbye()));
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum MenuChoice {
    View,
    Edit,
    SwitchLanguage,
    Regenerate,
    Exit,
}

impl MenuChoice {
    fn all() -> Vec<Self> {
        vec![
            Self::View,
            Self::Edit,
            Self::SwitchLanguage,
            Self::Regenerate,
            Self::Exit,
        ]
    }
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::View => write!(f, "{}", texts::menu_view()),
            Self::Edit => write!(f, "{}", texts::menu_edit()),
            Self::SwitchLanguage => write!(f, "{}", texts::menu_switch_language()),
            Self::Regenerate => write!(f, "{}", texts::menu_regenerate()),
            Self::Exit => write!(f, "{}", texts::menu_exit()),
        }
    }
}

fn print_welcome(store: &PromptStore) {
    println!("\n{}", "═".repeat(60));
    println!(
        "{}: {}",
        highlight(texts::prompt_file_label()),
        store.path().display()
    );
    println!(
        "{}: {}",
        highlight(texts::active_language_label()),
        store.language().display_name()
    );
    println!("{}", "─".repeat(60));
}

/// `None` when the user escapes out of the prompt.
fn prompt_select<T: std::fmt::Display>(
    message: &str,
    options: Vec<T>,
) -> Result<Option<T>, AppError> {
    match Select::new(message, options).prompt() {
        Ok(choice) => Ok(Some(choice)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(AppError::Message(format!("Prompt failed: {}", e))),
    }
}

fn view_prompt(store: &PromptStore) -> Result<(), AppError> {
    let Some(key) = prompt_select(texts::select_prompt_key(), PromptKey::ALL.to_vec())? else {
        return Ok(());
    };

    println!("\n{}", highlight(key.as_str()));
    println!("{}", "─".repeat(60));
    let value = store.get(key);
    if value.is_empty() {
        println!("{}", info(texts::empty_value()));
    } else {
        println!("{}", value);
    }
    Ok(())
}

fn edit_prompt(store: &mut PromptStore) -> Result<(), AppError> {
    let Some(key) = prompt_select(texts::select_prompt_key(), PromptKey::ALL.to_vec())? else {
        return Ok(());
    };
    let Some(lang) = prompt_select(texts::select_language(), Language::ALL.to_vec())? else {
        return Ok(());
    };

    println!("{}", info(texts::opening_editor()));
    if edit_value_with(store, key, lang, |text| edit::edit(text))? {
        println!("{}", success(&texts::prompt_updated(&key.field_name(lang))));
    } else {
        println!("{}", info(texts::prompt_unchanged()));
    }
    Ok(())
}

/// Opens the current value in `editor` and writes the file when the text
/// changed. Returns whether anything was written.
fn edit_value_with<F>(
    store: &mut PromptStore,
    key: PromptKey,
    lang: Language,
    editor: F,
) -> Result<bool, AppError>
where
    F: FnOnce(&str) -> std::io::Result<String>,
{
    let current = store.entry(key).value(lang).to_string();
    let value = editor(&current).map_err(|e| AppError::Message(format!("Editor failed: {}", e)))?;
    if value == current {
        return Ok(false);
    }

    store.set(key, lang, value);
    store.update_file()?;
    Ok(true)
}

/// Regenerates from the built-in defaults. When the file is rewritten the
/// session continues on the defaults.
fn regenerate(global: &GlobalArgs, store: &mut PromptStore) -> Result<(), AppError> {
    let defaults = global
        .store_options()?
        .language(store.language().code())
        .detached();

    match defaults.generate(confirm_overwrite)? {
        GenerateOutcome::Kept => {
            println!("{}", info(texts::prompt_file_kept()));
            return Ok(());
        }
        GenerateOutcome::Created => {
            println!("{}", success(&texts::prompt_file_created(defaults.path())))
        }
        GenerateOutcome::Overwritten => {
            println!("{}", success(&texts::prompt_file_overwritten(defaults.path())))
        }
    }

    *store = defaults;
    Ok(())
}
