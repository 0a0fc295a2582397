//! Bilingual prompt store persisted to a single YAML file.
//!
//! The store owns its backing file exclusively. Opening it loads the file (or
//! writes the current defaults when the file is missing); writes always replace
//! the whole file.

use indexmap::IndexMap;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LANGUAGE_ENV;
use crate::error::AppError;
use crate::language::{resolve_language, Language};
use crate::prompt::{PromptEntry, PromptKey, PromptTable};

/// Result of the startup load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed; `fields` known fields were applied from it.
    Loaded { fields: usize },
    /// The file was missing and has been written from the in-memory values.
    Created,
}

/// Result of an operator-invoked regenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    Created,
    Overwritten,
    /// The file existed and the overwrite was not confirmed.
    Kept,
}

/// Builder for [`PromptStore`].
#[derive(Debug, Clone)]
pub struct PromptStoreOptions {
    path: PathBuf,
    language: Option<String>,
    language_env: Option<String>,
    defaults: PromptTable,
}

impl PromptStoreOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            language: None,
            language_env: Some(LANGUAGE_ENV.to_string()),
            defaults: PromptTable::new(),
        }
    }

    /// Explicit language code; takes precedence over the environment.
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Environment variable consulted when no explicit language is set.
    pub fn language_env(mut self, var: impl Into<String>) -> Self {
        self.language_env = Some(var.into());
        self
    }

    pub fn ignore_env(mut self) -> Self {
        self.language_env = None;
        self
    }

    /// Values the store starts from before the file is applied.
    pub fn defaults(mut self, defaults: PromptTable) -> Self {
        self.defaults = defaults;
        self
    }

    /// Builds the store without touching the file system.
    pub fn detached(self) -> PromptStore {
        let env_value = self
            .language_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok());
        let language = resolve_language(self.language.as_deref(), env_value.as_deref());

        PromptStore {
            path: self.path,
            language,
            prompts: self.defaults,
        }
    }

    /// Builds the store and synchronizes it with the backing file.
    pub fn open(self) -> Result<PromptStore, AppError> {
        let mut store = self.detached();
        store.ensure_file_exists()?;
        Ok(store)
    }
}

#[derive(Debug, Clone)]
pub struct PromptStore {
    path: PathBuf,
    language: Language,
    prompts: PromptTable,
}

macro_rules! prompt_accessors {
    ($($name:ident => $key:ident),* $(,)?) => {
        impl PromptStore {
            $(
                pub fn $name(&self) -> &str {
                    self.get(PromptKey::$key)
                }
            )*
        }
    };
}

prompt_accessors! {
    graph_schema => GraphSchema,
    extract_graph_prompt => ExtractGraphPrompt,
    default_question => DefaultQuestion,
    custom_rerank_info => CustomRerankInfo,
    answer_prompt => AnswerPrompt,
    keywords_extract_prompt => KeywordsExtractPrompt,
    text2gql_graph_schema => Text2gqlGraphSchema,
    gremlin_generate_prompt => GremlinGeneratePrompt,
    doc_input_text => DocInputText,
}

impl PromptStore {
    /// Opens the store at `path` with empty defaults, resolving the language
    /// from the environment.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        PromptStoreOptions::new(path).open()
    }

    /// Empty English store that never reads the environment or the file.
    pub fn detached(path: impl Into<PathBuf>) -> Self {
        PromptStoreOptions::new(path).ignore_env().detached()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_active_language(&mut self, lang: Language) {
        self.language = lang;
    }

    /// Sets the language from a code. Anything but `en`/`zh` logs a warning and
    /// selects English.
    pub fn set_language(&mut self, code: &str) -> Language {
        self.language = Language::from_code_or_default(code);
        self.language
    }

    /// Value of `key` for the active language, falling back from Chinese to
    /// English when the Chinese variant is empty.
    pub fn get(&self, key: PromptKey) -> &str {
        self.prompts.get(key).resolve(self.language)
    }

    pub fn entry(&self, key: PromptKey) -> &PromptEntry {
        self.prompts.get(key)
    }

    pub fn prompts(&self) -> &PromptTable {
        &self.prompts
    }

    pub fn set(&mut self, key: PromptKey, lang: Language, value: impl Into<String>) {
        self.prompts.set(key, lang, value);
    }

    pub fn set_entry(&mut self, key: PromptKey, entry: PromptEntry) {
        *self.prompts.get_mut(key) = entry;
    }

    /// Startup synchronization: loads the file when present, otherwise writes
    /// the current values out. Never prompts.
    pub fn ensure_file_exists(&mut self) -> Result<LoadOutcome, AppError> {
        if self.path.exists() {
            let fields = self.apply_file()?;
            log::info!("Loading prompt file '{}' successfully.", self.path.display());
            Ok(LoadOutcome::Loaded { fields })
        } else {
            self.save()?;
            log::info!(
                "Prompt file '{}' doesn't exist, create it.",
                self.path.display()
            );
            Ok(LoadOutcome::Created)
        }
    }

    /// Re-applies the backing file onto the current values.
    pub fn reload(&mut self) -> Result<usize, AppError> {
        if !self.path.exists() {
            return Err(AppError::Config(format!(
                "prompt file '{}' does not exist",
                self.path.display()
            )));
        }
        self.apply_file()
    }

    /// Writes every field, in fixed key order, replacing the file.
    pub fn save(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
            }
        }

        let yaml = serde_yaml::to_string(&self.to_document())
            .map_err(|e| AppError::YamlSerialize { source: e })?;
        fs::write(&self.path, yaml).map_err(|e| AppError::io(&self.path, e))?;
        Ok(())
    }

    /// Operator regenerate. An existing file is only overwritten when `confirm`
    /// returns `true`; a missing file is written without asking.
    pub fn generate<F>(&self, confirm: F) -> Result<GenerateOutcome, AppError>
    where
        F: FnOnce(&Path) -> Result<bool, AppError>,
    {
        if self.path.exists() {
            log::info!(
                "{} already exists, asking before overriding it with the default configuration.",
                self.path.display()
            );
            if !confirm(&self.path)? {
                log::info!("Keeping existing prompt file '{}'.", self.path.display());
                return Ok(GenerateOutcome::Kept);
            }
            self.save()?;
            log::info!("Prompt file '{}' overwritten.", self.path.display());
            Ok(GenerateOutcome::Overwritten)
        } else {
            self.save()?;
            log::info!(
                "Prompt file '{}' doesn't exist, create it.",
                self.path.display()
            );
            Ok(GenerateOutcome::Created)
        }
    }

    pub fn update_file(&self) -> Result<(), AppError> {
        self.save()?;
        log::info!("Prompt file '{}' updated successfully.", self.path.display());
        Ok(())
    }

    fn to_document(&self) -> IndexMap<String, String> {
        let mut doc = IndexMap::with_capacity(PromptKey::COUNT * 2);
        for (key, entry) in self.prompts.iter() {
            for lang in Language::ALL {
                doc.insert(key.field_name(lang), entry.value(lang).to_string());
            }
        }
        doc
    }

    fn apply_file(&mut self) -> Result<usize, AppError> {
        let content = fs::read_to_string(&self.path).map_err(|e| AppError::io(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(0);
        }

        let doc: Value =
            serde_yaml::from_str(&content).map_err(|e| AppError::yaml(&self.path, e))?;
        let mapping = match doc {
            Value::Null => return Ok(0),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(AppError::Config(format!(
                    "prompt file '{}' must contain a mapping of prompt fields",
                    self.path.display()
                )))
            }
        };

        let mut applied = 0;
        for (field, value) in mapping {
            let Some(field) = field.as_str() else {
                continue;
            };
            let Some((key, lang)) = PromptKey::parse_field(field) else {
                log::debug!("Ignoring unknown prompt field '{}'", field);
                continue;
            };
            match value {
                Value::Null => {}
                Value::String(text) => {
                    self.prompts.set(key, lang, text);
                    applied += 1;
                }
                _ => {
                    return Err(AppError::Config(format!(
                        "prompt field '{}' in '{}' must be a string",
                        field,
                        self.path.display()
                    )))
                }
            }
        }
        Ok(applied)
    }
}
