use std::str::FromStr;

use crate::error::AppError;
use crate::language::Language;

/// The fixed set of prompts managed by the store, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PromptKey {
    GraphSchema,
    ExtractGraphPrompt,
    DefaultQuestion,
    CustomRerankInfo,
    AnswerPrompt,
    KeywordsExtractPrompt,
    Text2gqlGraphSchema,
    GremlinGeneratePrompt,
    DocInputText,
}

impl PromptKey {
    pub const COUNT: usize = 9;

    pub const ALL: [PromptKey; PromptKey::COUNT] = [
        PromptKey::GraphSchema,
        PromptKey::ExtractGraphPrompt,
        PromptKey::DefaultQuestion,
        PromptKey::CustomRerankInfo,
        PromptKey::AnswerPrompt,
        PromptKey::KeywordsExtractPrompt,
        PromptKey::Text2gqlGraphSchema,
        PromptKey::GremlinGeneratePrompt,
        PromptKey::DocInputText,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GraphSchema => "graph_schema",
            Self::ExtractGraphPrompt => "extract_graph_prompt",
            Self::DefaultQuestion => "default_question",
            Self::CustomRerankInfo => "custom_rerank_info",
            Self::AnswerPrompt => "answer_prompt",
            Self::KeywordsExtractPrompt => "keywords_extract_prompt",
            Self::Text2gqlGraphSchema => "text2gql_graph_schema",
            Self::GremlinGeneratePrompt => "gremlin_generate_prompt",
            Self::DocInputText => "doc_input_text",
        }
    }

    /// Name of the backing-file field holding this key's `lang` variant,
    /// e.g. `graph_schema_zh`.
    pub fn field_name(&self, lang: Language) -> String {
        format!("{}_{}", self.as_str(), lang.code())
    }

    /// Inverse of [`PromptKey::field_name`]. Suffixes must match exactly.
    pub fn parse_field(field: &str) -> Option<(PromptKey, Language)> {
        let (key, code) = field.rsplit_once('_')?;
        let lang = match code {
            "en" => Language::English,
            "zh" => Language::Chinese,
            _ => return None,
        };
        let key = key.parse::<PromptKey>().ok()?;
        Some((key, lang))
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for PromptKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PromptKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AppError::InvalidInput(format!("unknown prompt key '{s}'")))
    }
}

/// Both language variants of one prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptEntry {
    pub en: String,
    pub zh: String,
}

impl PromptEntry {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    pub fn value(&self, lang: Language) -> &str {
        match lang {
            Language::English => &self.en,
            Language::Chinese => &self.zh,
        }
    }

    pub fn value_mut(&mut self, lang: Language) -> &mut String {
        match lang {
            Language::English => &mut self.en,
            Language::Chinese => &mut self.zh,
        }
    }

    /// Chinese falls back to English when its variant is empty; English never
    /// falls back.
    pub fn resolve(&self, lang: Language) -> &str {
        match lang {
            Language::Chinese if !self.zh.is_empty() => &self.zh,
            _ => &self.en,
        }
    }
}

/// One [`PromptEntry`] per [`PromptKey`]; every key is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptTable {
    entries: [PromptEntry; PromptKey::COUNT],
}

impl PromptTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: PromptKey) -> &PromptEntry {
        &self.entries[key.index()]
    }

    pub fn get_mut(&mut self, key: PromptKey) -> &mut PromptEntry {
        &mut self.entries[key.index()]
    }

    pub fn set(&mut self, key: PromptKey, lang: Language, value: impl Into<String>) {
        *self.get_mut(key).value_mut(lang) = value.into();
    }

    pub fn with(mut self, key: PromptKey, entry: PromptEntry) -> Self {
        *self.get_mut(key) = entry;
        self
    }

    /// Entries in fixed key order.
    pub fn iter(&self) -> impl Iterator<Item = (PromptKey, &PromptEntry)> {
        PromptKey::ALL.into_iter().zip(self.entries.iter())
    }
}
