use std::str::FromStr;

use crate::error::AppError;

/// Languages a prompt can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Chinese];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Strict parse: only `en` and `zh` are recognized.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::English),
            "zh" => Some(Language::Chinese),
            _ => None,
        }
    }

    /// Lenient parse used for settings: unsupported codes fall back to English
    /// with a warning instead of failing.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            log::warn!(
                "Unsupported language '{}' specified. Defaulting to '{}'.",
                code,
                Language::English.code()
            );
            Language::English
        })
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            AppError::InvalidInput(format!("unsupported language '{s}', expected 'en' or 'zh'"))
        })
    }
}

/// Picks the active language once, at construction time.
///
/// Order: explicit argument, then the environment value, then English.
/// An unsupported value at whichever level wins is corrected to English.
pub fn resolve_language(explicit: Option<&str>, env_value: Option<&str>) -> Language {
    let raw = explicit
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| env_value.map(str::trim).filter(|s| !s.is_empty()));

    match raw {
        Some(code) => Language::from_code_or_default(code),
        None => Language::English,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{capture_logs, warn_count};

    #[test]
    fn from_code_accepts_only_en_and_zh() {
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code(" ZH "), Some(Language::Chinese));
        assert_eq!(Language::from_code("zh-cn"), None);
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn unsupported_code_falls_back_to_english() {
        assert_eq!(Language::from_code_or_default("fr"), Language::English);
        assert_eq!(Language::from_code_or_default(""), Language::English);
    }

    #[test]
    fn only_unsupported_codes_log_a_warning() {
        let (lang, records) = capture_logs(|| Language::from_code_or_default("fr"));
        assert_eq!(lang, Language::English);
        assert_eq!(warn_count(&records), 1);
        assert!(records[0].1.contains("'fr'"));

        for code in ["en", "zh"] {
            let (_, records) = capture_logs(|| Language::from_code_or_default(code));
            assert_eq!(warn_count(&records), 0, "unexpected warning for '{code}'");
        }
    }

    #[test]
    fn resolving_unsupported_env_value_logs_a_warning() {
        let (lang, records) = capture_logs(|| resolve_language(None, Some("fr")));
        assert_eq!(lang, Language::English);
        assert_eq!(warn_count(&records), 1);

        let (_, records) = capture_logs(|| resolve_language(None, Some("zh")));
        assert_eq!(warn_count(&records), 0);
    }

    #[test]
    fn from_str_rejects_unknown_codes() {
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Chinese);
        assert!(matches!(
            "de".parse::<Language>(),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn explicit_language_beats_environment() {
        assert_eq!(resolve_language(Some("en"), Some("zh")), Language::English);
        assert_eq!(resolve_language(Some("zh"), None), Language::Chinese);
    }

    #[test]
    fn environment_used_when_no_explicit_language() {
        assert_eq!(resolve_language(None, Some("zh")), Language::Chinese);
        assert_eq!(resolve_language(Some("  "), Some("zh")), Language::Chinese);
        assert_eq!(resolve_language(None, Some("fr")), Language::English);
        assert_eq!(resolve_language(None, None), Language::English);
    }
}
