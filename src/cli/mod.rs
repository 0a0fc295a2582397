use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

pub mod commands;
pub mod i18n;
pub mod interactive;
pub mod ui;

use crate::config::{default_prompt_file_path, LANGUAGE_ENV, PROMPT_FILE_ENV};
use crate::defaults;
use crate::error::AppError;
use crate::language::Language;
use crate::prompt::PromptKey;
use crate::store::{PromptStore, PromptStoreOptions};

#[derive(Parser)]
#[command(
    name = "hugegraph-prompt",
    version,
    about = "Manage the bilingual prompt file used by HugeGraph LLM",
    long_about = "Show, edit and regenerate the English/Chinese prompt templates stored in config_prompt.yaml.\n\nRun without arguments to enter interactive mode."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Clone, Debug)]
pub struct GlobalArgs {
    /// Path of the prompt file
    #[arg(short, long, global = true, env = PROMPT_FILE_ENV)]
    pub file: Option<PathBuf>,

    /// Active language (en or zh); falls back to HUGEGRAPH_PROMPT_LANGUAGE
    #[arg(short, long, global = true)]
    pub lang: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the known prompt keys
    Keys,

    /// Show every prompt in both languages
    Show,

    /// Print one prompt in the active language
    Get {
        #[arg(value_parser = parse_prompt_key)]
        key: PromptKey,
    },

    /// Set one language variant of a prompt and write the file
    Set {
        #[arg(value_parser = parse_prompt_key)]
        key: PromptKey,

        /// Language variant to write
        #[arg(long = "variant", value_enum, default_value_t = LanguageArg::En)]
        variant: LanguageArg,

        /// New prompt text
        #[arg(required_unless_present = "stdin")]
        value: Option<String>,

        /// Read the prompt text from standard input
        #[arg(long, conflicts_with = "value")]
        stdin: bool,
    },

    /// Regenerate the prompt file from the built-in defaults
    Generate {
        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },

    /// Show the prompt file path
    Path,

    /// Enter interactive mode
    #[command(alias = "ui")]
    Interactive,

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    En,
    Zh,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::English,
            LanguageArg::Zh => Language::Chinese,
        }
    }
}

fn parse_prompt_key(raw: &str) -> Result<PromptKey, String> {
    raw.parse::<PromptKey>().map_err(|e| e.to_string())
}

impl GlobalArgs {
    pub fn prompt_file(&self) -> Result<PathBuf, AppError> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => default_prompt_file_path(),
        }
    }

    /// Store options seeded with the built-in defaults.
    pub fn store_options(&self) -> Result<PromptStoreOptions, AppError> {
        let mut options =
            PromptStoreOptions::new(self.prompt_file()?).defaults(defaults::builtin());
        if let Some(lang) = &self.lang {
            options = options.language(lang.clone());
        }
        Ok(options)
    }

    /// The requested language code when it is not `en`/`zh`. Checks `--lang`
    /// first, then the language environment variable.
    pub fn unsupported_language(&self) -> Option<String> {
        let env_value = std::env::var(LANGUAGE_ENV).ok();
        self.unsupported_language_with(env_value.as_deref())
    }

    fn unsupported_language_with(&self, env_value: Option<&str>) -> Option<String> {
        let requested = self
            .lang
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or_else(|| env_value.map(str::trim).filter(|s| !s.is_empty()))?;
        match Language::from_code(requested) {
            Some(_) => None,
            None => Some(requested.to_string()),
        }
    }

    /// Opens the store (loading or creating the file) and aligns the CLI
    /// language with it.
    pub fn open_store(&self) -> Result<PromptStore, AppError> {
        let store = self.store_options()?.open()?;
        i18n::set_language(store.language());
        Ok(store)
    }
}

/// Generate shell completions
pub fn generate_completions(shell: Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn set_accepts_key_variant_and_value() {
        let cli = Cli::try_parse_from([
            "hugegraph-prompt",
            "--file",
            "/tmp/p.yaml",
            "set",
            "answer_prompt",
            "--variant",
            "zh",
            "回答",
        ])
        .expect("parse set command");

        match cli.command {
            Some(Commands::Set {
                key,
                variant,
                value,
                stdin,
            }) => {
                assert_eq!(key, PromptKey::AnswerPrompt);
                assert_eq!(Language::from(variant), Language::Chinese);
                assert_eq!(value.as_deref(), Some("回答"));
                assert!(!stdin);
            }
            _ => panic!("expected set command"),
        }
        assert_eq!(cli.global.file, Some(PathBuf::from("/tmp/p.yaml")));
    }

    #[test]
    fn unsupported_lang_flag_is_reported() {
        let cli = Cli::try_parse_from(["hugegraph-prompt", "--lang", "fr", "keys"])
            .expect("parse keys command");
        assert_eq!(
            cli.global.unsupported_language_with(None).as_deref(),
            Some("fr")
        );

        let cli = Cli::try_parse_from(["hugegraph-prompt", "--lang", "zh", "keys"])
            .expect("parse keys command");
        assert_eq!(cli.global.unsupported_language_with(Some("fr")), None);
    }

    #[test]
    fn unsupported_env_language_is_reported_without_flag() {
        let cli = Cli::try_parse_from(["hugegraph-prompt", "keys"]).expect("parse keys command");
        assert_eq!(
            cli.global.unsupported_language_with(Some(" de ")).as_deref(),
            Some("de")
        );
        assert_eq!(cli.global.unsupported_language_with(Some("en")), None);
        assert_eq!(cli.global.unsupported_language_with(None), None);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(Cli::try_parse_from(["hugegraph-prompt", "get", "nope"]).is_err());
    }

    #[test]
    fn set_requires_value_or_stdin() {
        assert!(Cli::try_parse_from(["hugegraph-prompt", "set", "graph_schema"]).is_err());
        assert!(
            Cli::try_parse_from(["hugegraph-prompt", "set", "graph_schema", "--stdin"]).is_ok()
        );
    }
}
