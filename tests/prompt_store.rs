use std::fs;

use tempfile::TempDir;

use hugegraph_prompt::{
    builtin_defaults, GenerateOutcome, Language, LoadOutcome, PromptEntry, PromptKey, PromptStore,
    PromptStoreOptions,
};

#[path = "support.rs"]
mod support;
use support::{lock_test_mutex, LanguageEnvGuard};

fn sample_value(key: PromptKey, lang: Language) -> String {
    match lang {
        Language::English => format!("{key}: line one\n  indented line two\n"),
        Language::Chinese => format!("{key}：中文提示词，包含 \"引号\" 与 # 符号"),
    }
}

#[test]
fn every_field_survives_save_and_load() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("nested").join("config_prompt.yaml");

    let mut store = PromptStoreOptions::new(&path)
        .ignore_env()
        .open()
        .expect("open store");
    for key in PromptKey::ALL {
        for lang in Language::ALL {
            store.set(key, lang, sample_value(key, lang));
        }
    }
    store.save().expect("save store");

    let reloaded = PromptStoreOptions::new(&path)
        .ignore_env()
        .open()
        .expect("reopen store");
    for key in PromptKey::ALL {
        for lang in Language::ALL {
            assert_eq!(
                reloaded.entry(key).value(lang),
                sample_value(key, lang),
                "{} lost in round trip",
                key.field_name(lang)
            );
        }
    }
}

#[test]
fn saved_file_keeps_chinese_text_readable() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config_prompt.yaml");

    let mut store = PromptStore::detached(&path);
    store.set(PromptKey::DefaultQuestion, Language::Chinese, "介绍一下 Sarah。");
    store.update_file().expect("update file");

    let content = fs::read_to_string(&path).expect("read prompt file");
    assert!(content.contains("介绍一下 Sarah。"));
    assert!(!content.contains("\\u"));
}

#[test]
fn first_open_writes_builtin_defaults() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("resources").join("config_prompt.yaml");
    assert!(!path.exists());

    let mut store = PromptStoreOptions::new(&path)
        .ignore_env()
        .defaults(builtin_defaults())
        .detached();
    assert_eq!(
        store.ensure_file_exists().expect("create prompt file"),
        LoadOutcome::Created
    );
    assert!(path.exists());

    let reloaded = PromptStoreOptions::new(&path)
        .ignore_env()
        .open()
        .expect("reopen store");
    assert_eq!(reloaded.prompts(), &builtin_defaults());
}

#[test]
fn file_values_override_defaults_on_open() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config_prompt.yaml");
    fs::write(
        &path,
        "default_question_en: Who is James?\ndefault_question_zh: James 是谁？\n",
    )
    .expect("seed prompt file");

    let mut store = PromptStoreOptions::new(&path)
        .ignore_env()
        .defaults(builtin_defaults())
        .open()
        .expect("open store");

    assert_eq!(store.default_question(), "Who is James?");
    store.set_active_language(Language::Chinese);
    assert_eq!(store.default_question(), "James 是谁？");
    assert_eq!(
        store.answer_prompt(),
        builtin_defaults().get(PromptKey::AnswerPrompt).zh
    );
}

#[test]
fn declined_regenerate_keeps_operator_edits() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config_prompt.yaml");
    fs::write(&path, "graph_schema_en: custom schema\n").expect("seed prompt file");

    let store = PromptStoreOptions::new(&path)
        .ignore_env()
        .defaults(builtin_defaults())
        .detached();
    let mut asked = false;
    let outcome = store
        .generate(|_| {
            asked = true;
            Ok(false)
        })
        .expect("generate");

    assert!(asked);
    assert_eq!(outcome, GenerateOutcome::Kept);
    assert_eq!(
        fs::read_to_string(&path).expect("read prompt file"),
        "graph_schema_en: custom schema\n"
    );
}

#[test]
fn unset_chinese_value_falls_back_after_reload() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config_prompt.yaml");

    let mut store = PromptStore::detached(&path);
    store.set_entry(PromptKey::GremlinGeneratePrompt, PromptEntry::new("g.V()", ""));
    store.save().expect("save store");

    let mut reloaded = PromptStoreOptions::new(&path)
        .language("zh")
        .open()
        .expect("reopen store");
    assert_eq!(reloaded.language(), Language::Chinese);
    assert_eq!(reloaded.gremlin_generate_prompt(), "g.V()");

    reloaded.set_language("en");
    assert_eq!(reloaded.gremlin_generate_prompt(), "g.V()");
}

#[test]
fn language_env_controls_the_opened_store() {
    let _guard = lock_test_mutex();
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config_prompt.yaml");

    {
        let _env = LanguageEnvGuard::set(Some("zh"));
        let store = PromptStore::open(&path).expect("open store");
        assert_eq!(store.language(), Language::Chinese);
    }
    {
        let _env = LanguageEnvGuard::set(Some("fr"));
        let store = PromptStore::open(&path).expect("open store");
        assert_eq!(store.language(), Language::English);
    }
    {
        let _env = LanguageEnvGuard::set(None);
        let store = PromptStore::open(&path).expect("open store");
        assert_eq!(store.language(), Language::English);
    }
}
