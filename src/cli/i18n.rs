use std::sync::OnceLock;
use std::sync::RwLock;

use crate::language::Language;

/// Language of the CLI's own messages; follows the store's active language.
fn language_store() -> &'static RwLock<Language> {
    static STORE: OnceLock<RwLock<Language>> = OnceLock::new();
    STORE.get_or_init(|| RwLock::new(Language::English))
}

pub fn current_language() -> Language {
    language_store()
        .read()
        .map(|lang| *lang)
        .unwrap_or_default()
}

pub fn set_language(lang: Language) {
    if let Ok(mut guard) = language_store().write() {
        *guard = lang;
    }
}

pub fn is_chinese() -> bool {
    current_language() == Language::Chinese
}

// ============================================================================
// CLI Texts
// ============================================================================

pub mod texts {
    use super::is_chinese;
    use std::path::Path;

    pub fn overwrite_confirm(path: &Path) -> String {
        if is_chinese() {
            format!("{} 已存在，是否用默认配置覆盖？", path.display())
        } else {
            format!(
                "{} already exists, override it with the default configuration?",
                path.display()
            )
        }
    }

    pub fn prompt_file_created(path: &Path) -> String {
        if is_chinese() {
            format!("✓ 已创建提示词文件 {}", path.display())
        } else {
            format!("✓ Created prompt file {}", path.display())
        }
    }

    pub fn prompt_file_overwritten(path: &Path) -> String {
        if is_chinese() {
            format!("✓ 已用默认配置覆盖 {}", path.display())
        } else {
            format!("✓ Overwrote {} with the default configuration", path.display())
        }
    }

    pub fn prompt_file_kept() -> &'static str {
        if is_chinese() {
            "已取消，保留现有文件。"
        } else {
            "Cancelled, existing file kept."
        }
    }

    pub fn prompt_updated(field: &str) -> String {
        if is_chinese() {
            format!("✓ 已更新 {}", field)
        } else {
            format!("✓ Updated {}", field)
        }
    }

    pub fn prompt_file_label() -> &'static str {
        if is_chinese() {
            "提示词文件"
        } else {
            "Prompt file"
        }
    }

    pub fn active_language_label() -> &'static str {
        if is_chinese() {
            "当前语言"
        } else {
            "Active language"
        }
    }

    pub fn file_exists(size: u64) -> String {
        if is_chinese() {
            format!("✓ 文件存在（{} 字节）", size)
        } else {
            format!("✓ File exists ({} bytes)", size)
        }
    }

    pub fn file_missing() -> &'static str {
        if is_chinese() {
            "✗ 文件不存在，运行任意命令即可创建。"
        } else {
            "✗ File does not exist, it is created on first use."
        }
    }

    pub fn header_key() -> &'static str {
        if is_chinese() {
            "键"
        } else {
            "Key"
        }
    }

    pub fn header_active() -> &'static str {
        if is_chinese() {
            "当前值"
        } else {
            "Active"
        }
    }

    pub fn empty_value() -> &'static str {
        if is_chinese() {
            "（空）"
        } else {
            "(empty)"
        }
    }

    pub fn missing_value() -> &'static str {
        if is_chinese() {
            "缺少提示词内容，请提供 VALUE 或使用 --stdin"
        } else {
            "missing prompt value, pass VALUE or use --stdin"
        }
    }

    // ============================================
    // INTERACTIVE MENU (交互菜单)
    // ============================================

    pub fn menu_prompt() -> &'static str {
        if is_chinese() {
            "请选择操作："
        } else {
            "Choose an action:"
        }
    }

    pub fn menu_view() -> &'static str {
        if is_chinese() {
            "查看提示词"
        } else {
            "View a prompt"
        }
    }

    pub fn menu_edit() -> &'static str {
        if is_chinese() {
            "编辑提示词"
        } else {
            "Edit a prompt"
        }
    }

    pub fn menu_switch_language() -> &'static str {
        if is_chinese() {
            "切换语言"
        } else {
            "Switch language"
        }
    }

    pub fn menu_regenerate() -> &'static str {
        if is_chinese() {
            "恢复默认提示词"
        } else {
            "Regenerate defaults"
        }
    }

    pub fn menu_exit() -> &'static str {
        if is_chinese() {
            "退出"
        } else {
            "Exit"
        }
    }

    pub fn select_prompt_key() -> &'static str {
        if is_chinese() {
            "选择提示词："
        } else {
            "Select a prompt:"
        }
    }

    pub fn select_language() -> &'static str {
        if is_chinese() {
            "选择语言："
        } else {
            "Select a language:"
        }
    }

    pub fn opening_editor() -> &'static str {
        if is_chinese() {
            "正在打开编辑器，保存并关闭后生效..."
        } else {
            "Opening editor, save and close it to apply..."
        }
    }

    pub fn prompt_unchanged() -> &'static str {
        if is_chinese() {
            "内容未改变"
        } else {
            "Value unchanged"
        }
    }

    pub fn unsupported_language(code: &str) -> String {
        if is_chinese() {
            format!("不支持的语言 '{code}'，已改用英文 (en)")
        } else {
            format!("Unsupported language '{code}', using English (en)")
        }
    }

    pub fn language_changed() -> &'static str {
        if is_chinese() {
            "✓ 语言已切换"
        } else {
            "✓ Language changed"
        }
    }

    pub fn goodbye() -> &'static str {
        if is_chinese() {
            "再见！"
        } else {
            "Goodbye!"
        }
    }
}
