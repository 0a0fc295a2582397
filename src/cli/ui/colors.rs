use colored::Colorize;

use inquire::set_global_render_config;
use inquire::ui::{Color as InquireColor, RenderConfig, StyleSheet, Styled};

/// Installs the prompt theme used by every `inquire` prompt.
pub fn apply_inquire_theme() {
    if std::env::var("NO_COLOR").is_ok() {
        set_global_render_config(RenderConfig::empty());
        return;
    }

    let accent = InquireColor::LightCyan;
    let cfg = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("?").with_fg(accent))
        .with_answered_prompt_prefix(Styled::new(">").with_fg(accent))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(accent))
        .with_selected_option(Some(StyleSheet::new().with_fg(accent)))
        .with_help_message(StyleSheet::new().with_fg(accent))
        .with_answer(StyleSheet::new().with_fg(accent));

    set_global_render_config(cfg);
}

pub fn success(text: &str) -> String {
    text.green().to_string()
}

pub fn error(text: &str) -> String {
    text.red().to_string()
}

pub fn warning(text: &str) -> String {
    text.yellow().to_string()
}

pub fn info(text: &str) -> String {
    text.cyan().to_string()
}

pub fn highlight(text: &str) -> String {
    text.bright_blue().bold().to_string()
}
