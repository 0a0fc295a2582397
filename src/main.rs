use clap::Parser;
use hugegraph_prompt::cli::commands::{file, prompts};
use hugegraph_prompt::cli::i18n::texts;
use hugegraph_prompt::cli::ui::warning;
use hugegraph_prompt::cli::{Cli, Commands};
use hugegraph_prompt::AppError;
use std::process;

fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 默认只显示错误日志，避免 INFO 日志干扰命令输出
    let log_level = if cli.global.verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    hugegraph_prompt::cli::ui::apply_inquire_theme();

    if let Some(code) = cli.global.unsupported_language() {
        eprintln!("{}", warning(&texts::unsupported_language(&code)));
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let global = cli.global;
    match cli.command {
        // Default to interactive mode if no command is provided
        None | Some(Commands::Interactive) => hugegraph_prompt::cli::interactive::run(&global),
        Some(Commands::Keys) => prompts::list_keys(),
        Some(Commands::Show) => prompts::show_prompts(&global),
        Some(Commands::Get { key }) => prompts::get_prompt(&global, key),
        Some(Commands::Set {
            key,
            variant,
            value,
            stdin,
        }) => prompts::set_prompt(&global, key, variant.into(), value, stdin),
        Some(Commands::Generate { force }) => file::generate(&global, force),
        Some(Commands::Path) => file::show_path(&global),
        Some(Commands::Completions { shell }) => {
            hugegraph_prompt::cli::generate_completions(shell);
            Ok(())
        }
    }
}
