use clap::Parser;
use log::error;
use std::process;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

#[derive(Parser)]
#[command(
    name = "create-app",
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
struct Cli {
    /// Name of the project directory to create; prompted for when omitted.
    #[arg(value_name = "PROJECT_NAME")]
    positionals: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AppArgs {
    pub name: Option<String>,
}

/// Parse the command line, enforcing the zero-or-one positional contract.
pub fn resolve_args() -> AppArgs {
    let cli = Cli::parse();
    let mut positionals = cli.positionals.into_iter();
    let name = positionals.next();
    if positionals.next().is_some() {
        error!("Too many positional arguments. Expected 0 or 1.");
        process::exit(1);
    }
    AppArgs { name }
}
