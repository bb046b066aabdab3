use env_logger::fmt::Formatter;
use log::Record;
use std::io::Write;

/// Initialize the logger: diagnostics go to stderr, bare messages with an
/// emoji marker for warnings and errors. `RUST_LOG` still overrides the
/// default `info` filter.
pub fn init() {
    env_logger::builder()
        .format(format_record)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false)
        .format_level(false)
        .target(env_logger::Target::Stderr)
        .init();
}

fn format_record(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let prefix = match record.level() {
        log::Level::Error => "⛔ ",
        log::Level::Warn => "⚠️ ",
        _ => "",
    };
    writeln!(buf, "{}{}", prefix, record.args())
}
