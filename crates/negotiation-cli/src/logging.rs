use std::io::Write;

use log::Record;

/// Initialize env_logger, honouring `RUST_LOG` when it is set.
pub fn init_logging(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                describe(record)
            )
        })
        .init();
}

/// Everything after the timestamp: level, target, module path and message.
fn describe(record: &Record<'_>) -> String {
    format!(
        "{} [{}] {} - {}",
        record.level(),
        record.target(),
        record.module_path().unwrap_or("unknown"),
        record.args()
    )
}
