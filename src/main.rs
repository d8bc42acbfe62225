use std::io;

use interactive_calculator::run;
use tracing_subscriber::EnvFilter;

fn main() {
    // Логи в stderr, чтобы stdout содержал только диалог. Фильтр из RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Ошибка: {e}");
        std::process::exit(1);
    }
}
