use crate::config::Config;
use env_logger::{Env, Target};
use std::fs::{self, OpenOptions};

/// Logs to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_stderr() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();
}

/// The TUI owns the terminal, so its log lines go to a file under the data dir.
pub fn init_file() {
    let log_path = Config::data_dir().join("foldersweep.log");
    let file = fs::create_dir_all(Config::data_dir()).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
    });

    match file {
        Ok(file) => {
            let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
                .format_timestamp_secs()
                .target(Target::Pipe(Box::new(file)))
                .try_init();
        }
        Err(_) => {
            // Nowhere safe to write; stay silent rather than draw over the UI.
            let _ = env_logger::Builder::from_env(Env::default().default_filter_or("off"))
                .target(Target::Pipe(Box::new(std::io::sink())))
                .try_init();
        }
    }
}
