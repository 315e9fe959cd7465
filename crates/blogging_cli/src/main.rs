//! Interactive blogging console.
//!
//! # Responsibility
//! - Load `.env` and environment configuration.
//! - Own the single SQLite connection for the whole process.
//! - Run one menu session on stdin/stdout and flush logs on the way out.

use blogging_core::db::open_db;
use blogging_core::{
    flush_logging, init_logging, run_session, AppConfig, BlogService, SqliteBloggingRepository,
};
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is the normal case.
    dotenvy::dotenv().ok();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("blogging: configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("blogging: logging disabled: {err}");
    }

    let code = run(&config);
    info!(
        "event=app_end module=cli status=ok version={}",
        blogging_core::core_version()
    );
    flush_logging();
    code
}

fn run(config: &AppConfig) -> ExitCode {
    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=app_run module=cli status=error error_code=db_unavailable error={err}"
            );
            eprintln!(
                "blogging: cannot open database `{}`: {err}",
                config.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let service = BlogService::new(SqliteBloggingRepository::new(&conn));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&service, stdin.lock(), stdout.lock());

    ExitCode::SUCCESS
}
