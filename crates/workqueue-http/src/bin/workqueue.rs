//! workqueue CLI binary

use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use workqueue::{ClientConfig, telemetry};
use workqueue_http::cli::{execute, report};
use workqueue_http::flags::FlagParser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    telemetry::init();
    let config = ClientConfig::from_env();
    let flags = FlagParser::new(std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()));

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let result = execute(&flags, &config, cancel).await;
    ExitCode::from(report(result, &mut std::io::stdout()))
}
