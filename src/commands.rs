//! # Commands Module / 命令模块
//!
//! One module per subcommand, plus the Ctrl-C handling they share.
//!
//! 每个子命令一个模块，以及它们共享的 Ctrl-C 处理。

pub mod fs_oper;
pub mod init;
pub mod run;

use colored::*;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::infra::t;

/// Returns a token that is cancelled when the user presses Ctrl-C.
/// 返回一个在用户按下 Ctrl-C 时被取消的令牌。
pub(crate) fn setup_signal_handler(locale: &str) -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();
    let locale = locale.to_string();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            println!("\n{}", t!("shutdown_signal", locale = &locale).yellow());
            token_clone.cancel();
        }
    });

    token
}

/// The local time shown in the start line of a command.
pub(crate) fn started_at() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
