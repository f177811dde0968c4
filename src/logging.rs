//! ロギングシステム
//!
//! 開発時のデバッグ出力。環境変数で制御する:
//!
//! * `NOTARE_DEBUG` — 設定されていればデバッグレベルまで出力
//! * `NOTARE_LOG_FILE` — ログを指定ファイルへ追記（stderr は使わない）
//!
//! TUI 表示中の stderr 出力は画面を崩すため、ファイル出力が指定された
//! 場合は stderr へは書かない。

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// ロガー
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    output_stderr: bool,
    output_file: Option<PathBuf>,
}

impl Logger {
    /// 指定レベルで構築（stderr 出力）
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            output_stderr: true,
            output_file: None,
        }
    }

    /// 環境変数から構築
    pub fn from_env() -> Self {
        let level = if std::env::var_os("NOTARE_DEBUG").is_some() {
            LogLevel::Debug
        } else {
            LogLevel::Warning
        };

        match std::env::var_os("NOTARE_LOG_FILE") {
            Some(path) => Self::new(level).with_file_output(PathBuf::from(path)),
            None => Self::new(level),
        }
    }

    /// ログレベルを変更
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// 出力先をファイルに切り替え（stderr は無効化）
    pub fn with_file_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self.output_stderr = false;
        self
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    fn write_line(&self, message: &str) {
        if let Some(path) = &self.output_file {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = writeln!(file, "{}", message);
            }
        } else if self.output_stderr {
            eprintln!("{}", message);
        }
    }

    /// 任意のログレベルでメッセージを出力
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if self.should_log(level) {
            self.write_line(&format!("{}: {}", level.tag(), message.as_ref()));
        }
    }

    /// デバッグログ（呼び出し元情報付き）
    pub fn log_debug(&self, message: impl AsRef<str>, file: &str, line: u32) {
        self.log(
            LogLevel::Debug,
            format!("{} at {}:{}", message.as_ref(), file, line),
        );
    }
}

#[macro_export]
macro_rules! log_debug_here {
    ($logger:expr, $msg:expr) => {
        $logger.log_debug($msg, file!(), line!())
    };
}
