//! パス処理
//!
//! プロンプト入力されたパスの展開

use crate::error::{FileError, NotareError, Result};
use std::path::PathBuf;

/// 入力パスを展開する
///
/// `~` をホームディレクトリに展開し、PathBuf に変換する。
/// 空入力は無効パスとして扱う。
pub fn expand_path(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NotareError::File(FileError::InvalidPath {
            path: input.to_string(),
        }));
    }

    let expanded = shellexpand::tilde(trimmed);
    Ok(PathBuf::from(expanded.as_ref()))
}
