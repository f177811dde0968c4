//! ファイルI/O操作
//!
//! UTF-8テキストファイルの読み込みと保存。読み込み時に改行コードを
//! LF に統一し、保存はバッファ内容をそのまま書き出す（末尾改行の
//! 付加はしない）。LF のみの内容なら保存→読み込みはバイト単位で
//! 一致する。

use crate::error::{io_error_for_path, FileError, NotareError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// ファイル読み込み処理
pub struct FileReader;

impl FileReader {
    pub fn new() -> Self {
        Self
    }

    /// ファイル内容を読み込み
    ///
    /// パスが存在しない・読めない場合はエラー。ディレクトリは無効パス。
    pub fn read_file(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(NotareError::File(FileError::NotFound {
                path: path.display().to_string(),
            }));
        }

        if path.is_dir() {
            return Err(NotareError::File(FileError::InvalidPath {
                path: path.display().to_string(),
            }));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| NotareError::File(io_error_for_path(e, path)))?;

        Ok(normalize_to_lf(&content))
    }
}

impl Default for FileReader {
    fn default() -> Self {
        Self::new()
    }
}

/// ファイル保存処理
pub struct FileSaver {
    atomic_save: bool,
}

impl FileSaver {
    pub fn new() -> Self {
        Self { atomic_save: true }
    }

    /// ファイルを保存
    ///
    /// 既存ファイルは上書き。内容はバッファのバイト列そのまま。
    pub fn save_file(&self, path: &Path, content: &str) -> Result<()> {
        if content.contains('\r') {
            log::warn!("Non-LF line endings in buffer, saving as-is");
        }

        if self.atomic_save {
            self.atomic_save_impl(path, content)
        } else {
            self.direct_save_impl(path, content)
        }
    }

    /// アトミック保存（一時ファイル経由）
    fn atomic_save_impl(&self, path: &Path, content: &str) -> Result<()> {
        let temp_path = self.generate_temp_path(path)?;

        fs::write(&temp_path, content.as_bytes())
            .map_err(|e| NotareError::File(io_error_for_path(e, &temp_path)))?;

        // 原子的にリネーム。失敗時は一時ファイル削除を試行
        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            NotareError::File(io_error_for_path(e, path))
        })?;

        Ok(())
    }

    /// 直接保存
    fn direct_save_impl(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content.as_bytes())
            .map_err(|e| NotareError::File(io_error_for_path(e, path)))
    }

    fn generate_temp_path(&self, original: &Path) -> Result<PathBuf> {
        let parent = original.parent().ok_or_else(|| {
            NotareError::File(FileError::InvalidPath {
                path: original.display().to_string(),
            })
        })?;

        let filename = original.file_name().ok_or_else(|| {
            NotareError::File(FileError::InvalidPath {
                path: original.display().to_string(),
            })
        })?;

        // 一意な一時ファイル名生成
        let temp_name = format!(".{}_{}", filename.to_string_lossy(), std::process::id());

        Ok(parent.join(temp_name))
    }
}

impl Default for FileSaver {
    fn default() -> Self {
        Self::new()
    }
}

/// 改行コードをLFに統一
pub fn normalize_to_lf(content: &str) -> String {
    if !content.contains('\r') {
        return content.to_string();
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// ファイル読み込みの便利関数
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    FileReader::new().read_file(path.as_ref())
}

/// ファイル書き込みの便利関数
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    FileSaver::new().save_file(path.as_ref(), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        let content = "Hello, World!\nこんにちは！";

        write_file(&file_path, content).unwrap();
        let read_content = read_file(&file_path).unwrap();
        assert_eq!(read_content, content);

        // バイト単位で一致（末尾改行は付加されない）
        let raw = fs::read(&file_path).unwrap();
        assert_eq!(raw, content.as_bytes());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nonexistent.txt");

        match read_file(&file_path) {
            Err(NotareError::File(FileError::NotFound { .. })) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_directory_fails() {
        let temp_dir = TempDir::new().unwrap();

        match read_file(temp_dir.path()) {
            Err(NotareError::File(FileError::InvalidPath { .. })) => {}
            other => panic!("Expected InvalidPath, got {:?}", other),
        }
    }

    #[test]
    fn test_line_ending_normalization_on_read() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("crlf.txt");

        fs::write(&file_path, "line1\r\nline2\rline3").unwrap();
        let content = read_file(&file_path).unwrap();
        assert_eq!(content, "line1\nline2\nline3");
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        write_file(&file_path, "first").unwrap();
        write_file(&file_path, "second").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "second");

        // 一時ファイルが残っていない
        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with('.'))
            .collect();
        assert!(leftovers.is_empty());
    }
}
