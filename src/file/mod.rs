//! ファイルモジュール
//!
//! ファイルI/Oとパス処理の統合モジュール

pub mod io;
pub mod path;

// 公開API
pub use io::{read_file, write_file, FileReader, FileSaver};
pub use path::expand_path;
