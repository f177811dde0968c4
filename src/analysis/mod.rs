//! テキスト解析ユーティリティ
//!
//! 空白区切りトークン列に対する単語カウントと部分文字列検索

/// 単語数を数える
///
/// 空白の連続で区切られたトークンの個数。空文字列・空白のみは 0。
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// 単語単位の部分文字列検索
///
/// クエリを小文字化した形を部分文字列として含むトークンの
/// 0始まり単語インデックスを昇順で返す。空クエリは全トークンに
/// マッチする。マッチなしは空のベクタ。
pub fn search(text: &str, query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();

    text.split_whitespace()
        .enumerate()
        .filter(|(_, word)| word.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}
