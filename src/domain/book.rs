use serde::{Deserialize, Serialize};

use super::Isbn;

/// 書籍 - カタログの1エントリ
///
/// 不変条件：`available` は貸出中（未返却の貸出がある間）のみ false。
/// 貸出・返却のライフサイクル関数（`domain::loan`）以外からは変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: Isbn,
    pub available: bool,
}

impl Book {
    /// 新規登録された書籍は貸出可能
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: Isbn) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn,
            available: true,
        }
    }
}
