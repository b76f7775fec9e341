use serde::{Deserialize, Serialize};

use super::{Isbn, MemberId};

/// コマンド：書籍をカタログに追加する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBook {
    pub title: String,
    pub author: String,
    pub isbn: Isbn,
}

/// コマンド：会員を登録する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterMember {
    pub name: String,
    pub member_id: MemberId,
}

/// コマンド：書籍を貸し出す
///
/// 貸出時刻は呼び出し側ではなくサービスのClockから取得する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanBook {
    pub member_id: MemberId,
    pub isbn: Isbn,
    pub loan_days: u32,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub isbn: Isbn,
    pub member_id: MemberId,
}
