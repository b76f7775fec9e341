use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Book, BookLoaned, BookReturned, Isbn, LoanBecameOverdue, LoanBookError, LoanId, Member,
    MemberId, ReturnBookError,
};

/// Loan集約 - 1冊の書籍の1回の貸出
///
/// 書籍と会員はIDのみで参照する（所有者はそれぞれのリポジトリ）。
/// `book_title` は通知メッセージ用のスナップショット。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub loan_id: LoanId,

    // 他の集約への参照（IDのみ）
    pub isbn: Isbn,
    pub member_id: MemberId,
    pub book_title: String,

    // 貸出管理の責務
    pub loaned_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

impl Loan {
    /// 未返却か
    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }

    /// 返却済みか
    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }
}

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 貸出可能な書籍のみ貸し出せる
/// - 返却期限 = 貸出日時 + 貸出日数
/// - 書籍は貸出不可に変わる
/// - 返却期限が表現可能な日時を超える貸出日数はエラー
///
/// 副作用なし。新しいLoan、更新後のBook、イベントを返す。
pub fn loan_book(
    book: &Book,
    member: &Member,
    loaned_at: DateTime<Utc>,
    loan_days: u32,
) -> Result<(Loan, Book, BookLoaned), LoanBookError> {
    // バリデーション：貸出中の書籍は不可
    if !book.available {
        return Err(LoanBookError::AlreadyLoaned);
    }

    let due_date = Duration::try_days(i64::from(loan_days))
        .and_then(|period| loaned_at.checked_add_signed(period))
        .ok_or(LoanBookError::LoanPeriodOutOfRange)?;

    let loan_id = LoanId::new();

    let loan = Loan {
        loan_id,
        isbn: book.isbn.clone(),
        member_id: member.member_id,
        book_title: book.title.clone(),
        loaned_at,
        due_date,
        returned_at: None,
    };

    let lent_book = Book {
        available: false,
        ..book.clone()
    };

    let event = BookLoaned {
        loan_id,
        isbn: book.isbn.clone(),
        member_id: member.member_id,
        book_title: book.title.clone(),
        loaned_at,
        due_date,
    };

    Ok((loan, lent_book, event))
}

/// 純粋関数：書籍を返却する
///
/// ビジネスルール：
/// - 返却は1回のみ（返却日時は一度設定したら不変）
/// - 延滞していても返却は受け付ける
/// - 書籍は再び貸出可能になる
///
/// 副作用なし。返却済みLoan、更新後のBook、イベントを返す。
pub fn return_book(
    loan: &Loan,
    book: &Book,
    returned_at: DateTime<Utc>,
) -> Result<(Loan, Book, BookReturned), ReturnBookError> {
    // バリデーション：既に返却済みは不可
    if loan.is_returned() {
        return Err(ReturnBookError::AlreadyReturned);
    }

    if loan.isbn != book.isbn {
        return Err(ReturnBookError::BookMismatch);
    }

    let returned_loan = Loan {
        returned_at: Some(returned_at),
        ..loan.clone()
    };

    let returned_book = Book {
        available: true,
        ..book.clone()
    };

    let event = BookReturned {
        loan_id: loan.loan_id,
        isbn: loan.isbn.clone(),
        member_id: loan.member_id,
        returned_at,
        was_overdue: returned_at > loan.due_date,
    };

    Ok((returned_loan, returned_book, event))
}

/// 純粋関数：延滞判定
///
/// - 返却済み：返却日時 > 返却期限
/// - 未返却：now > 返却期限
pub fn is_overdue(loan: &Loan, now: DateTime<Utc>) -> bool {
    match loan.returned_at {
        Some(returned_at) => returned_at > loan.due_date,
        None => now > loan.due_date,
    }
}

/// 純粋関数：未返却の延滞を検出する
///
/// 返却済みの貸出は対象外。延滞していなければNone。
pub fn detect_overdue(loan: &Loan, now: DateTime<Utc>) -> Option<LoanBecameOverdue> {
    if loan.is_returned() || !is_overdue(loan, now) {
        return None;
    }

    Some(LoanBecameOverdue {
        loan_id: loan.loan_id,
        isbn: loan.isbn.clone(),
        member_id: loan.member_id,
        due_date: loan.due_date,
        detected_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixture() -> (Book, Member, DateTime<Utc>) {
        let book = Book::new("Clean Code", "Robert C. Martin", Isbn::from("978-1"));
        let member = Member::new("Ana", MemberId::new(1));
        let loaned_at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        (book, member, loaned_at)
    }

    // TDD: loan_book() のテスト
    #[test]
    fn test_loan_book_creates_loan_with_correct_due_date() {
        let (book, member, loaned_at) = fixture();

        let result = loan_book(&book, &member, loaned_at, 7);
        assert!(result.is_ok());

        let (loan, lent_book, event) = result.unwrap();

        assert_eq!(loan.due_date, loaned_at + Duration::days(7));
        assert_eq!(loan.loaned_at, loaned_at);
        assert_eq!(loan.returned_at, None);
        assert_eq!(loan.isbn, book.isbn);
        assert_eq!(loan.member_id, member.member_id);
        assert_eq!(loan.book_title, "Clean Code");
        assert!(loan.is_open());

        // 書籍は貸出不可になる
        assert!(!lent_book.available);
        assert_eq!(lent_book.title, book.title);

        // イベントの検証
        assert_eq!(event.loan_id, loan.loan_id);
        assert_eq!(event.isbn, book.isbn);
        assert_eq!(event.member_id, member.member_id);
        assert_eq!(event.loaned_at, loaned_at);
        assert_eq!(event.due_date, loan.due_date);
    }

    #[test]
    fn test_loan_book_fails_when_book_unavailable() {
        let (mut book, member, loaned_at) = fixture();
        book.available = false;

        let result = loan_book(&book, &member, loaned_at, 7);
        assert_eq!(result.unwrap_err(), LoanBookError::AlreadyLoaned);
    }

    #[test]
    fn test_loan_book_fails_when_due_date_out_of_range() {
        let (book, member, loaned_at) = fixture();

        // u32の上限付近は日時の表現範囲を超える
        let result = loan_book(&book, &member, loaned_at, 200_000_000);
        assert_eq!(result.unwrap_err(), LoanBookError::LoanPeriodOutOfRange);

        let result = loan_book(&book, &member, loaned_at, u32::MAX);
        assert_eq!(result.unwrap_err(), LoanBookError::LoanPeriodOutOfRange);
    }

    #[test]
    fn test_loan_book_with_zero_days_is_due_immediately() {
        let (book, member, loaned_at) = fixture();

        let (loan, _, _) = loan_book(&book, &member, loaned_at, 0).unwrap();
        assert_eq!(loan.due_date, loaned_at);
        assert!(!is_overdue(&loan, loaned_at));
    }

    // TDD: return_book() のテスト
    #[test]
    fn test_return_book_success() {
        let (book, member, loaned_at) = fixture();
        let (loan, lent_book, _) = loan_book(&book, &member, loaned_at, 7).unwrap();
        let returned_at = loaned_at + Duration::days(3);

        let result = return_book(&loan, &lent_book, returned_at);
        assert!(result.is_ok());

        let (returned_loan, returned_book, event) = result.unwrap();

        assert_eq!(returned_loan.returned_at, Some(returned_at));
        assert!(returned_loan.is_returned());
        assert!(returned_book.available);
        assert!(!event.was_overdue);
        assert_eq!(event.loan_id, loan.loan_id);
    }

    #[test]
    fn test_return_book_detects_overdue() {
        let (book, member, loaned_at) = fixture();
        let (loan, lent_book, _) = loan_book(&book, &member, loaned_at, 7).unwrap();

        let returned_at = loaned_at + Duration::days(10);
        let (_, _, event) = return_book(&loan, &lent_book, returned_at).unwrap();

        assert!(event.was_overdue);
    }

    #[test]
    fn test_return_book_fails_when_already_returned() {
        let (book, member, loaned_at) = fixture();
        let (loan, lent_book, _) = loan_book(&book, &member, loaned_at, 7).unwrap();

        let first_return = loaned_at + Duration::days(1);
        let (loan, returned_book, _) = return_book(&loan, &lent_book, first_return).unwrap();

        // 2回目の返却は失敗し、返却日時は変わらない
        let result = return_book(&loan, &returned_book, first_return + Duration::days(1));
        assert_eq!(result.unwrap_err(), ReturnBookError::AlreadyReturned);
        assert_eq!(loan.returned_at, Some(first_return));
    }

    #[test]
    fn test_return_book_fails_when_book_does_not_match() {
        let (book, member, loaned_at) = fixture();
        let (loan, _, _) = loan_book(&book, &member, loaned_at, 7).unwrap();
        let other = Book::new("Design Patterns", "Erich Gamma", Isbn::from("978-2"));

        let result = return_book(&loan, &other, loaned_at);
        assert_eq!(result.unwrap_err(), ReturnBookError::BookMismatch);
    }

    // TDD: is_overdue() のテスト
    #[test]
    fn test_is_overdue_false_when_before_due_date() {
        let (book, member, loaned_at) = fixture();
        let (loan, _, _) = loan_book(&book, &member, loaned_at, 7).unwrap();

        assert!(!is_overdue(&loan, loaned_at + Duration::days(6)));
        assert!(!is_overdue(&loan, loan.due_date));
    }

    #[test]
    fn test_is_overdue_true_when_after_due_date() {
        let (book, member, loaned_at) = fixture();
        let (loan, _, _) = loan_book(&book, &member, loaned_at, 7).unwrap();

        assert!(is_overdue(&loan, loan.due_date + Duration::seconds(1)));
    }

    #[test]
    fn test_is_overdue_uses_returned_at_when_returned() {
        let (book, member, loaned_at) = fixture();
        let (loan, lent_book, _) = loan_book(&book, &member, loaned_at, 7).unwrap();

        // 期限内に返却：後の時点でも延滞にならない
        let (on_time, _, _) =
            return_book(&loan, &lent_book, loaned_at + Duration::days(2)).unwrap();
        assert!(!is_overdue(&on_time, loaned_at + Duration::days(30)));

        // 期限後に返却：いつ判定しても延滞
        let (late, _, _) = return_book(&loan, &lent_book, loaned_at + Duration::days(8)).unwrap();
        assert!(is_overdue(&late, loaned_at));
    }

    // TDD: detect_overdue() のテスト
    #[test]
    fn test_detect_overdue_returns_event_for_open_overdue_loan() {
        let (book, member, loaned_at) = fixture();
        let (loan, _, _) = loan_book(&book, &member, loaned_at, 7).unwrap();
        let now = loaned_at + Duration::days(9);

        let event = detect_overdue(&loan, now).expect("loan should be overdue");
        assert_eq!(event.loan_id, loan.loan_id);
        assert_eq!(event.due_date, loan.due_date);
        assert_eq!(event.detected_at, now);
    }

    #[test]
    fn test_detect_overdue_ignores_returned_loans() {
        let (book, member, loaned_at) = fixture();
        let (loan, lent_book, _) = loan_book(&book, &member, loaned_at, 7).unwrap();
        let (late, _, _) = return_book(&loan, &lent_book, loaned_at + Duration::days(9)).unwrap();

        assert!(detect_overdue(&late, loaned_at + Duration::days(20)).is_none());
    }
}
