//! 会員への通知メッセージと配信
//!
//! 通知はベストエフォート。配信に失敗しても呼び出し元の操作は取り消さず、
//! 警告ログを残すだけにする。

use crate::domain::{BookLoaned, Fine, LoanBecameOverdue, Member};
use crate::ports::Notifier;

/// 通知の件名と本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub subject: String,
    pub message: String,
}

impl Notice {
    fn new(subject: &str, message: String) -> Self {
        Self {
            subject: subject.to_string(),
            message,
        }
    }
}

/// 会員登録の歓迎メッセージ
pub fn welcome() -> Notice {
    Notice::new(
        "Welcome to the library",
        "You have been registered in our system!".to_string(),
    )
}

/// 貸出確認
pub fn loan_confirmation(event: &BookLoaned) -> Notice {
    Notice::new(
        "Loan confirmed",
        format!(
            "You borrowed the book: {} (due {})",
            event.book_title,
            event.due_date.format("%Y-%m-%d")
        ),
    )
}

/// 延滞金の通知
pub fn late_return_fine(fine: Fine) -> Notice {
    Notice::new("Late return fine", format!("You have a fine of {}", fine))
}

/// 延滞のリマインド（その時点までの延滞金を含む）
pub fn overdue_reminder(event: &LoanBecameOverdue, book_title: &str, accrued: Fine) -> Notice {
    Notice::new(
        "Overdue loan",
        format!(
            "The book {} was due on {}. Fine so far: {}",
            book_title,
            event.due_date.format("%Y-%m-%d"),
            accrued
        ),
    )
}

/// 通知を送る。失敗は警告ログに記録するだけ。
pub fn send(notifier: &dyn Notifier, member: &Member, notice: &Notice) {
    if let Err(e) = notifier.notify(member, &notice.subject, &notice.message) {
        tracing::warn!(
            member_id = %member.member_id,
            subject = %notice.subject,
            error = %e,
            "Notification delivery failed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Isbn, LoanId, MemberId};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_loan_confirmation_mentions_title() {
        let loaned_at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let event = BookLoaned {
            loan_id: LoanId::new(),
            isbn: Isbn::from("978-1"),
            member_id: MemberId::new(1),
            book_title: "Clean Code".to_string(),
            loaned_at,
            due_date: Utc.with_ymd_and_hms(2024, 3, 8, 10, 0, 0).unwrap(),
        };

        let notice = loan_confirmation(&event);
        assert_eq!(notice.subject, "Loan confirmed");
        assert_eq!(notice.message, "You borrowed the book: Clean Code (due 2024-03-08)");
    }

    #[test]
    fn test_late_return_fine_formats_amount() {
        let notice = late_return_fine(Fine::new(3.0));
        assert_eq!(notice.message, "You have a fine of 3.00");
    }
}
