use crate::application::notifications;
use crate::domain::{self, LoanBecameOverdue};

use super::errors::{LoanApplicationError, Result};
use super::loan_service::{ServiceDependencies, load_member};

/// 延滞検出バッチ
///
/// 未返却の貸出のうち、現在時刻で返却期限を過ぎたものを検出し、
/// 会員にその時点までの延滞金を含むリマインドを送る。
///
/// ビジネスルール：
/// - 返却済みの貸出は対象外
/// - 状態を持たないため、実行するたびに同じ貸出を再通知する
///
/// # 戻り値
/// 検出した延滞のイベント（貸出の追加順）
pub fn detect_overdue_loans(deps: &ServiceDependencies) -> Result<Vec<LoanBecameOverdue>> {
    let now = deps.clock.now();

    // 1. 未返却の貸出を取得
    let open_loans = deps
        .loan_repository
        .find_open_loans()
        .map_err(LoanApplicationError::RepositoryError)?;

    let mut detected = Vec::new();

    // 2. 各貸出について延滞判定
    for loan in open_loans {
        let Some(event) = domain::loan::detect_overdue(&loan, now) else {
            continue;
        };

        let accrued = deps.fine_policy.compute_fine(&loan, now);

        tracing::info!(
            loan_id = %event.loan_id,
            isbn = %event.isbn,
            member_id = %event.member_id,
            due_date = %event.due_date,
            accrued = %accrued,
            "Loan became overdue"
        );

        // 2.1. 会員にリマインド（ベストエフォート）
        match load_member(deps, loan.member_id) {
            Ok(member) => {
                notifications::send(
                    deps.notifier.as_ref(),
                    &member,
                    &notifications::overdue_reminder(&event, &loan.book_title, accrued),
                );
            }
            Err(e) => {
                tracing::warn!(loan_id = %loan.loan_id, error = %e, "Cannot send overdue reminder");
            }
        }

        detected.push(event);
    }

    Ok(detected)
}
