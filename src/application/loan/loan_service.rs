use crate::application::notifications;
use crate::domain::{
    self, Book, Fine, FinePolicy, Loan, LoanBookError, LoanId, Member, ReturnBookError,
    commands::*,
};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{LoanApplicationError, Result};
use super::return_outcome::ReturnOutcome;

/// サービスの依存関係
///
/// データ構造として定義し、振る舞いは持たない。
/// 各操作は純粋な関数として依存関係を引数で受け取る。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
    pub member_repository: Arc<dyn MemberRepository>,
    pub loan_repository: Arc<dyn LoanRepository>,
    pub fine_policy: Arc<dyn FinePolicy>,
    pub notifier: Arc<dyn Notifier>,
    pub clock: Arc<dyn Clock>,
}

/// ISBNで書籍を取得するヘルパー関数
pub(super) fn load_book(deps: &ServiceDependencies, isbn: &domain::Isbn) -> Result<Book> {
    deps.book_repository
        .find_by_isbn(isbn)
        .map_err(LoanApplicationError::RepositoryError)?
        .ok_or_else(|| LoanApplicationError::BookNotFound(isbn.clone()))
}

/// 会員IDで会員を取得するヘルパー関数
pub(super) fn load_member(
    deps: &ServiceDependencies,
    member_id: domain::MemberId,
) -> Result<Member> {
    deps.member_repository
        .find_by_id(member_id)
        .map_err(LoanApplicationError::RepositoryError)?
        .ok_or(LoanApplicationError::MemberNotFound(member_id))
}

/// 書籍を貸し出す
///
/// ビジネスルール（この順で検査）：
/// - 書籍が存在すること
/// - 会員が存在すること
/// - 書籍が貸出可能であること
/// - 貸出日数から返却期限を計算できること
///
/// いずれかを満たさない場合はエラーを返し、状態は一切変更しない。
/// 成功時は書籍を貸出中にし、貸出を保存して会員に確認通知を送る。
///
/// # 一貫性保証
///
/// 前提条件の検査と書籍の更新はアトミックではない。
/// 呼び出しは1つずつ順番に行われることを前提とする。
///
/// # 戻り値
/// 成功時は作成された貸出のID
pub fn loan_book(deps: &ServiceDependencies, cmd: LoanBook) -> Result<LoanId> {
    // 1. 書籍の存在確認
    let book = load_book(deps, &cmd.isbn)?;

    // 2. 会員の存在確認
    let member = load_member(deps, cmd.member_id)?;

    // 3. 書籍の貸出可能性確認
    if !book.available {
        return Err(LoanApplicationError::BookNotAvailable(cmd.isbn));
    }

    // 4. ドメイン層の純粋関数を呼び出し
    let loaned_at = deps.clock.now();
    let (loan, lent_book, event) =
        domain::loan::loan_book(&book, &member, loaned_at, cmd.loan_days).map_err(|e| match e {
            LoanBookError::AlreadyLoaned => {
                LoanApplicationError::BookNotAvailable(cmd.isbn.clone())
            }
            LoanBookError::LoanPeriodOutOfRange => {
                LoanApplicationError::LoanPeriodOutOfRange(cmd.loan_days)
            }
        })?;

    // 5. 書籍と貸出を保存
    deps.book_repository
        .update(lent_book)
        .map_err(LoanApplicationError::RepositoryError)?;

    if let Err(e) = deps.loan_repository.add(loan) {
        // 書籍の貸出状態を元に戻す
        if let Err(restore) = deps.book_repository.update(book) {
            tracing::error!(
                isbn = %cmd.isbn,
                error = %restore,
                "Failed to restore book availability"
            );
        }
        return Err(LoanApplicationError::RepositoryError(e));
    }

    tracing::info!(
        loan_id = %event.loan_id,
        isbn = %event.isbn,
        member_id = %event.member_id,
        due_date = %event.due_date,
        "Book loaned"
    );

    // 6. 会員に通知（ベストエフォート）
    notifications::send(
        deps.notifier.as_ref(),
        &member,
        &notifications::loan_confirmation(&event),
    );

    Ok(event.loan_id)
}

/// 書籍を返却する
///
/// 処理フロー：
/// 1. ISBNと会員IDで未返却の貸出を検索（なければ`NotFound`）
/// 2. 貸出を返却済みにし、書籍を貸出可能に戻す
/// 3. 延滞金を計算
/// 4. 延滞金があれば会員に通知
/// 5. `Success { fine }`を返す
///
/// # 一貫性保証
///
/// 手順2は貸出、書籍の順に2回保存する。貸出の保存が確定点で、
/// 以降の手順が失敗しても返却は取り消さない。
/// 書籍の保存に失敗した場合は`Error`を返し、貸出は返却済みのまま、
/// 書籍は貸出不可のまま残る（ログにerrorを出す）。
/// 通知はベストエフォート。
pub fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> ReturnOutcome {
    match try_return_book(deps, &cmd) {
        Ok(Some(fine)) => ReturnOutcome::Success { fine },
        Ok(None) => {
            tracing::debug!(
                isbn = %cmd.isbn,
                member_id = %cmd.member_id,
                "No open loan to return"
            );
            ReturnOutcome::NotFound
        }
        Err(e) => {
            tracing::warn!(
                isbn = %cmd.isbn,
                member_id = %cmd.member_id,
                error = %e,
                "Return failed"
            );
            ReturnOutcome::Error {
                message: e.to_string(),
            }
        }
    }
}

fn try_return_book(deps: &ServiceDependencies, cmd: &ReturnBook) -> Result<Option<Fine>> {
    // 1. 未返却の貸出を検索
    let Some(loan) = deps
        .loan_repository
        .find_open_loan(&cmd.isbn, cmd.member_id)
        .map_err(LoanApplicationError::RepositoryError)?
    else {
        return Ok(None);
    };

    // 2. ドメイン層の純粋関数で返却し、保存する
    let book = load_book(deps, &loan.isbn)?;
    let returned_at = deps.clock.now();
    let (returned_loan, returned_book, event) =
        domain::loan::return_book(&loan, &book, returned_at).map_err(|e| match e {
            ReturnBookError::AlreadyReturned => LoanApplicationError::AlreadyReturned,
            ReturnBookError::BookMismatch => LoanApplicationError::DomainError(e.to_string()),
        })?;

    deps.loan_repository
        .update(returned_loan.clone())
        .map_err(LoanApplicationError::RepositoryError)?;
    deps.book_repository.update(returned_book).map_err(|e| {
        tracing::error!(
            loan_id = %returned_loan.loan_id,
            isbn = %returned_loan.isbn,
            error = %e,
            "Loan returned but book availability not restored"
        );
        LoanApplicationError::RepositoryError(e)
    })?;

    // 3. 延滞金を計算
    let fine = deps.fine_policy.compute_fine(&returned_loan, returned_at);

    tracing::info!(
        loan_id = %event.loan_id,
        isbn = %event.isbn,
        member_id = %event.member_id,
        was_overdue = event.was_overdue,
        fine = %fine,
        "Book returned"
    );

    // 4. 延滞金があれば通知（ベストエフォート）
    if !fine.is_zero() {
        notify_fine(deps, &returned_loan, fine);
    }

    Ok(Some(fine))
}

fn notify_fine(deps: &ServiceDependencies, loan: &Loan, fine: Fine) {
    match load_member(deps, loan.member_id) {
        Ok(member) => {
            notifications::send(
                deps.notifier.as_ref(),
                &member,
                &notifications::late_return_fine(fine),
            );
        }
        Err(e) => {
            tracing::warn!(loan_id = %loan.loan_id, error = %e, "Cannot notify fine");
        }
    }
}

/// 全貸出（返却済みを含む）を追加順で取得する
pub fn list_loans(deps: &ServiceDependencies) -> Result<Vec<Loan>> {
    deps.loan_repository
        .find_all()
        .map_err(LoanApplicationError::RepositoryError)
}
