use crate::adapters::memory::{
    BookRepository as InMemoryBookRepository, LoanRepository as InMemoryLoanRepository,
    MemberRepository as InMemoryMemberRepository,
};
use crate::adapters::notifier::{CompositeNotifier, EmailNotifier, SmsNotifier};
use crate::application::{book, loan, member};
use crate::config::{LibraryConfig, NotificationChannel};
use crate::domain::DailyRateFinePolicy;
use crate::ports::{BookRepository, Clock, LoanRepository, MemberRepository, Notifier};
use std::sync::Arc;

/// 配線済みの3つのサービス依存関係
///
/// 3つのサービスは同じリポジトリを共有する。
#[derive(Clone)]
pub struct Library {
    pub books: book::ServiceDependencies,
    pub members: member::ServiceDependencies,
    pub loans: loan::ServiceDependencies,
}

impl Library {
    /// インメモリのリポジトリと設定されたチャネルで組み立てる
    pub fn in_memory(config: &LibraryConfig, clock: Arc<dyn Clock>) -> Self {
        Self::with_notifier(config, clock, build_notifier(&config.channels))
    }

    /// 通知を差し替えて組み立てる
    pub fn with_notifier(
        config: &LibraryConfig,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let book_repository: Arc<dyn BookRepository> = Arc::new(InMemoryBookRepository::new());
        let member_repository: Arc<dyn MemberRepository> =
            Arc::new(InMemoryMemberRepository::new());
        let loan_repository: Arc<dyn LoanRepository> = Arc::new(InMemoryLoanRepository::new());

        Self {
            books: book::ServiceDependencies {
                book_repository: book_repository.clone(),
            },
            members: member::ServiceDependencies {
                member_repository: member_repository.clone(),
                notifier: notifier.clone(),
            },
            loans: loan::ServiceDependencies {
                book_repository,
                member_repository,
                loan_repository,
                fine_policy: Arc::new(DailyRateFinePolicy::new(config.daily_fine_rate)),
                notifier,
                clock,
            },
        }
    }
}

/// 設定されたチャネルを順に配信するNotifierを作る
pub fn build_notifier(channels: &[NotificationChannel]) -> Arc<dyn Notifier> {
    let notifiers = channels
        .iter()
        .map(|channel| -> Arc<dyn Notifier> {
            match channel {
                NotificationChannel::Email => Arc::new(EmailNotifier::new()),
                NotificationChannel::Sms => Arc::new(SmsNotifier::new()),
            }
        })
        .collect();

    Arc::new(CompositeNotifier::new(notifiers))
}
