#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use library_lending::adapters::ManualClock;
use library_lending::adapters::mock::RecordingNotifier;
use library_lending::application::{book, member};
use library_lending::bootstrap::Library;
use library_lending::config::LibraryConfig;
use library_lending::domain::commands::*;
use library_lending::domain::{Isbn, MemberId};
use library_lending::ports::BookRepository;
use std::sync::Arc;

pub const CLEAN_CODE: &str = "978-1";
pub const DESIGN_PATTERNS: &str = "978-2";

/// テスト用のライブラリ一式
///
/// 時計は手動で進め、通知は記録するだけ。
pub struct TestLibrary {
    pub library: Library,
    pub clock: Arc<ManualClock>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
}

pub fn create_test_library() -> TestLibrary {
    create_test_library_with(LibraryConfig::default(), RecordingNotifier::new())
}

pub fn create_test_library_with(config: LibraryConfig, notifier: RecordingNotifier) -> TestLibrary {
    let clock = Arc::new(ManualClock::new(start_time()));
    let notifier = Arc::new(notifier);
    let library = Library::with_notifier(&config, clock.clone(), notifier.clone());

    TestLibrary {
        library,
        clock,
        notifier,
    }
}

/// 書籍2冊と会員2人を登録する（Ana=1, Bruno=2）
pub fn seed(t: &TestLibrary) {
    add(t, "Clean Code", "Robert C. Martin", CLEAN_CODE);
    add(t, "Design Patterns", "Erich Gamma", DESIGN_PATTERNS);
    register(t, "Ana", 1);
    register(t, "Bruno", 2);
}

pub fn add(t: &TestLibrary, title: &str, author: &str, isbn: &str) {
    book::add_book(
        &t.library.books,
        AddBook {
            title: title.to_string(),
            author: author.to_string(),
            isbn: Isbn::from(isbn),
        },
    )
    .expect("add book");
}

pub fn register(t: &TestLibrary, name: &str, id: u32) {
    member::register_member(
        &t.library.members,
        RegisterMember {
            name: name.to_string(),
            member_id: MemberId::new(id),
        },
    )
    .expect("register member");
}

pub fn is_available(t: &TestLibrary, isbn: &str) -> bool {
    t.library
        .loans
        .book_repository
        .find_by_isbn(&Isbn::from(isbn))
        .expect("find book")
        .expect("book exists")
        .available
}

pub fn loan_cmd(member_id: u32, isbn: &str, loan_days: u32) -> LoanBook {
    LoanBook {
        member_id: MemberId::new(member_id),
        isbn: Isbn::from(isbn),
        loan_days,
    }
}

pub fn return_cmd(isbn: &str, member_id: u32) -> ReturnBook {
    ReturnBook {
        isbn: Isbn::from(isbn),
        member_id: MemberId::new(member_id),
    }
}
