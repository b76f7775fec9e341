use chrono::Duration;
use library_lending::{
    adapters::{ManualClock, SystemClock},
    application::{
        book::add_book,
        loan::{ReturnOutcome, detect_overdue_loans, list_loans, loan_book, return_book},
        member::register_member,
    },
    bootstrap::Library,
    config::LibraryConfig,
    domain::{Isbn, MemberId, commands::*},
};
use library_lending::ports::Clock;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_lending=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = LibraryConfig::load()?;
    tracing::info!(?config, "Configuration loaded");

    // The demo drives time by hand to simulate a late return
    let clock = Arc::new(ManualClock::new(SystemClock.now()));
    let library = Library::in_memory(&config, clock.clone());

    for (title, author, isbn) in [
        ("Clean Code", "Robert C. Martin", "978-0132350884"),
        ("Design Patterns", "Erich Gamma", "978-0201633610"),
    ] {
        add_book(
            &library.books,
            AddBook {
                title: title.to_string(),
                author: author.to_string(),
                isbn: Isbn::from(isbn),
            },
        )?;
    }

    for (name, id) in [("João Silva", 1), ("Maria Oliveira", 2)] {
        register_member(
            &library.members,
            RegisterMember {
                name: name.to_string(),
                member_id: MemberId::new(id),
            },
        )?;
    }

    let isbn = Isbn::from("978-0132350884");
    let member_id = MemberId::new(1);

    loan_book(
        &library.loans,
        LoanBook {
            member_id,
            isbn: isbn.clone(),
            loan_days: config.default_loan_days,
        },
    )?;

    // Three days past the due date
    Duration::try_days(i64::from(config.default_loan_days) + 3)
        .and_then(|late| clock.advance(late))
        .ok_or("demo clock cannot move past the due date")?;
    detect_overdue_loans(&library.loans)?;

    match return_book(&library.loans, ReturnBook { isbn, member_id }) {
        ReturnOutcome::Success { fine } => println!("Late return fine: {}", fine),
        ReturnOutcome::NotFound => println!("Error: loan not found"),
        ReturnOutcome::Error { message } => println!("Error: {}", message),
    }

    println!("{}", serde_json::to_string_pretty(&list_loans(&library.loans)?)?);

    Ok(())
}
