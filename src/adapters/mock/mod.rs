pub mod notifier;

pub use notifier::{RecordingNotifier, SentNotification};
