pub mod composite;
pub mod email;
pub mod sms;

pub use composite::CompositeNotifier;
pub use email::EmailNotifier;
pub use sms::SmsNotifier;
