mod errors;
mod member_service;

pub use errors::{MemberApplicationError, Result};
pub use member_service::{ServiceDependencies, list_members, register_member};
