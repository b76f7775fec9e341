use serde::{Deserialize, Serialize};

use super::MemberId;

/// 会員。作成後は不変。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub member_id: MemberId,
}

impl Member {
    pub fn new(name: impl Into<String>, member_id: MemberId) -> Self {
        Self {
            name: name.into(),
            member_id,
        }
    }
}
