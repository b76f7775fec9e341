use crate::domain::{Member, MemberId};
use crate::ports::errors::RepositoryError;
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use std::sync::{Mutex, MutexGuard};

/// In-memory implementation of MemberRepository
pub struct MemberRepository {
    members: Mutex<Vec<Member>>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(Vec::new()),
        }
    }

    fn members(&self) -> Result<MutexGuard<'_, Vec<Member>>> {
        self.members
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned("member"))
    }
}

impl Default for MemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberRepositoryTrait for MemberRepository {
    fn add(&self, member: Member) -> Result<()> {
        self.members()?.push(member);
        Ok(())
    }

    fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>> {
        Ok(self
            .members()?
            .iter()
            .find(|m| m.member_id == member_id)
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<Member>> {
        Ok(self.members()?.clone())
    }
}
