use crate::application::notifications;
use crate::domain::{Member, MemberRegistered, commands::RegisterMember};
use crate::ports::{MemberRepository, Notifier};
use std::sync::Arc;

use super::errors::{MemberApplicationError, Result};

/// サービスの依存関係
#[derive(Clone)]
pub struct ServiceDependencies {
    pub member_repository: Arc<dyn MemberRepository>,
    pub notifier: Arc<dyn Notifier>,
}

/// 会員を登録し、歓迎メッセージを送る
///
/// 会員IDの重複は検査しない。通知の失敗は登録を取り消さない。
pub fn register_member(
    deps: &ServiceDependencies,
    cmd: RegisterMember,
) -> Result<MemberRegistered> {
    let member = Member::new(cmd.name, cmd.member_id);

    deps.member_repository
        .add(member.clone())
        .map_err(MemberApplicationError::RepositoryError)?;

    notifications::send(deps.notifier.as_ref(), &member, &notifications::welcome());

    tracing::info!(member_id = %member.member_id, "Member registered: {}", member.name);

    Ok(MemberRegistered {
        member_id: member.member_id,
        name: member.name,
    })
}

/// 全会員を追加順で取得する
pub fn list_members(deps: &ServiceDependencies) -> Result<Vec<Member>> {
    deps.member_repository
        .find_all()
        .map_err(MemberApplicationError::RepositoryError)
}
