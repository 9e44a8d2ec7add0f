//! Blog read model

use auth::CurrentUser;
use auth::domain::repository::UserRepository;
use kernel::id::UserId;

use crate::domain::entity::blog::Blog;
use crate::error::BlogResult;

/// A blog together with a minimal view of its owner
///
/// `owner` is `None` when the owner record no longer resolves.
#[derive(Debug, Clone)]
pub struct BlogWithOwner {
    pub blog: Blog,
    pub owner: Option<CurrentUser>,
}

pub(crate) async fn resolve_owner<U>(users: &U, owner_id: &UserId) -> BlogResult<Option<CurrentUser>>
where
    U: UserRepository,
{
    Ok(users.find_by_id(owner_id).await?.map(CurrentUser::from))
}
