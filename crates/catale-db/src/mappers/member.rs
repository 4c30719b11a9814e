//! Member model -> entity mapper

use catale_core::entities::Member;

use crate::models::MemberModel;

/// The password hash stays in the database layer
impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: model.id,
            email: model.email,
            nickname: model.nickname,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
