use serde::Deserialize;

/// A forum account as returned by the group member listing. Fields the
/// listing carries beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ForumMember {
    pub username: String,
    #[serde(default)]
    pub moderator: bool,
}

/// One page of `GET /groups/trust_level_0/members`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MembersPage {
    #[serde(default)]
    pub members: Vec<ForumMember>,
    pub meta: MembersMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MembersMeta {
    pub total: usize,
}
