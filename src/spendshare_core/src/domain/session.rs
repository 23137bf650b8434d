use crate::domain::{token::Token, user_id::UserId};

/// The result of a successful signup, login, refresh or credential update.
///
/// Never persisted as a unit; only the refresh token is mirrored in the
/// credential record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub access_token: Token,
    pub refresh_token: Token,
}

impl Session {
    pub fn new(user_id: UserId, access_token: Token, refresh_token: Token) -> Self {
        Self {
            user_id,
            access_token,
            refresh_token,
        }
    }
}
