pub mod bearer;
pub mod error;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod signup;
pub mod update_email;
pub mod update_password;
pub mod verify_token;

pub use bearer::BearerToken;
pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
pub use signup::signup;
pub use update_email::update_email;
pub use update_password::update_password;
pub use verify_token::verify_token;

use serde::{Deserialize, Serialize};
use spendshare_core::Session;

/// Body returned by every route that opens or rotates a session.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            user_id: session.user_id.into_string(),
            access_token: session.access_token.into_string(),
            refresh_token: session.refresh_token.into_string(),
        }
    }
}
