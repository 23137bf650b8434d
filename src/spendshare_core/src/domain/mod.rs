pub mod credential;
pub mod email;
pub mod format;
pub mod password;
pub mod session;
pub mod token;
pub mod user_id;
