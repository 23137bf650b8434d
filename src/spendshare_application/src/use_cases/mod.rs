pub mod authenticate;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod signup;
pub mod update_email;
pub mod update_password;

// Re-export for convenience
pub use authenticate::{AuthenticateError, AuthenticateUseCase};
pub use login::{LoginError, LoginUseCase};
pub use logout::{LogoutError, LogoutUseCase};
pub use refresh::{RefreshError, RefreshUseCase};
pub use signup::{SignupError, SignupUseCase};
pub use update_email::{UpdateEmailError, UpdateEmailUseCase};
pub use update_password::{UpdatePasswordError, UpdatePasswordUseCase};
