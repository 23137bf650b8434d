pub mod credential_store;
pub mod error;
pub mod orchestrator;
pub mod use_cases;


pub use credential_store::RepositoryCredentialStore;
pub use error::InternalError;
pub use orchestrator::SessionOrchestrator;
pub use use_cases::{
    AuthenticateError, AuthenticateUseCase, LoginError, LoginUseCase, LogoutError, LogoutUseCase,
    RefreshError, RefreshUseCase, SignupError, SignupUseCase, UpdateEmailError,
    UpdateEmailUseCase, UpdatePasswordError, UpdatePasswordUseCase,
};
