//! # Spendshare - Credential and Session Service
//!
//! Facade crate that re-exports the public APIs of the spendshare auth
//! components: signup, login, token refresh, logout, and email/password
//! changes for the expense-sharing backend.
//!
//! ## Structure
//!
//! - **Core domain types**: `UserId`, `Email`, `Password`, `Token`, `Session`, etc.
//! - **Ports**: `CredentialStore`, `CredentialRepository`, `TokenService`, `PasswordHasher`
//! - **Compensating transactions**: `CompensatingTransaction`, `SnapshotTransaction`
//! - **Use cases**: `SignupUseCase`, `LoginUseCase`, etc., composed by `SessionOrchestrator`
//! - **Adapters**: `JwtTokenService`, `Argon2PasswordHasher`, `PostgresCredentialRepository`, etc.
//! - **Service**: `AuthService` - the HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use spendshare_core::*;
}

// Re-export most commonly used core types at the root level
pub use spendshare_core::{
    Clock, CredentialRecord, Email, FormatError, Password, PasswordHash, Session, SystemClock,
    Token, TokenKind, UserId,
};

// ============================================================================
// Ports
// ============================================================================

pub use spendshare_core::{
    BoxedTransaction, CompensatingTransaction, CredentialRepository, CredentialStore,
    CredentialStoreError, PasswordHasher, PasswordHasherError, TokenError, TokenService,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use spendshare_application::*;
}

pub use spendshare_application::{
    AuthenticateError, InternalError, LoginError, LogoutError, RefreshError,
    RepositoryCredentialStore, SessionOrchestrator, SignupError, UpdateEmailError,
    UpdatePasswordError,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Token issuing and validation
    pub mod authentication {
        pub use spendshare_adapters::authentication::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use spendshare_adapters::hashing::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use spendshare_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use spendshare_adapters::config::*;
    }
}

pub use spendshare_adapters::{
    Argon2PasswordHasher, HashMapCredentialRepository, JwtTokenService,
    PostgresCredentialRepository, Settings, TokenSettings,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use spendshare_auth_service::{AuthApiError, AuthService, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
