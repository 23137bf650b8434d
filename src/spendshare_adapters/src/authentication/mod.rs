pub mod jwt_token_service;

pub use jwt_token_service::{Claims, JwtTokenService, TokenSettings};
