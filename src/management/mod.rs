mod auth;
mod extremes;

pub use auth::CredentialProvider;
pub use auth::StaticToken;
pub use auth::TokenManager;
pub use auth::credentials;
pub use extremes::ExtremesStore;
