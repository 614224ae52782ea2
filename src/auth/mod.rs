pub mod claims;
pub mod error;
pub mod gate;
pub mod jwks;
pub mod jwt;
pub mod middleware;
pub mod utils;

pub use claims::Claims;
pub use error::{AuthError, AuthErrorKind};
pub use gate::AuthGate;
pub use jwks::{HttpKeySetSource, JwksCache, KeySetSource};
pub use jwt::TokenVerifier;
pub use middleware::{AuthenticatedUser, RequiresAuth};
pub use utils::{check_permission, extract_bearer_token, permissions};
