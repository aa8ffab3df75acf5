use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried in the bearer token. The token encodes only the user id;
/// everything else about the caller is looked up from the user store.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
}

/// The authenticated caller, inserted into request extensions by the
/// auth middleware after token validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
}
