use std::sync::Arc;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use uuid::Uuid;

use shared_config::AppConfig;

pub struct TestConfig {
    pub jwt_secret: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "test-secret-key-for-jwt-validation-must-be-long-enough".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            jwt_secret: self.jwt_secret.clone(),
            port: 0,
            admin_email: "admin@example.com".to_string(),
            admin_password: "test-admin-password".to_string(),
            admin_full_name: "Admin User".to_string(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    /// Build a token by hand so tests can control expiry, including tokens
    /// that are already expired (negative ttl).
    pub fn create_test_token(user_id: Uuid, jwt_secret: &str, ttl_hours: i64) -> String {
        type HmacSha256 = Hmac<Sha256>;

        let now = chrono::Utc::now().timestamp();
        let exp = now + ttl_hours * 3600;

        let header = json!({ "alg": "HS256", "typ": "JWT" });
        let claims = json!({
            "sub": user_id.to_string(),
            "iat": now.max(0) as u64,
            "exp": exp.max(0) as u64,
        });

        let header_b64 = URL_SAFE_NO_PAD.encode(header.to_string());
        let claims_b64 = URL_SAFE_NO_PAD.encode(claims.to_string());
        let signing_input = format!("{}.{}", header_b64, claims_b64);

        let mut mac = HmacSha256::new_from_slice(jwt_secret.as_bytes()).unwrap();
        mac.update(signing_input.as_bytes());
        let signature_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        format!("{}.{}", signing_input, signature_b64)
    }
}
