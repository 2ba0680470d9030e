//! Dashboard login and signed session tokens.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Separates the e-mail from the expiry inside the signed payload.
const PAYLOAD_SEPARATOR: char = '|';

/// Hashes a password with HMAC-SHA256 keyed by the signing secret.
///
/// Returns a 64-character lowercase hex string, the format expected in
/// `AUTH_PASSWORD_HASH`.
pub fn hash_password(signing_secret: &str, password: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(signing_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(password.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// The single dashboard account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    /// Hex HMAC of the password, see [`hash_password`].
    pub password_hash: String,
}

/// An authenticated request context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// A freshly issued token and its expiry.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Checks credentials and issues stateless session tokens.
///
/// A token is `base64url(email|expiry).hex(hmac)`, signed with the server
/// secret. Nothing is stored server-side, so logout only clears the cookie
/// and a token stays valid until it expires.
pub struct AuthService {
    signing_secret: String,
    credentials: Option<Credentials>,
    session_ttl: Duration,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `signing_secret` - HMAC key for passwords and session tokens
    /// - `credentials` - the dashboard account; `None` disables login
    /// - `session_ttl` - lifetime of issued tokens
    pub fn new(
        signing_secret: String,
        credentials: Option<Credentials>,
        session_ttl: Duration,
    ) -> Self {
        Self {
            signing_secret,
            credentials,
            session_ttl,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length")
    }

    /// Checks an e-mail/password pair and issues a session on success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if login is not configured or the
    /// credentials do not match.
    pub fn login(&self, email: &str, password: &str) -> Result<IssuedSession, AppError> {
        let Some(credentials) = &self.credentials else {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Login is not configured"}),
            ));
        };

        let email_matches = credentials.email.eq_ignore_ascii_case(email.trim());
        let password_matches = hex::decode(&credentials.password_hash)
            .map(|expected| {
                let mut mac = self.mac();
                mac.update(password.as_bytes());
                mac.verify_slice(&expected).is_ok()
            })
            .unwrap_or(false);

        if !(email_matches && password_matches) {
            tracing::warn!("Rejected login attempt");
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid email or password"}),
            ));
        }

        Ok(self.issue(&credentials.email, Utc::now()))
    }

    /// Issues a token for `email` valid for the configured TTL from `now`.
    pub fn issue(&self, email: &str, now: DateTime<Utc>) -> IssuedSession {
        let expires_at = now + self.session_ttl;
        let payload = URL_SAFE_NO_PAD.encode(format!(
            "{email}{PAYLOAD_SEPARATOR}{}",
            expires_at.timestamp()
        ));

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        IssuedSession {
            token: format!("{payload}.{signature}"),
            expires_at,
        }
    }

    /// Verifies a token's signature and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for malformed, forged or expired
    /// tokens.
    pub fn verify(&self, token: &str) -> Result<Session, AppError> {
        self.verify_at(token, Utc::now())
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Session, AppError> {
        let invalid = || {
            AppError::unauthorized("Unauthorized", json!({"reason": "Invalid or expired token"}))
        };

        let (payload, signature) = token.split_once('.').ok_or_else(invalid)?;
        let signature = hex::decode(signature).map_err(|_| invalid())?;

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).map_err(|_| invalid())?;

        let decoded = URL_SAFE_NO_PAD.decode(payload).map_err(|_| invalid())?;
        let decoded = String::from_utf8(decoded).map_err(|_| invalid())?;
        let (email, expiry) = decoded
            .rsplit_once(PAYLOAD_SEPARATOR)
            .ok_or_else(invalid)?;
        let expiry: i64 = expiry.parse().map_err(|_| invalid())?;
        let expires_at = DateTime::<Utc>::from_timestamp(expiry, 0).ok_or_else(invalid)?;

        if expires_at <= now {
            return Err(invalid());
        }

        Ok(Session {
            email: email.to_string(),
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    fn service() -> AuthService {
        AuthService::new(
            test_secret(),
            Some(Credentials {
                email: "admin@example.com".to_string(),
                password_hash: hash_password(&test_secret(), "hunter2"),
            }),
            Duration::hours(1),
        )
    }

    #[test]
    fn test_login_success() {
        let issued = service().login("Admin@Example.com", "hunter2").unwrap();

        let session = service().verify(&issued.token).unwrap();
        assert_eq!(session.email, "admin@example.com");
        assert_eq!(session.expires_at.timestamp(), issued.expires_at.timestamp());
    }

    #[test]
    fn test_login_wrong_password() {
        let result = service().login("admin@example.com", "hunter3");

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_login_disabled_without_credentials() {
        let service = AuthService::new(test_secret(), None, Duration::hours(1));

        assert!(service.login("admin@example.com", "hunter2").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();
        let issued = service.issue("admin@example.com", Utc::now() - Duration::hours(2));

        assert!(service.verify(&issued.token).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = service();
        let issued = service.issue("admin@example.com", Utc::now());
        let (_, signature) = issued.token.split_once('.').unwrap();
        let forged_payload = URL_SAFE_NO_PAD.encode("intruder@example.com|9999999999");

        assert!(service.verify(&format!("{forged_payload}.{signature}")).is_err());
        assert!(service.verify("garbage").is_err());
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_secret_matters() {
        let issued = service().issue("admin@example.com", Utc::now());
        let other = AuthService::new("secret-b".to_string(), None, Duration::hours(1));

        assert!(other.verify(&issued.token).is_err());
    }

    #[test]
    fn test_hash_password_consistency() {
        let hash1 = hash_password("secret-a", "password");
        let hash2 = hash_password("secret-a", "password");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
        assert_ne!(hash1, hash_password("secret-b", "password"));
    }
}
