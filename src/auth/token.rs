//! Issues the signed developer token WeatherKit expects on every request.
//!
//! The token is an ES256 JWT. Besides the registered `kid` header, WeatherKit
//! requires a non-standard `id` header of the form `{team_id}.{service_id}`,
//! which is why the JOSE header is assembled here rather than by `jsonwebtoken`.

use crate::auth::error::TokenError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use bon::builder;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey};
use log::debug;
use serde::Serialize;
use std::fmt;

/// The default validity window of an issued token, in seconds.
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 60 * 60;

/// A signed WeatherKit token together with its validity window.
///
/// A `Credential` is never renewed. Once [`Credential::is_expired`] returns `true`,
/// requests made with it are rejected by WeatherKit and a new client has to be built.
#[derive(Clone, PartialEq)]
pub struct Credential {
    token: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Credential {
    /// The encoded JWT.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the token's `exp` claim lies in the past.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.expires_at
    }

    /// The value of the `Authorization` header carrying this credential.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// Keeps the token itself out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Serialize)]
struct JoseHeader<'a> {
    alg: &'static str,
    kid: &'a str,
    typ: &'static str,
    id: String,
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    sub: &'a str,
    iat: i64,
    exp: i64,
}

/// Signs a new WeatherKit token.
///
/// # Arguments
///
/// * `.team_id(&str)`: **Required.** The Apple developer team identifier (`iss` claim).
/// * `.key_id(&str)`: **Required.** The identifier of the WeatherKit signing key (`kid` header).
/// * `.service_id(&str)`: **Required.** The registered service identifier (`sub` claim).
/// * `.private_key(&str)`: **Required.** The PKCS#8 PEM contents of the `.p8` key file.
/// * `.issued_at(DateTime<Utc>)`: Optional. Defaults to now.
/// * `.lifetime(Duration)`: Optional. Defaults to one hour ([`DEFAULT_TOKEN_LIFETIME_SECS`]).
///
/// # Errors
///
/// Returns [`TokenError::InvalidKey`] if `private_key` cannot be parsed, or
/// [`TokenError::Signing`] if signing fails.
#[builder]
pub fn issue_credential(
    team_id: &str,
    key_id: &str,
    service_id: &str,
    private_key: &str,
    issued_at: Option<DateTime<Utc>>,
    lifetime: Option<Duration>,
) -> Result<Credential, TokenError> {
    let issued_at = issued_at.unwrap_or_else(Utc::now);
    let expires_at =
        issued_at + lifetime.unwrap_or_else(|| Duration::seconds(DEFAULT_TOKEN_LIFETIME_SECS));

    let header = JoseHeader {
        alg: "ES256",
        kid: key_id,
        typ: "JWT",
        id: format!("{}.{}", team_id, service_id),
    };
    let claims = Claims {
        iss: team_id,
        sub: service_id,
        iat: issued_at.timestamp(),
        exp: expires_at.timestamp(),
    };

    let message = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?),
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?)
    );
    let key = EncodingKey::from_ec_pem(private_key.as_bytes()).map_err(TokenError::InvalidKey)?;
    let signature = jsonwebtoken::crypto::sign(message.as_bytes(), &key, Algorithm::ES256)
        .map_err(TokenError::Signing)?;

    debug!(
        "Issued WeatherKit token for {}.{} valid until {}",
        team_id, service_id, expires_at
    );

    Ok(Credential {
        token: format!("{}.{}", message, signature),
        issued_at,
        expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use serde_json::Value;

    const PRIVATE_KEY: &str = include_str!("../../tests/data/test_key.p8");
    const PUBLIC_KEY: &str = include_str!("../../tests/data/test_key_pub.pem");

    fn test_credential() -> Result<Credential, TokenError> {
        issue_credential()
            .team_id("TEAM123456")
            .key_id("KEY7890")
            .service_id("com.example.weather")
            .private_key(PRIVATE_KEY)
            .call()
    }

    fn decode_segment(token: &str, index: usize) -> Result<Value, Box<dyn std::error::Error>> {
        let segment = token.split('.').nth(index).ok_or("missing token segment")?;
        Ok(serde_json::from_slice(&URL_SAFE_NO_PAD.decode(segment)?)?)
    }

    #[test]
    fn test_token_header() -> Result<(), Box<dyn std::error::Error>> {
        let credential = test_credential()?;
        let header = decode_segment(credential.token(), 0)?;
        assert_eq!(header["alg"], "ES256");
        assert_eq!(header["kid"], "KEY7890");
        assert_eq!(header["typ"], "JWT");
        assert_eq!(header["id"], "TEAM123456.com.example.weather");
        Ok(())
    }

    #[test]
    fn test_token_verifies_with_public_key() -> Result<(), Box<dyn std::error::Error>> {
        let credential = test_credential()?;

        let mut validation = Validation::new(Algorithm::ES256);
        validation.set_issuer(&["TEAM123456"]);
        validation.sub = Some("com.example.weather".to_string());
        let key = DecodingKey::from_ec_pem(PUBLIC_KEY.as_bytes())?;
        let data = decode::<Value>(credential.token(), &key, &validation)?;

        let iat = data.claims["iat"].as_i64().ok_or("iat claim")?;
        let exp = data.claims["exp"].as_i64().ok_or("exp claim")?;
        assert_eq!(exp - iat, 3600);
        assert_eq!(iat, credential.issued_at().timestamp());
        assert_eq!(exp, credential.expires_at().timestamp());
        Ok(())
    }

    #[test]
    fn test_custom_issue_time_and_lifetime() -> Result<(), Box<dyn std::error::Error>> {
        let issued_at = Utc.with_ymd_and_hms(2022, 11, 18, 16, 0, 0).unwrap();
        let credential = issue_credential()
            .team_id("TEAM123456")
            .key_id("KEY7890")
            .service_id("com.example.weather")
            .private_key(PRIVATE_KEY)
            .issued_at(issued_at)
            .lifetime(Duration::minutes(20))
            .call()?;

        let claims = decode_segment(credential.token(), 1)?;
        assert_eq!(claims["iss"], "TEAM123456");
        assert_eq!(claims["sub"], "com.example.weather");
        assert_eq!(claims["iat"], issued_at.timestamp());
        assert_eq!(claims["exp"], issued_at.timestamp() + 20 * 60);

        assert!(credential.is_expired());
        assert!(!credential.is_expired_at(issued_at + Duration::minutes(19)));
        assert!(credential.is_expired_at(issued_at + Duration::minutes(20)));
        Ok(())
    }

    #[test]
    fn test_fresh_credential_is_not_expired() -> Result<(), TokenError> {
        let credential = test_credential()?;
        assert!(!credential.is_expired());
        assert!(credential.authorization_header().starts_with("Bearer ey"));
        Ok(())
    }

    #[test]
    fn test_invalid_key() {
        let err = issue_credential()
            .team_id("TEAM123456")
            .key_id("KEY7890")
            .service_id("com.example.weather")
            .private_key("not a key")
            .call()
            .unwrap_err();
        assert!(matches!(err, TokenError::InvalidKey(_)));
    }

    #[test]
    fn test_debug_hides_token() -> Result<(), TokenError> {
        let credential = test_credential()?;
        let debug = format!("{:?}", credential);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains(credential.token()));
        Ok(())
    }
}
