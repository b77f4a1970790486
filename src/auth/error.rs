use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Private key is not a valid PKCS#8 PEM encoded EC key")]
    InvalidKey(#[source] jsonwebtoken::errors::Error),

    #[error("Failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("Failed to encode token segment")]
    SegmentEncoding(#[from] serde_json::Error),
}
