//! API key validation and the request-scoped principal.

use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Name of the OpenAPI security scheme for the API key.
pub const API_KEY_SCHEME: &str = "ApiKeyAuth";

/// Principal reported for every authenticated API key client.
pub const API_CLIENT_PRINCIPAL: &str = "api-client";

/// Path prefixes served without authentication.
pub const PUBLIC_PATH_PREFIXES: [&str; 3] = ["/swagger-ui", "/v3/api-docs", "/api-docs"];

/// Returns true if `path` belongs to the documentation endpoints.
#[must_use]
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Authority granted to an authenticated client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Read access to the API.
    ApiUser,
}

impl Role {
    /// Authority name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiUser => "ROLE_API_USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SHA-256 of a key, hex encoded.
fn hash_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// An authenticated API key client.
///
/// Lives in the extensions of a single request and is dropped with it.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyPrincipal {
    api_key: String,
    fingerprint: String,
}

impl ApiKeyPrincipal {
    fn new(api_key: &str, key_hash: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            fingerprint: key_hash[..8].to_string(),
        }
    }

    /// The validated key.
    #[must_use]
    pub fn credentials(&self) -> &str {
        &self.api_key
    }

    /// Fixed principal shared by all key holders.
    #[must_use]
    pub fn principal(&self) -> &'static str {
        API_CLIENT_PRINCIPAL
    }

    /// Name safe for logs: `api-client-` followed by a digest prefix.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}-{}", API_CLIENT_PRINCIPAL, self.fingerprint)
    }

    /// The single authority every API key carries.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::ApiUser
    }

    /// Whether this principal holds `role`.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role() == role
    }
}

impl fmt::Debug for ApiKeyPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyPrincipal")
            .field("name", &self.name())
            .field("role", &self.role())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Set of valid API keys, held as digests.
#[derive(Debug, Default, Clone)]
pub struct ApiKeyStore {
    key_hashes: HashSet<String>,
}

impl ApiKeyStore {
    /// Builds the store from configured keys. Empty entries are skipped.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key_hashes = keys
            .into_iter()
            .filter(|key| !key.as_ref().is_empty())
            .map(|key| hash_key(key.as_ref()))
            .collect();

        Self { key_hashes }
    }

    /// Validates a raw key, returning a principal on exact match.
    #[must_use]
    pub fn authenticate(&self, raw_key: &str) -> Option<ApiKeyPrincipal> {
        let key_hash = hash_key(raw_key);
        self.key_hashes
            .contains(&key_hash)
            .then(|| ApiKeyPrincipal::new(raw_key, &key_hash))
    }

    /// Number of configured keys.
    pub fn len(&self) -> usize {
        self.key_hashes.len()
    }

    /// Check if no keys are configured.
    pub fn is_empty(&self) -> bool {
        self.key_hashes.is_empty()
    }
}
