//! Authentication provider contract.
//!
//! pogo doesn't log players in itself. The game accepts tokens from more
//! than one identity provider (PTC accounts, Google accounts), each with
//! its own login dance. The session only needs three things from any of
//! them, captured by the [`AuthProvider`] trait:
//!
//! - perform (or refresh) a login,
//! - name the provider, as the server expects it in the envelope,
//! - hand over the current access token.
//!
//! Keeping this a trait means a new login mechanism, or a mock in tests,
//! plugs in without touching the session.

use std::future::Future;

use crate::SessionError;

/// Something that can log a player in and vouch for them afterwards.
///
/// # Trait bounds
///
/// - `Send + Sync` → a provider is shared with the session through an
///   `Arc` and may be used from whichever tokio worker drives the session.
/// - `'static` → it doesn't borrow temporary data.
///
/// # Example
///
/// ```rust
/// use pogo_session::{AuthProvider, SessionError};
///
/// /// Logs in by reading a token from the environment.
/// struct EnvProvider;
///
/// impl AuthProvider for EnvProvider {
///     async fn login(&self) -> Result<(), SessionError> {
///         std::env::var("POGO_TOKEN")
///             .map(|_| ())
///             .map_err(|_| SessionError::AuthFailed("POGO_TOKEN not set".into()))
///     }
///
///     fn provider_string(&self) -> String {
///         "ptc".into()
///     }
///
///     fn access_token(&self) -> String {
///         std::env::var("POGO_TOKEN").unwrap_or_default()
///     }
/// }
/// ```
pub trait AuthProvider: Send + Sync + 'static {
    /// Logs in with the provider, storing whatever token it obtains.
    ///
    /// # Returns
    /// - `Ok(())` — a token is now available from [`access_token`](Self::access_token)
    /// - `Err(SessionError::AuthFailed)` — credentials rejected or provider
    ///   unreachable
    fn login(&self) -> impl Future<Output = Result<(), SessionError>> + Send;

    /// The provider name sent in the envelope's auth block (`"ptc"`,
    /// `"google"`).
    fn provider_string(&self) -> String;

    /// The current access token. Read on every call, never cached by the
    /// session.
    fn access_token(&self) -> String;
}

/// An [`AuthProvider`] for a token that was obtained elsewhere.
///
/// Useful when login happens out of process (a separate OAuth flow, a
/// token cached on disk) and in tests.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    provider: String,
    token: String,
}

impl StaticTokenProvider {
    pub fn new(provider: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            token: token.into(),
        }
    }
}

impl AuthProvider for StaticTokenProvider {
    async fn login(&self) -> Result<(), SessionError> {
        if self.token.is_empty() {
            return Err(SessionError::AuthFailed(format!(
                "no access token configured for provider {}",
                self.provider
            )));
        }
        Ok(())
    }

    fn provider_string(&self) -> String {
        self.provider.clone()
    }

    fn access_token(&self) -> String {
        self.token.clone()
    }
}
