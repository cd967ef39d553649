//! Optional host-application integration (share-target picker).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use log::{error, info};

use super::types::ShareError;

/// Sentinel credential value shipped in the default configuration.
pub const HOST_CREDENTIAL_UNSET: &str = "YOUR_HOST_ID";

/// Capabilities exposed by a host application the tool may be embedded in.
#[async_trait]
pub trait HostIntegration: Send + Sync {
    /// Identity/session handshake. Must succeed before the host is trusted.
    async fn init(&self, credential: &str) -> Result<(), ShareError>;

    /// Whether the tool is running inside the expected host.
    fn is_in_client(&self) -> bool;

    /// Whether the host user is authenticated.
    fn is_logged_in(&self) -> bool;

    /// Display name of the authenticated user.
    async fn profile_name(&self) -> Result<String, ShareError>;

    /// Opens the host's share-target picker with a text payload.
    async fn share_target_picker(&self, text: &str) -> Result<(), ShareError>;
}

/// Host used when the tool is not embedded anywhere.
pub struct DetachedHost;

#[async_trait]
impl HostIntegration for DetachedHost {
    async fn init(&self, _credential: &str) -> Result<(), ShareError> {
        Err(ShareError::Unavailable("not running inside a host".into()))
    }

    fn is_in_client(&self) -> bool {
        false
    }

    fn is_logged_in(&self) -> bool {
        false
    }

    async fn profile_name(&self) -> Result<String, ShareError> {
        Err(ShareError::Unavailable("not running inside a host".into()))
    }

    async fn share_target_picker(&self, _text: &str) -> Result<(), ShareError> {
        Err(ShareError::Unavailable("not running inside a host".into()))
    }
}

/// Host integration gated by configuration and a completed handshake.
#[derive(Clone)]
pub struct HostSession {
    host: Arc<dyn HostIntegration>,
    enabled: bool,
    initialized: Arc<AtomicBool>,
}

impl HostSession {
    pub fn new(host: Arc<dyn HostIntegration>, enabled: bool) -> Self {
        Self {
            host,
            enabled,
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A session that never offers the host capability.
    pub fn disabled() -> Self {
        Self::new(Arc::new(DetachedHost), false)
    }

    /// Runs the handshake when the integration is enabled and a credential is set.
    ///
    /// Failures are logged and leave the host untrusted.
    pub async fn initialize(&self, credential: &str) {
        let credential = credential.trim();
        if !self.enabled || credential.is_empty() || credential == HOST_CREDENTIAL_UNSET {
            info!("Host integration disabled or not configured, using generic sharing");
            return;
        }

        match self.host.init(credential).await {
            Ok(()) => {
                self.initialized.store(true, Ordering::SeqCst);
                info!("Host integration initialized");
                if self.host.is_logged_in() {
                    match self.host.profile_name().await {
                        Ok(name) => info!("Host user: {}", name),
                        Err(err) => error!("Failed to fetch host profile: {}", err),
                    }
                }
            }
            Err(err) => error!("Host integration failed to initialize: {}", err),
        }
    }

    /// Whether the host share picker may be used right now.
    pub fn is_available(&self) -> bool {
        self.enabled && self.initialized.load(Ordering::SeqCst) && self.host.is_in_client()
    }

    pub async fn share(&self, text: &str) -> Result<(), ShareError> {
        self.host.share_target_picker(text).await
    }
}
