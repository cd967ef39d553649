//! Sharing of interpretation results.
//!
//! Shared text always has the same layout (see [`share_text`]); the mechanism is
//! chosen at call time by capability probing:
//! 1. the host application's share picker, when enabled, initialized, and present
//! 2. the runtime's native share capability
//! 3. the clipboard, followed by a desktop notification

pub mod clipboard;
pub mod dependencies;
pub mod host;
pub mod types;


pub use dependencies::{NativeShare, ShareClipboard, ShareDependencies, ShareNotifier};
pub use host::{DetachedHost, HOST_CREDENTIAL_UNSET, HostIntegration, HostSession};
pub use types::{SHARE_EXCERPT_CHARS, ShareError, ShareProvider, TRUNCATION_MARKER, share_text};

use log::{info, warn};
use std::sync::Arc;
use tokio::task;

/// Summary of the notification shown after a clipboard copy.
pub const COPIED_NOTICE: &str = "Copied to clipboard!";

/// Capability-gated share adapter.
#[derive(Clone)]
pub struct Sharer {
    dependencies: ShareDependencies,
    title: String,
}

impl Sharer {
    pub fn new(dependencies: ShareDependencies, title: impl Into<String>) -> Self {
        Self {
            dependencies,
            title: title.into(),
        }
    }

    pub fn host(&self) -> &HostSession {
        &self.dependencies.host
    }

    /// The provider a share would start with right now.
    pub fn probe(&self) -> ShareProvider {
        if self.dependencies.host.is_available() {
            ShareProvider::HostIntegrated
        } else if self.dependencies.native.is_some() {
            ShareProvider::GenericNative
        } else {
            ShareProvider::ClipboardFallback
        }
    }

    /// Shares `text`, returning the provider that delivered it.
    ///
    /// A failing host picker is logged and the generic path is used instead.
    pub async fn share(&self, text: &str) -> Result<ShareProvider, ShareError> {
        if self.dependencies.host.is_available() {
            match self.dependencies.host.share(text).await {
                Ok(()) => {
                    info!("Shared via host picker");
                    return Ok(ShareProvider::HostIntegrated);
                }
                Err(err) => warn!("Host share failed ({}), falling back", err),
            }
        }
        self.share_generic(text).await
    }

    async fn share_generic(&self, text: &str) -> Result<ShareProvider, ShareError> {
        if let Some(native) = &self.dependencies.native {
            return match native.share(&self.title, text).await {
                Ok(()) => {
                    info!("Shared via native share");
                    Ok(ShareProvider::GenericNative)
                }
                Err(err) => {
                    warn!("Native share failed: {}", err);
                    Err(err)
                }
            };
        }

        let clipboard = Arc::clone(&self.dependencies.clipboard);
        let owned = text.to_string();
        task::spawn_blocking(move || clipboard.copy(&owned))
            .await
            .map_err(|e| ShareError::Clipboard(format!("Clipboard task failed: {}", e)))?
            .inspect_err(|err| warn!("Clipboard share failed: {}", err))?;

        self.dependencies
            .notifier
            .notify_copied(&self.title)
            .await;
        info!("Shared via clipboard");
        Ok(ShareProvider::ClipboardFallback)
    }
}
