use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use zbus::{Connection, proxy};

use crate::share::{COPIED_NOTICE, clipboard, host::HostSession, types::ShareError};

/// Application name shown on desktop notifications.
const APP_NAME: &str = "Cezi";
/// Freedesktop icon for "text copied".
const COPIED_ICON: &str = "edit-copy";
const COPIED_TIMEOUT_MS: i32 = 3000;

/// Native "share" capability of the runtime (title + text).
#[async_trait]
pub trait NativeShare: Send + Sync {
    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError>;
}

/// Abstraction over copying share text to the clipboard.
pub trait ShareClipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<(), ShareError>;
}

/// Tells the user that the share text landed on the clipboard.
#[async_trait]
pub trait ShareNotifier: Send + Sync {
    async fn notify_copied(&self, title: &str);
}

/// Bundle of capabilities used by the share adapter. Each component can be mocked in tests.
#[derive(Clone)]
pub struct ShareDependencies {
    pub host: HostSession,
    /// `None` when the runtime has no native share capability
    pub native: Option<Arc<dyn NativeShare>>,
    pub clipboard: Arc<dyn ShareClipboard>,
    pub notifier: Arc<dyn ShareNotifier>,
}

impl Default for ShareDependencies {
    fn default() -> Self {
        Self {
            host: HostSession::disabled(),
            native: None,
            clipboard: Arc::new(DefaultClipboard),
            notifier: Arc::new(DesktopNotifier),
        }
    }
}

struct DefaultClipboard;

impl ShareClipboard for DefaultClipboard {
    fn copy(&self, text: &str) -> Result<(), ShareError> {
        clipboard::copy_text(text)
    }
}

#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    #[allow(clippy::too_many_arguments)]
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: Vec<&str>,
        hints: HashMap<&str, zbus::zvariant::Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;
}

/// Body line of the "copied" notification.
fn copied_body(title: &str) -> String {
    format!("{title} reading is ready to paste")
}

/// Posts the "copied" notice over the session bus.
struct DesktopNotifier;

impl DesktopNotifier {
    async fn send_copied(title: &str) -> zbus::Result<u32> {
        let connection = Connection::session().await?;
        let proxy = NotificationsProxy::new(&connection).await?;
        let body = copied_body(title);
        proxy
            .notify(
                APP_NAME,
                0,
                COPIED_ICON,
                COPIED_NOTICE,
                &body,
                vec![],
                HashMap::new(),
                COPIED_TIMEOUT_MS,
            )
            .await
    }
}

#[async_trait]
impl ShareNotifier for DesktopNotifier {
    async fn notify_copied(&self, title: &str) {
        match Self::send_copied(title).await {
            Ok(id) => log::debug!("Copy notification {} shown", id),
            Err(e) => log::warn!("Failed to send notification: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copied_body_names_the_share_title() {
        assert_eq!(copied_body("Cezi"), "Cezi reading is ready to paste");
    }
}
