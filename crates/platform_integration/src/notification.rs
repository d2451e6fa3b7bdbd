use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPermission {
    Granted,
    Denied,
    /// Not decided yet; asking may prompt the user.
    Default,
}

#[async_trait]
pub trait DesktopNotifier: Send + Sync {
    fn permission(&self) -> NotificationPermission;
    async fn request_permission(&self) -> anyhow::Result<NotificationPermission>;
    async fn show(&self, title: &str) -> anyhow::Result<()>;
}

pub struct MissingNotifier;

#[async_trait]
impl DesktopNotifier for MissingNotifier {
    fn permission(&self) -> NotificationPermission {
        NotificationPermission::Denied
    }

    async fn request_permission(&self) -> anyhow::Result<NotificationPermission> {
        Ok(NotificationPermission::Denied)
    }

    async fn show(&self, _title: &str) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("desktop notifications are unavailable"))
    }
}
