use std::sync::Arc;

use platform_integration::{DesktopNotifier, NotificationPermission};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::SessionEvent;

pub fn loss_notification_title(score: usize) -> String {
    format!("Game is over !  You scored {score}")
}

/// Best effort: the score is fixed now, whatever the game does meanwhile.
pub(crate) fn spawn_loss_notification(
    notifier: Arc<dyn DesktopNotifier>,
    events: broadcast::Sender<SessionEvent>,
    score: usize,
) {
    let title = loss_notification_title(score);
    tokio::spawn(async move {
        match deliver(notifier.as_ref(), &title).await {
            Ok(true) => {
                let _ = events.send(SessionEvent::NotificationDelivered { title });
            }
            Ok(false) => debug!("notification: permission not granted, skipped"),
            Err(err) => warn!("notification: delivery failed: {err:#}"),
        }
    });
}

async fn deliver(notifier: &dyn DesktopNotifier, title: &str) -> anyhow::Result<bool> {
    let permission = match notifier.permission() {
        NotificationPermission::Granted => NotificationPermission::Granted,
        _ => notifier.request_permission().await?,
    };
    if permission != NotificationPermission::Granted {
        return Ok(false);
    }

    notifier.show(title).await?;
    Ok(true)
}
