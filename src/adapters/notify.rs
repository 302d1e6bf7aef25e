use crate::domain::model::{Notification, NotificationKind};
use crate::domain::ports::Notifier;

/// Default notifier: writes toasts through the tracing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!("{}: {}", notification.title, notification.message);
            }
            NotificationKind::Error => {
                tracing::error!("{}: {}", notification.title, notification.message);
            }
        }
    }
}
