//! Notification channel between publishers (the upload flow) and the shell's
//! notice host. Publishers hold a [`Notifier`]; the host drains the receiving
//! end and folds events into a [`NoticeBoard`].

use std::sync::atomic::{AtomicU64, Ordering};

use futures_channel::mpsc::UnboundedSender;

pub type NoticeId = u64;

/// How long a non-sticky notice stays on screen.
pub const NOTICE_TTL_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice--success",
            NoticeKind::Error => "notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
    /// Sticky notices stay until dismissed explicitly.
    pub sticky: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeEvent {
    Show(Notice),
    Dismiss(NoticeId),
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Publishing half of the notice channel.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    tx: Option<UnboundedSender<NoticeEvent>>,
}

impl Notifier {
    pub fn new(tx: UnboundedSender<NoticeEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// A notifier with no host; events are dropped.
    pub fn detached() -> Self {
        Self { tx: None }
    }

    pub fn success(&self, message: impl Into<String>, sticky: bool) -> NoticeId {
        self.publish(NoticeKind::Success, message.into(), sticky)
    }

    pub fn error(&self, message: impl Into<String>) -> NoticeId {
        self.publish(NoticeKind::Error, message.into(), false)
    }

    pub fn dismiss(&self, id: NoticeId) {
        self.send(NoticeEvent::Dismiss(id));
    }

    fn publish(&self, kind: NoticeKind, message: String, sticky: bool) -> NoticeId {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        self.send(NoticeEvent::Show(Notice {
            id,
            kind,
            message,
            sticky,
        }));
        id
    }

    fn send(&self, event: NoticeEvent) {
        if let Some(tx) = self.tx.as_ref() {
            // Host gone means nobody is looking; nothing to do.
            let _ = tx.unbounded_send(event);
        }
    }
}

/// Notices currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    pub notices: Vec<Notice>,
}

impl NoticeBoard {
    /// Fold one event in. Returns the id of a newly shown non-sticky notice
    /// so the host can schedule its expiry.
    pub fn apply(&mut self, event: NoticeEvent) -> Option<NoticeId> {
        match event {
            NoticeEvent::Show(notice) => {
                let expiring = (!notice.sticky).then_some(notice.id);
                self.notices.push(notice);
                expiring
            }
            NoticeEvent::Dismiss(id) => {
                self.notices.retain(|notice| notice.id != id);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_channel::mpsc::unbounded;

    #[test]
    fn notifier_publishes_show_and_dismiss() {
        let (tx, mut rx) = unbounded();
        let notifier = Notifier::new(tx);

        let id = notifier.success("Saved", true);
        notifier.dismiss(id);

        match rx.try_next() {
            Ok(Some(NoticeEvent::Show(notice))) => {
                assert_eq!(notice.id, id);
                assert_eq!(notice.kind, NoticeKind::Success);
                assert!(notice.sticky);
            }
            other => panic!("expected show event, got {other:?}"),
        }
        assert!(matches!(rx.try_next(), Ok(Some(NoticeEvent::Dismiss(d))) if d == id));
    }

    #[test]
    fn detached_notifier_still_hands_out_ids() {
        let notifier = Notifier::detached();
        let first = notifier.error("a");
        let second = notifier.error("b");
        assert_ne!(first, second);
    }

    #[test]
    fn board_tracks_visible_notices() {
        let mut board = NoticeBoard::default();
        let sticky = Notice {
            id: 1,
            kind: NoticeKind::Success,
            message: "done".into(),
            sticky: true,
        };
        let transient = Notice {
            id: 2,
            kind: NoticeKind::Error,
            message: "oops".into(),
            sticky: false,
        };

        assert_eq!(board.apply(NoticeEvent::Show(sticky)), None);
        assert_eq!(board.apply(NoticeEvent::Show(transient)), Some(2));
        assert_eq!(board.notices.len(), 2);

        board.apply(NoticeEvent::Dismiss(1));
        assert_eq!(board.notices.len(), 1);
        assert_eq!(board.notices[0].id, 2);

        // Dismissing twice is harmless.
        board.apply(NoticeEvent::Dismiss(1));
        assert_eq!(board.notices.len(), 1);
    }
}
