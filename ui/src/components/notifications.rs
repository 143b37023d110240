use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::notify::{NoticeBoard, NoticeEvent, NOTICE_TTL_MS};
use crate::core::timing::sleep_ms;

/// Owns the receiving end of the notice channel. Descendants reach it with
/// `use_coroutine_handle::<NoticeEvent>()` (or through a `Notifier`).
#[component]
pub fn NotificationHost(children: Element) -> Element {
    let mut board = use_signal(NoticeBoard::default);

    let host = use_coroutine(move |mut rx: UnboundedReceiver<NoticeEvent>| async move {
        while let Some(event) = rx.next().await {
            let expiring = board.write().apply(event);
            if let Some(id) = expiring {
                spawn(async move {
                    sleep_ms(NOTICE_TTL_MS).await;
                    board.write().apply(NoticeEvent::Dismiss(id));
                });
            }
        }
    });

    let notices = board.read().notices.clone();

    rsx! {
        {children}
        div { class: "notices", role: "status", aria_live: "polite",
            for notice in notices {
                div { key: "{notice.id}", class: "notice {notice.kind.css_class()}",
                    span { class: "notice__message", "{notice.message}" }
                    button {
                        r#type: "button",
                        class: "notice__close",
                        aria_label: "Dismiss",
                        onclick: move |_| host.send(NoticeEvent::Dismiss(notice.id)),
                        "×"
                    }
                }
            }
        }
    }
}
