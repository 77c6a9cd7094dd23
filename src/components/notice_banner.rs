//! Notice Banner Component
//!
//! Renders the currently visible transient notice, if any.

use leptos::prelude::*;

use crate::notify::{NoticeKind, Notifier};

#[component]
pub fn NoticeBanner(notifier: Notifier) -> impl IntoView {
    view! {
        {move || notifier.current().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice-success",
                NoticeKind::Error => "notice notice-error",
            };
            view! { <div class=class>{notice.message}</div> }
        })}
    }
}
