//! Transient Notifications
//!
//! One notice visible at a time; showing a new one replaces the current one
//! immediately, and each notice clears itself after three seconds. Expiry is
//! token-guarded so a replaced notice's timer cannot clear its successor.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays visible, in milliseconds
pub const NOTICE_MILLIS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Single-slot notice holder with sequence tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    seq: u32,
}

impl NoticeSlot {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Display a notice, replacing whatever is showing. Returns the token the
    /// matching `expire` call must present.
    pub fn show(&mut self, notice: Notice) -> u32 {
        self.seq += 1;
        self.current = Some(notice);
        self.seq
    }

    /// Clear the slot, but only if `token` still identifies the visible
    /// notice. Returns whether anything was cleared.
    pub fn expire(&mut self, token: u32) -> bool {
        if token == self.seq && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }
}

/// Signal-backed handle the pages use to flash success/error notices
#[derive(Clone, Copy)]
pub struct Notifier {
    slot: RwSignal<NoticeSlot>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(NoticeSlot::default()),
        }
    }

    /// Reactive read of the visible notice
    pub fn current(&self) -> Option<Notice> {
        self.slot.with(|slot| slot.current().cloned())
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message.into());
    }

    fn show(&self, kind: NoticeKind, message: String) {
        let slot = self.slot;
        let token = slot.write().show(Notice { kind, message });
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MILLIS).await;
            slot.write().expire(token);
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
