use crate::constants::{MAX_VISIBLE_TOASTS, TOAST_DURATION, TOAST_FADE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    remaining: f32,
}

impl Toast {
    fn new(message: impl Into<String>, kind: ToastKind, duration: f32) -> Self {
        Self {
            message: message.into(),
            kind,
            remaining: duration,
        }
    }

    /// 1.0 while fully shown, falling to 0.0 over the final fade.
    pub fn opacity(&self) -> f32 {
        (self.remaining / TOAST_FADE).clamp(0.0, 1.0)
    }

    /// Returns true once expired.
    fn update(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}

/// Stack of short-lived notifications, newest last.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    duration: f32,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            toasts: Vec::new(),
            duration: TOAST_DURATION,
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Warning);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts.push(Toast::new(message, kind, self.duration));
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.toasts.retain_mut(|toast| !toast.update(dt));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
