//! Transient notifications drawn in the bottom-right corner.

use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, CornerRadius, Margin, RichText};
use egui_phosphor::regular::{CHECK_CIRCLE, INFO, WARNING, X_CIRCLE};

use super::components::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => INFO,
            ToastKind::Success => CHECK_CIRCLE,
            ToastKind::Warning => WARNING,
            ToastKind::Error => X_CIRCLE,
        }
    }

    fn color(&self) -> egui::Color32 {
        match self {
            ToastKind::Info => colors::INFO,
            ToastKind::Success => colors::SUCCESS,
            ToastKind::Warning => colors::WARNING,
            ToastKind::Error => colors::ERROR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    expires_at: Instant,
}

/// Queue of visible toasts, oldest first.
#[derive(Debug)]
pub struct Toasts {
    items: Vec<Toast>,
    duration: Duration,
}

const MAX_VISIBLE: usize = 5;

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            items: Vec::new(),
            duration,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.items.push(Toast {
            kind,
            message: message.into(),
            expires_at: now + self.duration,
        });
        if self.items.len() > MAX_VISIBLE {
            self.items.remove(0);
        }
    }

    /// Drop expired toasts.
    pub fn expire(&mut self, now: Instant) {
        self.items.retain(|t| t.expires_at > now);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    /// Expire old toasts and draw the rest.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.expire(Instant::now());
        if self.items.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.items {
                    egui::Frame::new()
                        .fill(ui.visuals().extreme_bg_color)
                        .stroke(egui::Stroke::new(1.0, toast.kind.color()))
                        .inner_margin(Margin::symmetric(12, 8))
                        .outer_margin(Margin::symmetric(0, 4))
                        .corner_radius(CornerRadius::same(6))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.kind.icon()).color(toast.kind.color()).size(18.0));
                                ui.label(&toast.message);
                            });
                        });
                }
            });

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
