//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wire state modules to views. Widget state is owned by the
//! component instance that creates it; only app-wide concerns (session,
//! config, notices) come from Leptos context.

pub mod app_nav;
pub mod assistant_widget;
pub mod conversation_starters;
pub mod notice_toast;
