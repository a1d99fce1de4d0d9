// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast-notification system for applications built with
//! the Iced GUI framework.
//!
//! It provides an ordered store of active toasts with per-toast lifecycle
//! timing (entrance, dwell, exit), positional grouping into the four screen
//! corners, a change-notification channel for observers, and ready-made
//! widgets for rendering the toasts.
//!
//! # Usage
//!
//! ```
//! use iced_toast::{config::Config, Manager, Toast};
//!
//! let mut toasts = Manager::new(Config::default());
//! let id = toasts.show(Toast::success("Saved")).unwrap();
//!
//! // In the host's update loop, on each tick and dismiss message:
//! // toasts.handle_message(&message);
//!
//! // In the host's view function:
//! // iced_toast::ui::toast::view_overlay(&toasts, std::time::Instant::now())
//!
//! toasts.hide(id);
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod config;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod manager;
pub mod notification;
pub mod ui;

pub use error::{Error, Result};
pub use events::ToastEvent;
pub use lifecycle::Phase;
pub use manager::{Manager, Message};
pub use notification::{Kind, Position, Toast, ToastId};
