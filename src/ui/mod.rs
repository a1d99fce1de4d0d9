// SPDX-License-Identifier: MPL-2.0
//! Rendering layer for the toast system.
//!
//! Follows the Elm-style "state down, messages up" pattern: the host owns a
//! [`crate::Manager`], hands it to [`toast::view_overlay`] in its view
//! function, and routes the produced [`crate::manager::Message`]s back into
//! `Manager::handle_message`.
//!
//! # Modules
//!
//! - [`appearance`] - Kind-to-styling and position-to-anchor mappings
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`subscription`] - Periodic tick subscription for lifecycle progress
//! - [`toast`] - Toast card and four-corner overlay widgets

pub mod appearance;
pub mod design_tokens;
pub mod subscription;
pub mod toast;
