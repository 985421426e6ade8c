// SPDX-License-Identifier: MPL-2.0
//! `feedglass` is a framework-agnostic library of client-side view-state
//! controllers for a social feed UI.
//!
//! It covers the four view-model concerns a feed front end needs beyond
//! rendering: gating actions behind authentication ([`auth`]),
//! visibility-triggered pagination ([`scroll`]), light/dark theme
//! toggling ([`theme_toggle`]), and avatar URL resolution with fallback
//! substitution ([`avatar`]).
//!
//! Controllers hold no ambient state: each is handed an explicit store
//! seam ([`store`]) for session and theme snapshots, and records what it
//! did into an [`activity`] log. Everything runs on the host's
//! single-threaded event loop; the only suspension points are events the
//! host delivers (sentinel visibility, image load failure).

pub mod activity;
pub mod auth;
pub mod avatar;
pub mod config;
pub mod domain;
pub mod error;
pub mod scroll;
pub mod store;
pub mod theme_toggle;
