// SPDX-License-Identifier: MPL-2.0
//! Plain data model shared by all controllers.
//!
//! Everything here is an immutable snapshot or a validated newtype; the
//! controllers own no domain data and never mutate what they are given.

mod feed;
mod identity;
mod session;
mod theme;
mod user;

pub use feed::FeedState;
pub use identity::UserId;
pub use session::Session;
pub use theme::Theme;
pub use user::{AvatarSource, User};
