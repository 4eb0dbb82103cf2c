//! BLU-fx: post-processing, frame limiting and idle camera automation for
//! the X-Plane flight simulator.
//!
//! The host's C API is reached through the [`Host`] trait; the thin `extern`
//! glue that binds it lives with the host build and only forwards into
//! [`BluFxPlugin`]. On plugin start it calls [`logger::init`] with the host's
//! debug-string sink, then [`BluFxPlugin::start_with_context`] with a
//! `glow` context loaded from the host's GL entry points.

pub mod command;
pub mod config;
pub mod host;
pub mod logger;
pub mod plugin;

pub use command::UiCommand;
pub use config::PluginConfig;
pub use host::{Callback, Host, HostMessage};
pub use plugin::BluFxPlugin;
