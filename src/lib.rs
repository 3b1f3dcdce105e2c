//! UIKit page behaviors
//!
//! Client-side enhancements for the UIKit pages, compiled to WebAssembly:
//! - Header scroll marker (`scrolled` class past 50px)
//! - Light/dark theme toggle persisted in localStorage
//!
//! The behaviors are written against the small `dom` and `storage` traits
//! so they run natively in tests; the `web` module binds them to the browser.

pub mod config;
pub mod dom;
pub mod error;
pub mod page;
pub mod scroll;
pub mod storage;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::PageConfig;
pub use error::{Error, Result};
pub use page::{install, install_with, PageEnhancements};
pub use scroll::ScrollWatcher;
pub use theme::{Theme, ThemeToggle};

/// Version stamped by build.rs
pub const VERSION: &str = env!("UIKIT_VERSION");

/// Short git revision stamped by build.rs
pub const GIT_SHA: &str = env!("UIKIT_GIT_SHA");
