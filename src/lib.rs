//! Client-side interactivity for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The pure
//! models below hold every piece of page state and decide what should change
//! on screen; the [`web`] module (enabled by the `hydrate` feature) is the
//! only place that touches the DOM, translating browser events into model
//! calls and model state back into classes and styles.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`tracker`] | Scroll-driven section activation and nav sync |
//! | [`geometry`] | Viewport rectangles and the center-proximity predicate |
//! | [`nav`] | Fragment links and the highlight pass |
//! | [`debounce`] | Trailing-edge debounce with single pending task |
//! | [`theme`] | Light/dark theme preference |
//! | [`menu`] | Mobile navigation menu |
//! | [`effects`] | Header shadow and hero fade curves |
//! | [`typewriter`] | Looping typewriter text effect |
//! | [`contact`] | Mailto link construction for the contact form |
//! | [`config`] | Page configuration with defaults and validation |
//! | [`consts`] | Shared selectors, class names and numeric defaults |
//! | [`error`] | Crate error type |
//! | `routes` | Dev server router and env config (`serve` feature) |
//!
//! ## Testing
//!
//! The pure models test natively with a plain `cargo test`. The dev server
//! router tests live behind the `serve` feature:
//!
//! ```text
//! cargo test --features serve
//! ```

pub mod config;
pub mod consts;
pub mod contact;
pub mod debounce;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod menu;
pub mod nav;
pub mod theme;
pub mod tracker;
pub mod typewriter;

#[cfg(feature = "serve")]
pub mod routes;

#[cfg(feature = "hydrate")]
pub mod web;
