//! Scroll-linked motion: measuring where an element sits in the viewport
//! and turning that into presentation values.
//!
//! [`scroll`] and [`interpolate`] are pure and run anywhere; [`observer`]
//! wires them to the browser.

pub mod interpolate;
pub mod observer;
pub mod scroll;

pub use interpolate::RevealStyle;
pub use observer::use_scroll_progress;
pub use scroll::TrackingWindow;
