//! Viewport interaction tracker
//!
//! Pure state machines behind the page's motion effects. Nothing here touches
//! the DOM: raw inputs (scroll metrics, pointer coordinates, frame time) come
//! in through plain values, derived targets are smoothed by [`spring`], and
//! listener registration goes through the [`lifecycle::ViewportHost`] seam.
//!
//! Data flows: Raw Signal Source → Derived Signal Calculator → Spring → UI

pub mod animate;
pub mod hover;
pub mod lifecycle;
pub mod magnetic;
pub mod pointer;
pub mod reveal;
pub mod rotation;
pub mod scroll;
pub mod spring;
pub mod tracker;
pub mod vec2;

pub use animate::Animate;
pub use hover::HoverLift;
pub use lifecycle::{ListenerError, ListenerKind, ViewportEvent, ViewportHost, ViewportListeners};
pub use magnetic::{MagneticInput, MagneticOffset};
pub use pointer::{BoundingRect, PointerPosition};
pub use reveal::Reveal;
pub use rotation::{FrameClock, RotationDriver, RotationSpeeds, RotationState};
pub use scroll::{ScrollMetrics, ScrollState};
pub use spring::{Spring, SpringConfig, SpringVec2};
pub use tracker::{ViewportSnapshot, ViewportTracker};
pub use vec2::Vec2;
