//! Cyclic content rotation engine.
//!
//! Drives every rotating display on the page: the quote panel, the project
//! gallery and the skills listing.
//!
//! # Architecture
//!
//! ```text
//! host tick ──→ RotationTimer::poll ──→ SelectionState::advance ──┐
//!                                                                 ├──→ TransitionController::retarget
//! key press ──→ Carousel::select_explicit ──→ timer.restart ──────┘
//! ```
//!
//! - `collection.rs` - non-empty ordered item list
//! - `timer.rs` - deadline-based repeating tick
//! - `selection.rs` - wrapping current index
//! - `transition.rs` - single-slot exit/enter state machine
//! - `carousel.rs` - the mounted display owning all of the above
//! - `media.rs` - graceful media resolution for the renderer

mod carousel;
mod collection;
mod error;
mod interval;
mod item;
mod media;
mod selection;
mod timer;
mod transition;

pub use carousel::{Carousel, CarouselSettings};
pub use collection::Collection;
pub use error::RotationError;
pub use interval::{
    RotationInterval, DEFAULT_ROTATION_INTERVAL_MS, MAX_ROTATION_INTERVAL_MS,
    MIN_ROTATION_INTERVAL_MS,
};
pub use item::{ContentItem, MediaRef, Placeholder};
pub use media::{FsMediaResolver, MediaResolver, MediaStatus};
pub use selection::SelectionState;
pub use timer::RotationTimer;
pub use transition::{PhaseKind, Presentation, TransitionController, TransitionTiming};
