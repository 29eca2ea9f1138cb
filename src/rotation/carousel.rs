use std::time::Instant;

use super::collection::Collection;
use super::error::RotationError;
use super::interval::RotationInterval;
use super::selection::SelectionState;
use super::timer::RotationTimer;
use super::transition::{Presentation, TransitionController, TransitionTiming};

/// Cadence and animation timing for one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselSettings {
    pub interval: RotationInterval,
    pub timing: TransitionTiming,
}

/// One mounted rotating display.
///
/// Owns its collection, selection, timer and transition slot. Nothing is
/// shared between carousels, and the timer is always stopped on unmount
/// (including when the carousel is dropped).
#[derive(Debug)]
pub struct Carousel<T> {
    collection: Collection<T>,
    selection: SelectionState,
    timer: RotationTimer,
    transition: TransitionController,
    settings: CarouselSettings,
    mounted: bool,
}

impl<T> Carousel<T> {
    /// Mount at index 0 with the timer running.
    pub fn mount(collection: Collection<T>, settings: CarouselSettings, now: Instant) -> Self {
        let mut carousel = Self {
            selection: SelectionState::new(collection.len()),
            collection,
            timer: RotationTimer::new(),
            transition: TransitionController::new(settings.timing),
            settings,
            mounted: false,
        };
        carousel.remount(now);
        carousel
    }

    /// Bring an unmounted carousel back on screen, starting over at index 0.
    pub fn remount(&mut self, now: Instant) {
        self.selection = SelectionState::new(self.collection.len());
        self.timer.start(self.settings.interval, now);
        self.transition.mount(0, now);
        self.mounted = true;
        tracing::debug!(items = self.collection.len(), "Carousel mounted");
    }

    /// Stop the timer and abandon any in-flight transition.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.timer.stop();
        self.transition.abandon();
        self.mounted = false;
        tracing::debug!("Carousel unmounted");
    }

    /// Host tick. Returns true when the timer advanced the selection.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.transition.advance_clock(now);
        if !self.mounted || !self.timer.poll(now) {
            return false;
        }
        self.selection.advance();
        self.transition.retarget(self.selection.current(), now);
        tracing::trace!(index = self.selection.current(), "Carousel advanced");
        true
    }

    /// Jump to `index` and restart the cadence window from `now`.
    pub fn select_explicit(&mut self, index: usize, now: Instant) -> Result<(), RotationError> {
        self.selection.select(index)?;
        self.timer.restart(now);
        self.transition.retarget(index, now);
        tracing::debug!(index, "Carousel explicit selection");
        Ok(())
    }

    /// Explicit selection relative to the current index, wrapping.
    pub fn step(&mut self, delta: isize, now: Instant) {
        let index = self.selection.offset(delta);
        // offset() is always within bounds
        let _ = self.select_explicit(index, now);
    }

    pub fn current(&self) -> usize {
        self.selection.current()
    }

    pub fn current_item(&self) -> &T {
        self.collection.get(self.selection.current())
    }

    /// The item to draw at `now` with its visibility.
    pub fn presentation(&self, now: Instant) -> (&T, Presentation) {
        let presentation = self.transition.present(now);
        (self.collection.get(presentation.index), presentation)
    }

    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Always false: a collection holds at least one item.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_transitioning()
    }

    pub fn timer(&self) -> &RotationTimer {
        &self.timer
    }

    pub fn settings(&self) -> CarouselSettings {
        self.settings
    }
}

impl<T> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn abc(now: Instant) -> Carousel<&'static str> {
        let settings = CarouselSettings {
            interval: RotationInterval::from_millis(5_000),
            timing: TransitionTiming::instant(),
        };
        Carousel::mount(Collection::new(vec!["A", "B", "C"]).unwrap(), settings, now)
    }

    #[test]
    fn mounts_at_first_item_with_timer_running() {
        let t0 = Instant::now();
        let carousel = abc(t0);
        assert_eq!(carousel.current(), 0);
        assert_eq!(*carousel.current_item(), "A");
        assert!(carousel.timer().is_running());
        assert!(carousel.is_mounted());
    }

    #[test]
    fn explicit_selection_out_of_range_leaves_state() {
        let t0 = Instant::now();
        let mut carousel = abc(t0);
        let err = carousel.select_explicit(5, t0).unwrap_err();
        assert_eq!(err, RotationError::IndexOutOfRange { index: 5, len: 3 });
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.timer().next_due(), Some(t0 + ms(5_000)));
    }

    #[test]
    fn step_wraps_backwards() {
        let t0 = Instant::now();
        let mut carousel = abc(t0);
        carousel.step(-1, t0 + ms(100));
        assert_eq!(carousel.current(), 2);
        assert_eq!(carousel.timer().next_due(), Some(t0 + ms(5_100)));
    }

    #[test]
    fn unmount_stops_rotation() {
        let t0 = Instant::now();
        let mut carousel = abc(t0);
        carousel.unmount();
        assert!(!carousel.timer().is_running());
        assert!(!carousel.on_tick(t0 + ms(20_000)));
        assert_eq!(carousel.current(), 0);

        carousel.unmount();
        assert!(!carousel.is_mounted());
    }

    #[test]
    fn remount_starts_over() {
        let t0 = Instant::now();
        let mut carousel = abc(t0);
        carousel.select_explicit(2, t0).unwrap();
        carousel.unmount();

        carousel.remount(t0 + ms(1_000));
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.timer().next_due(), Some(t0 + ms(6_000)));
    }

    #[test]
    fn presentation_follows_selection() {
        let t0 = Instant::now();
        let mut carousel = abc(t0);
        carousel.select_explicit(1, t0).unwrap();
        let (item, presentation) = carousel.presentation(t0);
        assert_eq!(*item, "B");
        assert_eq!(presentation.index, 1);
    }
}
