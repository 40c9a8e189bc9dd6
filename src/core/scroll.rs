//! # Scroll Visibility
//!
//! The viewport publishes its vertical offset on a [`ScrollFeed`]. A page view
//! holds a [`ScrollSubscription`] for as long as it is mounted; dropping the
//! subscription deregisters it, so observers never outlive their view.
//!
//! ```text
//! viewport ──publish(offset)──► ScrollFeed ──watch──► ScrollSubscription ──► Action::Scrolled
//! ```
//!
//! Offsets are CSS-pixel units. The terminal reports [`PX_PER_ROW`] units per row.

use log::debug;
use tokio::sync::watch;

/// Offset past which the "scroll to top" control is revealed.
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 400;

/// CSS pixels represented by one terminal row.
pub const PX_PER_ROW: u32 = 16;

/// Derives the `ScrollPastThreshold` flag from the latest offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTracker {
    threshold: u32,
    offset: u32,
    past_threshold: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            offset: 0,
            past_threshold: false,
        }
    }

    /// Records a new offset and returns the recomputed flag.
    pub fn observe(&mut self, offset: u32) -> bool {
        self.offset = offset;
        self.past_threshold = offset > self.threshold;
        self.past_threshold
    }

    pub fn past_threshold(&self) -> bool {
        self.past_threshold
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

/// Publisher side of the scroll signal, owned by the viewport.
pub struct ScrollFeed {
    tx: watch::Sender<u32>,
}

impl Default for ScrollFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollFeed {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// Publishes an offset. Observers are only notified when it changed.
    pub fn publish(&self, offset: u32) {
        self.tx.send_if_modified(|current| {
            if *current == offset {
                false
            } else {
                *current = offset;
                true
            }
        });
    }

    /// Registers an observer. The registration lasts until the returned guard is dropped.
    pub fn subscribe(&self) -> ScrollSubscription {
        let subscription = ScrollSubscription {
            rx: self.tx.subscribe(),
        };
        debug!("Scroll observer registered ({} active)", self.observer_count());
        subscription
    }

    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// A live registration on a [`ScrollFeed`].
pub struct ScrollSubscription {
    rx: watch::Receiver<u32>,
}

impl ScrollSubscription {
    /// Returns the latest offset if it changed since the last call.
    pub fn next_offset(&mut self) -> Option<u32> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            _ => None,
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        debug!("Scroll observer released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.observe(400));
        assert!(tracker.observe(401));
        assert!(!tracker.observe(0));
    }

    #[test]
    fn test_observe_matches_comparison_for_many_offsets() {
        let mut tracker = ScrollTracker::default();
        for offset in (0..2000).step_by(7) {
            assert_eq!(tracker.observe(offset), offset > 400, "offset {offset}");
            assert_eq!(tracker.offset(), offset);
        }
    }

    #[test]
    fn test_observe_is_idempotent() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(800);
        let snapshot = tracker;
        tracker.observe(800);
        assert_eq!(tracker, snapshot);
    }

    #[test]
    fn test_custom_threshold() {
        let mut tracker = ScrollTracker::new(10);
        assert_eq!(tracker.threshold(), 10);
        assert!(tracker.observe(11));
        assert!(!tracker.observe(10));
    }

    #[test]
    fn test_subscription_sees_published_offsets() {
        let feed = ScrollFeed::new();
        let mut sub = feed.subscribe();
        assert_eq!(sub.next_offset(), None);

        feed.publish(32);
        assert_eq!(sub.next_offset(), Some(32));
        assert_eq!(sub.next_offset(), None);
    }

    #[test]
    fn test_unchanged_offset_does_not_notify() {
        let feed = ScrollFeed::new();
        let mut sub = feed.subscribe();
        feed.publish(48);
        assert_eq!(sub.next_offset(), Some(48));
        feed.publish(48);
        assert_eq!(sub.next_offset(), None);
    }

    #[test]
    fn test_only_latest_offset_is_delivered() {
        let feed = ScrollFeed::new();
        let mut sub = feed.subscribe();
        feed.publish(16);
        feed.publish(32);
        feed.publish(512);
        assert_eq!(sub.next_offset(), Some(512));
    }

    #[test]
    fn test_drop_releases_observer() {
        let feed = ScrollFeed::new();
        assert_eq!(feed.observer_count(), 0);
        {
            let _sub = feed.subscribe();
            assert_eq!(feed.observer_count(), 1);
        }
        assert_eq!(feed.observer_count(), 0);
    }

    #[test]
    fn test_repeated_mounts_do_not_leak() {
        let feed = ScrollFeed::new();
        for _ in 0..5 {
            let sub = feed.subscribe();
            feed.publish(100);
            drop(sub);
        }
        assert_eq!(feed.observer_count(), 0);
    }

    #[test]
    fn test_publish_without_observers() {
        let feed = ScrollFeed::new();
        feed.publish(640);
        let mut late = feed.subscribe();
        // A late subscriber starts from the current value without a pending notification.
        assert_eq!(late.next_offset(), None);
        feed.publish(656);
        assert_eq!(late.next_offset(), Some(656));
    }
}
