//! Slide index state for the collections and brand-story carousels.

use std::time::Duration;

use leptos::prelude::*;

use crate::config::TimerConfig;
use crate::content::brand_stories;
use crate::error::StorefrontError;
use crate::task::ScopedTask;

/// Current slide of a fixed-length carousel. Indices wrap in both directions.
#[derive(Clone, Copy)]
pub struct Carousel {
    index: RwSignal<usize>,
    len: usize,
}

impl Carousel {
    /// A carousel over `len` slides, starting at the first.
    pub fn new(len: usize) -> Self {
        Self {
            index: RwSignal::new(0),
            len,
        }
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slides.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the visible slide.
    pub fn current(&self) -> usize {
        self.index.try_get().unwrap_or(0)
    }

    /// Advance one slide, wrapping past the end.
    pub fn next(&self) {
        let len = self.len;
        if len == 0 {
            return;
        }
        let _ = self.index.try_update(|i| *i = (*i + 1) % len);
    }

    /// Go back one slide, wrapping past the start.
    pub fn prev(&self) {
        let len = self.len;
        if len == 0 {
            return;
        }
        let _ = self.index.try_update(|i| *i = (*i + len - 1) % len);
    }

    /// Jump to a slide.
    pub fn select(&self, index: usize) -> Result<(), StorefrontError> {
        if index >= self.len {
            return Err(StorefrontError::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index.set(index);
        Ok(())
    }

    /// The brand-story carousel, rotating every `timers.story_interval()`.
    ///
    /// Rotation stops when the returned task is dropped.
    pub fn brand_stories(timers: &TimerConfig) -> (Self, ScopedTask) {
        let carousel = Self::new(brand_stories().len());
        let rotation = carousel.auto_advance(timers.story_interval());
        (carousel, rotation)
    }

    /// Advance every `period` until the returned task is dropped.
    pub fn auto_advance(&self, period: Duration) -> ScopedTask {
        let carousel = *self;
        ScopedTask::every("carousel-advance", period, move || carousel.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time;

    #[test]
    fn test_wraps_both_ways() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.current(), 0);

        carousel.prev();
        assert_eq!(carousel.current(), 2);

        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 1);

        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_select() {
        let carousel = Carousel::new(4);
        carousel.select(3).unwrap();
        assert_eq!(carousel.current(), 3);
        assert!(matches!(
            carousel.select(4),
            Err(StorefrontError::SlideOutOfRange { index: 4, len: 4 })
        ));
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_stops_on_drop() {
        let carousel = Carousel::new(3);
        let task = carousel.auto_advance(Duration::from_secs(6));

        time::sleep(Duration::from_millis(12_500)).await;
        assert_eq!(carousel.current(), 2);

        time::sleep(Duration::from_secs(6)).await;
        assert_eq!(carousel.current(), 0);

        drop(task);
        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(carousel.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_brand_stories_follow_configured_interval() {
        let timers = TimerConfig {
            story_interval_ms: 1000,
            ..TimerConfig::default()
        };
        let (stories, rotation) = Carousel::brand_stories(&timers);
        assert_eq!(stories.len(), 3);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(stories.current(), 1);

        drop(rotation);
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(stories.current(), 1);
    }
}
