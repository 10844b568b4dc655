use std::time::{Duration, Instant};

/// Soft frame-rate cap: a draw is due once `interval` has passed since the last one.
#[derive(Debug, Clone, Copy)]
pub struct FrameThrottle {
    interval: Duration,
    last_draw: Option<Instant>,
}

impl FrameThrottle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_draw: None,
        }
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.last_draw
            .is_none_or(|last| now.saturating_duration_since(last) > self.interval)
    }

    pub fn mark_drawn(&mut self, now: Instant) {
        self.last_draw = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_always_due() {
        assert!(FrameThrottle::new(Duration::from_secs(1)).is_due(Instant::now()));
    }

    #[test]
    fn frames_are_spaced_by_interval() {
        let interval = Duration::from_millis(33);
        let mut throttle = FrameThrottle::new(interval);
        let start = Instant::now();

        throttle.mark_drawn(start);

        assert!(!throttle.is_due(start));
        assert!(!throttle.is_due(start + interval));
        assert!(throttle.is_due(start + interval + Duration::from_millis(1)));
    }
}
