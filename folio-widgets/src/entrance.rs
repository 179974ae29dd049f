/// Default visible fraction needed to reveal an element.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Reveal-on-scroll state for one element, fed with intersection ratios.
///
/// An element becomes visible once the observed ratio is non-zero and at
/// least the threshold. With `trigger_once` (the default) it then stays
/// visible and later observations are ignored; otherwise leaving the viewport
/// hides it again.
#[derive(Debug, Clone, PartialEq)]
pub struct EntranceTrigger {
    threshold: f32,
    trigger_once: bool,
    visible: bool,
    observing: bool,
}

impl EntranceTrigger {
    /// Create a hidden trigger with the default threshold, firing once.
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            trigger_once: true,
            visible: false,
            observing: true,
        }
    }

    /// Sets the threshold, clamped to `0.0..=1.0`, and returns itself.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Sets whether the trigger detaches after the first reveal and returns itself.
    pub fn with_trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }

    /// The threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Feed an intersection ratio and return the resulting visibility.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if !self.observing {
            return self.visible;
        }

        if ratio > 0.0 && ratio >= self.threshold {
            self.visible = true;
            if self.trigger_once {
                self.observing = false;
            }
        } else if !self.trigger_once {
            self.visible = false;
        }

        self.visible
    }

    /// Whether the element is revealed.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether further observations are taken into account.
    pub fn is_observing(&self) -> bool {
        self.observing
    }
}

impl Default for EntranceTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let trigger = EntranceTrigger::default();
        assert_eq!(trigger.threshold(), DEFAULT_THRESHOLD);
        assert!(!trigger.is_visible());
        assert!(trigger.is_observing());
    }

    #[test]
    fn test_trigger_once_stays_visible() {
        let mut trigger = EntranceTrigger::new();
        assert!(!trigger.observe(0.05));
        assert!(trigger.observe(0.1));
        assert!(!trigger.is_observing());
        assert!(trigger.observe(0.0));
    }

    #[test]
    fn test_repeatable_hides_again() {
        let mut trigger = EntranceTrigger::new()
            .with_threshold(0.5)
            .with_trigger_once(false);
        assert!(!trigger.observe(0.3));
        assert!(trigger.observe(0.6));
        assert!(!trigger.observe(0.2));
        assert!(trigger.observe(1.0));
        assert!(trigger.is_observing());
    }

    #[test]
    fn test_zero_threshold_needs_some_intersection() {
        let mut trigger = EntranceTrigger::new().with_threshold(0.0);
        assert!(!trigger.observe(0.0));
        assert!(trigger.observe(0.01));
    }
}
