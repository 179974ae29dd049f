//! Viewport breakpoints and per-breakpoint values.
//!
//! ```rust
//! use folio_widgets::media::{responsive_value, Breakpoint, ResponsiveValue};
//!
//! assert_eq!(Breakpoint::from_width(1024), Breakpoint::Md);
//!
//! let columns = ResponsiveValue::new(1).with(Breakpoint::Md, 2).with(Breakpoint::Xl, 4);
//! assert_eq!(*responsive_value(&columns, 320), 1);
//! assert_eq!(*responsive_value(&columns, 1100), 2);
//! assert_eq!(*responsive_value(&columns, 1440), 1);
//! assert_eq!(*responsive_value(&columns, 2560), 4);
//! ```

/// Named viewport width ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Below 600px.
    Xs,
    /// 600px to 959px.
    Sm,
    /// 960px to 1279px.
    Md,
    /// 1280px to 1919px.
    Lg,
    /// 1920px and up.
    Xl,
}

impl Breakpoint {
    /// All breakpoints, narrowest first.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// The breakpoint containing `width` pixels.
    pub fn from_width(width: u32) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|bp| width >= bp.min_width())
            .unwrap_or(Breakpoint::Xs)
    }

    /// Smallest width in the range.
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 600,
            Breakpoint::Md => 960,
            Breakpoint::Lg => 1280,
            Breakpoint::Xl => 1920,
        }
    }

    /// Largest width in the range, `None` for the open-ended one.
    pub fn max_width(self) -> Option<u32> {
        match self {
            Breakpoint::Xs => Some(599),
            Breakpoint::Sm => Some(959),
            Breakpoint::Md => Some(1279),
            Breakpoint::Lg => Some(1919),
            Breakpoint::Xl => None,
        }
    }

    /// Whether `width` falls in this range.
    pub fn matches(self, width: u32) -> bool {
        width >= self.min_width() && self.max_width().map_or(true, |max| width <= max)
    }

    /// CSS media query for the range.
    pub fn media_query(self) -> String {
        match (self.min_width(), self.max_width()) {
            (0, Some(max)) => format!("(max-width: {}px)", max),
            (min, Some(max)) => format!("(min-width: {}px) and (max-width: {}px)", min, max),
            (min, None) => format!("(min-width: {}px)", min),
        }
    }

    /// Short lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

/// A value with optional per-breakpoint replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveValue<T> {
    default: T,
    overrides: [Option<T>; 5],
}

impl<T> ResponsiveValue<T> {
    /// A value used at every width.
    pub fn new(default: T) -> Self {
        Self {
            default,
            overrides: [None, None, None, None, None],
        }
    }

    /// Sets the value for one breakpoint and returns itself.
    pub fn with(mut self, breakpoint: Breakpoint, value: T) -> Self {
        self.overrides[breakpoint as usize] = Some(value);
        self
    }

    /// The fallback value.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// The replacement for a breakpoint, if any.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        self.overrides[breakpoint as usize].as_ref()
    }
}

/// Pick the value for a viewport `width`.
///
/// Only the breakpoint containing the width is consulted; without a
/// replacement there the default is used.
pub fn responsive_value<T>(values: &ResponsiveValue<T>, width: u32) -> &T {
    values
        .get(Breakpoint::from_width(width))
        .unwrap_or(&values.default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_width_edges() {
        assert_eq!(Breakpoint::from_width(0), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(599), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(600), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(959), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(960), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(1279), Breakpoint::Md);
        assert_eq!(Breakpoint::from_width(1280), Breakpoint::Lg);
        assert_eq!(Breakpoint::from_width(1919), Breakpoint::Lg);
        assert_eq!(Breakpoint::from_width(1920), Breakpoint::Xl);
    }

    #[test]
    fn test_exactly_one_matches() {
        for width in [0, 320, 600, 800, 960, 1280, 1600, 1920, 3840] {
            let matching: Vec<_> = Breakpoint::ALL.into_iter().filter(|bp| bp.matches(width)).collect();
            assert_eq!(matching, vec![Breakpoint::from_width(width)]);
        }
    }

    #[test]
    fn test_media_queries() {
        assert_eq!(Breakpoint::Xs.media_query(), "(max-width: 599px)");
        assert_eq!(
            Breakpoint::Lg.media_query(),
            "(min-width: 1280px) and (max-width: 1919px)"
        );
        assert_eq!(Breakpoint::Xl.media_query(), "(min-width: 1920px)");
    }

    #[test]
    fn test_responsive_value_falls_back() {
        let padding = ResponsiveValue::new("2rem").with(Breakpoint::Xs, "1rem");
        assert_eq!(*responsive_value(&padding, 400), "1rem");
        assert_eq!(*responsive_value(&padding, 700), "2rem");
        assert_eq!(padding.get(Breakpoint::Sm), None);
        assert_eq!(*padding.default_value(), "2rem");
    }
}
