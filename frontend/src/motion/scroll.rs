/// One end of a tracking window: the point `target` (fraction of the
/// element's height, 0 = top edge) lines up with the point `viewport`
/// (fraction of the viewport height, 0 = top of the screen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub target: f64,
    pub viewport: f64,
}

impl Edge {
    pub const fn new(target: f64, viewport: f64) -> Self {
        Self { target, viewport }
    }

    /// Scroll distance (in px, growing as the page scrolls down) at which
    /// this edge is met. Only differences between two edges are meaningful.
    fn scroll_offset(&self, metrics: &ScrollMetrics) -> f64 {
        self.target * metrics.element_height - self.viewport * metrics.viewport_height
    }
}

/// Band of the viewport an element is tracked through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackingWindow {
    pub start: Edge,
    pub end: Edge,
}

impl TrackingWindow {
    /// Reveal window used by the feature cards: starts when the card's top
    /// reaches 60% of the viewport, ends when the card's 40% point sits on
    /// the viewport's 40% line.
    pub const REVEAL: TrackingWindow = TrackingWindow {
        start: Edge::new(0.0, 0.6),
        end: Edge::new(0.4, 0.4),
    };

    /// Raw progress through the window, not clamped: negative before the
    /// start edge, above 1 after the end edge.
    pub fn progress(&self, metrics: &ScrollMetrics) -> f64 {
        let scrolled = -metrics.element_top;
        let start = self.start.scroll_offset(metrics);
        let end = self.end.scroll_offset(metrics);

        let length = end - start;
        if length <= 0.0 {
            return if scrolled >= end { 1.0 } else { 0.0 };
        }
        (scrolled - start) / length
    }

    /// Progress limited to [0, 1]. Every position before the window reads
    /// as exactly 0 and every position after it as exactly 1.
    pub fn settled_progress(&self, metrics: &ScrollMetrics) -> f64 {
        let progress = self.progress(metrics);
        if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        }
    }
}

/// Viewport-relative geometry sampled once per animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Distance from the top of the viewport to the element's top edge.
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;
    const CARD: f64 = 200.0;

    fn at(top: f64) -> ScrollMetrics {
        ScrollMetrics {
            element_top: top,
            element_height: CARD,
            viewport_height: VIEWPORT,
        }
    }

    #[test]
    fn zero_when_top_reaches_sixty_percent() {
        let p = TrackingWindow::REVEAL.progress(&at(600.0));
        assert!(p.abs() < 1e-9);
    }

    #[test]
    fn one_when_forty_percent_points_align() {
        // card's 40% point (80px down) sits on the viewport's 400px line
        let p = TrackingWindow::REVEAL.progress(&at(320.0));
        assert!((p - 1.0).abs() < 1e-9);
    }

    #[test]
    fn linear_between_edges() {
        let p = TrackingWindow::REVEAL.progress(&at(460.0));
        assert!((p - 0.5).abs() < 1e-9);
    }

    #[test]
    fn unclamped_outside_window() {
        assert!(TrackingWindow::REVEAL.progress(&at(1500.0)) < 0.0);
        assert!(TrackingWindow::REVEAL.progress(&at(-400.0)) > 1.0);
    }

    #[test]
    fn increases_as_page_scrolls_down() {
        let mut previous = f64::NEG_INFINITY;
        let mut top = 1200.0;
        while top > -200.0 {
            let p = TrackingWindow::REVEAL.progress(&at(top));
            assert!(p > previous);
            previous = p;
            top -= 25.0;
        }
    }

    #[test]
    fn degenerate_window_is_a_step() {
        let window = TrackingWindow {
            start: Edge::new(0.0, 0.5),
            end: Edge::new(0.0, 0.5),
        };
        assert_eq!(window.progress(&at(600.0)), 0.0);
        assert_eq!(window.progress(&at(500.0)), 1.0);
        assert_eq!(window.progress(&at(100.0)), 1.0);
    }

    #[test]
    fn settled_progress_is_constant_outside_window() {
        let window = TrackingWindow::REVEAL;
        assert_eq!(window.settled_progress(&at(1500.0)), 0.0);
        assert_eq!(window.settled_progress(&at(900.0)), 0.0);
        assert_eq!(window.settled_progress(&at(-400.0)), 1.0);
        assert_eq!(window.settled_progress(&at(0.0)), 1.0);
        assert!((window.settled_progress(&at(460.0)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn settled_progress_survives_empty_viewport() {
        let metrics = ScrollMetrics {
            element_top: 0.0,
            element_height: 0.0,
            viewport_height: 0.0,
        };
        assert_eq!(TrackingWindow::REVEAL.settled_progress(&metrics), 1.0);
    }
}
