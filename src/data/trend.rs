use std::collections::VecDeque;

/// Maximum number of points the window retains.
pub const TREND_CAPACITY: usize = 12;

/// History shown before any simulated point arrives (weeks 1 to 4).
const SEED_VALUES: [f64; 4] = [62.0, 68.0, 73.0, 76.0];

/// Bounded rolling window of weekly class-average points. Pushing past
/// capacity evicts the oldest point; week numbers keep counting up so the
/// x axis scrolls instead of wrapping.
#[derive(Debug, Clone)]
pub struct TrendWindow {
    points: VecDeque<(u32, f64)>,
    next_week: u32,
}

impl Default for TrendWindow {
    fn default() -> Self {
        TrendWindow::seeded()
    }
}

impl TrendWindow {
    /// Window preloaded with the first four weeks of history.
    pub fn seeded() -> Self {
        let mut window = TrendWindow {
            points: VecDeque::with_capacity(TREND_CAPACITY),
            next_week: 1,
        };
        for value in SEED_VALUES {
            window.push(value);
        }
        window
    }

    /// Append one weekly value, evicting the oldest point at capacity.
    pub fn push(&mut self, value: f64) {
        if self.points.len() == TREND_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back((self.next_week, value));
        self.next_week += 1;
    }

    /// Points oldest first, as (week number, class average).
    pub fn points(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.points.iter().copied()
    }
}
