use std::time::{Duration, Instant};

use eframe::egui;
use rand::Rng;

use crate::prefs;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Interval between simulated weekly trend points.
const TREND_TICK: Duration = Duration::from_secs(7);
/// Simulated class averages stay inside this band.
const TREND_RANGE: std::ops::RangeInclusive<u32> = 65..=76;

pub struct ClassPulseApp {
    pub state: AppState,
    last_trend_tick: Instant,
}

impl ClassPulseApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs = prefs::load();
        let state = AppState::new(crate::data::seed::demo_roster(), prefs.dark_mode());
        panels::apply_theme(&cc.egui_ctx, state.dark_mode);
        log::info!(
            "Starting with {} students, {} theme",
            state.roster.len(),
            if state.dark_mode { "dark" } else { "light" }
        );
        ClassPulseApp {
            state,
            last_trend_tick: Instant::now(),
        }
    }

    /// Append a simulated weekly point once per interval.
    fn tick_trend(&mut self) {
        if self.last_trend_tick.elapsed() >= TREND_TICK {
            let value = rand::thread_rng().gen_range(TREND_RANGE) as f64;
            self.state.trend.push(value);
            self.last_trend_tick = Instant::now();
        }
    }
}

impl eframe::App for ClassPulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick_trend();
        // Wake up in time for the next point even without user input.
        ctx.request_repaint_after(TREND_TICK.saturating_sub(self.last_trend_tick.elapsed()));

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters and study tips ----
        egui::SidePanel::left("filter_panel")
            .default_width(250.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs, charts, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_panel(ui, &mut self.state);
        });
    }
}
