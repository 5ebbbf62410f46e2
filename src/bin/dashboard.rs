//! BS Explainer GUI
//!
//! Interactive Black-Scholes explainer: sliders for the market inputs, the
//! resulting price and Greeks, the price surface over spot × volatility and
//! the delta-vs-spot curve.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, VLine};

use bs_explainer::dashboard::SliderRange;
use bs_explainer::prelude::*;
use bs_explainer::telemetry;

/// Volatility rows drawn as separate price curves
const SURFACE_SLICES: usize = 8;

#[derive(Debug, Parser)]
#[command(name = "bs-dashboard", version, about = "Black-Scholes visual explainer")]
struct Args {
    /// Dashboard config (TOML)
    #[arg(long, env = "BS_EXPLAINER_CONFIG")]
    config: Option<PathBuf>,
}

struct ExplainerApp {
    config: DashboardConfig,
    controls: Controls,
    high_resolution: bool,

    // Computed
    view: Option<DashboardView>,
    error: Option<String>,
}

impl ExplainerApp {
    fn new(config: DashboardConfig) -> Self {
        let mut app = Self {
            controls: Controls::from_config(&config),
            config,
            high_resolution: false,
            view: None,
            error: None,
        };
        app.recompute();
        app
    }

    fn recompute(&mut self) {
        let mut config = self.config.clone();
        if self.high_resolution {
            config.surface = DashboardConfig::high_resolution().surface;
        }

        match DashboardView::compute(&self.controls, &config) {
            Ok(view) => {
                self.view = Some(view);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("dashboard refresh failed: {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) -> bool {
        let ranges = self.config.controls;
        let mut changed = false;

        ui.heading("Controls");
        ui.separator();

        changed |= slider(ui, &mut self.controls.spot, &ranges.spot, "Stock Price (S)");
        changed |= slider(ui, &mut self.controls.strike, &ranges.strike, "Strike Price (K)");
        changed |= slider(ui, &mut self.controls.volatility_pct, &ranges.volatility_pct, "Volatility (σ, %)");
        changed |= slider(ui, &mut self.controls.maturity_days, &ranges.maturity_days, "Time to Maturity (days)");
        changed |= slider(ui, &mut self.controls.rate_pct, &ranges.rate_pct, "Risk-Free Rate (r, %)");

        ui.separator();
        ui.label("Option Type");
        ui.horizontal(|ui| {
            changed |= ui
                .radio_value(&mut self.controls.option_type, OptionType::Call, "Call")
                .changed();
            changed |= ui
                .radio_value(&mut self.controls.option_type, OptionType::Put, "Put")
                .changed();
        });

        ui.separator();
        changed |= ui
            .checkbox(&mut self.high_resolution, "High resolution surface")
            .changed();
        if ui.button("Reset").clicked() {
            self.controls = Controls::from_config(&self.config);
            changed = true;
        }

        changed
    }
}

fn slider(ui: &mut egui::Ui, value: &mut f64, range: &SliderRange, label: &str) -> bool {
    ui.add(
        egui::Slider::new(value, range.min..=range.max)
            .step_by(range.step)
            .text(label),
    )
    .changed()
}

/// Blue (low vol) to red (high vol)
fn slice_color(fraction: f64) -> egui::Color32 {
    let f = fraction.clamp(0.0, 1.0);
    egui::Color32::from_rgb((60.0 + 195.0 * f) as u8, (200.0 - 120.0 * f) as u8, (255.0 - 195.0 * f) as u8)
}

fn greek_color(label: &str) -> egui::Color32 {
    match label {
        "Delta" => egui::Color32::from_rgb(0, 242, 254),
        "Gamma" => egui::Color32::from_rgb(246, 65, 108),
        "Vega" => egui::Color32::from_rgb(67, 233, 123),
        "Theta" => egui::Color32::from_rgb(255, 189, 57),
        _ => egui::Color32::from_rgb(247, 151, 30),
    }
}

fn show_view(ui: &mut egui::Ui, view: &DashboardView) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(view.headline())
                .size(36.0)
                .strong()
                .color(egui::Color32::from_rgb(0, 230, 230)),
        );
        ui.label(view.moneyness());
    });

    ui.separator();
    ui.columns(5, |cols| {
        for (col, tile) in cols.iter_mut().zip(view.tiles()) {
            col.vertical_centered(|ui| {
                ui.label(egui::RichText::new(tile.label).strong());
                ui.label(
                    egui::RichText::new(&tile.text)
                        .size(20.0)
                        .strong()
                        .color(greek_color(tile.label)),
                );
            });
        }
    });
    ui.separator();

    // Price surface as one price-vs-spot line per volatility row
    let surface = &view.surface;
    ui.heading(view.surface_title());
    let n_vols = surface.vols.len();
    let stride = n_vols.div_ceil(SURFACE_SLICES).max(1);
    let vols_pct = surface.vols_pct();

    Plot::new("price_surface")
        .view_aspect(2.5)
        .x_axis_label("Stock Price (S)")
        .y_axis_label("Option Price")
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for vi in (0..n_vols).step_by(stride) {
                if let Some(points) = surface.slice(vi) {
                    let fraction = vi as f64 / (n_vols.saturating_sub(1).max(1)) as f64;
                    plot_ui.line(
                        Line::new(PlotPoints::new(points))
                            .name(format!("σ = {:.0}%", vols_pct[vi]))
                            .color(slice_color(fraction))
                            .width(1.5),
                    );
                }
            }
            plot_ui.vline(
                VLine::new(view.result.inputs.strike)
                    .name("Strike")
                    .color(egui::Color32::YELLOW)
                    .style(egui_plot::LineStyle::Dashed { length: 5.0 }),
            );
        });

    ui.separator();
    ui.heading("Delta vs Stock Price");

    Plot::new("delta_curve")
        .view_aspect(3.0)
        .x_axis_label("Stock Price (S)")
        .y_axis_label("Delta")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::new(view.delta_curve.points()))
                    .name("Delta")
                    .color(egui::Color32::from_rgb(0, 242, 254))
                    .width(3.0),
            );
            plot_ui.vline(
                VLine::new(view.result.inputs.spot)
                    .name("Spot")
                    .color(egui::Color32::YELLOW)
                    .width(1.5)
                    .style(egui_plot::LineStyle::Dashed { length: 5.0 }),
            );
        });
}

impl eframe::App for ExplainerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            if self.controls_panel(ui) {
                self.recompute();
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::LIGHT_RED, error);
            }
            match &self.view {
                Some(view) => {
                    egui::ScrollArea::vertical().show(ui, |ui| show_view(ui, view));
                }
                None => {
                    ui.label("No result for the current inputs");
                }
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    telemetry::init_tracing("info");
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DashboardConfig::load(path).unwrap_or_else(|e| {
            tracing::error!("{e}; using defaults");
            DashboardConfig::default()
        }),
        None => DashboardConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_title("Black-Scholes Visual Explainer"),
        ..Default::default()
    };

    eframe::run_native(
        "Black-Scholes Visual Explainer",
        options,
        Box::new(move |_cc| Box::new(ExplainerApp::new(config))),
    )
}
