// src/app.rs
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::api::{AnalysisClient, AnalysisResponse, ApiError};
use crate::markdown::Block;
use crate::report::{self, Section};
use crate::settings::Settings;
use crate::state::AppState;
use crate::ui;
use crate::ui::theme;

const FORM_STORAGE_KEY: &str = "form";

pub struct FinAgentApp {
    state: AppState,
    client: Arc<AnalysisClient>,
    runtime: tokio::runtime::Runtime,
    analysis_rx: Option<mpsc::Receiver<Result<AnalysisResponse, ApiError>>>,
    health_rx: mpsc::Receiver<bool>,
    // Parsed once per response, not once per frame.
    section_trees: Vec<(Section, Option<Vec<Block>>)>,
}

impl FinAgentApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        theme::apply(&cc.egui_ctx);

        let mut state = AppState::new();
        if let Some(storage) = cc.storage {
            if let Some(form) = eframe::get_value(storage, FORM_STORAGE_KEY) {
                state.form = form;
            }
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("Failed to start async runtime");

        let client = Arc::new(AnalysisClient::new(
            settings.api_url.clone(),
            settings.request_timeout(),
        ));

        // Liveness probe for the status badge. Never blocks submission;
        // the sender side dies with the app when the runtime is dropped.
        let (health_tx, health_rx) = mpsc::channel(8);
        let probe = client.clone();
        let poll = settings.health_poll();
        runtime.spawn(async move {
            loop {
                let online = probe.health().await.unwrap_or(false);
                if health_tx.send(online).await.is_err() {
                    break;
                }
                tokio::time::sleep(poll).await;
            }
        });

        let section_trees = report::render_model(&state.reports);

        Self {
            state,
            client,
            runtime,
            analysis_rx: None,
            health_rx,
            section_trees,
        }
    }

    /// One submission attempt: validate, then dispatch exactly one request
    /// on the runtime. Invalid input never reaches the network.
    fn submit(&mut self) {
        if self.state.loading {
            return;
        }

        match self.state.form.validate() {
            Ok(request) => {
                tracing::info!(
                    symbol = %request.symbol,
                    period = request.period.wire(),
                    "submitting analysis"
                );
                self.state.begin_analysis(&request);

                let (tx, rx) = mpsc::channel(1);
                self.analysis_rx = Some(rx);
                let client = self.client.clone();
                self.runtime.spawn(async move {
                    let outcome = client.analyze(&request).await;
                    let _ = tx.send(outcome).await;
                });
            }
            Err(error) => self.state.warn_invalid_input(&error),
        }
    }

    fn poll_background(&mut self) {
        if let Some(rx) = &mut self.analysis_rx {
            if let Ok(outcome) = rx.try_recv() {
                if let Err(error) = &outcome {
                    tracing::warn!(%error, "analysis failed");
                }
                self.state.finish_analysis(outcome, self.client.base_url());
                self.section_trees = report::render_model(&self.state.reports);
                self.analysis_rx = None;
            }
        }

        // Keep only the latest probe result.
        while let Ok(online) = self.health_rx.try_recv() {
            self.state.set_backend_online(online);
        }
    }

    fn show_top_bar(&self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("FinAgent")
                    .size(19.0)
                    .strong()
                    .color(theme::ACCENT),
            );
            ui.label(
                egui::RichText::new("AI-Powered Financial Intelligence")
                    .size(11.0)
                    .color(theme::TEXT_MUTED),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(concat!("v", env!("CARGO_PKG_VERSION")))
                        .size(11.0)
                        .monospace()
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(8.0);
                let (status, color) = match self.state.backend_online {
                    Some(true) => ("● System Online", theme::POSITIVE),
                    Some(false) => ("● Service Offline", theme::NEGATIVE),
                    None => ("● Connecting...", theme::TEXT_MUTED),
                };
                ui.label(egui::RichText::new(status).size(11.0).color(color));
            });
        });
        ui.add_space(4.0);
    }
}

impl eframe::App for FinAgentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_background();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_top_bar(ui);
        });

        let mut submit_requested = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    submit_requested = ui::form::show_form_view(ui, &mut self.state);
                    ui.add_space(12.0);
                    ui::log::show_log_view(ui, &self.state);
                    ui.add_space(12.0);
                    ui::report::show_report_view(ui, &self.state, &self.section_trees);
                    ui.add_space(8.0);
                });
        });

        if submit_requested {
            self.submit();
        }

        if self.state.loading {
            // A pending outcome can arrive between input events.
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, FORM_STORAGE_KEY, &self.state.form);
    }
}
