/**
 * Shop Agent Desktop Client - Main Entry Point
 *
 * Resolves configuration, opens persisted storage, and runs the eframe
 * application that paints the controller's render plan each frame.
 */
use std::sync::Arc;

use eframe::egui;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use shopagent::egui_app::storage::{FileStore, MemoryStore, SharedStore};
use shopagent::egui_app::theme::{palette, styles};
use shopagent::egui_app::views::{self, FormInputs};
use shopagent::egui_app::{Action, ApiClient, AppState, Config, Driver, Theme};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shopagent=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn open_store(config: &Config) -> SharedStore {
    match config.data_dir().map(FileStore::open) {
        Some(Ok(store)) => {
            info!(path = %store.path().display(), "using persisted state");
            Arc::new(store)
        }
        Some(Err(e)) => {
            warn!(error = %e, "persisted state unavailable; using memory only");
            MemoryStore::new().shared()
        }
        None => MemoryStore::new().shared(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::load()
        .or_else(|e| {
            warn!(error = %e, "config file ignored; using environment only");
            Config::from_env()
        })
        .unwrap_or_else(|e| {
            error!(error = %e, "invalid configuration; falling back to defaults");
            Config::new()
        });
    let store = open_store(&config);
    let api = ApiClient::new(config)?;
    let driver = Driver::new(api)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Shop Agent",
        options,
        Box::new(move |_cc| Ok(Box::new(ShopApp::new(store, driver)))),
    )?;
    Ok(())
}

/// Main application state
struct ShopApp {
    state: AppState,
    driver: Driver,
    inputs: FormInputs,
    applied_theme: Option<Theme>,
}

impl ShopApp {
    fn new(store: SharedStore, mut driver: Driver) -> Self {
        let mut state = AppState::new(store);
        let commands = state.dispatch(Action::Start);
        driver.execute(commands);
        Self {
            state,
            driver,
            inputs: FormInputs::default(),
            applied_theme: None,
        }
    }
}

impl eframe::App for ShopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.driver.pump(&mut self.state);

        let plan = self.state.render_plan();
        if self.applied_theme != Some(plan.theme) {
            styles::apply_global_theme(ctx, plan.theme);
            self.applied_theme = Some(plan.theme);
        }

        let mut actions = Vec::new();
        views::render_top_bar(ctx, &plan, &mut actions);
        views::render_main_panel(ctx, &plan, &mut actions);
        match &plan.auth_modal {
            Some(modal) => views::auth_view::render(
                ctx,
                palette(plan.theme),
                modal,
                &mut self.inputs,
                &mut actions,
            ),
            None => self.inputs.clear_secrets(),
        }

        for action in actions {
            let commands = self.state.dispatch(action);
            self.driver.execute(commands);
        }

        if self.driver.pending() > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
