//! EduRate - Desktop peer and instructor rating app.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use edurate as app;

use app::config::{AppConfig, AppPaths, ConfigLoadResult};
use app::logging;
use app::ui::App;

/// Desktop peer and instructor rating app.
#[derive(Parser)]
#[command(name = "edurate")]
struct Cli {
    /// Use config.toml and session data from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Directory for session data and logs
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();
    let paths = AppPaths::resolve(cli.dev, cli.data_dir);

    // Load config before logging so the configured level applies
    let (config, initial_error) = match AppConfig::try_load(&paths.config_file) {
        ConfigLoadResult::Loaded(config) => (config, None),
        ConfigLoadResult::Missing => {
            let config = AppConfig::default();
            let error = config
                .save(&paths.config_file)
                .err()
                .map(|e| format!("Failed to write default config: {e}"));
            (config, error)
        }
        ConfigLoadResult::Invalid(e) => (AppConfig::default(), Some(format!("Config invalid, using defaults: {e}"))),
    };

    let _log_guard = match logging::init_logging(&config.logging, Some(&paths.log_dir)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    tracing::info!("EduRate starting...");
    tracing::info!("Config path: {:?}", paths.config_file);
    tracing::info!("Data dir: {:?}", paths.data_dir);
    if let Some(error) = &initial_error {
        tracing::warn!("{}", error);
    }

    // Create tokio runtime for submission timers
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("EduRate")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "EduRate",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            cc.egui_ctx.set_visuals(if config.ui.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });

            Ok(Box::new(App::new(rt, config, paths, initial_error)))
        }),
    )
}
