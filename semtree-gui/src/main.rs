use eframe::egui::ViewportBuilder;
use semtree_core::SemTreeConfig;
use semtree_gui::{GuiError, GuiResult, SemTreeApp, APP_TITLE};
use semtree_utils::logging::init_logging;

fn main() -> GuiResult<()> {
    let (config, config_error) = match SemTreeConfig::load() {
        Ok((config, source)) => {
            (config, source.map(|path| format!("loaded config from {}", path.display())))
        }
        Err(e) => (SemTreeConfig::default(), Some(format!("config ignored, using defaults: {}", e))),
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    if let Some(note) = config_error {
        log::info!("{}", note);
    }

    let lexicon = semtree_core::lexicon::open(&config.lexicon).map_err(|e| {
        log::error!("Failed to open lexical database: {}", e);
        e.to_string()
    });

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size(config.canvas.min_size)
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(SemTreeApp::new(cc, &config, lexicon)?))),
    )
    .map_err(|e| GuiError::Ui(format!("Application failed: {}", e)))
}
