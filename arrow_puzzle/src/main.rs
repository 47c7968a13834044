// main.rs - Arrow Puzzle: a hexagon of arrows turned by clicking
// Engine lives in the hexgrid crate; this is window, settings and themes

use anyhow::anyhow;
use clap::Parser;
use eframe::egui;
use hexgrid::{GridEngine, Mode};
use tracing::{info, trace};
use tracing_subscriber::EnvFilter;

mod config;    // Settings file, env and flags
mod themes;    // Colour themes
mod ui;        // eframe::App implementation and board painting

use config::{Cli, Settings};
use themes::{Palette, THEMES};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings = config::load_settings(&cli)?;
    info!(
        theme = %settings.theme,
        mode = %settings.mode,
        amount = settings.amount,
        seeded = settings.seed().is_some(),
        "starting arrow puzzle"
    );

    let mut app = ArrowPuzzle::new(&settings)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(ui::window_size(settings.cell_size)),
        ..Default::default()
    };

    eframe::run_native(
        "Arrow Puzzle",
        options,
        Box::new(move |cc| {
            app.watch(&cc.egui_ctx);
            Box::new(app)
        }),
    )
    .map_err(|err| anyhow!("puzzle window failed: {err}"))
}

/// Window state: the engine plus everything the controls select.
pub struct ArrowPuzzle {
    engine: GridEngine,

    pub mode: Mode,
    pub amount: i32,
    pub seed: Option<(u64, u64)>,
    pub theme_index: usize,
    pub palette: Palette,
    pub show_numbers: bool,
    pub cell_size: f32,
    pub border_width: f32,
}

impl ArrowPuzzle {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let theme_index = themes::theme_index(&settings.theme)
            .ok_or_else(|| anyhow!("unknown theme {:?}", settings.theme))?;
        let palette = Palette::from_theme(&THEMES[theme_index])?;

        Ok(Self {
            engine: GridEngine::new(),
            mode: settings.mode,
            amount: settings.amount,
            seed: settings.seed(),
            theme_index,
            palette,
            show_numbers: settings.show_numbers,
            cell_size: settings.cell_size,
            border_width: settings.border_width,
        })
    }

    /// Repaint whenever the grid changes, whoever changed it.
    pub fn watch(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.engine.subscribe(move |change| {
            trace!(?change, "grid changed");
            ctx.request_repaint();
        });
    }

    pub fn select_theme(&mut self, index: usize) -> Result<(), themes::ThemeError> {
        if let Some(theme) = THEMES.get(index) {
            self.palette = Palette::from_theme(theme)?;
            self.theme_index = index;
            info!(theme = theme.name, "theme changed");
        }
        Ok(())
    }
}
