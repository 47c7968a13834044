// config.rs - Settings layered from defaults, file, environment and flags

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use clap::Parser;
use hexgrid::Mode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::themes::{self, DEFAULT_THEME};

pub const DEFAULT_CONFIG_FILE: &str = "arrow_puzzle.toml";
pub const ENV_PREFIX: &str = "ARROW_PUZZLE__";
pub const AMOUNT_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

#[derive(Debug, Default, Parser)]
#[command(name = "arrow_puzzle", about = "Turn the arrows of a hexagonal board")]
pub struct Cli {
    /// Settings file; defaults to ./arrow_puzzle.toml when present
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub theme: Option<String>,

    /// "logical" turns the cell and its neighbours, "free" just the cell
    #[arg(long)]
    pub mode: Option<Mode>,

    #[arg(long)]
    pub amount: Option<i32>,

    #[arg(long, requires = "seed_y")]
    pub seed_x: Option<u64>,

    #[arg(long, requires = "seed_x")]
    pub seed_y: Option<u64>,

    #[arg(long)]
    pub show_numbers: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    theme: Option<String>,
    mode: Option<Mode>,
    amount: Option<i32>,
    seed_x: Option<u64>,
    seed_y: Option<u64>,
    cell_size: Option<f32>,
    border_width: Option<f32>,
    show_numbers: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub theme: String,
    pub mode: Mode,
    pub amount: i32,
    pub seed_x: Option<u64>,
    pub seed_y: Option<u64>,
    pub cell_size: f32,
    pub border_width: f32,
    pub show_numbers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.into(),
            mode: Mode::Logical,
            amount: 1,
            seed_x: None,
            seed_y: None,
            cell_size: 50.0,
            border_width: 4.0,
            show_numbers: false,
        }
    }
}

impl Settings {
    /// The seed pair for reproducible boards, only when both halves are set.
    pub fn seed(&self) -> Option<(u64, u64)> {
        self.seed_x.zip(self.seed_y)
    }

    fn apply_file(&mut self, file: FileSettings) {
        if let Some(v) = file.theme {
            self.theme = v;
        }
        if let Some(v) = file.mode {
            self.mode = v;
        }
        if let Some(v) = file.amount {
            self.amount = v;
        }
        if let Some(v) = file.seed_x {
            self.seed_x = Some(v);
        }
        if let Some(v) = file.seed_y {
            self.seed_y = Some(v);
        }
        if let Some(v) = file.cell_size {
            self.cell_size = v;
        }
        if let Some(v) = file.border_width {
            self.border_width = v;
        }
        if let Some(v) = file.show_numbers {
            self.show_numbers = v;
        }
    }

    /// `lookup` maps a full variable name to its value; malformed values are
    /// logged and skipped.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |key: &str| lookup(&format!("{ENV_PREFIX}{key}"));

        if let Some(v) = var("THEME") {
            self.theme = v;
        }
        if let Some(v) = var("MODE") {
            match v.parse() {
                Ok(mode) => self.mode = mode,
                Err(err) => warn!(%err, "ignoring {ENV_PREFIX}MODE"),
            }
        }
        parse_env(var("AMOUNT"), "AMOUNT", &mut self.amount);
        parse_env(var("CELL_SIZE"), "CELL_SIZE", &mut self.cell_size);
        parse_env(var("BORDER_WIDTH"), "BORDER_WIDTH", &mut self.border_width);
        parse_env(var("SHOW_NUMBERS"), "SHOW_NUMBERS", &mut self.show_numbers);

        let mut seed_x = self.seed_x.unwrap_or_default();
        if parse_env(var("SEED_X"), "SEED_X", &mut seed_x) {
            self.seed_x = Some(seed_x);
        }
        let mut seed_y = self.seed_y.unwrap_or_default();
        if parse_env(var("SEED_Y"), "SEED_Y", &mut seed_y) {
            self.seed_y = Some(seed_y);
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = &cli.theme {
            self.theme = v.clone();
        }
        if let Some(v) = cli.mode {
            self.mode = v;
        }
        if let Some(v) = cli.amount {
            self.amount = v;
        }
        if let Some(v) = cli.seed_x {
            self.seed_x = Some(v);
        }
        if let Some(v) = cli.seed_y {
            self.seed_y = Some(v);
        }
        if cli.show_numbers {
            self.show_numbers = true;
        }
    }

    fn validate(mut self) -> anyhow::Result<Self> {
        if themes::theme_index(&self.theme).is_none() {
            let known: Vec<&str> = themes::theme_names().collect();
            bail!("unknown theme {:?}, expected one of {}", self.theme, known.join(", "));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            bail!("cell_size must be a positive number, got {}", self.cell_size);
        }
        if !(self.border_width.is_finite() && self.border_width >= 0.0) {
            bail!("border_width must not be negative, got {}", self.border_width);
        }
        let clamped = self.amount.clamp(*AMOUNT_RANGE.start(), *AMOUNT_RANGE.end());
        if clamped != self.amount {
            warn!(requested = self.amount, used = clamped, "amount out of range");
            self.amount = clamped;
        }
        Ok(self)
    }
}

fn parse_env<T: std::str::FromStr>(raw: Option<String>, key: &str, slot: &mut T) -> bool {
    let Some(raw) = raw else {
        return false;
    };
    match raw.trim().parse() {
        Ok(v) => {
            *slot = v;
            true
        }
        Err(_) => {
            warn!(value = %raw, "ignoring malformed {ENV_PREFIX}{key}");
            false
        }
    }
}

fn read_file_settings(path: &Path, explicit: bool) -> anyhow::Result<Option<FileSettings>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if !explicit && err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file");
            return Ok(None);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading settings from {}", path.display()));
        }
    };
    let parsed = toml::from_str(&raw)
        .with_context(|| format!("parsing settings from {}", path.display()))?;
    Ok(Some(parsed))
}

pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    load_settings_with(cli, |key| std::env::var(key).ok())
}

fn load_settings_with(
    cli: &Cli,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, explicit) = match &cli.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    if let Some(file) = read_file_settings(&path, explicit)? {
        settings.apply_file(file);
    }
    settings.apply_env(env);
    settings.apply_cli(cli);

    settings.validate()
}
