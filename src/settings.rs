//! User settings and preferences
//!
//! Persisted in LocalStorage as JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Result;
use crate::theme::Theme;
use crate::viewport::GridLayout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Simulation ===
    /// Ticks per second
    pub speed: u32,
    /// Board side length, in cells
    pub grid_size: usize,
    /// Fraction of cells alive on a fresh board (0.0 - 1.0)
    pub seed_density: f64,

    // === Grid geometry ===
    pub cell_size: f64,
    pub cell_margin: f64,

    // === Input ===
    /// Max pointer travel (pixels) for a press/release to count as a click
    pub click_threshold: f64,
    /// Scale rendering by the zoom level (zoom is tracked either way)
    pub apply_zoom: bool,
    /// Optional zoom ceiling
    pub max_zoom: Option<u32>,

    // === Display ===
    pub show_drag_guide: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            grid_size: GRID_SIZE,
            seed_density: 0.25,

            cell_size: CELL_SIZE,
            cell_margin: CELL_MARGIN,

            click_threshold: CLICK_THRESHOLD,
            apply_zoom: false,
            max_zoom: None,

            show_drag_guide: true,
            theme: Theme::default(),
        }
    }
}

/// Clamp, falling back to `default` for NaN
fn clamp_or(value: f64, min: f64, max: f64, default: f64) -> f64 {
    if value.is_nan() {
        default
    } else {
        value.clamp(min, max)
    }
}

impl Settings {
    /// Pull every field into its valid range
    pub fn clamped(mut self) -> Self {
        self.speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
        self.grid_size = self.grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        self.seed_density = clamp_or(self.seed_density, 0.0, 1.0, 0.25);
        self.cell_size = clamp_or(self.cell_size, 2.0, 200.0, CELL_SIZE);
        self.cell_margin = clamp_or(self.cell_margin, 0.0, 20.0, CELL_MARGIN);
        self.click_threshold = clamp_or(self.click_threshold, 0.0, 64.0, CLICK_THRESHOLD);
        self.max_zoom = self.max_zoom.map(|z| z.max(1));
        self
    }

    /// Grid geometry for the current board size
    pub fn layout(&self) -> Result<GridLayout> {
        GridLayout::new(self.cell_size, self.cell_margin, self.grid_size)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "cellscope_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str::<Settings>(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings.clamped();
                    }
                    Err(e) => log::warn!("Discarding stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match serde_json::to_string(self) {
                Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Could not save settings: {:?}", e),
                },
                Err(e) => log::warn!("Could not serialize settings: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
