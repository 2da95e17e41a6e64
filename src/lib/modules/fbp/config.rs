use super::functions::{foliar_moisture, initial_spread_index};

/// Configuration for one FBP model run.
/// Selects the per-version function variants, mirroring the FWI model config.
#[derive(Debug)]
pub struct FBPModelConfig {
    pub model_version: String,

    isi_fn: fn(f64, f64) -> f64,
    fmc_fn: fn(f64, f64, f64, u32, u32) -> f64,
}

impl FBPModelConfig {
    pub fn new(model_version_str: &str) -> Self {
        let isi_fn: fn(f64, f64) -> f64;
        let fmc_fn: fn(f64, f64, f64, u32, u32) -> f64;

        match model_version_str {
            "2009" => {
                isi_fn = initial_spread_index;
                fmc_fn = foliar_moisture;
            }
            _ => {
                isi_fn = initial_spread_index;
                fmc_fn = foliar_moisture;
            }
        }

        FBPModelConfig {
            model_version: model_version_str.to_owned(),
            isi_fn,
            fmc_fn,
        }
    }

    pub fn isi(&self, ffmc: f64, wind_speed: f64) -> f64 {
        (self.isi_fn)(ffmc, wind_speed)
    }

    pub fn fmc(&self, latitude: f64, longitude: f64, elevation: f64, dj: u32, d0: u32) -> f64 {
        (self.fmc_fn)(latitude, longitude, elevation, dj, d0)
    }
}

impl Default for FBPModelConfig {
    fn default() -> Self {
        FBPModelConfig::new("2009")
    }
}
