use chrono::{DateTime, Datelike, Utc};
use serde_derive::{Deserialize, Serialize};

use super::{
    constants::{DC_INIT, DMC_INIT, FFMC_INIT},
    functions::{
        buildup_index, daily_severity_rating, drought_code, duff_moisture_code,
        fine_fuel_moisture_code, fire_weather_index, initial_spread_index,
    },
};

/// Noon weather observation driving one daily FWI update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWeather {
    /// Air temperature [°C]
    pub temperature: f64,
    /// Relative humidity [%]
    pub humidity: f64,
    /// Wind speed [km/h]
    pub wind_speed: f64,
    /// 24h cumulated rain [mm]
    pub rain: f64,
}

/// The three moisture codes carried from day to day. The derived indices
/// (ISI, BUI, FWI, DSR) are recomputed from the codes on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FWIDailyState {
    pub ffmc: f64,
    pub dmc: f64,
    pub dc: f64,
}

impl Default for FWIDailyState {
    fn default() -> Self {
        FWIDailyState {
            ffmc: FFMC_INIT,
            dmc: DMC_INIT,
            dc: DC_INIT,
        }
    }
}

impl FWIDailyState {
    /// Advance the moisture codes by one day of noon weather.
    pub fn update(&mut self, weather: &DailyWeather, time: &DateTime<Utc>) {
        let month = time.month();
        self.ffmc = fine_fuel_moisture_code(
            weather.temperature,
            weather.humidity,
            weather.wind_speed,
            weather.rain,
            self.ffmc,
        );
        self.dmc = duff_moisture_code(
            weather.temperature,
            weather.humidity,
            weather.rain,
            self.dmc,
            month,
        );
        self.dc = drought_code(weather.temperature, weather.rain, self.dc, month);
    }

    /// Derived indices for the current codes: (ISI, BUI, FWI, DSR).
    pub fn indices(&self, wind_speed: f64) -> (f64, f64, f64, f64) {
        let isi = initial_spread_index(self.ffmc, wind_speed);
        let bui = buildup_index(self.dmc, self.dc);
        let fwi = fire_weather_index(isi, bui);
        let dsr = daily_severity_rating(fwi);
        (isi, bui, fwi, dsr)
    }
}
