use chrono::{DateTime, Utc};
use ndarray::Array1;
use serde_derive::{Deserialize, Serialize};

use crate::modules::fbp::fuels::FuelType;

/// InputElement carries every input of one FBP evaluation.
/// `Default` is the defaults loader: an all-zero, fuel-neutral baseline the
/// caller overrides field by field, so no value is ever read uninitialized.
/// Zero-valued optional fields are replaced with fuel-specific catalog
/// defaults during the evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputElement {
    /// Fuel type code
    pub fuel_type: FuelType,
    /// Ignition shape: true = point source, false = line source
    pub point_ignition: bool,
    /// Julian day
    pub dj: u32,
    /// Julian day of minimum foliar moisture (0 = estimate from site)
    pub d0: u32,
    /// Elevation [m ASL]
    pub elevation: f64,
    /// Apply the buildup effect
    pub bui_effect: bool,
    /// Hours since ignition
    pub time_since_ignition: f64,
    /// Fine Fuel Moisture Code
    pub ffmc: f64,
    /// Initial Spread Index (used only when FFMC is absent)
    pub isi: f64,
    /// Buildup Index
    pub bui: f64,
    /// Wind speed [km/h]
    pub wind_speed: f64,
    /// Wind direction [degrees, blowing from]
    pub wind_dir: f64,
    /// Slope [percent]
    pub slope: f64,
    /// Aspect [degrees, downslope direction]
    pub aspect: f64,
    /// Percent conifer (M1/M2)
    pub percent_conifer: f64,
    /// Percent dead fir (M3/M4)
    pub percent_dead_fir: f64,
    /// Percent cured (O1a/O1b)
    pub curing: f64,
    /// Grass fuel load [kg/m^2]
    pub grass_fuel_load: f64,
    /// Crown base height [m]
    pub crown_base_height: f64,
    /// Crown fuel load [kg/m^2]
    pub crown_fuel_load: f64,
    /// Latitude [decimal degrees]
    pub latitude: f64,
    /// Longitude [decimal degrees]
    pub longitude: f64,
    /// Foliar moisture content if known [%]
    pub fmc: f64,
    /// C6 stand height [m]
    pub stand_height: f64,
    /// C6 stand density [stems/ha]
    pub stand_density: f64,
    /// Bearing for the directional outputs [degrees]
    pub theta: f64,
}

impl Default for InputElement {
    fn default() -> Self {
        Self {
            fuel_type: FuelType::NF,
            point_ignition: false,
            dj: 0,
            d0: 0,
            elevation: 0.0,
            bui_effect: false,
            time_since_ignition: 0.0,
            ffmc: 0.0,
            isi: 0.0,
            bui: 0.0,
            wind_speed: 0.0,
            wind_dir: 0.0,
            slope: 0.0,
            aspect: 0.0,
            percent_conifer: 0.0,
            percent_dead_fir: 0.0,
            curing: 0.0,
            grass_fuel_load: 0.0,
            crown_base_height: 0.0,
            crown_fuel_load: 0.0,
            latitude: 0.0,
            longitude: 0.0,
            fmc: 0.0,
            stand_height: 0.0,
            stand_density: 0.0,
            theta: 0.0,
        }
    }
}

/// One batch of independent evaluations at a given time.
#[derive(Debug)]
pub struct Input {
    pub time: DateTime<Utc>,
    pub data: Array1<InputElement>,
}

impl Input {
    pub fn new(time: DateTime<Utc>, data: Vec<InputElement>) -> Self {
        Self {
            time,
            data: Array1::from_vec(data),
        }
    }
}
