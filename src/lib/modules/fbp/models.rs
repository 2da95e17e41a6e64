use ndarray::Zip;
use serde_derive::{Deserialize, Serialize};

use crate::models::{input::Input, input::InputElement, output::Output};

use super::{
    config::FBPModelConfig,
    constants::*,
    fuels::FuelType,
    functions::fire_behavior,
};

/// Resolved per-evaluation fuel state: the optional composition and canopy
/// inputs with fuel-specific catalog defaults substituted for missing values.
#[derive(Debug, Clone)]
pub struct FuelState {
    /// Percent conifer (M1/M2) [%]
    pub percent_conifer: f64,
    /// Percent dead fir (M3/M4) [%]
    pub percent_dead_fir: f64,
    /// Degree of curing (O1a/O1b) [%]
    pub curing: f64,
    /// Grass fuel load [kg/m^2]
    pub grass_fuel_load: f64,
    /// Crown base height [m]
    pub crown_base_height: f64,
    /// Crown fuel load [kg/m^2]
    pub crown_fuel_load: f64,
}

impl FuelState {
    /// Substitute fuel-specific defaults for zero-valued optional inputs.
    /// For C6 the crown base height can be derived from stand height and
    /// density when both are supplied (2009 revision).
    pub fn resolve(fuel: FuelType, input: &InputElement) -> Self {
        let params = fuel.parameters();

        let percent_conifer = if input.percent_conifer > 0.0 {
            input.percent_conifer
        } else {
            PC_DEFAULT
        };
        let percent_dead_fir = if input.percent_dead_fir > 0.0 {
            input.percent_dead_fir
        } else {
            PDF_DEFAULT
        };
        let curing = if input.curing > 0.0 {
            input.curing
        } else {
            params.curing_default
        };
        let grass_fuel_load = if input.grass_fuel_load > 0.0 {
            input.grass_fuel_load
        } else {
            params.gfl_default
        };

        let mut crown_base_height = input.crown_base_height;
        if crown_base_height <= 0.0
            && fuel == FuelType::C6
            && input.stand_height > 0.0
            && input.stand_density > 0.0
        {
            crown_base_height = C6_CBH_B0
                + C6_CBH_B1 * input.stand_height
                + C6_CBH_B2 * input.stand_density;
        }
        if crown_base_height <= 0.0 {
            crown_base_height = params.cbh;
        }

        let crown_fuel_load = if input.crown_fuel_load > 0.0 {
            input.crown_fuel_load
        } else {
            params.cfl
        };

        FuelState {
            percent_conifer,
            percent_dead_fir,
            curing,
            grass_fuel_load,
            crown_base_height,
            crown_fuel_load,
        }
    }
}

/// Fire shape growth history: the five mutually derivable parameters of the
/// accelerating elliptical growth model. The caller zeroes the fields it
/// wants computed and sets exactly one driver (see `fire_shape`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FireShapeHistory {
    /// Equilibrium-equivalent elapsed time [hrs]
    pub t1: f64,
    /// Actual elapsed time [hrs]
    pub t2: f64,
    /// Area burned [ha]
    pub area: f64,
    /// Perimeter [km]
    pub perimeter: f64,
    /// Forward spread distance [km]
    pub distance: f64,
}

/// Batch FBP model: evaluates every element of an input batch independently
/// and in parallel. The model holds no per-cell state between calls.
#[derive(Debug, Default)]
pub struct FBPModel {
    config: FBPModelConfig,
}

impl FBPModel {
    pub fn new(config: FBPModelConfig) -> Self {
        Self { config }
    }

    pub fn get_output(&self, input: &Input) -> Output {
        let output_data = Zip::from(&input.data)
            .par_map_collect(|element| fire_behavior(element, &self.config));

        Output::new(input.time, output_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn resolve_substitutes_catalog_defaults() {
        let input = InputElement::default();
        let state = FuelState::resolve(FuelType::O1a, &input);
        assert_relative_eq!(state.curing, 85.0);
        assert_relative_eq!(state.grass_fuel_load, 0.3);

        let state = FuelState::resolve(FuelType::M1, &input);
        assert_relative_eq!(state.percent_conifer, 50.0);

        let state = FuelState::resolve(FuelType::C2, &input);
        assert_relative_eq!(state.crown_base_height, 3.0);
        assert_relative_eq!(state.crown_fuel_load, 0.8);
    }

    #[test]
    fn resolve_keeps_explicit_overrides() {
        let input = InputElement {
            curing: 60.0,
            grass_fuel_load: 0.5,
            crown_base_height: 5.0,
            ..Default::default()
        };
        let state = FuelState::resolve(FuelType::O1b, &input);
        assert_relative_eq!(state.curing, 60.0);
        assert_relative_eq!(state.grass_fuel_load, 0.5);
        assert_relative_eq!(state.crown_base_height, 5.0);
    }

    #[test]
    fn batch_evaluation_keeps_element_order() {
        use chrono::Utc;

        let burning = InputElement {
            fuel_type: FuelType::C2,
            ffmc: 90.0,
            bui: 60.0,
            bui_effect: true,
            wind_speed: 20.0,
            fmc: 97.0,
            ..Default::default()
        };
        let inert = InputElement {
            fuel_type: FuelType::WA,
            ..Default::default()
        };
        let input = Input::new(Utc::now(), vec![burning, inert]);

        let model = FBPModel::new(FBPModelConfig::default());
        let output = model.get_output(&input);
        assert_eq!(output.len(), 2);
        assert!(output.data[0].ros > 0.0);
        assert_relative_eq!(output.data[1].ros, 0.0);
        assert_relative_eq!(output.data[1].hfi, 0.0);
    }

    #[test]
    fn c6_crown_base_height_from_stand_structure() {
        let input = InputElement {
            stand_height: 15.0,
            stand_density: 1000.0,
            ..Default::default()
        };
        let state = FuelState::resolve(FuelType::C6, &input);
        // -11.2 + 1.06 * 15 + 0.0017 * 1000
        assert_relative_eq!(state.crown_base_height, 6.4, epsilon = 1e-9);

        // sparse short stand falls back to the catalog default
        let input = InputElement {
            stand_height: 5.0,
            stand_density: 100.0,
            ..Default::default()
        };
        let state = FuelState::resolve(FuelType::C6, &input);
        assert_relative_eq!(state.crown_base_height, 7.0);
    }
}
