use std::collections::HashMap;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// FBP fuel types as catalogued in ST-X-3 (1992).
/// `WA` (water) and `NF` (non-fuel) are the non-burnable sentinels.
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    EnumString,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum FuelType {
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    D1,
    M1,
    M2,
    M3,
    M4,
    S1,
    S2,
    S3,
    O1a,
    O1b,
    WA,
    NF,
}

/// Distinguishes the generic spread formula from the C6 coupled
/// surface/crown sub-model, which has its own code path.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SpreadModel {
    Generic,
    CoupledCrown,
}

/// Per-fuel constants of the FBP system (ST-X-3 tables, 2009 revision
/// for the M3/M4 spread coefficients).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelParameters {
    /// Spread equation coefficient a [m/min]
    pub a: f64,
    /// Spread equation coefficient b [1/ISI]
    pub b: f64,
    /// Spread equation exponent c
    pub c: f64,
    /// Buildup effect exponent base
    pub q: f64,
    /// Average BUI for the fuel type
    pub buio: f64,
    /// Default crown base height [m]
    pub cbh: f64,
    /// Default crown fuel load [kg/m^2]
    pub cfl: f64,
    /// Default degree of curing [%] (grass fuels only)
    pub curing_default: f64,
    /// Default grass fuel load [kg/m^2] (grass fuels only)
    pub gfl_default: f64,
}

impl FuelParameters {
    const fn new(a: f64, b: f64, c: f64, q: f64, buio: f64, cbh: f64, cfl: f64) -> Self {
        FuelParameters {
            a,
            b,
            c,
            q,
            buio,
            cbh,
            cfl,
            curing_default: 0.0,
            gfl_default: 0.0,
        }
    }

    const fn grass(a: f64, b: f64, c: f64) -> Self {
        FuelParameters {
            a,
            b,
            c,
            q: 1.0,
            buio: 1.0,
            cbh: 0.0,
            cfl: 0.0,
            curing_default: 85.0,
            gfl_default: 0.3,
        }
    }

    const fn non_fuel() -> Self {
        FuelParameters::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }
}

lazy_static! {
    /// Read-only fuel catalog, initialized once and shared across
    /// concurrent evaluations.
    static ref FUEL_CATALOG: HashMap<FuelType, FuelParameters> = {
        use FuelType::*;
        HashMap::from([
            (C1, FuelParameters::new(90.0, 0.0649, 4.5, 0.90, 72.0, 2.0, 0.75)),
            (C2, FuelParameters::new(110.0, 0.0282, 1.5, 0.70, 64.0, 3.0, 0.80)),
            (C3, FuelParameters::new(110.0, 0.0444, 3.0, 0.75, 62.0, 8.0, 1.15)),
            (C4, FuelParameters::new(110.0, 0.0293, 1.5, 0.80, 66.0, 4.0, 1.20)),
            (C5, FuelParameters::new(30.0, 0.0697, 4.0, 0.80, 56.0, 18.0, 1.20)),
            (C6, FuelParameters::new(30.0, 0.0800, 3.0, 0.80, 62.0, 7.0, 1.80)),
            (C7, FuelParameters::new(45.0, 0.0305, 2.0, 0.85, 106.0, 10.0, 0.50)),
            (D1, FuelParameters::new(30.0, 0.0232, 1.6, 0.90, 32.0, 0.0, 0.0)),
            (M1, FuelParameters::new(0.0, 0.0, 0.0, 0.80, 50.0, 6.0, 0.80)),
            (M2, FuelParameters::new(0.0, 0.0, 0.0, 0.80, 50.0, 6.0, 0.80)),
            (M3, FuelParameters::new(120.0, 0.0572, 1.4, 0.80, 50.0, 6.0, 0.80)),
            (M4, FuelParameters::new(100.0, 0.0404, 1.48, 0.80, 50.0, 6.0, 0.80)),
            (S1, FuelParameters::new(75.0, 0.0297, 1.3, 0.75, 38.0, 0.0, 0.0)),
            (S2, FuelParameters::new(40.0, 0.0438, 1.7, 0.75, 63.0, 0.0, 0.0)),
            (S3, FuelParameters::new(55.0, 0.0829, 3.2, 0.75, 31.0, 0.0, 0.0)),
            (O1a, FuelParameters::grass(190.0, 0.0310, 1.4)),
            (O1b, FuelParameters::grass(250.0, 0.0350, 1.7)),
            (WA, FuelParameters::non_fuel()),
            (NF, FuelParameters::non_fuel()),
        ])
    };

    static ref NON_FUEL_PARAMETERS: FuelParameters = FuelParameters::non_fuel();
}

impl FuelType {
    /// Constants for this fuel type, read from the process-lifetime catalog.
    pub fn parameters(&self) -> &'static FuelParameters {
        FUEL_CATALOG.get(self).unwrap_or(&NON_FUEL_PARAMETERS)
    }

    pub fn spread_model(&self) -> SpreadModel {
        match self {
            FuelType::C6 => SpreadModel::CoupledCrown,
            _ => SpreadModel::Generic,
        }
    }

    pub fn is_non_fuel(&self) -> bool {
        matches!(self, FuelType::WA | FuelType::NF)
    }

    pub fn is_grass(&self) -> bool {
        matches!(self, FuelType::O1a | FuelType::O1b)
    }

    pub fn is_conifer_mix(&self) -> bool {
        matches!(self, FuelType::M1 | FuelType::M2)
    }

    pub fn is_dead_fir_mix(&self) -> bool {
        matches!(self, FuelType::M3 | FuelType::M4)
    }

    /// Fuel types with a canopy that can sustain crowning.
    pub fn crown_capable(&self) -> bool {
        self.parameters().cfl > 0.0
    }

    /// Open fuel types accelerate at the fixed rate regardless of crowning.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            FuelType::C1
                | FuelType::O1a
                | FuelType::O1b
                | FuelType::S1
                | FuelType::S2
                | FuelType::S3
        )
    }
}

/// Case-insensitive lookup of a fuel code. Unrecognized codes map to the
/// non-fuel sentinel so downstream outputs resolve to zero.
pub fn lookup(name: &str) -> FuelType {
    FuelType::from_str(name.trim()).unwrap_or_else(|_| {
        log::warn!("unrecognized fuel type '{}', treating as non-fuel", name);
        FuelType::NF
    })
}
