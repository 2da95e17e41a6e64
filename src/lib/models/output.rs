use chrono::{DateTime, Utc};
use ndarray::Array1;
use serde_derive::{Deserialize, Serialize};

/// OutputElement is the complete result record of one FBP evaluation.
/// All fields default to zero; a non-burnable or unrecognized fuel type
/// leaves the whole record at its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputElement {
    /// Head rate of spread [m/min]
    pub ros: f64,
    /// Flank rate of spread [m/min]
    pub fros: f64,
    /// Back rate of spread [m/min]
    pub bros: f64,
    /// Rate of spread at bearing theta [m/min]
    pub tros: f64,
    /// Head rate of spread at time t [m/min]
    pub hrost: f64,
    /// Flank rate of spread at time t [m/min]
    pub frost: f64,
    /// Back rate of spread at time t [m/min]
    pub brost: f64,
    /// Rate of spread at bearing theta at time t [m/min]
    pub trost: f64,
    /// Crown fraction burned, head
    pub cfb: f64,
    /// Crown fraction burned, flank
    pub fcfb: f64,
    /// Crown fraction burned, back
    pub bcfb: f64,
    /// Crown fraction burned at bearing theta
    pub tcfb: f64,
    /// Head fire intensity [kW/m]
    pub hfi: f64,
    /// Flank fire intensity [kW/m]
    pub ffi: f64,
    /// Back fire intensity [kW/m]
    pub bfi: f64,
    /// Fire intensity at bearing theta [kW/m]
    pub tfi: f64,
    /// Total fuel consumption, head [kg/m^2]
    pub tfc: f64,
    /// Total fuel consumption, flank [kg/m^2]
    pub ftfc: f64,
    /// Total fuel consumption, back [kg/m^2]
    pub btfc: f64,
    /// Total fuel consumption at bearing theta [kg/m^2]
    pub ttfc: f64,
    /// Surface fuel consumption [kg/m^2]
    pub sfc: f64,
    /// Time of crown fire initiation, head [hrs]
    pub ti: f64,
    /// Time of crown fire initiation, flank [hrs]
    pub fti: f64,
    /// Time of crown fire initiation, back [hrs]
    pub bti: f64,
    /// Time of crown fire initiation at bearing theta [hrs]
    pub tti: f64,
    /// Length to breadth ratio
    pub lb: f64,
    /// Net spread direction azimuth [degrees]
    pub raz: f64,
    /// Net vectored wind speed [km/h]
    pub wsv: f64,
}

/// Results of one batch of evaluations.
#[derive(Debug)]
pub struct Output {
    pub time: DateTime<Utc>,
    pub data: Array1<OutputElement>,
}

impl Output {
    pub fn new(time: DateTime<Utc>, data: Array1<OutputElement>) -> Self {
        Self { time, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
