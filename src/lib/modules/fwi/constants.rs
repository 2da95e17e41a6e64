pub const FFMC_INIT: f64 = 85.0;
pub const DMC_INIT: f64 = 6.0;
pub const DC_INIT: f64 = 15.0;

// FFMC CONSTANTS (eqs 1-10)
pub const FFMC_S1: f64 = 147.2;
pub const FFMC_S2: f64 = 59.5;
pub const FFMC_MIN_RAIN: f64 = 0.5; // daily rain threshold [mm]
pub const FFMC_SATURATION: f64 = 150.0;
pub const FFMC_R1: f64 = 42.5;
pub const FFMC_R2: f64 = 6.93;
pub const FFMC_R3: f64 = 0.0015;
pub const FFMC_MAX_MOISTURE: f64 = 250.0;

// DMC CONSTANTS (eqs 11-17)
pub const DMC_MIN_RAIN: f64 = 1.5;
pub const DMC_MIN_TEMP: f64 = -1.1;
/// Effective day length by month, northern standard (Le)
pub const DMC_DAY_LENGTH: [f64; 12] = [
    6.5, 7.5, 9.0, 12.8, 13.9, 13.9, 12.4, 10.9, 9.4, 8.0, 7.0, 6.0,
];

// DC CONSTANTS (eqs 18-23)
pub const DC_MIN_RAIN: f64 = 2.8;
pub const DC_MIN_TEMP: f64 = -2.8;
/// Day length factor by month, northern standard (Lf)
pub const DC_DAY_LENGTH_FACTOR: [f64; 12] = [
    -1.6, -1.6, -1.6, 0.9, 3.8, 5.8, 6.4, 5.0, 2.4, 0.4, -1.6, -1.6,
];

// ISI CONSTANTS (eqs 24-26)
pub const ISI_W1: f64 = 0.05039;
pub const ISI_F1: f64 = 91.9;
pub const ISI_F2: f64 = -0.1386;
pub const ISI_F3: f64 = 5.31;
pub const ISI_F4: f64 = 4.93e7;
pub const ISI_SCALE: f64 = 0.208;

// BUI CONSTANTS (eqs 27)
pub const BUI_P1: f64 = 0.4;
pub const BUI_P2: f64 = 0.8;
pub const BUI_P3: f64 = 0.92;
pub const BUI_P4: f64 = 0.0114;
pub const BUI_P5: f64 = 1.7;

// FWI CONSTANTS (eqs 28-30)
pub const FWI_D1: f64 = 0.626;
pub const FWI_D2: f64 = 0.809;
pub const FWI_D3: f64 = 2.0;
pub const FWI_D4: f64 = 25.0;
pub const FWI_D5: f64 = 108.64;
pub const FWI_D6: f64 = -0.023;
pub const FWI_B1: f64 = 2.72;
pub const FWI_B2: f64 = 0.434;
pub const FWI_B3: f64 = 0.647;

// DSR CONSTANTS (eq 31)
pub const DSR_A1: f64 = 0.0272;
pub const DSR_A2: f64 = 1.77;
