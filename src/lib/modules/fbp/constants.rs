// ISI CONSTANTS (eqs 45-46, 52-53; 2009 high-wind revision)
pub const ISI_M1: f64 = 147.2;
pub const ISI_M2: f64 = 59.5;
pub const ISI_F1: f64 = 91.9;
pub const ISI_F2: f64 = -0.1386;
pub const ISI_F3: f64 = 5.31;
pub const ISI_F4: f64 = 4.93e7;
pub const ISI_W1: f64 = 0.05039;
pub const ISI_W2: f64 = 12.0;
pub const ISI_W3: f64 = 0.0818;
pub const ISI_W4: f64 = 28.0;
pub const ISI_SCALE: f64 = 0.208;
pub const ISI_HIGH_WIND: f64 = 40.0; // km/h

// FMC CONSTANTS (eqs 1-7)
pub const FMC_N1: f64 = 46.0;
pub const FMC_N2: f64 = 23.4;
pub const FMC_N3: f64 = -0.0360;
pub const FMC_N4: f64 = 43.0;
pub const FMC_N5: f64 = 33.7;
pub const FMC_N6: f64 = -0.0351;
pub const FMC_REF_LON: f64 = 150.0;
pub const FMC_D1: f64 = 151.0;
pub const FMC_D2: f64 = 142.1;
pub const FMC_D3: f64 = 0.0172;
pub const FMC_LOW: f64 = 30.0; // days from minimum
pub const FMC_HIGH: f64 = 50.0;
pub const FMC_MAX: f64 = 120.0; // %

// CROWNING CONSTANTS (eqs 56-58)
pub const CSI_H1: f64 = 460.0;
pub const CSI_H2: f64 = 25.9;
pub const CSI_C1: f64 = 0.001;
pub const CFB_K: f64 = 0.23;
pub const INTENSITY_SCALE: f64 = 300.0; // eq 69

// C6 COUPLED CROWN MODEL (eqs 61-65)
pub const C6_CROWN_A: f64 = 60.0;
pub const C6_CROWN_B: f64 = 0.0497;
pub const C6_FME_T1: f64 = 1.5;
pub const C6_FME_T2: f64 = 0.00275;
pub const C6_FME_NORM: f64 = 0.778;
// 2009 stand-structure relation for the crown base height
pub const C6_CBH_B0: f64 = -11.2;
pub const C6_CBH_B1: f64 = 1.06;
pub const C6_CBH_B2: f64 = 0.0017;

// BUILDUP EFFECT (eq 54)
pub const BE_SCALE: f64 = 50.0;

// GRASS CURING FACTOR (2009 eqs 35a-35b)
pub const CURING_BREAK: f64 = 58.8; // %
pub const CURING_G1: f64 = 0.005;
pub const CURING_G2: f64 = 0.061;
pub const CURING_G3: f64 = 0.176;
pub const CURING_G4: f64 = 0.02;

// SLOPE EFFECT (eqs 39-44)
pub const SLOPE_SF1: f64 = 3.533;
pub const SLOPE_SF2: f64 = 1.2;
pub const SLOPE_SF_MAX: f64 = 10.0;
pub const SLOPE_ISF_FLOOR: f64 = 0.01;
pub const SLOPE_WSE_BREAK: f64 = 40.0; // km/h
pub const SLOPE_WSE_MAX: f64 = 112.45; // km/h
/// Cap on the net-wind fixed-point iteration
pub const SLOPE_MAX_ITERATIONS: usize = 10;
/// Convergence tolerance on the net vectored wind speed [km/h]
pub const SLOPE_WSV_TOLERANCE: f64 = 1e-3;

// ELLIPTICAL GROWTH (eqs 70-81)
pub const LB_A1: f64 = 8.729;
pub const LB_A2: f64 = 0.030;
pub const LB_A3: f64 = 2.155;
pub const LB_GRASS_A1: f64 = 1.1;
pub const LB_GRASS_A2: f64 = 0.464;
pub const ALPHA_OPEN: f64 = 0.115; // 1/min
pub const ALPHA_CFB_1: f64 = 18.8;
pub const ALPHA_CFB_2: f64 = 2.5;
pub const ALPHA_CFB_3: f64 = -8.0;

// FIRE SHAPE SOLVER (PROCalc)
/// Cap on the Newton iterations inverting the acceleration integral
pub const SHAPE_MAX_ITERATIONS: usize = 50;
/// Relative tolerance on the recovered effective duration
pub const SHAPE_TIME_TOLERANCE: f64 = 1e-10;

// DEFAULT SUBSTITUTIONS for optional mixedwood composition inputs
pub const PC_DEFAULT: f64 = 50.0; // %
pub const PDF_DEFAULT: f64 = 35.0; // %

pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const M2_PER_HECTARE: f64 = 1e4;
pub const METERS_PER_KM: f64 = 1e3;
