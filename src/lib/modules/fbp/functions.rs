use std::f64::consts::PI;

use crate::constants::NO_BUI;
use crate::models::{input::InputElement, output::OutputElement};
use crate::modules::functions::{deg_to_rad, normalize_azimuth, rad_to_deg};

use super::{
    config::FBPModelConfig,
    constants::*,
    fuels::{FuelParameters, FuelType, SpreadModel},
    models::{FireShapeHistory, FuelState},
};

/// Result of the rate-of-spread dispatch. For the coupled crown model the
/// head rate couples surface and crown spread; `surface_ros` keeps the
/// uncoupled surface rate (equal to `ros` for every other fuel type).
#[derive(Debug, Clone, Default)]
pub struct Spread {
    pub ros: f64,
    pub surface_ros: f64,
    pub cfb: f64,
    pub crown_ros: f64,
}

// FOLIAR MOISTURE MODULE

/// Seasonal foliar moisture content [%] (eqs 1-7).
/// When the day of minimum moisture is not supplied it is estimated from a
/// normalized-latitude regression, with the elevation-adjusted variant for
/// non-zero elevations; 0.5 is added before truncation per the source.
/// Longitude enters as a positive magnitude (western hemisphere convention).
pub fn foliar_moisture(latitude: f64, longitude: f64, elevation: f64, dj: u32, d0: u32) -> f64 {
    let lon = longitude.abs();

    let d0 = if d0 > 0 {
        d0 as f64
    } else if elevation <= 0.0 {
        let latn = FMC_N1 + FMC_N2 * (FMC_N3 * (FMC_REF_LON - lon)).exp(); // eq 1
        (FMC_D1 * latitude / latn + 0.5).trunc() // eq 2
    } else {
        let latn = FMC_N4 + FMC_N5 * (FMC_N6 * (FMC_REF_LON - lon)).exp(); // eq 3
        (FMC_D2 * latitude / latn + FMC_D3 * elevation + 0.5).trunc() // eq 4
    };

    let nd = (dj as f64 - d0).abs();

    if nd < FMC_LOW {
        85.0 + 0.0189 * nd * nd // eq 5
    } else if nd < FMC_HIGH {
        32.9 + 3.17 * nd - 0.0288 * nd * nd // eq 6
    } else {
        FMC_MAX // eq 7
    }
}

// ISI MODULE

fn ffmc_moisture(ffmc: f64) -> f64 {
    ISI_M1 * (101.0 - ffmc) / (ISI_M2 + ffmc)
}

/// Fine fuel moisture function f(F) (eq 45); saturates toward zero as the
/// moisture content grows, and toward its maximum at FFMC -> 101.
fn moisture_function(moisture: f64) -> f64 {
    ISI_F1 * (ISI_F2 * moisture).exp() * (1.0 + moisture.powf(ISI_F3) / ISI_F4)
}

/// Wind function f(W) (eq 53), with the revised high-wind form above
/// 40 km/h from the 2009 revision.
fn wind_function(wind_speed: f64) -> f64 {
    if wind_speed >= ISI_HIGH_WIND {
        ISI_W2 * (1.0 - (-ISI_W3 * (wind_speed - ISI_W4)).exp())
    } else {
        (ISI_W1 * wind_speed).exp()
    }
}

/// Initial Spread Index from FFMC and (net) wind speed (eq 52/53).
pub fn initial_spread_index(ffmc: f64, wind_speed: f64) -> f64 {
    ISI_SCALE * wind_function(wind_speed) * moisture_function(ffmc_moisture(ffmc))
}

// BUILDUP EFFECT MODULE

/// Buildup effect multiplier (eq 54), clamped to (0, 1].
/// A non-positive BUI (including the NO_BUI sentinel) bypasses the effect;
/// grass fuels (q = 1) are unaffected by construction.
pub fn buildup_effect(fuel: FuelType, bui: f64) -> f64 {
    let params = fuel.parameters();
    if bui <= 0.0 || params.buio <= 0.0 || params.q <= 0.0 {
        return 1.0;
    }
    let be = (BE_SCALE * params.q.ln() * (1.0 / bui - 1.0 / params.buio)).exp();
    be.min(1.0)
}

// RATE OF SPREAD MODULE

/// Base spread index RSI = a * (1 - exp(-b * ISI))^c (eq 26).
fn base_spread_index(params: &FuelParameters, isi: f64) -> f64 {
    if params.a <= 0.0 {
        return 0.0;
    }
    params.a * (1.0 - (-params.b * isi).exp()).powf(params.c)
}

/// Grass curing factor (2009 eqs 35a/35b); near zero in fully green grass.
fn grass_curing_factor(curing: f64) -> f64 {
    let cf = if curing < CURING_BREAK {
        CURING_G1 * ((CURING_G2 * curing).exp() - 1.0)
    } else {
        CURING_G3 + CURING_G4 * (curing - CURING_BREAK)
    };
    cf.max(0.0)
}

/// Equilibrium rate of spread dispatch (eqs 26-36).
/// Generic fuels use the three-parameter saturating exponential with the
/// buildup multiplier; mixedwood blends pure-species curves; grass scales by
/// curing. The C6 coupled surface/crown sub-model is a separate path.
pub fn rate_of_spread(
    fuel: FuelType,
    isi: f64,
    bui: f64,
    fmc: f64,
    sfc: f64,
    state: &FuelState,
) -> Spread {
    if isi <= 0.0 || fuel.is_non_fuel() {
        return Spread::default();
    }

    match fuel.spread_model() {
        SpreadModel::CoupledCrown => coupled_crown_spread(isi, bui, fmc, sfc, state),
        SpreadModel::Generic => {
            let params = fuel.parameters();
            let pc = state.percent_conifer;
            let pdf = state.percent_dead_fir;

            let rsi_c2 = || base_spread_index(FuelType::C2.parameters(), isi);
            let rsi_d1 = || base_spread_index(FuelType::D1.parameters(), isi);

            let rsi = match fuel {
                // eqs 27-28: conifer/deciduous blend, D1 damped on M2
                FuelType::M1 => pc / 100.0 * rsi_c2() + (100.0 - pc) / 100.0 * rsi_d1(),
                FuelType::M2 => pc / 100.0 * rsi_c2() + 0.2 * (100.0 - pc) / 100.0 * rsi_d1(),
                // 2009 eqs 29-32: dead-fir blend on the revised M3/M4 curves
                FuelType::M3 => {
                    pdf / 100.0 * base_spread_index(params, isi)
                        + (1.0 - pdf / 100.0) * rsi_d1()
                }
                FuelType::M4 => {
                    pdf / 100.0 * base_spread_index(params, isi)
                        + 0.2 * (1.0 - pdf / 100.0) * rsi_d1()
                }
                FuelType::O1a | FuelType::O1b => {
                    base_spread_index(params, isi) * grass_curing_factor(state.curing)
                }
                _ => base_spread_index(params, isi),
            };

            let ros = (buildup_effect(fuel, bui) * rsi).max(0.0);
            let cfb = crown_fraction_burned(fuel, fmc, sfc, ros, state.crown_base_height);

            Spread {
                ros,
                surface_ros: ros,
                cfb,
                crown_ros: 0.0,
            }
        }
    }
}

/// C6 coupled surface/crown model (eqs 61-65): surface and crown rates are
/// computed separately and blended through the crown fraction burned.
fn coupled_crown_spread(isi: f64, bui: f64, fmc: f64, sfc: f64, state: &FuelState) -> Spread {
    let params = FuelType::C6.parameters();

    let rsi = base_spread_index(params, isi); // eq 62
    let rss = rsi * buildup_effect(FuelType::C6, bui); // eq 63

    // foliar moisture effect, normalized to its average value (eq 61, 64)
    let fme = 1000.0 * (C6_FME_T1 - C6_FME_T2 * fmc).powi(4) / (CSI_H1 + CSI_H2 * fmc);
    let rsc = C6_CROWN_A * (1.0 - (-C6_CROWN_B * isi).exp()) * fme / C6_FME_NORM;

    let cfb = crown_fraction_burned(FuelType::C6, fmc, sfc, rss, state.crown_base_height);
    let ros = if rsc > rss { rss + cfb * (rsc - rss) } else { rss }; // eq 65

    Spread {
        ros,
        surface_ros: rss,
        cfb,
        crown_ros: rsc,
    }
}

// CROWN FRACTION / CONSUMPTION / INTENSITY MODULE

/// Critical surface fire spread rate for crown involvement [m/min]
/// (eqs 56-57): the spread rate whose intensity matches the critical
/// surface intensity for the canopy base height and foliar moisture.
pub fn critical_spread_rate(fmc: f64, sfc: f64, crown_base_height: f64) -> f64 {
    if sfc <= 0.0 || crown_base_height <= 0.0 {
        return 0.0;
    }
    let csi = CSI_C1 * crown_base_height.powf(1.5) * (CSI_H1 + CSI_H2 * fmc).powf(1.5); // eq 56
    csi / (INTENSITY_SCALE * sfc) // eq 57
}

/// Crown fraction burned (eq 58), clamped to [0, 1].
pub fn crown_fraction_burned(
    fuel: FuelType,
    fmc: f64,
    sfc: f64,
    ros: f64,
    crown_base_height: f64,
) -> f64 {
    if !fuel.crown_capable() || ros <= 0.0 {
        return 0.0;
    }
    let rso = critical_spread_rate(fmc, sfc, crown_base_height);
    if rso <= 0.0 || ros <= rso {
        return 0.0;
    }
    (1.0 - (-CFB_K * (ros - rso)).exp()).clamp(0.0, 1.0)
}

/// Surface fuel consumption [kg/m^2] (eqs 9-25; 2009 two-branch C1 form).
pub fn surface_fuel_consumption(
    fuel: FuelType,
    ffmc: f64,
    bui: f64,
    percent_conifer: f64,
    grass_fuel_load: f64,
) -> f64 {
    let sfc = match fuel {
        FuelType::C1 => {
            if ffmc >= 84.0 {
                0.75 + 0.75 * (1.0 - (-0.23 * (ffmc - 84.0)).exp()).sqrt()
            } else {
                0.75 - 0.75 * (1.0 - (-0.23 * (84.0 - ffmc)).exp()).sqrt()
            }
        }
        FuelType::C2 | FuelType::M3 | FuelType::M4 => 5.0 * (1.0 - (-0.0115 * bui).exp()),
        FuelType::C3 | FuelType::C4 => 5.0 * (1.0 - (-0.0164 * bui).exp()).powf(2.24),
        FuelType::C5 | FuelType::C6 => 5.0 * (1.0 - (-0.0149 * bui).exp()).powf(2.48),
        FuelType::C7 => {
            let ffc = (2.0 * (1.0 - (-0.104 * (ffmc - 70.0)).exp())).max(0.0);
            let wfc = 1.5 * (1.0 - (-0.0201 * bui).exp());
            ffc + wfc
        }
        FuelType::D1 => 1.5 * (1.0 - (-0.0183 * bui).exp()),
        FuelType::M1 | FuelType::M2 => {
            let conifer = surface_fuel_consumption(FuelType::C2, ffmc, bui, 0.0, 0.0);
            let hardwood = surface_fuel_consumption(FuelType::D1, ffmc, bui, 0.0, 0.0);
            percent_conifer / 100.0 * conifer + (100.0 - percent_conifer) / 100.0 * hardwood
        }
        FuelType::O1a | FuelType::O1b => grass_fuel_load,
        FuelType::S1 => {
            4.0 * (1.0 - (-0.025 * bui).exp()) + 4.0 * (1.0 - (-0.034 * bui).exp())
        }
        FuelType::S2 => {
            10.0 * (1.0 - (-0.013 * bui).exp()) + 6.0 * (1.0 - (-0.060 * bui).exp())
        }
        FuelType::S3 => {
            12.0 * (1.0 - (-0.0166 * bui).exp()) + 20.0 * (1.0 - (-0.021 * bui).exp())
        }
        FuelType::WA | FuelType::NF => 0.0,
    };
    sfc.max(0.0)
}

/// Total fuel consumption [kg/m^2] (eqs 66-67): surface consumption plus
/// crowned canopy load, composition-weighted for the mixedwood types.
pub fn total_fuel_consumption(
    fuel: FuelType,
    crown_fuel_load: f64,
    cfb: f64,
    sfc: f64,
    percent_conifer: f64,
    percent_dead_fir: f64,
) -> f64 {
    let mut crown_consumption = crown_fuel_load * cfb;
    if fuel.is_conifer_mix() {
        crown_consumption *= percent_conifer / 100.0;
    } else if fuel.is_dead_fir_mix() {
        crown_consumption *= percent_dead_fir / 100.0;
    }
    sfc + crown_consumption
}

/// Fireline intensity [kW/m] (eq 69).
pub fn fire_intensity(fuel_consumption: f64, ros: f64) -> f64 {
    INTENSITY_SCALE * fuel_consumption * ros
}

// SLOPE / WIND VECTORING MODULE

fn invert_spread_index(params: &FuelParameters, rsf: f64) -> f64 {
    if params.a <= 0.0 || params.b <= 0.0 {
        return 0.0;
    }
    let term = (1.0 - (rsf / params.a).powf(1.0 / params.c)).max(SLOPE_ISF_FLOOR); // eq 41 floor
    -term.ln() / params.b
}

/// ISI that would produce the slope-boosted zero-wind spread rate, with the
/// fuel-specific inversions (eqs 41-43; mixedwood blends invert each
/// component curve, grass inverts the curing-scaled curve).
fn slope_equivalent_isi(
    fuel: FuelType,
    isz: f64,
    slope_factor: f64,
    fmc: f64,
    sfc: f64,
    state: &FuelState,
) -> f64 {
    let params = fuel.parameters();
    let pc = state.percent_conifer;
    let pdf = state.percent_dead_fir;

    let component = |component_fuel: FuelType| {
        let p = component_fuel.parameters();
        invert_spread_index(p, base_spread_index(p, isz) * slope_factor)
    };

    match fuel {
        FuelType::M1 | FuelType::M2 => {
            pc / 100.0 * component(FuelType::C2) + (100.0 - pc) / 100.0 * component(FuelType::D1)
        }
        FuelType::M3 | FuelType::M4 => {
            pdf / 100.0
                * invert_spread_index(params, base_spread_index(params, isz) * slope_factor)
                + (1.0 - pdf / 100.0) * component(FuelType::D1)
        }
        FuelType::O1a | FuelType::O1b => {
            let cf = grass_curing_factor(state.curing);
            if cf <= 0.0 {
                return 0.0;
            }
            let rsf = base_spread_index(params, isz) * cf * slope_factor;
            // invert the curing-scaled curve
            let term = (1.0 - (rsf / (cf * params.a)).powf(1.0 / params.c)).max(SLOPE_ISF_FLOOR);
            -term.ln() / params.b
        }
        FuelType::C6 => {
            // the slope boost applies to the surface spread; crown coupling
            // at zero wind is folded into the uncoupled zero-wind rate
            let rsz = rate_of_spread(fuel, isz, NO_BUI, fmc, sfc, state).surface_ros;
            invert_spread_index(params, rsz * slope_factor)
        }
        _ => invert_spread_index(params, base_spread_index(params, isz) * slope_factor),
    }
}

/// Wind speed whose ISI matches the slope-equivalent ISI (eq 46, with the
/// 2009 high-wind inversion and the 112.45 km/h cap).
fn slope_equivalent_wind(isf: f64, ff: f64) -> f64 {
    if isf <= 0.0 || ff <= 0.0 {
        return 0.0;
    }
    let ratio = isf / (ISI_SCALE * ff);
    let wse = ratio.ln() / ISI_W1;
    if wse <= SLOPE_WSE_BREAK {
        wse.max(0.0)
    } else if ratio < 0.999 * ISI_W2 {
        ISI_W4 - (1.0 - ratio / ISI_W2).ln() / ISI_W3
    } else {
        SLOPE_WSE_MAX
    }
}

/// Combines the true wind vector with the slope-equivalent wind along the
/// upslope azimuth (eqs 39-44, 47-51), returning the net spread azimuth
/// [degrees] and the net vectored wind speed [km/h]. The net wind is
/// iterated to a fixed point with a hard iteration cap.
#[allow(clippy::too_many_arguments)]
pub fn slope_adjusted_wind(
    fuel: FuelType,
    ffmc: f64,
    wind_speed: f64,
    wind_azimuth: f64,
    slope_percent: f64,
    slope_azimuth: f64,
    fmc: f64,
    sfc: f64,
    state: &FuelState,
) -> (f64, f64) {
    if slope_percent <= 0.0 || ffmc <= 0.0 || fuel.is_non_fuel() {
        return (normalize_azimuth(wind_azimuth), wind_speed);
    }

    // eq 39, capped at 10 for slopes of 70% and above
    let slope_factor =
        (SLOPE_SF1 * (slope_percent / 100.0).powf(SLOPE_SF2)).exp().min(SLOPE_SF_MAX);

    let ff = moisture_function(ffmc_moisture(ffmc));
    let isz = ISI_SCALE * ff; // zero-wind ISI
    let isf = slope_equivalent_isi(fuel, isz, slope_factor, fmc, sfc, state);

    let waz = deg_to_rad(wind_azimuth);
    let saz = deg_to_rad(slope_azimuth);

    let mut wsv = wind_speed;
    let mut wsx = 0.0;
    let mut wsy = 0.0;
    for _ in 0..SLOPE_MAX_ITERATIONS {
        let wse = slope_equivalent_wind(isf, ff);
        wsx = wind_speed * waz.sin() + wse * saz.sin();
        wsy = wind_speed * waz.cos() + wse * saz.cos();
        let next = (wsx * wsx + wsy * wsy).sqrt();
        let converged = (next - wsv).abs() < SLOPE_WSV_TOLERANCE;
        wsv = next;
        if converged {
            break;
        }
    }

    let raz = if wsv < 1e-12 {
        normalize_azimuth(wind_azimuth)
    } else {
        let mut angle = (wsy / wsv).clamp(-1.0, 1.0).acos();
        if wsx < 0.0 {
            angle = 2.0 * PI - angle;
        }
        normalize_azimuth(rad_to_deg(angle))
    };

    (raz, wsv)
}

// BACK / FLANK / DIRECTIONAL SPREAD MODULE

/// Back rate of spread (eq 75): the spread dispatch evaluated at the ISI of
/// the reversed wind vector. Backing fires stay on the surface, so the C6
/// crown coupling does not apply.
pub fn back_rate_of_spread(
    fuel: FuelType,
    ffmc: f64,
    bui: f64,
    wsv: f64,
    fmc: f64,
    sfc: f64,
    state: &FuelState,
) -> f64 {
    if ffmc <= 0.0 {
        return 0.0;
    }
    let back_wind = (-ISI_W1 * wsv).exp();
    let bisi = ISI_SCALE * back_wind * moisture_function(ffmc_moisture(ffmc));
    rate_of_spread(fuel, bisi, bui, fmc, sfc, state).surface_ros
}

/// Length-to-breadth ratio of the fire ellipse (eqs 79-80), >= 1.
pub fn length_to_breadth(fuel: FuelType, wsv: f64) -> f64 {
    if fuel.is_grass() {
        if wsv < 1.0 {
            1.0
        } else {
            (LB_GRASS_A1 * wsv.powf(LB_GRASS_A2)).max(1.0)
        }
    } else {
        1.0 + LB_A1 * (1.0 - (-LB_A2 * wsv).exp()).powf(LB_A3)
    }
}

/// Acceleration parameter alpha [1/min] (eq 72). Open fuel complexes use
/// the fixed constant; closed canopies slow down as crowning develops.
pub fn acceleration(fuel: FuelType, cfb: f64) -> f64 {
    if fuel.is_open() {
        ALPHA_OPEN
    } else {
        ALPHA_OPEN - ALPHA_CFB_1 * cfb.powf(ALPHA_CFB_2) * (ALPHA_CFB_3 * cfb).exp()
    }
}

/// Rate of spread after `t` hours (eqs 70-71): exponential approach to the
/// equilibrium rate for point ignitions; line ignitions are already at
/// equilibrium for any positive elapsed time.
pub fn rate_of_spread_at_time(
    fuel: FuelType,
    ros_eq: f64,
    t: f64,
    cfb: f64,
    point_ignition: bool,
) -> f64 {
    if t <= 0.0 || ros_eq <= 0.0 {
        return 0.0;
    }
    if !point_ignition {
        return ros_eq;
    }
    let alpha = acceleration(fuel, cfb);
    ros_eq * (1.0 - (-alpha * t * MINUTES_PER_HOUR).exp())
}

/// Length-to-breadth ratio after `t` hours (eq 81): grows from circular
/// (1.0) toward the equilibrium ratio with the same time constant.
pub fn length_to_breadth_at_time(
    fuel: FuelType,
    lb: f64,
    t: f64,
    cfb: f64,
    point_ignition: bool,
) -> f64 {
    if t <= 0.0 {
        return 1.0;
    }
    if !point_ignition {
        return lb;
    }
    let alpha = acceleration(fuel, cfb);
    1.0 + (lb - 1.0) * (1.0 - (-alpha * t * MINUTES_PER_HOUR).exp())
}

/// Flank rate of spread from the elliptical identity (eq 89).
pub fn flank_rate_of_spread(ros: f64, bros: f64, lb: f64) -> f64 {
    if lb <= 0.0 {
        return 0.0;
    }
    (ros + bros) / (2.0 * lb)
}

/// Rate of spread at angle `theta` [radians] from the head-fire direction
/// (eq 94). Symmetric about theta = 180 degrees.
pub fn rate_of_spread_at_theta(ros: f64, fros: f64, bros: f64, theta: f64) -> f64 {
    let cos_t = theta.cos();
    let sin_t = theta.sin();
    if cos_t.abs() < 1e-9 {
        return fros;
    }

    let denom = fros * fros * cos_t * cos_t + (ros + bros) * (ros + bros) / 4.0 * sin_t * sin_t;
    if denom <= 0.0 {
        return 0.0;
    }
    let root = (fros * fros * cos_t * cos_t + ros * bros * sin_t * sin_t).sqrt();
    let numer = fros * cos_t * root - (ros * ros - bros * bros) / 4.0 * sin_t * sin_t;

    let ros_theta =
        (ros - bros) / (2.0 * cos_t) + (ros + bros) / (2.0 * cos_t) * (numer / denom);
    ros_theta.max(0.0)
}

/// Elapsed hours until the accelerating head fire reaches the critical
/// spread rate for crown involvement. Zero means the fire either starts at
/// or beyond the critical rate, or never reaches it.
pub fn crown_initiation_time(
    fuel: FuelType,
    ros_eq: f64,
    rso: f64,
    cfb: f64,
    point_ignition: bool,
) -> f64 {
    if rso <= 0.0 || ros_eq <= rso || !point_ignition {
        return 0.0;
    }
    let alpha = acceleration(fuel, cfb);
    if alpha <= 0.0 {
        return 0.0;
    }
    -(1.0 - rso / ros_eq).ln() / alpha / MINUTES_PER_HOUR
}

// FIRE SHAPE (PROCalc) MODULE

/// Effective spread duration [min]: the integral of the acceleration curve
/// over the actual elapsed time, i.e. the duration an equilibrium-rate fire
/// would need to travel the same distance.
fn effective_duration(t: f64, alpha: Option<f64>) -> f64 {
    match alpha {
        None => t,
        Some(a) => t + ((-a * t).exp() - 1.0) / a,
    }
}

/// Inverts `effective_duration`: recovers the actual elapsed time [min]
/// from the effective duration. Newton iteration with a hard cap; the
/// integrand is convex so starting past the asymptote converges
/// monotonically.
fn invert_duration(effective: f64, alpha: Option<f64>) -> f64 {
    match alpha {
        None => effective,
        Some(a) => {
            let mut t = effective + 1.0 / a;
            for _ in 0..SHAPE_MAX_ITERATIONS {
                let residual = t + ((-a * t).exp() - 1.0) / a - effective;
                if residual.abs() <= SHAPE_TIME_TOLERANCE * effective.max(1.0) {
                    break;
                }
                let derivative = 1.0 - (-a * t).exp();
                if derivative <= 0.0 {
                    break;
                }
                t -= residual / derivative;
            }
            t.max(0.0)
        }
    }
}

/// Reconstructs the full elliptical growth history from exactly one nonzero
/// driver among {t1, t2, area, perimeter, distance}; every other desired
/// output must be pre-zeroed by the caller. A zero headfire rate forces the
/// actual elapsed time to zero and leaves everything else untouched.
pub fn fire_shape(
    fuel: FuelType,
    point_ignition: bool,
    cfb: f64,
    head_ros: f64,
    flank_ros: f64,
    back_ros: f64,
    history: &mut FireShapeHistory,
) {
    if head_ros <= 0.0 {
        history.t2 = 0.0;
        return;
    }

    let alpha = if point_ignition {
        Some(acceleration(fuel, cfb))
    } else {
        None
    };

    let semi_length = (head_ros + back_ros) / 2.0; // per minute of effective duration
    let semi_breadth = flank_ros;

    // recover the effective duration [min] from whichever driver is set
    let effective = if history.t1 > 0.0 {
        history.t1 * MINUTES_PER_HOUR
    } else if history.t2 > 0.0 {
        effective_duration(history.t2 * MINUTES_PER_HOUR, alpha)
    } else if history.area > 0.0 {
        if semi_breadth <= 0.0 {
            return;
        }
        (history.area * M2_PER_HECTARE / (PI * semi_length * semi_breadth)).sqrt()
    } else if history.perimeter > 0.0 {
        history.perimeter * METERS_PER_KM / (PI * (semi_length + semi_breadth))
    } else if history.distance > 0.0 {
        history.distance * METERS_PER_KM / head_ros
    } else {
        return; // no driver, outputs stay zero
    };

    let elapsed = invert_duration(effective, alpha);

    history.t1 = effective / MINUTES_PER_HOUR;
    history.t2 = elapsed / MINUTES_PER_HOUR;
    history.distance = head_ros * effective / METERS_PER_KM;
    history.perimeter = PI * (semi_length + semi_breadth) * effective / METERS_PER_KM;
    history.area =
        PI * semi_length * semi_breadth * effective * effective / M2_PER_HECTARE;
}

// ORCHESTRATOR

/// One complete FBP evaluation: fuel lookup, default substitution, foliar
/// moisture, slope/wind vectoring, ISI, the four directional spread rates
/// and their consumption/intensity/crowning outputs, and the time-dependent
/// variants when an elapsed time is given.
pub fn fire_behavior(input: &InputElement, config: &FBPModelConfig) -> OutputElement {
    let mut out = OutputElement::default();

    let fuel = input.fuel_type;
    if fuel.is_non_fuel() {
        return out;
    }

    let state = FuelState::resolve(fuel, input);

    let fmc = if input.fmc > 0.0 {
        input.fmc
    } else {
        config.fmc(
            input.latitude,
            input.longitude,
            input.elevation,
            input.dj,
            input.d0,
        )
    };

    let sfc = surface_fuel_consumption(
        fuel,
        input.ffmc,
        input.bui,
        state.percent_conifer,
        state.grass_fuel_load,
    );

    let bui = if input.bui_effect { input.bui } else { NO_BUI };

    // azimuths the fire spreads toward: wind blows from wind_dir, the slope
    // wind blows upslope, opposite the (downslope) aspect
    let wind_azimuth = normalize_azimuth(input.wind_dir + 180.0);
    let slope_azimuth = normalize_azimuth(input.aspect + 180.0);

    let (raz, wsv) = slope_adjusted_wind(
        fuel,
        input.ffmc,
        input.wind_speed,
        wind_azimuth,
        input.slope,
        slope_azimuth,
        fmc,
        sfc,
        &state,
    );

    let isi = if input.ffmc > 0.0 {
        config.isi(input.ffmc, wsv)
    } else {
        input.isi
    };

    let spread = rate_of_spread(fuel, isi, bui, fmc, sfc, &state);
    let ros = spread.ros;
    let cfb = spread.cfb;

    let bros = back_rate_of_spread(fuel, input.ffmc, bui, wsv, fmc, sfc, &state);
    let lb = length_to_breadth(fuel, wsv);
    let fros = flank_rate_of_spread(ros, bros, lb);

    let fcfb = crown_fraction_burned(fuel, fmc, sfc, fros, state.crown_base_height);
    let bcfb = crown_fraction_burned(fuel, fmc, sfc, bros, state.crown_base_height);

    let theta = deg_to_rad(normalize_azimuth(input.theta - raz));
    let tros = rate_of_spread_at_theta(ros, fros, bros, theta);
    let tcfb = crown_fraction_burned(fuel, fmc, sfc, tros, state.crown_base_height);

    let cfl = state.crown_fuel_load;
    let pc = state.percent_conifer;
    let pdf = state.percent_dead_fir;
    let tfc = total_fuel_consumption(fuel, cfl, cfb, sfc, pc, pdf);
    let ftfc = total_fuel_consumption(fuel, cfl, fcfb, sfc, pc, pdf);
    let btfc = total_fuel_consumption(fuel, cfl, bcfb, sfc, pc, pdf);
    let ttfc = total_fuel_consumption(fuel, cfl, tcfb, sfc, pc, pdf);

    out.ros = ros;
    out.fros = fros;
    out.bros = bros;
    out.tros = tros;
    out.cfb = cfb;
    out.fcfb = fcfb;
    out.bcfb = bcfb;
    out.tcfb = tcfb;
    out.sfc = sfc;
    out.tfc = tfc;
    out.ftfc = ftfc;
    out.btfc = btfc;
    out.ttfc = ttfc;
    out.hfi = fire_intensity(tfc, ros);
    out.ffi = fire_intensity(ftfc, fros);
    out.bfi = fire_intensity(btfc, bros);
    out.tfi = fire_intensity(ttfc, tros);
    out.lb = lb;
    out.raz = raz;
    out.wsv = wsv;

    let t = input.time_since_ignition;
    if t > 0.0 {
        out.hrost = rate_of_spread_at_time(fuel, ros, t, cfb, input.point_ignition);
        out.brost = rate_of_spread_at_time(fuel, bros, t, cfb, input.point_ignition);
        let lbt = length_to_breadth_at_time(fuel, lb, t, cfb, input.point_ignition);
        out.frost = flank_rate_of_spread(out.hrost, out.brost, lbt);
        out.trost = rate_of_spread_at_theta(out.hrost, out.frost, out.brost, theta);
    }

    if fuel.crown_capable() {
        let rso = critical_spread_rate(fmc, sfc, state.crown_base_height);
        out.ti = crown_initiation_time(fuel, ros, rso, cfb, input.point_ignition);
        out.fti = crown_initiation_time(fuel, fros, rso, cfb, input.point_ignition);
        out.bti = crown_initiation_time(fuel, bros, rso, cfb, input.point_ignition);
        out.tti = crown_initiation_time(fuel, tros, rso, cfb, input.point_ignition);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    fn reference_state(fuel: FuelType) -> FuelState {
        FuelState::resolve(fuel, &InputElement::default())
    }

    // FFMC 90, net wind 20 km/h
    const REF_ISI: f64 = 11.745218568305845;

    #[test]
    fn foliar_moisture_from_latitude_regression() {
        // lat 55N, lon 120W, sea level, day 180: d0 = 154, nd = 26
        let fmc = foliar_moisture(55.0, -120.0, 0.0, 180, 0);
        assert_relative_eq!(fmc, 97.7764, epsilon = 1e-4);
        // eastern-convention longitude gives the same answer
        assert_relative_eq!(foliar_moisture(55.0, 120.0, 0.0, 180, 0), fmc);
    }

    #[test]
    fn foliar_moisture_bounds() {
        // at the day of minimum moisture
        assert_relative_eq!(foliar_moisture(55.0, -120.0, 0.0, 154, 154), 85.0);
        // far from it the moisture saturates
        assert_relative_eq!(foliar_moisture(55.0, -120.0, 0.0, 30, 154), FMC_MAX);
    }

    #[test]
    fn isi_matches_reference_value() {
        assert_relative_eq!(initial_spread_index(90.0, 20.0), REF_ISI, max_relative = 1e-12);
    }

    #[test]
    fn isi_is_monotone_in_wind_across_the_high_wind_break() {
        let mut prev = initial_spread_index(90.0, 0.0);
        for ws in 1..80 {
            let isi = initial_spread_index(90.0, ws as f64);
            assert!(isi > prev, "isi not increasing at {} km/h", ws);
            prev = isi;
        }
    }

    #[test]
    fn buildup_effect_stays_in_unit_interval() {
        // damped below the average BUI, never amplified above it
        assert!(buildup_effect(FuelType::C2, 30.0) < 1.0);
        assert_relative_eq!(buildup_effect(FuelType::C2, 64.0), 1.0);
        assert_relative_eq!(buildup_effect(FuelType::C2, 120.0), 1.0);
        // sentinel and grass both bypass the effect
        assert_relative_eq!(buildup_effect(FuelType::C2, crate::constants::NO_BUI), 1.0);
        assert_relative_eq!(buildup_effect(FuelType::O1a, 30.0), 1.0);
    }

    #[test]
    fn head_ros_reference_values() {
        // FFMC 90, BUI 60, net wind 20 km/h, FMC 97, default composition
        let cases = [
            (FuelType::C1, 5.243178945),
            (FuelType::C2, 16.165215998),
            (FuelType::C3, 7.324490856),
            (FuelType::C4, 16.992746572),
            (FuelType::C5, 2.928696518),
            (FuelType::C6, 6.742864159),
            (FuelType::C7, 3.846557595),
            (FuelType::D1, 3.027999737),
            (FuelType::M1, 9.748160345),
            (FuelType::M2, 8.536960450),
            (FuelType::M3, 17.405155075),
            (FuelType::M4, 8.681256348),
            (FuelType::S1, 15.305628431),
            (FuelType::S2, 8.406001557),
            (FuelType::S3, 12.055408564),
            (FuelType::O1a, 25.248128395),
            (FuelType::O1b, 27.552279620),
        ];
        for (fuel, expected) in cases {
            let state = reference_state(fuel);
            let sfc = surface_fuel_consumption(fuel, 90.0, 60.0, state.percent_conifer, state.grass_fuel_load);
            let spread = rate_of_spread(fuel, REF_ISI, 60.0, 97.0, sfc, &state);
            assert_relative_eq!(spread.ros, expected, max_relative = 1e-8);
        }
    }

    #[test]
    fn ros_is_zero_without_spread_index_and_monotone_in_it() {
        for fuel in FuelType::iter().filter(|f| !f.is_non_fuel()) {
            let state = reference_state(fuel);
            let sfc = surface_fuel_consumption(fuel, 90.0, 60.0, state.percent_conifer, state.grass_fuel_load);
            assert_relative_eq!(rate_of_spread(fuel, 0.0, 60.0, 97.0, sfc, &state).ros, 0.0);
            let mut prev = 0.0;
            for isi in [1.0, 3.0, 6.0, 10.0, 20.0, 40.0] {
                let ros = rate_of_spread(fuel, isi, 60.0, 97.0, sfc, &state).ros;
                assert!(ros > prev, "{} not monotone at isi {}", fuel, isi);
                prev = ros;
            }
        }
    }

    #[test]
    fn crown_fraction_is_bounded_and_gated_by_the_critical_rate() {
        let state = reference_state(FuelType::C2);
        let rso = critical_spread_rate(97.0, 2.5, state.crown_base_height);
        assert!(rso > 0.0);
        // below the critical rate the fire stays on the surface
        assert_relative_eq!(
            crown_fraction_burned(FuelType::C2, 97.0, 2.5, 0.5 * rso, state.crown_base_height),
            0.0
        );
        for ros in [2.0, 10.0, 50.0, 500.0] {
            let cfb =
                crown_fraction_burned(FuelType::C2, 97.0, 2.5, ros, state.crown_base_height);
            assert!((0.0..=1.0).contains(&cfb));
        }
        // fuels without a canopy never crown
        assert_relative_eq!(crown_fraction_burned(FuelType::D1, 97.0, 2.5, 100.0, 0.0), 0.0);
    }

    #[test]
    fn surface_consumption_branches() {
        // C1 consumption crosses 0.75 kg/m^2 at FFMC 84
        assert!(surface_fuel_consumption(FuelType::C1, 80.0, 60.0, 0.0, 0.0) < 0.75);
        assert_relative_eq!(surface_fuel_consumption(FuelType::C1, 84.0, 60.0, 0.0, 0.0), 0.75);
        assert!(surface_fuel_consumption(FuelType::C1, 92.0, 60.0, 0.0, 0.0) > 0.75);
        // grass burns exactly the standing load
        assert_relative_eq!(surface_fuel_consumption(FuelType::O1a, 90.0, 60.0, 0.0, 0.35), 0.35);
        // mixedwood interpolates between pure conifer and pure hardwood
        let conifer = surface_fuel_consumption(FuelType::C2, 90.0, 60.0, 0.0, 0.0);
        let hardwood = surface_fuel_consumption(FuelType::D1, 90.0, 60.0, 0.0, 0.0);
        let mixed = surface_fuel_consumption(FuelType::M1, 90.0, 60.0, 50.0, 0.0);
        assert_relative_eq!(mixed, 0.5 * (conifer + hardwood), max_relative = 1e-12);
    }

    #[test]
    fn total_consumption_weights_the_crowned_canopy() {
        let tfc = total_fuel_consumption(FuelType::C2, 0.8, 0.5, 2.0, 0.0, 0.0);
        assert_relative_eq!(tfc, 2.4);
        // mixedwood canopy scaled by the conifer share
        let tfc = total_fuel_consumption(FuelType::M1, 0.8, 0.5, 2.0, 50.0, 0.0);
        assert_relative_eq!(tfc, 2.2);
    }

    #[test]
    fn slope_on_flat_ground_is_a_passthrough() {
        let state = reference_state(FuelType::C2);
        let (raz, wsv) =
            slope_adjusted_wind(FuelType::C2, 90.0, 15.0, 90.0, 0.0, 270.0, 97.0, 2.5, &state);
        assert_relative_eq!(raz, 90.0);
        assert_relative_eq!(wsv, 15.0);
    }

    #[test]
    fn slope_wind_adds_along_the_upslope_azimuth() {
        // wind and upslope both point due east: speeds add, azimuth holds
        let state = reference_state(FuelType::C2);
        let (raz, wsv) =
            slope_adjusted_wind(FuelType::C2, 90.0, 10.0, 90.0, 30.0, 90.0, 97.0, 2.5, &state);
        assert_relative_eq!(raz, 90.0, epsilon = 1e-9);
        assert_relative_eq!(wsv, 21.988726997800686, max_relative = 1e-9);
    }

    #[test]
    fn opposed_slope_and_wind_partially_cancel() {
        let state = reference_state(FuelType::C2);
        let (raz, wsv) =
            slope_adjusted_wind(FuelType::C2, 90.0, 10.0, 90.0, 30.0, 270.0, 97.0, 2.5, &state);
        // the slope wind (~12 km/h) overcomes the true wind
        assert!(wsv < 10.0);
        assert_relative_eq!(raz, 270.0, epsilon = 1e-9);
    }

    #[test]
    fn back_spread_never_exceeds_head_spread() {
        for fuel in FuelType::iter().filter(|f| !f.is_non_fuel()) {
            let state = reference_state(fuel);
            let sfc = surface_fuel_consumption(fuel, 90.0, 60.0, state.percent_conifer, state.grass_fuel_load);
            let head = rate_of_spread(fuel, REF_ISI, 60.0, 97.0, sfc, &state).ros;
            let back = back_rate_of_spread(fuel, 90.0, 60.0, 20.0, 97.0, sfc, &state);
            assert!(back > 0.0);
            assert!(back <= head, "{}: back {} > head {}", fuel, back, head);
        }
    }

    #[test]
    fn length_to_breadth_is_at_least_one() {
        assert_relative_eq!(length_to_breadth(FuelType::C2, 0.0), 1.0);
        assert_relative_eq!(length_to_breadth(FuelType::O1a, 0.5), 1.0);
        let mut prev = 1.0;
        for wsv in [1.0, 5.0, 10.0, 30.0, 60.0] {
            let lb = length_to_breadth(FuelType::C2, wsv);
            assert!(lb >= prev);
            prev = lb;
        }
        assert!(length_to_breadth(FuelType::O1a, 20.0) > 1.0);
    }

    #[test]
    fn acceleration_slows_with_crowning_in_closed_fuels() {
        assert_relative_eq!(acceleration(FuelType::C2, 0.0), ALPHA_OPEN);
        assert!(acceleration(FuelType::C2, 0.8) < ALPHA_OPEN);
        // open complexes ignore the crown fraction
        assert_relative_eq!(acceleration(FuelType::O1a, 0.8), ALPHA_OPEN);
    }

    #[test]
    fn spread_at_time_approaches_equilibrium() {
        let ros_eq = 12.0;
        assert_relative_eq!(rate_of_spread_at_time(FuelType::C2, ros_eq, 0.0, 0.0, true), 0.0);
        let mut prev = 0.0;
        for t in [0.1, 0.25, 0.5, 1.0, 2.0] {
            let ros = rate_of_spread_at_time(FuelType::C2, ros_eq, t, 0.0, true);
            assert!(ros > prev && ros < ros_eq);
            prev = ros;
        }
        assert_relative_eq!(
            rate_of_spread_at_time(FuelType::C2, ros_eq, 10.0, 0.0, true),
            ros_eq,
            max_relative = 1e-9
        );
        // line ignitions skip the acceleration phase
        assert_relative_eq!(rate_of_spread_at_time(FuelType::C2, ros_eq, 0.1, 0.0, false), ros_eq);
    }

    #[test]
    fn ellipse_axes_at_time_start_circular() {
        assert_relative_eq!(length_to_breadth_at_time(FuelType::C2, 3.0, 0.0, 0.0, true), 1.0);
        let lbt = length_to_breadth_at_time(FuelType::C2, 3.0, 0.5, 0.0, true);
        assert!(lbt > 1.0 && lbt < 3.0);
        assert_relative_eq!(length_to_breadth_at_time(FuelType::C2, 3.0, 0.5, 0.0, false), 3.0);
    }

    #[test]
    fn spread_at_theta_recovers_the_cardinal_directions() {
        let (ros, fros, bros) = (16.0, 3.3, 0.97);
        assert_relative_eq!(rate_of_spread_at_theta(ros, fros, bros, 0.0), ros, max_relative = 1e-9);
        assert_relative_eq!(
            rate_of_spread_at_theta(ros, fros, bros, PI),
            bros,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            rate_of_spread_at_theta(ros, fros, bros, PI / 2.0),
            fros,
            max_relative = 1e-9
        );
    }

    #[test]
    fn spread_at_theta_is_symmetric_about_the_head_axis() {
        let (ros, fros, bros) = (16.0, 3.3, 0.97);
        for deg in [10.0_f64, 45.0, 80.0, 100.0, 135.0, 170.0] {
            let left = rate_of_spread_at_theta(ros, fros, bros, deg.to_radians());
            let right = rate_of_spread_at_theta(ros, fros, bros, (360.0 - deg).to_radians());
            assert_relative_eq!(left, right, max_relative = 1e-9);
        }
    }

    #[test]
    fn spread_at_theta_degenerates_to_the_circle() {
        for deg in [0.0_f64, 30.0, 90.0, 145.0, 180.0] {
            let r = rate_of_spread_at_theta(5.0, 5.0, 5.0, deg.to_radians());
            assert_relative_eq!(r, 5.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn fire_shape_round_trips_every_driver() {
        let (head, flank, back) = (16.165, 3.332, 0.969);
        let reference = {
            let mut h = FireShapeHistory {
                t2: 2.0,
                ..Default::default()
            };
            fire_shape(FuelType::C2, true, 0.9, head, flank, back, &mut h);
            h
        };
        assert!(reference.area > 0.0 && reference.perimeter > 0.0 && reference.distance > 0.0);
        assert!(reference.t1 < 2.0, "effective duration lags the clock");

        for driver in 0..4 {
            let mut h = FireShapeHistory::default();
            match driver {
                0 => h.t1 = reference.t1,
                1 => h.area = reference.area,
                2 => h.perimeter = reference.perimeter,
                _ => h.distance = reference.distance,
            }
            fire_shape(FuelType::C2, true, 0.9, head, flank, back, &mut h);
            assert_relative_eq!(h.t1, reference.t1, max_relative = 1e-6);
            assert_relative_eq!(h.t2, reference.t2, max_relative = 1e-6);
            assert_relative_eq!(h.area, reference.area, max_relative = 1e-6);
            assert_relative_eq!(h.perimeter, reference.perimeter, max_relative = 1e-6);
            assert_relative_eq!(h.distance, reference.distance, max_relative = 1e-6);
        }
    }

    #[test]
    fn fire_shape_line_ignition_is_closed_form() {
        let mut h = FireShapeHistory {
            t2: 1.5,
            ..Default::default()
        };
        fire_shape(FuelType::C2, false, 0.0, 10.0, 2.0, 1.0, &mut h);
        // without acceleration the effective and actual times coincide
        assert_relative_eq!(h.t1, h.t2, max_relative = 1e-12);
        assert_relative_eq!(h.distance, 10.0 * 90.0 / 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn fire_shape_zero_head_rate_forces_zero_time() {
        let mut h = FireShapeHistory {
            t2: 3.0,
            area: 12.0,
            ..Default::default()
        };
        fire_shape(FuelType::C2, true, 0.0, 0.0, 0.0, 0.0, &mut h);
        assert_relative_eq!(h.t2, 0.0);
        // the other fields are left for the caller
        assert_relative_eq!(h.area, 12.0);
    }

    #[test]
    fn c2_reference_scenario_end_to_end() {
        let input = InputElement {
            fuel_type: FuelType::C2,
            ffmc: 90.0,
            bui: 60.0,
            bui_effect: true,
            wind_speed: 20.0,
            wind_dir: 0.0,
            fmc: 97.0,
            point_ignition: true,
            time_since_ignition: 0.5,
            ..Default::default()
        };
        let out = fire_behavior(&input, &FBPModelConfig::default());

        assert_relative_eq!(out.wsv, 20.0);
        assert_relative_eq!(out.raz, 180.0);
        assert_relative_eq!(out.ros, 16.165215998, max_relative = 1e-8);
        assert_relative_eq!(out.cfb, 0.968537680, max_relative = 1e-8);
        assert_relative_eq!(out.bros, 0.968551345, max_relative = 1e-8);
        assert_relative_eq!(out.lb, 2.570745224, max_relative = 1e-8);
        assert_relative_eq!(out.fros, 3.332451458, max_relative = 1e-8);
        assert_relative_eq!(out.fcfb, 0.397958430, max_relative = 1e-8);
        assert_relative_eq!(out.bcfb, 0.0);
        assert_relative_eq!(out.sfc, 2.492119655, max_relative = 1e-8);
        assert_relative_eq!(out.tfc, 3.266949798, max_relative = 1e-8);
        assert_relative_eq!(out.hfi, 15843.284744, max_relative = 1e-8);
        // theta defaults to north, directly opposite the spread azimuth
        assert_relative_eq!(out.tros, out.bros, max_relative = 1e-8);
        // 30 minutes into a point ignition the head fire is still accelerating
        assert_relative_eq!(out.hrost, 15.522773638, max_relative = 1e-8);
        assert_relative_eq!(out.frost, 3.279651509, max_relative = 1e-8);
        // crowning starts almost immediately at this intensity
        assert_relative_eq!(out.ti, 0.011195176, max_relative = 1e-6);
    }

    #[test]
    fn non_fuel_cells_produce_zero_output() {
        let input = InputElement {
            fuel_type: FuelType::WA,
            ffmc: 90.0,
            bui: 60.0,
            wind_speed: 20.0,
            ..Default::default()
        };
        let out = fire_behavior(&input, &FBPModelConfig::default());
        assert_eq!(out, OutputElement::default());
    }

    #[test]
    fn missing_ffmc_falls_back_to_the_supplied_isi() {
        let input = InputElement {
            fuel_type: FuelType::C2,
            ffmc: 0.0,
            isi: REF_ISI,
            bui: 60.0,
            bui_effect: true,
            fmc: 97.0,
            ..Default::default()
        };
        let out = fire_behavior(&input, &FBPModelConfig::default());
        assert_relative_eq!(out.ros, 16.165215998, max_relative = 1e-8);
    }
}
