use super::constants::*;

// FFMC MODULE

pub fn from_ffmc_to_moisture(ffmc: f64) -> f64 {
    FFMC_S1 * (101.0 - ffmc) / (FFMC_S2 + ffmc)
}

pub fn from_moisture_to_ffmc(moisture: f64) -> f64 {
    FFMC_S2 * (250.0 - moisture) / (FFMC_S1 + moisture)
}

fn moisture_rain_effect(moisture: f64, rain: f64) -> f64 {
    let rf = rain - FFMC_MIN_RAIN;
    let mut moisture_new = moisture
        + FFMC_R1 * rf * (-100.0 / (251.0 - moisture)).exp() * (1.0 - (-FFMC_R2 / rf).exp());
    // over-saturation correction
    if moisture > FFMC_SATURATION {
        moisture_new += FFMC_R3 * (moisture - FFMC_SATURATION).powi(2) * rf.sqrt();
    }
    moisture_new.clamp(0.0, FFMC_MAX_MOISTURE)
}

/// Daily Fine Fuel Moisture Code update from noon weather (eqs 1-10).
pub fn fine_fuel_moisture_code(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    rain: f64,
    prev_ffmc: f64,
) -> f64 {
    let mut moisture = from_ffmc_to_moisture(prev_ffmc);
    if rain > FFMC_MIN_RAIN {
        moisture = moisture_rain_effect(moisture, rain);
    }

    let emc_dry = 0.942 * humidity.powf(0.679)
        + 11.0 * ((humidity - 100.0) / 10.0).exp()
        + 0.18 * (21.1 - temperature) * (1.0 - (-0.115 * humidity).exp());

    if moisture > emc_dry {
        // drying toward the dry equilibrium
        let k0 = 0.424 * (1.0 - (humidity / 100.0).powf(1.7))
            + 0.0694 * wind_speed.sqrt() * (1.0 - (humidity / 100.0).powi(8));
        let k = 0.581 * k0 * (0.0365 * temperature).exp();
        moisture = emc_dry + (moisture - emc_dry) * 10f64.powf(-k);
    } else {
        let emc_wet = 0.618 * humidity.powf(0.753)
            + 10.0 * ((humidity - 100.0) / 10.0).exp()
            + 0.18 * (21.1 - temperature) * (1.0 - (-0.115 * humidity).exp());
        if moisture < emc_wet {
            // wetting toward the wet equilibrium
            let k0 = 0.424 * (1.0 - ((100.0 - humidity) / 100.0).powf(1.7))
                + 0.0694 * wind_speed.sqrt() * (1.0 - ((100.0 - humidity) / 100.0).powi(8));
            let k = 0.581 * k0 * (0.0365 * temperature).exp();
            moisture = emc_wet - (emc_wet - moisture) * 10f64.powf(-k);
        }
    }

    from_moisture_to_ffmc(moisture.clamp(0.0, FFMC_MAX_MOISTURE)).clamp(0.0, 101.0)
}

// DMC MODULE

fn dmc_rain_effect(dmc: f64, rain: f64) -> f64 {
    let re = 0.92 * rain - 1.27;
    let m0 = 20.0 + (5.6348 - dmc / 43.43).exp();
    let b = if dmc <= 33.0 {
        100.0 / (0.5 + 0.3 * dmc)
    } else if dmc <= 65.0 {
        14.0 - 1.3 * dmc.ln()
    } else {
        6.2 * dmc.ln() - 17.2
    };
    let mr = m0 + 1000.0 * re / (48.77 + b * re);
    (244.72 - 43.43 * (mr - 20.0).ln()).max(0.0)
}

/// Daily Duff Moisture Code update (eqs 11-17), month-keyed day length.
pub fn duff_moisture_code(
    temperature: f64,
    humidity: f64,
    rain: f64,
    prev_dmc: f64,
    month: u32,
) -> f64 {
    let mut dmc = prev_dmc;
    if rain > DMC_MIN_RAIN {
        dmc = dmc_rain_effect(dmc, rain);
    }
    if temperature > DMC_MIN_TEMP {
        let le = DMC_DAY_LENGTH[(month.clamp(1, 12) - 1) as usize];
        let k = 1.894 * (temperature + 1.1) * (100.0 - humidity) * le * 1e-6;
        dmc += 100.0 * k;
    }
    dmc.max(0.0)
}

// DC MODULE

fn dc_rain_effect(dc: f64, rain: f64) -> f64 {
    let rd = 0.83 * rain - 1.27;
    let q0 = 800.0 * (-dc / 400.0).exp();
    let qr = q0 + 3.937 * rd;
    (400.0 * (800.0 / qr).ln()).max(0.0)
}

/// Daily Drought Code update (eqs 18-23), month-keyed day length factor.
pub fn drought_code(temperature: f64, rain: f64, prev_dc: f64, month: u32) -> f64 {
    let mut dc = prev_dc;
    if rain > DC_MIN_RAIN {
        dc = dc_rain_effect(dc, rain);
    }
    if temperature > DC_MIN_TEMP {
        let lf = DC_DAY_LENGTH_FACTOR[(month.clamp(1, 12) - 1) as usize];
        let v = 0.36 * (temperature + 2.8) + lf;
        if v > 0.0 {
            dc += 0.5 * v;
        }
    }
    dc.max(0.0)
}

// ISI MODULE

/// Initial Spread Index (eqs 24-26).
pub fn initial_spread_index(ffmc: f64, wind_speed: f64) -> f64 {
    let moisture = from_ffmc_to_moisture(ffmc);
    let fw = (ISI_W1 * wind_speed).exp();
    let ff = ISI_F1 * (ISI_F2 * moisture).exp() * (1.0 + moisture.powf(ISI_F3) / ISI_F4);
    ISI_SCALE * fw * ff
}

// BUI MODULE

/// Buildup Index (eq 27).
pub fn buildup_index(dmc: f64, dc: f64) -> f64 {
    if dmc <= 0.0 && dc <= 0.0 {
        return 0.0;
    }
    let bui = if dmc <= BUI_P1 * dc {
        BUI_P2 * dmc * dc / (dmc + BUI_P1 * dc)
    } else {
        dmc - (1.0 - BUI_P2 * dc / (dmc + BUI_P1 * dc))
            * (BUI_P3 + (BUI_P4 * dmc).powf(BUI_P5))
    };
    bui.max(0.0)
}

// FWI MODULE

/// Fire Weather Index (eqs 28-30).
pub fn fire_weather_index(isi: f64, bui: f64) -> f64 {
    let fd = if bui <= 80.0 {
        FWI_D1 * bui.powf(FWI_D2) + FWI_D3
    } else {
        1000.0 / (FWI_D4 + FWI_D5 * (FWI_D6 * bui).exp())
    };
    let b = 0.1 * isi * fd;
    let fwi = if b > 1.0 {
        (FWI_B1 * (FWI_B2 * b.ln()).powf(FWI_B3)).exp()
    } else {
        b
    };
    fwi.max(0.0)
}

/// Daily Severity Rating (eq 31).
pub fn daily_severity_rating(fwi: f64) -> f64 {
    DSR_A1 * fwi.powf(DSR_A2)
}
