use std::f64::consts::PI;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Normalize an azimuth to [0, 360).
pub fn normalize_azimuth(deg: f64) -> f64 {
    let mut az = deg % 360.0;
    if az < 0.0 {
        az += 360.0;
    }
    az
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn azimuth_wraps_into_range() {
        assert_relative_eq!(normalize_azimuth(370.0), 10.0);
        assert_relative_eq!(normalize_azimuth(-10.0), 350.0);
        assert_relative_eq!(normalize_azimuth(360.0), 0.0);
        assert_relative_eq!(normalize_azimuth(180.0), 180.0);
    }
}
