//! Unit conversions for hydrogeology: length, flow rate, hydraulic
//! conductivity.
//!
//! Conversion factors follow the standard SI/US customary definitions used
//! in environmental and groundwater practice. Conversions are linear and
//! defined for all finite reals, negative values included; physical
//! plausibility is the caller's concern.

use hg_core::{HgResult, Real, ensure_finite};

/// 1 ft = 0.3048 m (exact)
pub const FT_TO_M: Real = 0.3048;

/// 1 US gpm = 0.0630901964 L/s
pub const GPM_TO_L_PER_S: Real = 0.0630901964;

/// 1 m/s = 86400 m/day
pub const M_PER_S_TO_M_PER_DAY: Real = 86400.0;

/// Convert length in feet to metres.
pub fn feet_to_meters(value: Real) -> HgResult<Real> {
    Ok(ensure_finite(value, "length")? * FT_TO_M)
}

/// Convert length in metres to feet.
pub fn meters_to_feet(value: Real) -> HgResult<Real> {
    Ok(ensure_finite(value, "length")? / FT_TO_M)
}

/// Convert volumetric flow rate in US gallons per minute to litres per second.
pub fn gpm_to_l_per_s(value: Real) -> HgResult<Real> {
    Ok(ensure_finite(value, "flow rate")? * GPM_TO_L_PER_S)
}

/// Convert volumetric flow rate in litres per second to US gallons per minute.
pub fn l_per_s_to_gpm(value: Real) -> HgResult<Real> {
    Ok(ensure_finite(value, "flow rate")? / GPM_TO_L_PER_S)
}

/// Convert hydraulic conductivity in m/s to m/day.
pub fn m_per_s_to_m_per_day(value: Real) -> HgResult<Real> {
    Ok(ensure_finite(value, "conductivity")? * M_PER_S_TO_M_PER_DAY)
}

/// Convert hydraulic conductivity in m/day to m/s.
pub fn m_per_day_to_m_per_s(value: Real) -> HgResult<Real> {
    Ok(ensure_finite(value, "conductivity")? / M_PER_S_TO_M_PER_DAY)
}
