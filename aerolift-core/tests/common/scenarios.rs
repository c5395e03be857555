//! Flight scenarios from the Cessna 172 operating data

/// Nominal readings for one flight condition
#[derive(Debug, Clone, Copy)]
pub struct FlightScenario {
    pub name: &'static str,
    pub temperature_k: f64,
    pub pressure_absolute_pa: f64,
    pub pressure_pitot_pa: f64,
}

/// Cruise speed, close to sea level
pub const SEA_LEVEL_CRUISE: FlightScenario = FlightScenario {
    name: "sea level cruise",
    temperature_k: 300.0,
    pressure_absolute_pa: 101_000.0,
    pressure_pitot_pa: 102_900.0,
};

/// Cruise speed, close to the absolute ceiling (~4000 m)
pub const CEILING_CRUISE: FlightScenario = FlightScenario {
    name: "ceiling cruise",
    temperature_k: 270.0,
    pressure_absolute_pa: 62_500.0,
    pressure_pitot_pa: 63_800.0,
};

/// Pitot below static: blocked pitot or swapped lines
pub const BLOCKED_PITOT: FlightScenario = FlightScenario {
    name: "blocked pitot",
    temperature_k: 300.0,
    pressure_absolute_pa: 101_000.0,
    pressure_pitot_pa: 100_000.0,
};

/// Every valid scenario
pub const VALID: [FlightScenario; 2] = [SEA_LEVEL_CRUISE, CEILING_CRUISE];
