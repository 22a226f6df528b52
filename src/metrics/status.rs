use std::fmt;

const CO2_MODERATE_PPM: u32 = 800;
const CO2_POOR_PPM: u32 = 1000;

const BATTERY_GOOD_ABOVE_MV: u32 = 3000;
const BATTERY_LOW_ABOVE_MV: u32 = 2600;

/// Three-tier severity shared by every status, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Normal,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Co2Status {
    Good,
    Moderate,
    Poor,
}

impl Co2Status {
    pub fn label(&self) -> &'static str {
        match self {
            Co2Status::Good => "Good",
            Co2Status::Moderate => "Moderate",
            Co2Status::Poor => "Poor",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Co2Status::Good => Severity::Normal,
            Co2Status::Moderate => Severity::Warning,
            Co2Status::Poor => Severity::Error,
        }
    }
}

impl fmt::Display for Co2Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatteryStatus {
    Good,
    Low,
    Critical,
}

impl BatteryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BatteryStatus::Good => "Good",
            BatteryStatus::Low => "Low",
            BatteryStatus::Critical => "Critical",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            BatteryStatus::Good => Severity::Normal,
            BatteryStatus::Low => Severity::Warning,
            BatteryStatus::Critical => Severity::Error,
        }
    }
}

impl fmt::Display for BatteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify_co2(ppm: u32) -> Co2Status {
    if ppm < CO2_MODERATE_PPM {
        return Co2Status::Good;
    }

    if ppm < CO2_POOR_PPM {
        return Co2Status::Moderate;
    }

    Co2Status::Poor
}

pub fn classify_battery(mv: u32) -> BatteryStatus {
    if mv > BATTERY_GOOD_ABOVE_MV {
        return BatteryStatus::Good;
    }

    if mv > BATTERY_LOW_ABOVE_MV {
        return BatteryStatus::Low;
    }

    BatteryStatus::Critical
}
