use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Co2,
    Temperature,
    Battery,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Co2 => "CO2",
            AlertKind::Temperature => "Temperature",
            AlertKind::Battery => "Battery",
        }
    }

    fn unit(&self) -> &'static str {
        match self {
            AlertKind::Co2 => " ppm",
            AlertKind::Temperature => "°C",
            AlertKind::Battery => " mV",
        }
    }

    fn subject(&self) -> &'static str {
        match self {
            AlertKind::Co2 => "CO2 level",
            AlertKind::Temperature => "Temperature",
            AlertKind::Battery => "Battery voltage",
        }
    }

    /// Integer metrics print without decimals; temperatures keep every reported
    /// digit and always show at least one.
    fn format_value(&self, v: f64) -> String {
        match self {
            AlertKind::Temperature => format!("{v:?}{}", self.unit()),
            AlertKind::Co2 | AlertKind::Battery => format!("{v:.0}{}", self.unit()),
        }
    }

    fn format_threshold(&self, v: f64) -> String {
        match self {
            AlertKind::Temperature => format!("{v:.1}{}", self.unit()),
            AlertKind::Co2 | AlertKind::Battery => format!("{v:.0}{}", self.unit()),
        }
    }

    pub(crate) fn message(&self, level: AlertLevel, value: f64, threshold: f64) -> String {
        format!(
            "{level}: {} at {} (threshold: {})",
            self.subject(),
            self.format_value(value),
            self.format_threshold(threshold),
        )
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertLevel {
    Warning,
    Critical,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Warning => "WARNING",
            AlertLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn recommendation(kind: AlertKind, level: AlertLevel) -> &'static str {
    match (kind, level) {
        (AlertKind::Co2, AlertLevel::Critical) => {
            "IMMEDIATE: Increase ventilation, evacuate room if necessary. Check HVAC system operation."
        }
        (AlertKind::Co2, AlertLevel::Warning) => {
            "Increase ventilation rate, reduce occupancy if possible. Monitor trend closely."
        }
        (AlertKind::Temperature, AlertLevel::Critical) => {
            "IMMEDIATE: Check HVAC system, reduce heat sources, consider relocating occupants."
        }
        (AlertKind::Temperature, AlertLevel::Warning) => {
            "Adjust thermostat setpoint, check for heat sources (equipment, direct sunlight)."
        }
        (AlertKind::Battery, AlertLevel::Critical) => {
            "URGENT: Schedule battery replacement within 24 hours to avoid service interruption."
        }
        (AlertKind::Battery, AlertLevel::Warning) => {
            "Schedule battery replacement within next maintenance window (1-2 weeks)."
        }
    }
}
