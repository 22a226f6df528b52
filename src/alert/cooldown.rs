use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};

use crate::alert::AlertKind;

pub const DEFAULT_COOLDOWN_SECS: i64 = 300;

/// Suppresses repeats of the same alert kind for the same device.
#[derive(Debug)]
pub struct AlertCooldown {
    period: TimeDelta,
    last_admitted: HashMap<(String, AlertKind), DateTime<Utc>>,
}

impl AlertCooldown {
    pub fn new(period: TimeDelta) -> Self {
        Self {
            period,
            last_admitted: HashMap::new(),
        }
    }

    /// Records `now` and returns true unless the key was admitted within the period.
    pub fn admit(&mut self, device_id: &str, kind: AlertKind, now: DateTime<Utc>) -> bool {
        let key = (device_id.to_string(), kind);

        if let Some(&last) = self.last_admitted.get(&key)
            && now - last < self.period
        {
            return false;
        }

        self.last_admitted.insert(key, now);
        true
    }
}

impl Default for AlertCooldown {
    fn default() -> Self {
        Self::new(TimeDelta::seconds(DEFAULT_COOLDOWN_SECS))
    }
}
