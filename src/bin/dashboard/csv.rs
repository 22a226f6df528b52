use std::io::Read;

use anyhow::{Context as _, Result, anyhow, bail};
use building_environments::metrics::DeviceReading;
use chrono::{LocalResult, NaiveDateTime};
use chrono_tz::Tz;
use csv::{Reader, ReaderBuilder, StringRecord, Trim};

const ID_INDEX: usize = 0;
const NAME_INDEX: usize = 1;
const CO2_PPM_INDEX: usize = 2;
const TEMPERATURE_CELSIUS_INDEX: usize = 3;
const HUMIDITY_PERCENT_INDEX: usize = 4;
const OCCUPANCY_INDEX: usize = 5;
const BATTERY_MV_INDEX: usize = 6;
const LAST_UPDATE_INDEX: usize = 7;

#[derive(Debug, Clone, Copy)]
enum CsvFormat {
    Reading,
    ReadingLastUpdate,
}

#[derive(Debug)]
pub struct CsvReadingIter<R> {
    reader: Reader<R>,
    format: CsvFormat,
    timezone: Tz,
}

impl<R: Read> CsvReadingIter<R> {
    pub fn new(rdr: R, timezone: Tz) -> Result<Self> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(rdr);

        let headers = reader.headers().context("failed to read CSV header")?;
        let format = detect_format(headers);

        Ok(Self {
            reader,
            format,
            timezone,
        })
    }

    fn parse_row(&self, row: &StringRecord) -> Result<DeviceReading> {
        let id = field(row, ID_INDEX)?;
        if id.is_empty() {
            bail!("device id is empty");
        }

        let name = field(row, NAME_INDEX)?;
        let co2_ppm = field(row, CO2_PPM_INDEX)?
            .parse()
            .with_context(|| format!("failed to parse CO2: {}", &row[CO2_PPM_INDEX]))?;
        let temperature_celsius = parse_finite(field(row, TEMPERATURE_CELSIUS_INDEX)?)
            .context("failed to parse temperature")?;
        let humidity_percent = parse_finite(field(row, HUMIDITY_PERCENT_INDEX)?)
            .context("failed to parse humidity")?;
        if !(0f64..=100f64).contains(&humidity_percent) {
            bail!("humidity out of range: expected 0-100, got {humidity_percent}");
        }
        let occupancy = parse_occupancy(field(row, OCCUPANCY_INDEX)?)?;
        let battery_mv = field(row, BATTERY_MV_INDEX)?
            .parse()
            .with_context(|| format!("failed to parse battery: {}", &row[BATTERY_MV_INDEX]))?;
        let last_update = match self.format {
            CsvFormat::Reading => None,
            CsvFormat::ReadingLastUpdate => match row.get(LAST_UPDATE_INDEX) {
                None | Some("") => None,
                Some(raw) => Some(self.parse_timestamp(raw)?),
            },
        };

        Ok(DeviceReading {
            id: id.to_string(),
            name: name.to_string(),
            co2_ppm,
            temperature_celsius,
            humidity_percent,
            occupancy,
            battery_mv,
            last_update,
        })
    }

    fn parse_timestamp(&self, raw: &str) -> Result<chrono::DateTime<Tz>> {
        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
            .with_context(|| format!("failed to parse timestamp: {raw}"))?;

        match naive.and_local_timezone(self.timezone) {
            LocalResult::Single(dt) => Ok(dt),
            LocalResult::Ambiguous(dt, _) => Ok(dt),
            LocalResult::None => bail!("invalid timestamp: {raw}"),
        }
    }
}

impl<R: Read> Iterator for CsvReadingIter<R> {
    type Item = Result<DeviceReading>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.reader.records().next()? {
            Ok(row) => row,
            Err(e) => return Some(Err(e.into())),
        };

        let line = row.position().map(|p| p.line()).unwrap_or_default();

        Some(
            self.parse_row(&row)
                .with_context(|| format!("invalid reading on line {line}")),
        )
    }
}

fn detect_format(headers: &StringRecord) -> CsvFormat {
    if headers.iter().any(|h| h == "last_update") {
        return CsvFormat::ReadingLastUpdate;
    }

    CsvFormat::Reading
}

fn field(row: &StringRecord, index: usize) -> Result<&str> {
    row.get(index)
        .ok_or_else(|| anyhow!("missing column {index}: expected at least {} columns", index + 1))
}

fn parse_finite(raw: &str) -> Result<f64> {
    let v: f64 = raw.parse().with_context(|| format!("not a number: {raw}"))?;
    if !v.is_finite() {
        bail!("must be a finite number: {raw}");
    }

    Ok(v)
}

fn parse_occupancy(v: &str) -> Result<bool> {
    match v.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => bail!("failed to parse occupancy: expected true/false/1/0, got {v}"),
    }
}
