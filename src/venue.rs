use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// One bar from the dataset. Field names follow the open-data column names.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Venue {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "SeatsCount", deserialize_with = "seats")]
    pub seats: u32,
    #[serde(rename = "Latitude_WGS84", deserialize_with = "degrees")]
    pub latitude: f64,
    #[serde(rename = "Longitude_WGS84", deserialize_with = "degrees")]
    pub longitude: f64,
}

impl Venue {
    pub fn new(name: &str, address: &str, seats: u32, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            seats,
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} по-адресу: {} [{:?}, {:?}]",
            self.name, self.address, self.latitude, self.longitude
        )
    }
}

/// Parses a decimal number written with either `.` or `,` as the separator.
pub fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse::<f64>().ok()
}

// Coordinates come as JSON numbers in some exports and as strings in others.
fn degrees<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    struct DegreesVisitor;

    impl<'de> Visitor<'de> for DegreesVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a finite number of decimal degrees")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            if v.is_finite() {
                Ok(v)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match parse_decimal(v) {
                Some(x) => self.visit_f64(x),
                None => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }

    deserializer.deserialize_any(DegreesVisitor)
}

fn seats<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    struct SeatsVisitor;

    impl<'de> Visitor<'de> for SeatsVisitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative integer seat count")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u32, E> {
            if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
                Ok(v as u32)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
            v.trim()
                .parse::<u32>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(SeatsVisitor)
}
