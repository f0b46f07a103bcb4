//! Structured input documents.
//!
//! A document is a JSON object. The point count lives under `keys.k` (or a
//! top-level `k`), and every field whose name is an integer describes one
//! point:
//!
//! ```json
//! { "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" } }
//! ```
//!
//! Field names that are not integers are skipped.

use std::io::Read;

use exactfit_integers::{decode, ArithmeticError, Integer};
use exactfit_poly::Point;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

const KEYS_FIELD: &str = "keys";
const K_FIELD: &str = "k";

/// Errors that can occur while reading or decoding a document.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input could not be read.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),

    /// The input is not valid JSON.
    #[error("malformed JSON")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an object.
    #[error("expected a JSON object at the top level")]
    NotAnObject,

    /// No point count was given in the document or on the command line.
    #[error("no point count k was given")]
    MissingK,

    /// A point count (`k` or `n`) is present but not a non-negative integer.
    #[error("invalid point count: {0}")]
    InvalidK(String),

    /// A point field does not have the expected shape.
    #[error("point {key}: {reason}")]
    MalformedPoint {
        /// The point's field name.
        key: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A point's value is not a valid number in its base.
    #[error("point {key} has an invalid value")]
    Decode {
        /// The point's field name.
        key: String,
        /// The decoding failure.
        #[source]
        source: ArithmeticError,
    },
}

/// A JSON number or a string holding one.
#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Number(u64),
    Text(String),
}

impl Count {
    fn to_u64(&self) -> Option<u64> {
        match self {
            Count::Number(n) => Some(*n),
            Count::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Deserialize)]
struct Keys {
    k: Option<Count>,
    n: Option<Count>,
}

#[derive(Deserialize)]
struct PointEntry {
    base: Count,
    value: String,
}

/// A point as written in the document, before its value is decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawPoint {
    /// The field name the point was found under.
    pub key: String,
    /// The index parsed from the field name.
    pub index: Integer,
    /// The encoded value.
    pub digits: String,
    /// The base the value is written in.
    pub base: u32,
}

impl RawPoint {
    /// Decodes the value into a [`Point`].
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Decode`] if the digits are invalid for the base.
    pub fn decode(&self) -> Result<Point, InputError> {
        let value = decode(&self.digits, self.base).map_err(|source| InputError::Decode {
            key: self.key.clone(),
            source,
        })?;
        Ok(Point::new(self.index.clone(), value))
    }
}

/// A parsed input document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// The required point count, if the document states one.
    pub k: Option<usize>,
    /// The declared number of points (`keys.n`), informational only.
    pub declared_n: Option<usize>,
    /// The points, ordered by field name.
    pub points: Vec<RawPoint>,
}

impl Document {
    /// Reads and parses a document.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Io`] if reading fails, otherwise see
    /// [`Document::parse`].
    pub fn read<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::parse(&json)
    }

    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the JSON is malformed, the counts are
    /// not integers, or a point field lacks a usable `base` and `value`.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        let Value::Object(fields) = serde_json::from_str::<Value>(json)? else {
            return Err(InputError::NotAnObject);
        };

        let (k, declared_n) = read_counts(&fields)?;

        let mut points = Vec::new();
        for (key, entry) in fields {
            if key == KEYS_FIELD || key == K_FIELD {
                continue;
            }
            let Ok(index) = Integer::from_str_radix(key.trim(), 10) else {
                debug!(%key, "skipping non-numeric field");
                continue;
            };
            points.push(read_point(key, index, entry)?);
        }

        if let Some(n) = declared_n {
            if n != points.len() {
                warn!(declared = n, found = points.len(), "point count differs from keys.n");
            }
        }

        Ok(Self {
            k,
            declared_n,
            points,
        })
    }

    /// Decodes every point's value.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Decode`] for the first invalid value; no
    /// points are returned in that case.
    pub fn decode(&self) -> Result<Vec<Point>, InputError> {
        self.points.iter().map(RawPoint::decode).collect()
    }
}

fn count_to_usize(count: &Count, field: &str) -> Result<usize, InputError> {
    count
        .to_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| InputError::InvalidK(format!("{field} is not a non-negative integer")))
}

fn read_counts(fields: &Map<String, Value>) -> Result<(Option<usize>, Option<usize>), InputError> {
    let keys = match fields.get(KEYS_FIELD) {
        Some(value) => Some(
            Keys::deserialize(value).map_err(|e| InputError::InvalidK(e.to_string()))?,
        ),
        None => None,
    };

    let k = match keys.as_ref().and_then(|keys| keys.k.as_ref()) {
        Some(count) => Some(count_to_usize(count, "keys.k")?),
        None => match fields.get(K_FIELD) {
            Some(value) => {
                let count =
                    Count::deserialize(value).map_err(|e| InputError::InvalidK(e.to_string()))?;
                Some(count_to_usize(&count, "k")?)
            }
            None => None,
        },
    };

    let declared_n = match keys.as_ref().and_then(|keys| keys.n.as_ref()) {
        Some(count) => Some(count_to_usize(count, "keys.n")?),
        None => None,
    };

    Ok((k, declared_n))
}

fn read_point(key: String, index: Integer, entry: Value) -> Result<RawPoint, InputError> {
    let entry: PointEntry = match serde_json::from_value(entry) {
        Ok(entry) => entry,
        Err(e) => {
            return Err(InputError::MalformedPoint {
                key,
                reason: e.to_string(),
            })
        }
    };

    let Some(base) = entry.base.to_u64().and_then(|b| u32::try_from(b).ok()) else {
        return Err(InputError::MalformedPoint {
            key,
            reason: "base is not a non-negative integer".to_string(),
        });
    };

    Ok(RawPoint {
        key,
        index,
        digits: entry.value,
        base,
    })
}
