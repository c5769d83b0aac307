//! Plan document loading and validation.
//!
//! Loading is two-staged: the YAML is first read into a loosely typed
//! [`RawPlan`] that keeps every part name and priority as written, so that
//! validation can report *all* offending values at once. Only a plan that
//! passes [`check_parts`] and [`check_priorities`] is converted into the typed
//! [`cantor_core::Plan`].

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use cantor_core::{Entry, Part, Period, Plan, PlanDocument, Priority};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::{debug, info};

use crate::frontmatter::extract_front_matter;

/// Top-level keys recognised as plan roots, preferred over other keys.
pub const ROOT_KEYS: [&str; 2] = ["hymns", "mass"];

/// Plan loading errors.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid plan YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    Parse { line: Option<usize>, message: String },

    #[error("invalid plan structure: {message}")]
    Shape { message: String },

    #[error("invalid entry in {location}: {message}")]
    InvalidEntry { location: String, message: String },

    #[error("`{}` is/are not recognized as Mass parts. Please check spelling and try again.", names.join(", "))]
    UnknownParts { names: Vec<String> },

    #[error("`{}` is/are not recognized as priorities (expected none, required, preferred, optional or flexible). Please check spelling and try again.", values.join(", "))]
    UnknownPriorities { values: Vec<String> },

    #[error("priority is missing for {}", locations.join(", "))]
    MissingPriority { locations: Vec<String> },
}

impl PlanError {
    /// Whether the plan text itself is at fault, as opposed to reading it.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }

    fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }
}

impl From<cantor_core::Error> for PlanError {
    fn from(err: cantor_core::Error) -> Self {
        match err {
            cantor_core::Error::UnknownPart(name) => Self::UnknownParts { names: vec![name] },
            cantor_core::Error::UnknownPriority(value) => {
                Self::UnknownPriorities { values: vec![value] }
            }
            other => Self::shape(other.to_string()),
        }
    }
}

/// An entry as written, before vocabulary checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEntry {
    #[serde(deserialize_with = "scalar")]
    pub name: String,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub composer: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub tune: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub verses: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub option: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub book: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar")]
    pub priority: Option<String>,
}

/// Parts of one period, keyed by part name as written.
pub type RawPeriod = IndexMap<String, Vec<RawEntry>>;

/// A plan as written, before vocabulary checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPlan {
    /// Top-level key the plan was found under.
    pub root: String,
    pub periods: IndexMap<String, RawPeriod>,
}

impl RawPlan {
    /// Iterate `(period, part, entries)` in document order.
    pub fn parts(&self) -> impl Iterator<Item = (&str, &str, &[RawEntry])> {
        self.periods.iter().flat_map(|(period, parts)| {
            parts
                .iter()
                .map(move |(part, entries)| (period.as_str(), part.as_str(), entries.as_slice()))
        })
    }
}

/// Load, validate and type a plan from YAML text or a document with front matter.
pub fn load_plan(text: &str) -> Result<PlanDocument, PlanError> {
    let raw = parse_raw(text)?;
    validate(raw)
}

/// Read and load a plan file.
pub fn load_plan_file(path: impl AsRef<Path>) -> Result<PlanDocument, PlanError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "read plan file");
    load_plan(&text)
}

/// Parse YAML into a [`RawPlan`] without checking the vocabularies.
pub fn parse_raw(text: &str) -> Result<RawPlan, PlanError> {
    let yaml = extract_front_matter(text);
    let doc: Value = serde_yaml::from_str(yaml).map_err(|e| PlanError::Parse {
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })?;

    let top = match doc {
        Value::Mapping(m) if !m.is_empty() => m,
        Value::Mapping(_) | Value::Null => {
            return Err(PlanError::shape("plan document is empty"))
        }
        _ => return Err(PlanError::shape("plan document must be a mapping")),
    };

    let (root, body) = select_root(top)?;
    let periods = match body {
        Value::Mapping(m) => m,
        Value::Null => Mapping::new(),
        _ => {
            return Err(PlanError::shape(format!(
                "`{root}` must map periods to parts"
            )))
        }
    };

    let mut raw = RawPlan {
        root,
        periods: IndexMap::new(),
    };

    for (period_key, period_value) in periods {
        let period_key = key_string(&period_key);
        let parts = match period_value {
            Value::Mapping(m) => m,
            Value::Null => Mapping::new(),
            _ => {
                return Err(PlanError::shape(format!(
                    "period `{period_key}` must map part names to entries"
                )))
            }
        };

        let mut period = RawPeriod::new();
        for (part_key, part_value) in parts {
            let part_key = key_string(&part_key);
            let location = format!("{period_key}/{part_key}");
            let entries = parse_entries(&location, part_value)?;
            period.entry(part_key).or_default().extend(entries);
        }

        debug!(period = %period_key, parts = period.len(), "parsed period");
        raw.periods.insert(period_key, period);
    }

    Ok(raw)
}

/// Report every part name outside the liturgical vocabulary.
pub fn check_parts(raw: &RawPlan) -> Result<(), PlanError> {
    let unknown: BTreeSet<&str> = raw
        .parts()
        .map(|(_, part, _)| part)
        .filter(|part| part.parse::<Part>().is_err())
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(PlanError::UnknownParts {
            names: unknown.into_iter().map(String::from).collect(),
        })
    }
}

/// Report every priority outside the priority enum.
pub fn check_priorities(raw: &RawPlan) -> Result<(), PlanError> {
    let unknown: BTreeSet<&str> = raw
        .parts()
        .flat_map(|(_, _, entries)| entries)
        .filter_map(|entry| entry.priority.as_deref())
        .filter(|priority| priority.parse::<Priority>().is_err())
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(PlanError::UnknownPriorities {
            values: unknown.into_iter().map(String::from).collect(),
        })
    }
}

/// Report entries without a priority. Anthems may omit it.
pub fn check_missing_priorities(raw: &RawPlan) -> Result<(), PlanError> {
    let anthems = Part::Anthems.key();
    let locations: Vec<String> = raw
        .parts()
        .filter(|(_, part, _)| *part != anthems)
        .flat_map(|(period, part, entries)| {
            entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.priority.is_none())
                .map(move |(i, _)| format!("{period}/{part}#{}", i + 1))
        })
        .collect();

    if locations.is_empty() {
        Ok(())
    } else {
        Err(PlanError::MissingPriority { locations })
    }
}

/// Run every check, then convert into the typed plan.
pub fn validate(raw: RawPlan) -> Result<PlanDocument, PlanError> {
    check_parts(&raw)?;
    check_priorities(&raw)?;
    check_missing_priorities(&raw)?;

    let mut periods = Vec::with_capacity(raw.periods.len());
    for (key, raw_parts) in raw.periods {
        let mut period = Period::new(key);
        for (part_key, raw_entries) in raw_parts {
            let part: Part = part_key.parse()?;
            let entries = raw_entries
                .into_iter()
                .map(into_entry)
                .collect::<Result<Vec<_>, _>>()?;
            period = period.with_part(part, entries);
        }
        periods.push(period);
    }

    let doc = PlanDocument {
        root: raw.root,
        plan: Plan::new(periods),
    };
    info!(
        root = %doc.root,
        periods = doc.plan.periods.len(),
        entries = doc.plan.entry_count(),
        "loaded plan"
    );
    Ok(doc)
}

fn into_entry(raw: RawEntry) -> Result<Entry, PlanError> {
    let priority = match raw.priority.as_deref() {
        Some(p) => p.parse()?,
        None => Priority::None,
    };

    Ok(Entry {
        name: raw.name,
        composer: raw.composer,
        tune: raw.tune,
        verses: raw.verses,
        note: raw.note,
        year: raw.year,
        option: raw.option,
        book: raw.book,
        priority,
    })
}

fn select_root(mut top: Mapping) -> Result<(String, Value), PlanError> {
    for key in ROOT_KEYS {
        if let Some(body) = top.remove(key) {
            return Ok((key.to_string(), body));
        }
    }

    // Otherwise the first key holds the plan.
    let mut iter = top.into_iter();
    match iter.next() {
        Some((key, body)) => Ok((key_string(&key), body)),
        None => Err(PlanError::shape("plan document is empty")),
    }
}

fn parse_entries(location: &str, value: Value) -> Result<Vec<RawEntry>, PlanError> {
    let list = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(_) => value,
        Value::Mapping(mut m) => {
            if m.len() != 1 || !m.contains_key("list") {
                return Err(PlanError::shape(format!(
                    "part `{location}` must be a list or a mapping with a single `list` key"
                )));
            }
            match m.remove("list") {
                Some(Value::Null) | None => return Ok(Vec::new()),
                Some(list) => list,
            }
        }
        _ => {
            return Err(PlanError::shape(format!(
                "part `{location}` must be a list of entries"
            )))
        }
    };

    serde_yaml::from_value(list).map_err(|e| PlanError::InvalidEntry {
        location: location.to_string(),
        message: e.to_string(),
    })
}

fn key_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "~".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

/// YAML scalars accepted where text is expected (`verses: 3`, `year: 2024`).
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Scalar::deserialize(deserializer).map(String::from)
}

fn optional_scalar<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<Scalar>::deserialize(deserializer).map(|s| s.map(String::from))
}
