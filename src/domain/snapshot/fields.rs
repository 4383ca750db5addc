//! Declarative field tables shared by snapshot encoding and decoding.
//!
//! Every persisted field is described once: its JSON key, its kind (which
//! fixes the default and the coercion) and accessors into the entity. The
//! encoder walks the table reading values out; the decoder walks the same
//! table coercing raw JSON and writing values back. Both directions see the
//! same keys and defaults.

use serde_json::{Map, Number, Value};

use crate::domain::decision::{CriteriaValues, Decision, DecisionOption, Limits, OptionSide};
use crate::domain::foundation::Risk;

/// Typed value moving between an entity and its JSON form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldValue {
    Count(u64),
    Text(String),
    Level(Risk),
    Flag(bool),
    Ratings(CriteriaValues),
}

impl FieldValue {
    pub(crate) fn to_json(&self) -> Value {
        match self {
            FieldValue::Count(n) => Value::Number(Number::from(*n)),
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Level(risk) => Value::String(risk.label().to_string()),
            FieldValue::Flag(b) => Value::Bool(*b),
            FieldValue::Ratings(values) => Value::Object(
                values
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::Number(Number::from(*v))))
                    .collect(),
            ),
        }
    }
}

/// Shape, default and coercion rule of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKind {
    /// Non-negative integer; anything unusable becomes `default`.
    Count { default: u64 },
    /// String; `trim` strips whitespace, `non_blank` treats blank as missing.
    Text {
        default: &'static str,
        trim: bool,
        non_blank: bool,
    },
    /// Risk label; unknown labels become Medium.
    Level,
    /// Boolean gate; defaults to false.
    Flag,
    /// `{string: int}` map; unusable ratings become 0.
    Ratings,
}

impl FieldKind {
    pub(crate) fn default_value(&self) -> FieldValue {
        match self {
            FieldKind::Count { default } => FieldValue::Count(*default),
            FieldKind::Text { default, .. } => FieldValue::Text((*default).to_string()),
            FieldKind::Level => FieldValue::Level(Risk::default()),
            FieldKind::Flag => FieldValue::Flag(false),
            FieldKind::Ratings => FieldValue::Ratings(CriteriaValues::new()),
        }
    }

    /// Coerces a raw (possibly missing) JSON value. Never fails.
    pub(crate) fn coerce(&self, raw: Option<&Value>) -> FieldValue {
        let raw = match raw {
            None | Some(Value::Null) => return self.default_value(),
            Some(value) => value,
        };

        match self {
            FieldKind::Count { default } => FieldValue::Count(coerce_count(raw).unwrap_or(*default)),
            FieldKind::Text {
                default,
                trim,
                non_blank,
            } => {
                let text = match raw {
                    Value::String(s) if *trim => s.trim().to_string(),
                    Value::String(s) => s.clone(),
                    _ => return self.default_value(),
                };
                if *non_blank && text.trim().is_empty() {
                    FieldValue::Text((*default).to_string())
                } else {
                    FieldValue::Text(text)
                }
            }
            FieldKind::Level => match raw {
                Value::String(s) => FieldValue::Level(Risk::from_label_or_default(s)),
                _ => self.default_value(),
            },
            FieldKind::Flag => FieldValue::Flag(coerce_flag(raw)),
            FieldKind::Ratings => FieldValue::Ratings(coerce_ratings(raw)),
        }
    }
}

/// One row of a field table.
pub(crate) struct FieldSpec<E> {
    pub key: &'static str,
    pub kind: FieldKind,
    pub read: fn(&E) -> FieldValue,
    pub write: fn(&mut E, FieldValue),
}

/// Reads every field of `entity` into a JSON object.
pub(crate) fn encode_fields<E>(table: &[FieldSpec<E>], entity: &E) -> Map<String, Value> {
    table
        .iter()
        .map(|spec| (spec.key.to_string(), (spec.read)(entity).to_json()))
        .collect()
}

/// Writes every field of the table into `entity`, substituting defaults for bad data.
pub(crate) fn decode_fields<E>(table: &[FieldSpec<E>], object: &Map<String, Value>, entity: &mut E) {
    for spec in table {
        (spec.write)(entity, spec.kind.coerce(object.get(spec.key)));
    }
}

// ============================================
// Coercions
// ============================================

/// Integer view of a JSON value: integers, truncated floats, numeric strings, booleans.
fn coerce_integer(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn coerce_count(raw: &Value) -> Option<u64> {
    if let Value::Number(n) = raw {
        if let Some(v) = n.as_u64() {
            return Some(v);
        }
    }
    coerce_integer(raw).and_then(|v| u64::try_from(v).ok())
}

fn coerce_flag(raw: &Value) -> bool {
    match raw {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        _ => false,
    }
}

fn coerce_ratings(raw: &Value) -> CriteriaValues {
    match raw {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| (key.clone(), coerce_integer(value).unwrap_or(0)))
            .collect(),
        _ => CriteriaValues::new(),
    }
}

// ============================================
// Tables
// ============================================

fn count_of(value: FieldValue) -> Option<u64> {
    match value {
        FieldValue::Count(n) => Some(n),
        _ => None,
    }
}

fn text_of(value: FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(s) => Some(s),
        _ => None,
    }
}

fn level_of(value: FieldValue) -> Option<Risk> {
    match value {
        FieldValue::Level(r) => Some(r),
        _ => None,
    }
}

/// `decision` object fields, excluding the nested `limits` object.
pub(crate) fn decision_fields() -> [FieldSpec<Decision>; 2] {
    let text = FieldKind::Text {
        default: "",
        trim: true,
        non_blank: false,
    };
    [
        FieldSpec {
            key: "title",
            kind: text,
            read: |d| FieldValue::Text(d.title.clone()),
            write: |d, v| {
                if let Some(s) = text_of(v) {
                    d.title = s;
                }
            },
        },
        FieldSpec {
            key: "category",
            kind: text,
            read: |d| FieldValue::Text(d.category.clone()),
            write: |d, v| {
                if let Some(s) = text_of(v) {
                    d.category = s;
                }
            },
        },
    ]
}

pub(crate) fn limits_fields() -> [FieldSpec<Limits>; 7] {
    [
        FieldSpec {
            key: "money_max_usd",
            kind: FieldKind::Count {
                default: Limits::DEFAULT_MONEY_MAX_USD,
            },
            read: |l| FieldValue::Count(l.money_max_usd),
            write: |l, v| {
                if let Some(n) = count_of(v) {
                    l.money_max_usd = n;
                }
            },
        },
        FieldSpec {
            key: "time_hours_per_week",
            kind: FieldKind::Count {
                default: Limits::DEFAULT_TIME_HOURS_PER_WEEK,
            },
            read: |l| FieldValue::Count(l.time_hours_per_week),
            write: |l, v| {
                if let Some(n) = count_of(v) {
                    l.time_hours_per_week = n;
                }
            },
        },
        FieldSpec {
            key: "stress",
            kind: FieldKind::Level,
            read: |l| FieldValue::Level(l.stress),
            write: |l, v| {
                if let Some(r) = level_of(v) {
                    l.stress = r;
                }
            },
        },
        FieldSpec {
            key: "relationships",
            kind: FieldKind::Level,
            read: |l| FieldValue::Level(l.relationships),
            write: |l, v| {
                if let Some(r) = level_of(v) {
                    l.relationships = r;
                }
            },
        },
        FieldSpec {
            key: "reversibility",
            kind: FieldKind::Level,
            read: |l| FieldValue::Level(l.reversibility),
            write: |l, v| {
                if let Some(r) = level_of(v) {
                    l.reversibility = r;
                }
            },
        },
        FieldSpec {
            key: "dependency",
            kind: FieldKind::Level,
            read: |l| FieldValue::Level(l.dependency),
            write: |l, v| {
                if let Some(r) = level_of(v) {
                    l.dependency = r;
                }
            },
        },
        FieldSpec {
            key: "confirmed",
            kind: FieldKind::Flag,
            read: |l| FieldValue::Flag(l.confirmed),
            write: |l, v| {
                if let FieldValue::Flag(b) = v {
                    l.confirmed = b;
                }
            },
        },
    ]
}

/// Option fields; the name default depends on which side is being read.
pub(crate) fn option_fields(side: OptionSide) -> [FieldSpec<DecisionOption>; 9] {
    [
        FieldSpec {
            key: "name",
            kind: FieldKind::Text {
                default: side.default_name(),
                trim: true,
                non_blank: true,
            },
            read: |o| FieldValue::Text(o.name.clone()),
            write: |o, v| {
                if let Some(s) = text_of(v) {
                    o.name = s;
                }
            },
        },
        FieldSpec {
            key: "money_at_risk_usd",
            kind: FieldKind::Count {
                default: DecisionOption::DEFAULT_MONEY_AT_RISK_USD,
            },
            read: |o| FieldValue::Count(o.money_at_risk_usd),
            write: |o, v| {
                if let Some(n) = count_of(v) {
                    o.money_at_risk_usd = n;
                }
            },
        },
        FieldSpec {
            key: "time_required_hours_per_week",
            kind: FieldKind::Count {
                default: DecisionOption::DEFAULT_TIME_REQUIRED_HOURS_PER_WEEK,
            },
            read: |o| FieldValue::Count(o.time_required_hours_per_week),
            write: |o, v| {
                if let Some(n) = count_of(v) {
                    o.time_required_hours_per_week = n;
                }
            },
        },
        FieldSpec {
            key: "stress_fit",
            kind: FieldKind::Level,
            read: |o| FieldValue::Level(o.stress_fit),
            write: |o, v| {
                if let Some(r) = level_of(v) {
                    o.stress_fit = r;
                }
            },
        },
        FieldSpec {
            key: "relationships_impact",
            kind: FieldKind::Level,
            read: |o| FieldValue::Level(o.relationships_impact),
            write: |o, v| {
                if let Some(r) = level_of(v) {
                    o.relationships_impact = r;
                }
            },
        },
        FieldSpec {
            key: "reversibility",
            kind: FieldKind::Level,
            read: |o| FieldValue::Level(o.reversibility),
            write: |o, v| {
                if let Some(r) = level_of(v) {
                    o.reversibility = r;
                }
            },
        },
        FieldSpec {
            key: "dependency",
            kind: FieldKind::Level,
            read: |o| FieldValue::Level(o.dependency),
            write: |o, v| {
                if let Some(r) = level_of(v) {
                    o.dependency = r;
                }
            },
        },
        FieldSpec {
            key: "summary",
            kind: FieldKind::Text {
                default: "",
                trim: false,
                non_blank: false,
            },
            read: |o| FieldValue::Text(o.summary.clone()),
            write: |o, v| {
                if let Some(s) = text_of(v) {
                    o.summary = s;
                }
            },
        },
        FieldSpec {
            key: "criteria",
            kind: FieldKind::Ratings,
            read: |o| FieldValue::Ratings(o.criteria.clone()),
            write: |o, v| {
                if let FieldValue::Ratings(values) = v {
                    o.criteria = values;
                }
            },
        },
    ]
}
