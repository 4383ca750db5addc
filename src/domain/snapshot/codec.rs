//! Snapshot encoding and in-place restoration.

use serde_json::{Map, Value};
use thiserror::Error;

use super::fields::{decision_fields, decode_fields, encode_fields, limits_fields, option_fields};
use crate::domain::decision::{Decision, DecisionOption, DecisionWorkspace, OptionSide};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

/// Version tag written into every snapshot.
pub const SNAPSHOT_VERSION: &str = "0.1";

/// Errors from restoring a snapshot.
///
/// Only the root shape can fail; every field-level problem is defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Snapshot must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

impl From<SnapshotError> for DomainError {
    fn from(err: SnapshotError) -> Self {
        DomainError::new(ErrorCode::MalformedSnapshot, err.to_string())
    }
}

/// Layout of a snapshot document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotShape {
    /// `decision` / `options` at the top level.
    Canonical,
    /// `title`, `category`, `limits`, `opt_a`, `opt_b` at the top level.
    Legacy,
}

impl SnapshotShape {
    /// Legacy only when both canonical keys are entirely absent; the two are never mixed.
    pub fn detect(root: &Map<String, Value>) -> Self {
        if root.contains_key("decision") || root.contains_key("options") {
            SnapshotShape::Canonical
        } else {
            SnapshotShape::Legacy
        }
    }
}

/// Serializes the decision and both options, stamped with the current time.
pub fn snapshot_current(
    decision: &Decision,
    option_a: &DecisionOption,
    option_b: &DecisionOption,
) -> Value {
    snapshot_at(decision, option_a, option_b, Timestamp::now())
}

/// Serializes the decision and both options with an explicit save time.
pub fn snapshot_at(
    decision: &Decision,
    option_a: &DecisionOption,
    option_b: &DecisionOption,
    saved_at: Timestamp,
) -> Value {
    let mut decision_obj = encode_fields(&decision_fields(), decision);
    decision_obj.insert(
        "limits".to_string(),
        Value::Object(encode_fields(&limits_fields(), &decision.limits)),
    );

    let mut options = Map::new();
    for (side, option) in [(OptionSide::A, option_a), (OptionSide::B, option_b)] {
        options.insert(
            side.snapshot_key().to_string(),
            Value::Object(encode_fields(&option_fields(side), option)),
        );
    }

    let mut root = Map::new();
    root.insert("version".to_string(), Value::String(SNAPSHOT_VERSION.to_string()));
    root.insert("saved_at".to_string(), Value::String(saved_at.to_iso8601()));
    root.insert("decision".to_string(), Value::Object(decision_obj));
    root.insert("options".to_string(), Value::Object(options));
    Value::Object(root)
}

/// Overwrites every field of the decision and both options from a snapshot.
///
/// Accepts the canonical and the legacy flattened shape. Missing or invalid
/// fields take their documented defaults, so this either fails up front for a
/// non-object root (nothing mutated) or succeeds completely.
pub fn apply_snapshot(
    document: &Value,
    decision: &mut Decision,
    option_a: &mut DecisionOption,
    option_b: &mut DecisionOption,
) -> Result<SnapshotShape, SnapshotError> {
    let root = document.as_object().ok_or(SnapshotError::NotAnObject {
        found: json_type_name(document),
    })?;

    let shape = SnapshotShape::detect(root);
    let empty = Map::new();
    let (decision_obj, options_obj) = match shape {
        SnapshotShape::Canonical => (
            object_at(root, "decision").unwrap_or(&empty),
            object_at(root, "options").unwrap_or(&empty),
        ),
        SnapshotShape::Legacy => (root, root),
    };

    decode_fields(&decision_fields(), decision_obj, decision);
    decode_fields(
        &limits_fields(),
        object_at(decision_obj, "limits").unwrap_or(&empty),
        &mut decision.limits,
    );

    for (side, option) in [(OptionSide::A, option_a), (OptionSide::B, option_b)] {
        decode_fields(
            &option_fields(side),
            object_at(options_obj, side.snapshot_key()).unwrap_or(&empty),
            option,
        );
    }

    Ok(shape)
}

/// Title, category and save time of a snapshot, for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub title: String,
    pub category: String,
    /// `saved_at` as written, if present and non-blank.
    pub saved_at: Option<String>,
}

impl SnapshotHeader {
    /// Reads the header with the same shape rules as [`apply_snapshot`].
    pub fn read(document: &Value) -> Result<Self, SnapshotError> {
        let mut decision = Decision::default();
        let mut a = DecisionOption::named(OptionSide::A.default_name());
        let mut b = DecisionOption::named(OptionSide::B.default_name());
        apply_snapshot(document, &mut decision, &mut a, &mut b)?;

        let saved_at = document
            .get("saved_at")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            title: decision.title,
            category: decision.category,
            saved_at,
        })
    }

    /// Title for display, "Untitled" when blank.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

impl DecisionWorkspace {
    /// [`snapshot_current`] over this workspace.
    pub fn snapshot(&self) -> Value {
        snapshot_current(&self.decision, &self.option_a, &self.option_b)
    }

    /// [`apply_snapshot`] into this workspace.
    pub fn restore(&mut self, document: &Value) -> Result<SnapshotShape, SnapshotError> {
        apply_snapshot(
            document,
            &mut self.decision,
            &mut self.option_a,
            &mut self.option_b,
        )
    }
}

fn object_at<'a>(parent: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    parent.get(key).and_then(Value::as_object)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
