//! Annotation records and write commands
//!
//! The wire format uses zero-valued integer identifiers for "not supplied",
//! so commands keep `i64` fields with `#[serde(default)]` rather than
//! `Option<i64>`. Patch is the exception: only fields present in the patch
//! are applied, which maps naturally to `Option`.

use serde::{Deserialize, Serialize};

/// A single annotation event.
///
/// `dashboard_id == 0` marks an organization-level annotation; any other value
/// ties the annotation to a dashboard (and usually a panel on it). That split
/// is what authorization keys on: dashboard annotations are covered by the
/// dashboard-type scope, organization annotations by the organization-type
/// scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    /// Unique identifier, assigned by the store on save.
    pub id: i64,
    /// Owning organization.
    pub org_id: i64,
    /// User that created the annotation (0 for system-created).
    pub user_id: i64,
    /// Dashboard reference; 0 means organization-level.
    #[serde(default)]
    pub dashboard_id: i64,
    /// Panel reference on the dashboard; 0 means none.
    #[serde(default)]
    pub panel_id: i64,
    /// Annotation text.
    pub text: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Event time (epoch milliseconds).
    pub epoch: i64,
    /// Event end time for range annotations; equals `epoch` for points.
    #[serde(default)]
    pub epoch_end: i64,
}

impl Annotation {
    /// Whether this annotation belongs to a dashboard (as opposed to the
    /// organization as a whole).
    #[inline]
    #[must_use]
    pub fn is_dashboard_annotation(&self) -> bool {
        self.dashboard_id != 0
    }
}

/// Command to create an annotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAnnotationCommand {
    /// Event time (epoch milliseconds).
    pub time: i64,
    /// Optional end time for range annotations.
    #[serde(default)]
    pub time_end: i64,
    /// Annotation text; must not be empty.
    pub text: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Target dashboard id; 0 for an organization annotation.
    #[serde(default)]
    pub dashboard_id: i64,
    /// Target dashboard uid, resolved to an id before the command is applied.
    /// Takes effect only when `dashboard_id` is 0.
    #[serde(default)]
    pub dashboard_uid: Option<String>,
    /// Target panel id on the dashboard.
    #[serde(default)]
    pub panel_id: i64,
}

/// Command to fully replace an annotation's mutable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnnotationCommand {
    /// New event time.
    pub time: i64,
    /// New end time.
    #[serde(default)]
    pub time_end: i64,
    /// New text.
    pub text: String,
    /// New tag set (replaces the old one).
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Command to partially update an annotation.
///
/// Only fields carried by the patch are applied; absent fields keep their
/// stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchAnnotationCommand {
    /// New event time, if supplied.
    #[serde(default)]
    pub time: Option<i64>,
    /// New end time, if supplied.
    #[serde(default)]
    pub time_end: Option<i64>,
    /// New text, if supplied.
    #[serde(default)]
    pub text: Option<String>,
    /// New tag set, if supplied.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Command to create an annotation from a graphite-style event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphiteAnnotationCommand {
    /// Event time (epoch seconds in the graphite convention).
    pub when: i64,
    /// Event description; becomes the annotation text. Must not be empty.
    pub what: String,
    /// Optional event payload, appended to the text.
    #[serde(default)]
    pub data: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A tag together with the number of annotations carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    /// The tag value.
    pub tag: String,
    /// Number of annotations in the organization carrying the tag.
    pub count: u64,
}
