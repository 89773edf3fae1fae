use normalization::{FieldDef, Record};

use crate::codes::{EvaluationMode, Severity, Status, TriggerFlags, TriggerValue, ValueFlags};

/// A trigger as returned by `trigger.get`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trigger {
    /// `triggerid`
    pub trigger_id: String,
    /// `description`: the trigger name.
    pub description: String,
    /// `expression`
    pub expression: String,
    /// `comments`
    pub comments: String,
    /// `error` (read-only)
    pub error: String,
    /// `flags` (read-only)
    pub flags: TriggerFlags,
    /// `lastchange` (read-only), seconds since the epoch.
    pub last_change: i64,
    /// `priority`
    pub priority: Severity,
    /// `status`
    pub status: Status,
    /// `templateid` (read-only)
    pub template_id: String,
    /// `type`
    pub kind: EvaluationMode,
    /// `url`
    pub url: String,
    /// `value` (read-only)
    pub value: TriggerValue,
    /// `value_flags` (read-only)
    pub value_flags: ValueFlags,
}

type Field = FieldDef<Trigger>;

static FIELDS: &[Field] = &[
    Field::id("triggerid", |r| r.trigger_id.as_str(), |r, v| r.trigger_id = v).omit_empty(),
    Field::text("description", |r| r.description.as_str(), |r, v| r.description = v),
    Field::text("expression", |r| r.expression.as_str(), |r, v| r.expression = v),
    Field::text("comments", |r| r.comments.as_str(), |r, v| r.comments = v),
    Field::text("error", |r| r.error.as_str(), |r, v| r.error = v).read_only(),
    Field::code("flags", |r| r.flags.0, |r, v| r.flags = TriggerFlags(v)).read_only(),
    Field::integer("lastchange", |r| r.last_change, |r, v| r.last_change = v).read_only(),
    Field::code("priority", |r| r.priority.0, |r, v| r.priority = Severity(v)),
    Field::code("status", |r| r.status.0, |r, v| r.status = Status(v)),
    Field::id("templateid", |r| r.template_id.as_str(), |r, v| r.template_id = v).read_only(),
    Field::code("type", |r| r.kind.0, |r, v| r.kind = EvaluationMode(v)),
    Field::text("url", |r| r.url.as_str(), |r, v| r.url = v),
    Field::code("value", |r| r.value.0, |r, v| r.value = TriggerValue(v)).read_only(),
    Field::code("value_flags", |r| r.value_flags.0, |r, v| r.value_flags = ValueFlags(v))
        .read_only(),
];

impl Record for Trigger {
    const KIND: &'static str = "trigger";
    const ID_FIELD: &'static str = "triggerid";

    fn fields() -> &'static [FieldDef<Self>] { FIELDS }

    fn id(&self) -> &str { &self.trigger_id }

    fn set_id(&mut self, id: String) { self.trigger_id = id }
}

impl Trigger {
    /// The writable part of this trigger, e.g. to copy it to another host.
    pub fn to_prototype(&self) -> TriggerPrototype {
        TriggerPrototype {
            trigger_id: String::new(),
            description: self.description.clone(),
            expression: self.expression.clone(),
            comments: self.comments.clone(),
            priority: self.priority,
            status: self.status,
            kind: self.kind,
            url: self.url.clone(),
        }
    }
}

/// The writable subset of a trigger, submitted to `trigger.create`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerPrototype {
    /// `triggerid`, filled in once created.
    pub trigger_id: String,
    /// `description`
    pub description: String,
    /// `expression`
    pub expression: String,
    /// `comments`
    pub comments: String,
    /// `priority`
    pub priority: Severity,
    /// `status`
    pub status: Status,
    /// `type`
    pub kind: EvaluationMode,
    /// `url`
    pub url: String,
}

type PrototypeField = FieldDef<TriggerPrototype>;

static PROTOTYPE_FIELDS: &[PrototypeField] = &[
    PrototypeField::id("triggerid", |r| r.trigger_id.as_str(), |r, v| r.trigger_id = v)
        .omit_empty(),
    PrototypeField::text("description", |r| r.description.as_str(), |r, v| r.description = v),
    PrototypeField::text("expression", |r| r.expression.as_str(), |r, v| r.expression = v),
    PrototypeField::text("comments", |r| r.comments.as_str(), |r, v| r.comments = v).omit_empty(),
    PrototypeField::code("priority", |r| r.priority.0, |r, v| r.priority = Severity(v)),
    PrototypeField::code("status", |r| r.status.0, |r, v| r.status = Status(v)),
    PrototypeField::code("type", |r| r.kind.0, |r, v| r.kind = EvaluationMode(v)),
    PrototypeField::text("url", |r| r.url.as_str(), |r, v| r.url = v).omit_empty(),
];

impl Record for TriggerPrototype {
    const KIND: &'static str = "trigger";
    const ID_FIELD: &'static str = "triggerid";

    fn fields() -> &'static [FieldDef<Self>] { PROTOTYPE_FIELDS }

    fn id(&self) -> &str { &self.trigger_id }

    fn set_id(&mut self, id: String) { self.trigger_id = id }
}

impl TriggerPrototype {
    /// A prototype with the mandatory fields set.
    pub fn new(description: impl Into<String>, expression: impl Into<String>) -> Self {
        Self { description: description.into(), expression: expression.into(), ..Self::default() }
    }
}
