use normalization::{FieldDef, Record};

use crate::codes::{DataType, DeltaType, ItemType, Status, ValueType};

/// An item: one metric collected from a host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    /// `itemid`
    pub item_id: String,
    /// `delay`: update interval in seconds.
    pub delay: i64,
    /// `hostid`
    pub host_id: String,
    /// `interfaceid`
    pub interface_id: String,
    /// `key_`
    pub key: String,
    /// `name`
    pub name: String,
    /// `type`
    pub kind: ItemType,
    /// `value_type`
    pub value_type: ValueType,
    /// `data_type`
    pub data_type: DataType,
    /// `delta`
    pub delta: DeltaType,
    /// `description`
    pub description: String,
    /// `error` (read-only)
    pub error: String,
    /// `history`: days to keep history.
    pub history: i64,
    /// `trends`: days to keep trends.
    pub trends: i64,
    /// `status`
    pub status: Status,
    /// `units`
    pub units: String,
    /// `applications`: identifiers of the applications the item belongs to.
    pub application_ids: Vec<String>,
}

type Field = FieldDef<Item>;

static FIELDS: &[Field] = &[
    Field::id("itemid", |r| r.item_id.as_str(), |r, v| r.item_id = v).omit_empty(),
    Field::integer("delay", |r| r.delay, |r, v| r.delay = v),
    Field::id("hostid", |r| r.host_id.as_str(), |r, v| r.host_id = v),
    Field::id("interfaceid", |r| r.interface_id.as_str(), |r, v| r.interface_id = v).omit_empty(),
    Field::text("key_", |r| r.key.as_str(), |r, v| r.key = v),
    Field::text("name", |r| r.name.as_str(), |r, v| r.name = v),
    Field::code("type", |r| r.kind.0, |r, v| r.kind = ItemType(v)),
    Field::code("value_type", |r| r.value_type.0, |r, v| r.value_type = ValueType(v)),
    Field::code("data_type", |r| r.data_type.0, |r, v| r.data_type = DataType(v)),
    Field::code("delta", |r| r.delta.0, |r, v| r.delta = DeltaType(v)),
    Field::text("description", |r| r.description.as_str(), |r, v| r.description = v).omit_empty(),
    Field::text("error", |r| r.error.as_str(), |r, v| r.error = v).read_only(),
    Field::integer("history", |r| r.history, |r, v| r.history = v),
    Field::integer("trends", |r| r.trends, |r, v| r.trends = v),
    Field::code("status", |r| r.status.0, |r, v| r.status = Status(v)),
    Field::text("units", |r| r.units.as_str(), |r, v| r.units = v).omit_empty(),
    Field::ids(
        "applications",
        Some("applicationid"),
        |r| r.application_ids.as_slice(),
        |r, v| r.application_ids = v,
    ),
];

impl Record for Item {
    const KIND: &'static str = "item";
    const ID_FIELD: &'static str = "itemid";

    fn fields() -> &'static [FieldDef<Self>] { FIELDS }

    fn id(&self) -> &str { &self.item_id }

    fn set_id(&mut self, id: String) { self.item_id = id }
}

impl Item {
    /// A new, not yet created item with the server defaults for retention
    /// (90 days of history, 365 days of trends).
    pub fn new(host_id: impl Into<String>, name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            host_id: host_id.into(),
            name: name.into(),
            key: key.into(),
            delay: 30,
            history: 90,
            trends: 365,
            ..Self::default()
        }
    }
}
