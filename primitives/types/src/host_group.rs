use normalization::{FieldDef, Record};

use crate::codes::GroupInternal;

/// A host group (`hostgroup`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostGroup {
    /// `groupid`
    pub group_id: String,
    /// `name`
    pub name: String,
    /// `internal` (read-only)
    pub internal: GroupInternal,
}

type Field = FieldDef<HostGroup>;

static FIELDS: &[Field] = &[
    Field::id("groupid", |r| r.group_id.as_str(), |r, v| r.group_id = v).omit_empty(),
    Field::text("name", |r| r.name.as_str(), |r, v| r.name = v),
    Field::code("internal", |r| r.internal.0, |r, v| r.internal = GroupInternal(v)).read_only(),
];

impl Record for HostGroup {
    const KIND: &'static str = "hostgroup";
    const ID_FIELD: &'static str = "groupid";

    fn fields() -> &'static [FieldDef<Self>] { FIELDS }

    fn id(&self) -> &str { &self.group_id }

    fn set_id(&mut self, id: String) { self.group_id = id }
}

impl HostGroup {
    /// A new, not yet created group.
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into(), ..Self::default() } }
}

#[cfg(test)]
mod tests {
    use normalization::{encode_record, normalize, Collection, Encoding};
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn test_decode_and_create_payload() {
        let raw = json!([{"groupid": "5", "name": "Discovered hosts", "internal": "1"}]);
        let groups: Collection<HostGroup> = normalize(&raw).expect("decodes");
        assert_eq!(groups[0].internal, GroupInternal::INTERNAL);

        let payload = Value::Object(encode_record(&HostGroup::new("Linux servers"), Encoding::Writable));
        assert_eq!(payload, json!({"name": "Linux servers"}));
    }
}
