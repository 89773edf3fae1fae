use normalization::{FieldDef, Record};

/// An application: a named group of items on a host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Application {
    /// `applicationid`
    pub application_id: String,
    /// `hostid`
    pub host_id: String,
    /// `name`
    pub name: String,
    /// `templateid` (read-only)
    pub template_id: String,
}

type Field = FieldDef<Application>;

static FIELDS: &[Field] = &[
    Field::id("applicationid", |r| r.application_id.as_str(), |r, v| r.application_id = v)
        .omit_empty(),
    Field::id("hostid", |r| r.host_id.as_str(), |r, v| r.host_id = v),
    Field::text("name", |r| r.name.as_str(), |r, v| r.name = v),
    Field::id("templateid", |r| r.template_id.as_str(), |r, v| r.template_id = v).read_only(),
];

impl Record for Application {
    const KIND: &'static str = "application";
    const ID_FIELD: &'static str = "applicationid";

    fn fields() -> &'static [FieldDef<Self>] { FIELDS }

    fn id(&self) -> &str { &self.application_id }

    fn set_id(&mut self, id: String) { self.application_id = id }
}

impl Application {
    /// A new, not yet created application on `host_id`.
    pub fn new(host_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { host_id: host_id.into(), name: name.into(), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use normalization::{encode_record, normalize, Collection, Encoding};
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn test_round_trip() {
        let raw = json!([{"applicationid": 13, "hostid": "10084", "name": "CPU", "templateid": "0"}]);
        let apps: Collection<Application> = normalize(&raw).expect("decodes");
        assert_eq!(apps[0].application_id, "13");
        assert_eq!(apps[0].template_id, "0");

        let payload = Value::Object(encode_record(&Application::new("10084", "Memory"), Encoding::Writable));
        assert_eq!(payload, json!({"hostid": "10084", "name": "Memory"}));
    }
}
