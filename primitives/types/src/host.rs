use normalization::{decode_nested, encode_nested, FieldDef, Record};

use crate::codes::{HostAvailability, HostStatus};
use crate::host_interface::HostInterface;

/// A monitored host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Host {
    /// `hostid`
    pub host_id: String,
    /// `host`: technical name.
    pub host: String,
    /// `name`: visible name, defaults to `host` on the server side.
    pub name: String,
    /// `status`
    pub status: HostStatus,
    /// `available` (read-only)
    pub available: HostAvailability,
    /// `error` (read-only)
    pub error: String,
    /// `groups`: identifiers of the host groups the host belongs to.
    pub group_ids: Vec<String>,
    /// `interfaces`
    pub interfaces: Vec<HostInterface>,
}

type Field = FieldDef<Host>;

static FIELDS: &[Field] = &[
    Field::id("hostid", |r| r.host_id.as_str(), |r, v| r.host_id = v).omit_empty(),
    Field::text("host", |r| r.host.as_str(), |r, v| r.host = v),
    Field::text("name", |r| r.name.as_str(), |r, v| r.name = v).omit_empty(),
    Field::code("status", |r| r.status.0, |r, v| r.status = HostStatus(v)),
    Field::code("available", |r| r.available.0, |r, v| r.available = HostAvailability(v))
        .read_only(),
    Field::text("error", |r| r.error.as_str(), |r, v| r.error = v).read_only(),
    Field::refs("groups", "groupid", |r| r.group_ids.as_slice(), |r, v| r.group_ids = v),
    Field::nested(
        "interfaces",
        |r, writable| encode_nested(&r.interfaces, writable),
        |r, raw, path| {
            r.interfaces = decode_nested(raw, path)?;
            Ok(())
        },
    ),
];

impl Record for Host {
    const KIND: &'static str = "host";
    const ID_FIELD: &'static str = "hostid";

    fn fields() -> &'static [FieldDef<Self>] { FIELDS }

    fn id(&self) -> &str { &self.host_id }

    fn set_id(&mut self, id: String) { self.host_id = id }
}

impl Host {
    /// A new, not yet created host in the given groups.
    pub fn new(host: impl Into<String>, group_ids: Vec<String>) -> Self {
        Self { host: host.into(), group_ids, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use normalization::{encode_record, normalize, Collection, Encoding};
    use serde_json::{json, Value};

    use super::*;
    use crate::codes::{InterfaceType, UseIp};

    #[test]
    fn test_decode_with_selected_groups_and_interfaces() {
        let raw = json!([{
            "hostid": "10084",
            "host": "Zabbix server",
            "name": "Zabbix server",
            "status": "0",
            "available": "1",
            "error": "",
            "groups": [{"groupid": "4", "name": "Zabbix servers"}],
            "interfaces": {
                "1": {"interfaceid": "1", "hostid": "10084", "ip": "127.0.0.1", "port": "10050",
                      "type": "1", "main": "1", "useip": "1", "dns": ""}
            }
        }]);
        let hosts: Collection<Host> = normalize(&raw).expect("decodes");
        let host = &hosts[0];
        assert_eq!(host.status, HostStatus::MONITORED);
        assert_eq!(host.available, HostAvailability::AVAILABLE);
        assert_eq!(host.group_ids, vec!["4"]);
        assert_eq!(host.interfaces.len(), 1);
        assert_eq!(host.interfaces[0].kind, InterfaceType::AGENT);
        assert_eq!(host.interfaces[0].use_ip, UseIp::IP);
    }

    #[test]
    fn test_create_payload() {
        let mut host = Host::new("web-01", vec!["2".to_string()]);
        host.interfaces.push(HostInterface::agent("192.168.3.1"));
        let payload = Value::Object(encode_record(&host, Encoding::Writable));
        assert_eq!(
            payload,
            json!({
                "host": "web-01",
                "status": 0,
                "groups": [{"groupid": "2"}],
                "interfaces": [{
                    "dns": "", "ip": "192.168.3.1", "main": 1, "port": "10050", "type": 1, "useip": 1
                }]
            })
        );
    }

    #[test]
    fn test_interface_error_path() {
        let raw = json!([{"hostid": "1", "interfaces": [{"type": "agent"}]}]);
        let err = normalize::<Host>(&raw).expect_err("type is a code");
        assert!(err.to_string().contains("interfaces[0].type"), "{}", err);
    }
}
