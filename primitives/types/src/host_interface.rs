use normalization::{FieldDef, Record};

use crate::codes::{InterfaceMain, InterfaceType, UseIp};

/// A network interface of a host (`hostinterface`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInterface {
    /// `interfaceid`, empty until created.
    pub interface_id: String,
    /// `hostid` of the owning host. Left empty when the interface is
    /// created as part of its host.
    pub host_id: String,
    /// `dns`
    pub dns: String,
    /// `ip`
    pub ip: String,
    /// `main`
    pub main: InterfaceMain,
    /// `port`, kept as text since it may hold a user macro.
    pub port: String,
    /// `type`
    pub kind: InterfaceType,
    /// `useip`
    pub use_ip: UseIp,
}

type Field = FieldDef<HostInterface>;

static FIELDS: &[Field] = &[
    Field::id("interfaceid", |r| r.interface_id.as_str(), |r, v| r.interface_id = v).omit_empty(),
    Field::id("hostid", |r| r.host_id.as_str(), |r, v| r.host_id = v).omit_empty(),
    Field::text("dns", |r| r.dns.as_str(), |r, v| r.dns = v),
    Field::text("ip", |r| r.ip.as_str(), |r, v| r.ip = v),
    Field::code("main", |r| r.main.0, |r, v| r.main = InterfaceMain(v)),
    Field::text("port", |r| r.port.as_str(), |r, v| r.port = v),
    Field::code("type", |r| r.kind.0, |r, v| r.kind = InterfaceType(v)),
    Field::code("useip", |r| r.use_ip.0, |r, v| r.use_ip = UseIp(v)),
];

impl Record for HostInterface {
    const KIND: &'static str = "hostinterface";
    const ID_FIELD: &'static str = "interfaceid";

    fn fields() -> &'static [FieldDef<Self>] { FIELDS }

    fn id(&self) -> &str { &self.interface_id }

    fn set_id(&mut self, id: String) { self.interface_id = id }
}

impl HostInterface {
    /// Default agent interface reachable by IP on port 10050.
    pub fn agent(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            main: InterfaceMain::DEFAULT,
            port: "10050".to_string(),
            kind: InterfaceType::AGENT,
            use_ip: UseIp::IP,
            ..Self::default()
        }
    }
}
