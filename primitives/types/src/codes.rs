//! Enumerated codes.
//!
//! The API transmits every enumeration as an integer (sometimes quoted). Each
//! semantic domain gets its own newtype so a trigger severity cannot be
//! passed where a host status is expected. Values the API adds in later
//! versions pass through unchanged; they simply have no [`name`].
//!
//! [`name`]: Severity::name

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

macro_rules! codes {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$cmeta:meta])* $konst:ident = $value:expr, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            $( $(#[$cmeta])* pub const $konst: $name = $name($value); )+

            /// Every named value of the domain.
            pub const ALL: &'static [$name] = &[$( $name::$konst ),+];

            /// Raw integer value.
            pub const fn value(self) -> i32 { self.0 }

            /// Constant name for a known value, `None` for a value this
            /// version of the crate does not know about.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $( v if v == $value => Some(stringify!($konst)), )+
                    _ => None,
                }
            }

            /// Returns `true` for a named value.
            pub fn is_known(self) -> bool { self.name().is_some() }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self { Self(value) }
        }

        impl From<$name> for i32 {
            fn from(code: $name) -> Self { code.0 }
        }

        impl From<$name> for Value {
            fn from(code: $name) -> Self { Value::from(code.0) }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{}", name),
                    None => write!(f, "{}({})", stringify!($name), self.0),
                }
            }
        }
    };
}

codes! {
    /// Host interface `type`.
    InterfaceType {
        /// Zabbix agent.
        AGENT = 1,
        /// SNMP.
        SNMP = 2,
        /// IPMI.
        IPMI = 3,
        /// JMX.
        JMX = 4,
    }
}

codes! {
    /// Host interface `main`: whether it is the default interface of its type.
    InterfaceMain {
        /// Secondary interface.
        NOT_DEFAULT = 0,
        /// Default interface.
        DEFAULT = 1,
    }
}

codes! {
    /// Host interface `useip`: connect by DNS name or by IP address.
    UseIp {
        /// Connect using the `dns` field.
        DNS = 0,
        /// Connect using the `ip` field.
        IP = 1,
    }
}

codes! {
    /// Trigger `type`: whether it generates one event or one per evaluation.
    EvaluationMode {
        /// Generate a single event.
        SINGLE_EVENT = 0,
        /// Generate multiple events.
        MULTIPLE_EVENTS = 1,
    }
}

codes! {
    /// Trigger `flags` (read-only).
    TriggerFlags {
        /// A plain trigger.
        PLAIN = 0,
        /// A trigger created by low-level discovery.
        DISCOVERED = 4,
    }
}

codes! {
    /// Trigger `priority`.
    Severity {
        /// Not classified.
        NOT_CLASSIFIED = 0,
        /// Information.
        INFORMATION = 1,
        /// Warning.
        WARNING = 2,
        /// Average.
        AVERAGE = 3,
        /// High.
        HIGH = 4,
        /// Disaster.
        DISASTER = 5,
    }
}

codes! {
    /// Enabled/disabled status of triggers and items.
    Status {
        /// Enabled.
        ENABLED = 0,
        /// Disabled.
        DISABLED = 1,
    }
}

codes! {
    /// Host `status`.
    HostStatus {
        /// Monitored host.
        MONITORED = 0,
        /// Unmonitored host.
        UNMONITORED = 1,
        /// Template.
        TEMPLATE = 3,
    }
}

codes! {
    /// Host `available` (read-only).
    HostAvailability {
        /// Unknown.
        UNKNOWN = 0,
        /// Available.
        AVAILABLE = 1,
        /// Unavailable.
        UNAVAILABLE = 2,
    }
}

codes! {
    /// Trigger `value` (read-only).
    TriggerValue {
        /// OK.
        OK = 0,
        /// Problem.
        PROBLEM = 1,
        /// Unknown.
        UNKNOWN = 2,
    }
}

codes! {
    /// Trigger `value_flags` (read-only).
    ValueFlags {
        /// Value is up to date.
        UP_TO_DATE = 0,
        /// Value is unknown.
        UNKNOWN = 1,
    }
}

codes! {
    /// Item `type`.
    ItemType {
        /// Zabbix agent.
        ZABBIX_AGENT = 0,
        /// SNMPv1 agent.
        SNMP_V1 = 1,
        /// Zabbix trapper.
        TRAPPER = 2,
        /// Simple check.
        SIMPLE_CHECK = 3,
        /// SNMPv2 agent.
        SNMP_V2C = 4,
        /// Zabbix internal.
        INTERNAL = 5,
        /// SNMPv3 agent.
        SNMP_V3 = 6,
        /// Zabbix agent (active).
        ZABBIX_AGENT_ACTIVE = 7,
        /// Zabbix aggregate.
        AGGREGATE = 8,
        /// Web item.
        WEB = 9,
        /// External check.
        EXTERNAL = 10,
        /// Database monitor.
        DATABASE_MONITOR = 11,
        /// IPMI agent.
        IPMI = 12,
        /// SSH agent.
        SSH = 13,
        /// Telnet agent.
        TELNET = 14,
        /// Calculated.
        CALCULATED = 15,
        /// JMX agent.
        JMX = 16,
        /// SNMP trap.
        SNMP_TRAP = 17,
    }
}

codes! {
    /// Item `value_type`.
    ValueType {
        /// Numeric float.
        FLOAT = 0,
        /// Character.
        CHARACTER = 1,
        /// Log.
        LOG = 2,
        /// Numeric unsigned.
        UNSIGNED = 3,
        /// Text.
        TEXT = 4,
    }
}

codes! {
    /// Item `data_type` of unsigned numeric values.
    DataType {
        /// Decimal.
        DECIMAL = 0,
        /// Octal.
        OCTAL = 1,
        /// Hexadecimal.
        HEXADECIMAL = 2,
        /// Boolean.
        BOOLEAN = 3,
    }
}

codes! {
    /// Item `delta`: how consecutive values are combined before storage.
    DeltaType {
        /// Store as is.
        AS_IS = 0,
        /// Store the change per second.
        SPEED_PER_SECOND = 1,
        /// Store the simple change.
        SIMPLE_CHANGE = 2,
    }
}

codes! {
    /// Host group `internal` (read-only).
    GroupInternal {
        /// Regular group.
        NOT_INTERNAL = 0,
        /// Internal group, cannot be deleted.
        INTERNAL = 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_have_names() {
        assert_eq!(Severity::HIGH.name(), Some("HIGH"));
        assert_eq!(Severity::from(4), Severity::HIGH);
        assert_eq!(ItemType::SNMP_TRAP.value(), 17);
        assert_eq!(TriggerFlags::DISCOVERED.to_string(), "DISCOVERED");
        assert_eq!(Severity::ALL.len(), 6);
    }

    #[test]
    fn test_unknown_values_pass_through() {
        let status = HostStatus::from(2);
        assert!(!status.is_known());
        assert_eq!(status.name(), None);
        assert_eq!(i32::from(status), 2);
        assert_eq!(status.to_string(), "HostStatus(2)");
    }

    #[test]
    fn test_domains_are_distinct() {
        // Same integer, different meaning per domain.
        assert_eq!(Status::DISABLED.name(), Some("DISABLED"));
        assert_eq!(HostStatus::UNMONITORED.name(), Some("UNMONITORED"));
        assert_eq!(Status::default(), Status::ENABLED);
    }

    #[test]
    fn test_json_representation() {
        assert_eq!(Value::from(Severity::DISASTER), Value::from(5));
        let parsed: Severity = serde_json::from_str("3").expect("integer code");
        assert_eq!(parsed, Severity::AVERAGE);
        assert_eq!(serde_json::to_string(&UseIp::IP).expect("serializes"), "1");
    }
}
