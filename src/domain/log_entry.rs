use serde::{Deserialize, Deserializer, Serialize};

/// One journal record shipped by a device.
///
/// Every field is carried as an opaque string. Keys missing from the payload
/// (or sent as `null`) become empty strings, and keys outside this list are
/// dropped on decode. Field names follow the journal export with the leading
/// underscore kept for trusted fields.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct LogEntry {
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub priority: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub syslog_facility: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub syslog_identifier: String,

    // Source location
    #[serde(deserialize_with = "null_as_empty")]
    pub code_file: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub code_func: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub code_line: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub tid: String,

    // Process and host
    #[serde(rename = "_pid", deserialize_with = "null_as_empty")]
    pub pid: String,
    #[serde(rename = "_uid", deserialize_with = "null_as_empty")]
    pub uid: String,
    #[serde(rename = "_gid", deserialize_with = "null_as_empty")]
    pub gid: String,
    #[serde(rename = "_comm", deserialize_with = "null_as_empty")]
    pub comm: String,
    #[serde(rename = "_exe", deserialize_with = "null_as_empty")]
    pub exe: String,
    #[serde(rename = "_cmdline", deserialize_with = "null_as_empty")]
    pub cmdline: String,
    #[serde(rename = "_hostname", deserialize_with = "null_as_empty")]
    pub hostname: String,
    #[serde(rename = "_machine_id", deserialize_with = "null_as_empty")]
    pub machine_id: String,
    #[serde(rename = "_boot_id", deserialize_with = "null_as_empty")]
    pub boot_id: String,
    #[serde(rename = "_transport", deserialize_with = "null_as_empty")]
    pub transport: String,

    // Session and cgroup
    #[serde(rename = "_audit_loginuid", deserialize_with = "null_as_empty")]
    pub audit_loginuid: String,
    #[serde(rename = "_audit_session", deserialize_with = "null_as_empty")]
    pub audit_session: String,
    #[serde(rename = "_systemd_cgroup", deserialize_with = "null_as_empty")]
    pub systemd_cgroup: String,
    #[serde(rename = "_systemd_slice", deserialize_with = "null_as_empty")]
    pub systemd_slice: String,
    #[serde(rename = "_systemd_unit", deserialize_with = "null_as_empty")]
    pub systemd_unit: String,
    #[serde(rename = "_systemd_user_slice", deserialize_with = "null_as_empty")]
    pub systemd_user_slice: String,
    #[serde(rename = "_systemd_user_unit", deserialize_with = "null_as_empty")]
    pub systemd_user_unit: String,
    #[serde(rename = "_systemd_owner_uid", deserialize_with = "null_as_empty")]
    pub systemd_owner_uid: String,
    #[serde(rename = "_runtime_scope", deserialize_with = "null_as_empty")]
    pub runtime_scope: String,
    #[serde(rename = "_cap_effective", deserialize_with = "null_as_empty")]
    pub cap_effective: String,

    /// Epoch microseconds, as sent.
    #[serde(
        rename = "_source_realtime_timestamp",
        deserialize_with = "null_as_empty"
    )]
    pub source_realtime_timestamp: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let entry: LogEntry = serde_json::from_str(r#"{"message":"hello"}"#).unwrap();
        assert_eq!(entry.message, "hello");
        assert_eq!(entry.priority, "");
        assert_eq!(entry.source_realtime_timestamp, "");
    }

    #[test]
    fn test_null_is_treated_as_absent() {
        let entry: LogEntry =
            serde_json::from_str(r#"{"message":null,"_pid":"42"}"#).unwrap();
        assert_eq!(entry.message, "");
        assert_eq!(entry.pid, "42");
    }

    #[test]
    fn test_trusted_fields_use_underscore_keys() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"_hostname":"edge-01","_systemd_unit":"sshd.service","hostname":"ignored"}"#,
        )
        .unwrap();
        assert_eq!(entry.hostname, "edge-01");
        assert_eq!(entry.systemd_unit, "sshd.service");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let entry: LogEntry =
            serde_json::from_str(r#"{"message":"m","__CURSOR":"s=abc","extra":{"a":1}}"#)
                .unwrap();
        assert_eq!(entry, LogEntry {
            message: "m".into(),
            ..Default::default()
        });
    }

    #[test]
    fn test_non_string_value_is_rejected() {
        let result = serde_json::from_str::<LogEntry>(r#"{"priority":6}"#);
        assert!(result.is_err());
    }
}
