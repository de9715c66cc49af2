use logrero::decoder::{decode_entry, encode_entry};
use logrero::domain::LogEntry;
use logrero::error::DecodeError;
use proptest::prelude::*;

// Values without quotes, backslashes or control characters survive the
// sender's double encoding.
const SAFE_VALUE: &str = "[a-zA-Z0-9 ._:/=@,;()-]{0,24}";

fn arb_entry() -> impl Strategy<Value = LogEntry> {
    (
        (SAFE_VALUE, "[0-7]", SAFE_VALUE, SAFE_VALUE),
        (SAFE_VALUE, SAFE_VALUE, "[0-9]{0,5}", SAFE_VALUE),
        (SAFE_VALUE, SAFE_VALUE, SAFE_VALUE, SAFE_VALUE),
        (SAFE_VALUE, SAFE_VALUE, "[0-9]{16}"),
    )
        .prop_map(
            |(
                (message, priority, syslog_identifier, hostname),
                (code_file, code_func, code_line, cmdline),
                (systemd_unit, systemd_cgroup, boot_id, transport),
                (exe, comm, source_realtime_timestamp),
            )| LogEntry {
                message,
                priority,
                syslog_identifier,
                hostname,
                code_file,
                code_func,
                code_line,
                cmdline,
                systemd_unit,
                systemd_cgroup,
                boot_id,
                transport,
                exe,
                comm,
                source_realtime_timestamp,
                ..Default::default()
            },
        )
}

proptest! {
    #[test]
    fn sender_encoding_round_trips(entry in arb_entry()) {
        let wire = encode_entry(&entry).unwrap();
        let decoded = decode_entry(&wire).unwrap();
        prop_assert_eq!(decoded, entry);
    }

    #[test]
    fn decoding_is_pure(entry in arb_entry()) {
        let wire = encode_entry(&entry).unwrap();
        let first = decode_entry(&wire).unwrap();
        let second = decode_entry(&wire).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unescaped_json_with_any_framing_decodes(
        message in SAFE_VALUE,
        open in any::<u8>(),
        close in any::<u8>(),
    ) {
        let inner = serde_json::to_vec(&serde_json::json!({ "message": message })).unwrap();
        let mut raw = Vec::with_capacity(inner.len() + 2);
        raw.push(open);
        raw.extend_from_slice(&inner);
        raw.push(close);

        let entry = decode_entry(&raw).unwrap();
        prop_assert_eq!(entry.message, message);
    }

    #[test]
    fn arbitrary_bytes_never_panic(raw in proptest::collection::vec(any::<u8>(), 0..64)) {
        match decode_entry(&raw) {
            Ok(_) => {}
            Err(DecodeError::TooShort { len }) => prop_assert!(len < 2),
            Err(_) => prop_assert!(raw.len() >= 2),
        }
    }
}
