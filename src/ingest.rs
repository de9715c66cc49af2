use crate::decoder::decode_entry;
use crate::domain::DeviceId;
use crate::error::IngestError;
use crate::port::LogStore;
use tracing::debug;

/// Decode a fully read request body and append it to the device's log.
///
/// Either the whole entry is stored or nothing is.
pub fn ingest(store: &dyn LogStore, device: DeviceId, raw: &[u8]) -> Result<(), IngestError> {
    let entry = decode_entry(raw)?;
    debug!(device = %device, priority = %entry.priority, "Appending log entry");
    store.append(device, entry);
    Ok(())
}
