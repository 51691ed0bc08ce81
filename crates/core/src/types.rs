/// All record identifiers are store-assigned UUIDs.
pub type RecordId = uuid::Uuid;
