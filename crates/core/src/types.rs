/// All primary keys are storage-generated UUIDs.
pub type DbId = uuid::Uuid;
