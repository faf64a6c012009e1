/// All database primary keys are SQLite rowids.
pub type DbId = i64;
