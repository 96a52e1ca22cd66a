pub mod kv_store;
pub mod snapshots;

pub use kv_store::KvEntry;
