pub mod kv;
pub mod profile;
