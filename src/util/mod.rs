pub mod assets;
pub mod format;
pub mod persistence;
pub mod version;

pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}
