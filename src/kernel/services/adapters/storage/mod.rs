//! Storage adapters implementing [`TextObjectStorage`](crate::kernel::services::ports::TextObjectStorage).

pub mod local;
pub mod memory;

pub use local::LocalStorage;
pub use memory::MemoryStorage;

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
