// Adapters layer: concrete implementations of the domain ports.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;
