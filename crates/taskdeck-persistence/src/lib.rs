pub mod json_file;
pub mod memory;

pub use json_file::JsonFileTaskRepository;
pub use memory::MemoryTaskRepository;
