mod memory_file_store;

pub use memory_file_store::InMemoryFileStore;
