mod memory_image_store;

pub use fake_comparator::FakeComparator;
pub use memory_image_store::MemoryImageStore;
