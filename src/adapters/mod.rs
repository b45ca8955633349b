pub mod comparator_process;
pub mod image_filesystem;

pub use comparator_process::ProcessComparator;
pub use image_filesystem::FilesystemImageStore;
