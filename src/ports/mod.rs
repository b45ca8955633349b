mod comparator;
mod image_store;

pub use comparator::Comparator;
pub use image_store::ImageStore;
