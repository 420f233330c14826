pub mod histogram_report;
pub mod image_store;
pub mod pixel_stream;
pub mod processor;

pub use histogram_report::{ChannelPeaks, HistogramReport};
pub use image_store::ImageStore;
pub use pixel_stream::PixelStream;
pub use processor::ImageProcessor;
