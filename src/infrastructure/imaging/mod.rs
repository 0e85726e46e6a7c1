mod http_image_fetcher;
mod pollinations_image_generator;
mod raster_image_codec;

pub use http_image_fetcher::HttpImageFetcher;
pub use pollinations_image_generator::{DEFAULT_IMAGE_SIZE, PollinationsImageGenerator};
pub use raster_image_codec::RasterImageCodec;
