pub mod metadata;
pub mod raw;

pub use metadata::{load_video_parameters, MetadataFile};
pub use raw::{RawFilePool, RawPoolOptions};
