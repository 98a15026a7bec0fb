pub mod geometry;
pub mod index;
pub mod types;

pub use geometry::{TrackProjection, project_track};
pub use index::{next_index, previous_index, wrap_index};
pub use types::SlideItem;
