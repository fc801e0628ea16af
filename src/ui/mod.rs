pub mod view_size;

pub use view_size::{ViewSizeError, ViewSizeListener, ViewSizeRegistry};
