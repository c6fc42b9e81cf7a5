mod model;
pub use model::*;

mod view;
pub use view::SensoryTracker;
