mod measure;
mod placement;
mod render;
mod view;


pub use measure::TerminalMeasure;
pub use placement::{horizontal_placements, orp_position, vertical_placements, Placement};
pub use view::PacerView;
