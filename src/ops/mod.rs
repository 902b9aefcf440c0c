pub mod selection;
pub mod suggest;

pub use selection::{SelectionController, SelectionError};
