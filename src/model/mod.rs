pub mod category;
pub mod config;
pub mod selection;
pub mod step;
pub mod suggestion;
pub mod word_count;

pub use category::*;
pub use config::*;
pub use selection::*;
pub use step::*;
pub use suggestion::*;
pub use word_count::*;
