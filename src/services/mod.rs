pub mod discovery;
pub mod providers;
pub mod recommendations;
pub mod selection;

pub use recommendations::Recommender;
