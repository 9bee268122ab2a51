//! Command implementations

mod filters;
mod show;
mod vehicles;

pub use filters::filters;
pub use show::show;
pub use vehicles::vehicles;
