mod cell;
mod cluster_finder;
mod color;
mod encoder;
mod error;
mod grid;
mod report;

pub mod prelude {
    pub use crate::cell::*;
    pub use crate::cluster_finder::*;
    pub use crate::color::*;
    pub use crate::encoder::*;
    pub use crate::error::*;
    pub use crate::grid::*;
    pub use crate::report::*;
}
