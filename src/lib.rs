pub mod extraction;
pub mod forms;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use pipeline::{FillResult, FormFillPipeline};
