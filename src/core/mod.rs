pub mod etl;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod sanitize;

pub use crate::domain::model::{
    ConferenceSeries, GenerationReport, RawConference, RenderedPage, YearInstance,
};
pub use crate::domain::ports::{ConfigProvider, NormalizedFeed, Pipeline, Storage};
pub use crate::utils::error::Result;
