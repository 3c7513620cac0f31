pub mod context;

pub use context::{ChartContext, RenderedChart};
