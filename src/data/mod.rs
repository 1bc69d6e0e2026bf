//! Data module - Plot requests and the request buffer

mod model;
mod request;

pub use model::PlotModel;
pub use request::{
    fallible, Fallible, Function, FunctionPlot, FunctionRequest, PointsPlot, PointsRequest,
    Style, TrendLine,
};
