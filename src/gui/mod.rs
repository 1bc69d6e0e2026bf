//! GUI module - Window and chart widget

mod app;
mod chart_viewer;
mod icon;

pub use app::ChartApp;
pub use chart_viewer::ChartViewer;
pub use icon::load_icon;
