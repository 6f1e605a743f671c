pub mod chart_plotly;
pub mod controls;
pub mod data_display;
pub mod header;
