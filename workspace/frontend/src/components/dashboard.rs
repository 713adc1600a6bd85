mod chart;
mod controls;
mod stats;
mod view;

pub use view::Dashboard;
