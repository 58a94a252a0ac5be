pub mod charts;
pub mod dataset;
pub mod health;
pub mod page;
