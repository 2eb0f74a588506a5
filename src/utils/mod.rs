pub mod legend;
pub mod report;
