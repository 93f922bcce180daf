/// UI layer: panel composition, chart widgets, and the roster table.

pub mod charts;
pub mod panels;
pub mod table;
