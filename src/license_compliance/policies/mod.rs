mod attribute_priority;

pub use attribute_priority::AttributePriority;
