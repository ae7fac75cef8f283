pub mod attribute_value;
pub mod diagnostics;
pub mod lifecycle;
pub mod managed_resource;
