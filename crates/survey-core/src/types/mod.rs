pub mod category;
pub mod collections;
pub mod identifiers;
pub mod severity;
