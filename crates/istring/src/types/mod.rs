//! Value types passed into message formatting.

mod mapping;
mod reference;

pub use mapping::ToStringMap;
pub use reference::Reference;
