pub mod collect;
pub mod entity;
pub mod overrides;
pub mod source;
