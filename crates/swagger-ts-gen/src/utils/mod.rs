pub mod refs;
pub mod spec;

pub(crate) use refs::parse_definition_ref;
