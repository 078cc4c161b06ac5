pub mod definitions;
pub mod document;
pub mod node;

pub use definitions::{Definition, DefinitionTable};
pub use document::{HttpMethod, OperationEntry, SwaggerDocument};
pub use node::{PrimitiveKind, SchemaKind, SchemaNode};
