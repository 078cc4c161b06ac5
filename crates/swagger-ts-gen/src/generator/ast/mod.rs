mod documentation;
mod imports;
mod models;
mod services;
mod tokens;

pub use documentation::Documentation;
pub(crate) use imports::{ANGULAR_CORE_MODULE, ANGULAR_HTTP_MODULE, RXJS_MODULE};
pub use imports::ImportSet;
pub use models::{InterfaceDef, ModelDef, ModelKind, PropertyDef, TypeAliasDef};
pub(crate) use services::{PAGEABLE_REQUEST_BODY, PAGEABLE_RESPONSE_BODY};
pub use services::{ArgumentDef, MethodDef, ParamLocation, ReturnKind, ServiceDef};
pub use tokens::TypeName;

#[cfg(test)]
mod tests;
