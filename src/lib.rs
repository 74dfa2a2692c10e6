pub use {
    stencil_debug as debug,                 // debug
    stencil_store as store,                 // store
    stencil_templates as templates,         // templates
    stencil_value_resolver as resolver,     // resolver
};

pub mod prelude {
    pub use crate::resolver::{resolve, Arguments, ResolverCtx, Scope, ScopeChain, Value};
    pub use crate::templates::{ArgKey, Bindings, ParamId, Parameters, Primitive, TagParameter};
}
