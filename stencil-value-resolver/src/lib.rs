pub use crate::arguments::{resolve, Arguments};
pub use crate::context::ResolverCtx;
pub use crate::scope::{Scope, ScopeChain};
pub use crate::value::Value;

mod arguments;
mod context;
mod scope;
mod value;

#[cfg(test)]
pub(crate) mod testing;
