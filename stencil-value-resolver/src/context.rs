use crate::scope::Scope;

/// Everything one render pass needs to resolve a tag's arguments:
/// the lexical variable scope at the tag's position and the ambient
/// context scope (current iteration item, index and friends).
///
/// Built fresh per render pass; the resolver only ever reads from it.
pub struct ResolverCtx<'frame> {
    pub(crate) lexical: &'frame dyn Scope,
    pub(crate) context: &'frame dyn Scope,
}

impl<'frame> ResolverCtx<'frame> {
    pub fn new(lexical: &'frame dyn Scope, context: &'frame dyn Scope) -> Self {
        Self { lexical, context }
    }
}
