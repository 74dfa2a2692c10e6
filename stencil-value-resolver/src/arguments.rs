use std::collections::HashMap;
use std::rc::Rc;

use stencil_templates::{ArgKey, Bindings, Parameters};

use crate::context::ResolverCtx;
use crate::value::Value;

/// Resolve every binding in the table into a concrete value.
///
/// Dispatch per binding:
/// * no placeholder: the parameter's default, no scope lookup
/// * `@path`: the context scope
/// * `_text`: the literal string `text`, no scope lookup
/// * anything else: the lexical scope
///
/// Scope misses degrade to null rather than an error; templating
/// renders nothing for unknown variables instead of aborting.
/// Resolution never mutates either scope and the result always
/// holds exactly one entry per binding.
pub fn resolve(params: &Parameters, bindings: &Bindings, ctx: &ResolverCtx<'_>) -> Arguments {
    let mut resolved = HashMap::with_capacity(bindings.len());

    for (id, key) in bindings.iter() {
        let param = params.get(id).expect("a bound parameter is always in the arena");

        let value = match key {
            ArgKey::Default => Value::from(param.default.clone()),
            ArgKey::Context(path) => ctx.context.find(path).unwrap_or(Value::Null),
            ArgKey::Literal(text) => Value::Str(text.clone()),
            ArgKey::Ident(name) => ctx.lexical.find(name).unwrap_or(Value::Null),
        };

        resolved.insert(param.name.clone(), value);
    }

    Arguments(resolved)
}

/// The arguments for one render of one tag, keyed by parameter name.
///
/// Produced fresh by every [`resolve`] call and discarded once the
/// tag has consumed it; scopes differ between renders so the map is
/// never cached.
#[derive(Debug, PartialEq)]
pub struct Arguments(HashMap<Rc<str>, Value>);

impl Arguments {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Typed read of a single argument
    pub fn get_as<'a, T>(&'a self, name: &str) -> Option<T>
    where
        T: TryFrom<&'a Value>,
    {
        self.0.get(name).and_then(|val| val.try_into().ok())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.0.iter().map(|(name, value)| (&**name, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
