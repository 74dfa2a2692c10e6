use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use stencil_debug::DebugWriter;

use crate::error::{Error, Result};
use crate::params::{ParamId, Parameters};

/// How a bound argument finds its value at render time.
///
/// The raw placeholder is parsed once, when the binding is made,
/// so render passes dispatch on the variant instead of re-reading
/// the sigil. Exactly one leading sigil character is consumed and
/// the remainder is kept verbatim: there is no escape mechanism,
/// so a literal can not itself start with `@` or `_`.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgKey {
    /// No placeholder was given: the parameter resolves to its default
    Default,
    /// `@name`: look up `name` in the ambient context scope
    Context(Rc<str>),
    /// `_text`: the literal string `text`, no lookup at all
    Literal(Rc<str>),
    /// Anything else: look up the placeholder in the lexical scope
    Ident(Rc<str>),
}

impl ArgKey {
    pub(crate) fn from_raw(key: Option<&str>) -> Self {
        let Some(key) = key else { return Self::Default };

        // An empty placeholder is not an absent one: it still
        // dispatches as a lexical lookup
        if let Some(path) = key.strip_prefix('@') {
            return Self::Context(path.into());
        }
        if let Some(text) = key.strip_prefix('_') {
            return Self::Literal(text.into());
        }
        Self::Ident(key.into())
    }

    /// Reconstruct the raw placeholder text.
    /// A default binding has no placeholder.
    pub fn to_raw(&self) -> Option<String> {
        match self {
            Self::Default => None,
            Self::Context(path) => Some(format!("@{path}")),
            Self::Literal(text) => Some(format!("_{text}")),
            Self::Ident(name) => Some(name.to_string()),
        }
    }
}

impl Display for ArgKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "<default>"),
            Self::Context(path) => write!(f, "@{path}"),
            Self::Literal(text) => write!(f, "_{text}"),
            Self::Ident(name) => write!(f, "{name}"),
        }
    }
}

/// Associates each declared parameter with its argument placeholder.
///
/// Built once per tag instance at parse time, read-only afterwards.
/// The same bindings are resolved once per render pass, against
/// whatever scopes are active at that point.
#[derive(Debug)]
pub struct Bindings(Vec<(ParamId, ArgKey)>);

impl Bindings {
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Bind `param` to a raw placeholder.
    ///
    /// `None` records that the parameter resolves to its default value.
    /// Binding the same parameter twice is a parser bug and fails
    /// immediately, leaving the first binding intact.
    pub fn bind(&mut self, param: ParamId, key: Option<&str>) -> Result<()> {
        if self.0.iter().any(|(id, _)| *id == param) {
            return Err(Error::DuplicateBinding(param));
        }
        self.0.push((param, ArgKey::from_raw(key)));
        Ok(())
    }

    /// The tagged key for a parameter, if it was bound
    pub fn key(&self, param: ParamId) -> Option<&ArgKey> {
        self.0.iter().find_map(|(id, key)| (*id == param).then_some(key))
    }

    /// The raw placeholder a parameter was bound with.
    ///
    /// `None` when the parameter was never bound, or was bound
    /// without a placeholder.
    pub fn raw_key(&self, param: ParamId) -> Option<String> {
        self.key(param)?.to_raw()
    }

    /// Snapshot of parameter name to raw placeholder, for diagnostics.
    /// Default-bound parameters map to `None`.
    pub fn raw_bindings(&self, params: &Parameters) -> HashMap<Rc<str>, Option<String>> {
        self.0
            .iter()
            .map(|(id, key)| {
                let param = params.get(*id).expect("a bound parameter is always in the arena");
                (param.name.clone(), key.to_raw())
            })
            .collect()
    }

    /// Iterator over the bindings, in binding order
    pub fn iter(&self) -> impl Iterator<Item = (ParamId, &ArgKey)> + '_ {
        self.0.iter().map(|(id, key)| (*id, key))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Dumps the binder's name to placeholder table
pub struct BindingsDebug<'a> {
    pub params: &'a Parameters,
    pub bindings: &'a Bindings,
}

impl DebugWriter for BindingsDebug<'_> {
    fn write(&mut self, output: &mut impl fmt::Write) -> fmt::Result {
        for (id, key) in self.bindings.iter() {
            let param = self
                .params
                .get(id)
                .expect("a bound parameter is always in the arena");
            writeln!(output, "{} <- {key}", param.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use stencil_debug::Debug;

    use super::*;
    use crate::params::TagParameter;

    #[test]
    fn parse_raw_keys() {
        assert_eq!(ArgKey::from_raw(None), ArgKey::Default);
        assert_eq!(ArgKey::from_raw(Some("@index")), ArgKey::Context("index".into()));
        assert_eq!(ArgKey::from_raw(Some("_row")), ArgKey::Literal("row".into()));
        assert_eq!(ArgKey::from_raw(Some("name")), ArgKey::Ident("name".into()));
    }

    #[test]
    fn one_sigil_char_is_stripped() {
        assert_eq!(ArgKey::from_raw(Some("@")), ArgKey::Context("".into()));
        assert_eq!(ArgKey::from_raw(Some("_")), ArgKey::Literal("".into()));
        assert_eq!(ArgKey::from_raw(Some("__x")), ArgKey::Literal("_x".into()));
        assert_eq!(ArgKey::from_raw(Some("_@x")), ArgKey::Literal("@x".into()));
    }

    #[test]
    fn empty_key_is_not_absent() {
        assert_eq!(ArgKey::from_raw(Some("")), ArgKey::Ident("".into()));
    }

    #[test]
    fn to_raw_round_trip() {
        for raw in ["@index", "_row", "name", "", "@", "_", "__x"] {
            let key = ArgKey::from_raw(Some(raw));
            assert_eq!(key.to_raw().as_deref(), Some(raw));
        }
        assert_eq!(ArgKey::Default.to_raw(), None);
    }

    #[test]
    fn duplicate_binding() {
        let mut params = Parameters::new();
        let count = params.declare(TagParameter::new("count"));

        let mut bindings = Bindings::new();
        bindings.bind(count, Some("@index")).unwrap();

        let err = bindings.bind(count, Some("other")).unwrap_err();
        assert_eq!(err, Error::DuplicateBinding(count));

        // The first binding survives the failed rebind
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.raw_key(count).as_deref(), Some("@index"));
    }

    #[test]
    fn key_for_unbound_parameter() {
        let mut params = Parameters::new();
        let bound = params.declare(TagParameter::new("bound"));
        let unbound = params.declare(TagParameter::new("unbound"));
        let defaulted = params.declare(TagParameter::new("defaulted"));

        let mut bindings = Bindings::new();
        bindings.bind(bound, Some("value")).unwrap();
        bindings.bind(defaulted, None).unwrap();

        assert_eq!(bindings.raw_key(bound).as_deref(), Some("value"));
        assert_eq!(bindings.raw_key(unbound), None);
        assert_eq!(bindings.raw_key(defaulted), None);

        assert_eq!(bindings.key(unbound), None);
        assert_eq!(bindings.key(defaulted), Some(&ArgKey::Default));
    }

    #[test]
    fn raw_bindings_snapshot() {
        let mut params = Parameters::new();
        let count = params.declare(TagParameter::new("count"));
        let label = params.declare(TagParameter::new("label"));
        let sep = params.declare(TagParameter::new("sep"));

        let mut bindings = Bindings::new();
        bindings.bind(count, Some("@index")).unwrap();
        bindings.bind(label, Some("_row")).unwrap();
        bindings.bind(sep, None).unwrap();

        let raw = bindings.raw_bindings(&params);
        assert_eq!(raw.len(), 3);
        assert_eq!(raw["count"].as_deref(), Some("@index"));
        assert_eq!(raw["label"].as_deref(), Some("_row"));
        assert_eq!(raw["sep"], None);
    }

    #[test]
    fn debug_dump() {
        let mut params = Parameters::new();
        let count = params.declare(TagParameter::new("count"));
        let sep = params.declare(TagParameter::new("sep"));

        let mut bindings = Bindings::new();
        bindings.bind(count, Some("@index")).unwrap();
        bindings.bind(sep, None).unwrap();

        let output = Debug::new(String::new())
            .debug("bindings", BindingsDebug {
                params: &params,
                bindings: &bindings,
            })
            .finish();

        assert_eq!(output, "--- bindings ---\ncount <- @index\nsep <- <default>\n");
    }
}
