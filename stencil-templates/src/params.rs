use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use stencil_store::Slab;

use crate::primitives::Primitive;

/// A formal parameter declared on a tag.
///
/// The default value is used when the parameter is bound
/// without a placeholder. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct TagParameter {
    pub name: Rc<str>,
    pub default: Primitive,
}

impl TagParameter {
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            default: Primitive::Null,
        }
    }

    pub fn with_default(mut self, default: impl Into<Primitive>) -> Self {
        self.default = default.into();
        self
    }
}

/// Handle to a parameter declared in a [`Parameters`] arena.
///
/// Parameter identity is the handle, never the name: two parameters
/// may share a name if the owning tag allows it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ParamId(u32);

impl From<usize> for ParamId {
    fn from(value: usize) -> Self {
        Self(value as u32)
    }
}

impl From<ParamId> for usize {
    fn from(value: ParamId) -> Self {
        value.0 as usize
    }
}

impl Display for ParamId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The parameters declared on one tag instance.
///
/// Declaring a parameter issues a [`ParamId`] that all
/// subsequent binding and resolution goes through.
#[derive(Debug)]
pub struct Parameters(Slab<ParamId, TagParameter>);

impl Parameters {
    pub fn new() -> Self {
        Self(Slab::empty())
    }

    /// Add a parameter to the arena, issuing its handle
    pub fn declare(&mut self, param: TagParameter) -> ParamId {
        self.0.insert(param)
    }

    pub fn get(&self, id: ParamId) -> Option<&TagParameter> {
        self.0.get(id)
    }

    /// Iterator over the handles and parameters
    pub fn iter(&self) -> impl Iterator<Item = (ParamId, &TagParameter)> + '_ {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn declare_issues_distinct_handles() {
        let mut params = Parameters::new();
        let count = params.declare(TagParameter::new("count").with_default(0i64));
        let label = params.declare(TagParameter::new("label").with_default(""));

        assert_ne!(count, label);
        assert_eq!(&*params.get(count).unwrap().name, "count");
        assert_eq!(&*params.get(label).unwrap().name, "label");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn shared_names_are_distinct_parameters() {
        let mut params = Parameters::new();
        let a = params.declare(TagParameter::new("value"));
        let b = params.declare(TagParameter::new("value"));

        assert_ne!(a, b);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn default_is_null_unless_given() {
        let param = TagParameter::new("sep");
        assert_eq!(param.default, Primitive::Null);

        let param = TagParameter::new("sep").with_default(",");
        assert_eq!(param.default, Primitive::Str(",".into()));
    }
}
