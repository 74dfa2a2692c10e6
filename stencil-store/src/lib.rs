pub use crate::slab::{Index, Slab};

mod slab;
