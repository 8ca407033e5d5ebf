pub mod linked_set;

pub use crate::domain::model::Coffee;
pub use crate::utils::error::Result;
pub use self::linked_set::{Iter, LinkedSet};
