mod link;

pub mod v1 {
    pub use crate::link::v1::*;
}
