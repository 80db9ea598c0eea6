pub mod console;
pub mod dots;
pub mod shell;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            collections::{BTreeMap, BTreeSet},
            ops::{Add, Mul}
        };
    }
}

pub mod prelude {
    pub use super::console::*;
    pub use super::dots::prelude::*;
    pub use super::shell::*;
    pub use super::utils::prelude::*;
}
