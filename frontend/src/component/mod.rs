pub(crate) mod prelude {
    pub use yew::prelude::*;
    pub use pagenav_common::*;
    pub use std::rc::Rc;
}

pub mod paginator;
