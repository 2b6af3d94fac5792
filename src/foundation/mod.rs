pub mod config {
    pub use crate::config::*;
}

pub mod coverage {
    pub use crate::coverage::*;
}

pub mod docs {
    pub use crate::docs::*;
}

pub mod emit {
    pub use crate::emit::*;
}

pub mod fields {
    pub use crate::fields::*;
}

pub mod id {
    pub use crate::id::*;
}

pub mod manifest {
    pub use crate::manifest::*;
}

pub mod registry {
    pub use crate::registry::*;
}

pub mod state {
    pub use crate::state::*;
}

pub mod theme {
    pub use crate::theme::*;
}

pub mod tokens {
    pub use crate::tokens::*;
}
