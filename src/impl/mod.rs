// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod method_catalog;
        pub(crate) mod seed_roster;
    }
    pub(crate) mod models {
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod payment_gateway_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod checkout;
        pub(crate) mod payment_method;
        pub(crate) mod payment_record;
        pub(crate) mod teacher;
    }
    pub(crate) mod logic {
        pub(crate) mod card_input;
        pub(crate) mod derivations;
        pub(crate) mod forms;
        pub(crate) mod session;
        pub(crate) mod wizard;
    }
    pub(crate) mod repositories {
        pub(crate) mod payment_gateway;
    }
    pub(crate) mod usecases {
        pub(crate) mod checkout_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod overview_fmt;
    pub(crate) mod receipt_fmt;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::checkout::*;
        pub use crate::domain::entities::payment_method::*;
        pub use crate::domain::entities::payment_record::*;
        pub use crate::domain::entities::teacher::*;
    }

    pub mod logic {
        pub use crate::domain::logic::card_input::*;
        pub use crate::domain::logic::derivations::*;
        pub use crate::domain::logic::forms::*;
        pub use crate::domain::logic::session::*;
        pub use crate::domain::logic::wizard::*;
    }

    pub mod gateway {
        pub use crate::data::repositories::payment_gateway_impl::*;
        pub use crate::domain::repositories::payment_gateway::*;
    }

    pub mod seed {
        pub use crate::data::datasources::method_catalog::*;
        pub use crate::data::datasources::seed_roster::*;
    }
}
