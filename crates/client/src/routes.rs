//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{Home, Navbar, Stats};

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/corpus")]
        Stats {},
}
