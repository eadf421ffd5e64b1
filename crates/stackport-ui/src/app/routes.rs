//! Routing definitions for the Stackport UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/profile/blockchain/:id")]
    Profile { id: String },
    #[at("/profiles/i/add-username/:index/search")]
    AddUsernameSearch { index: String },
    #[at("/profiles/i/add-username/:index/select/:name")]
    AddUsernameSelect { index: String, name: String },
    #[at("/account/storage")]
    Storage,
    #[not_found]
    #[at("/404")]
    NotFound,
}
