//! Storage provider page.

use std::rc::Rc;

use crate::app::Route;
use crate::components::alert::AlertList;
use crate::core::store::AppStore;
use crate::features::storage::actions::StorageAction;
use crate::features::storage::api::connect_storage;
use crate::features::storage::state::StoragePageState;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

impl Reducible for StoragePageState {
    type Action = StorageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[function_component(StoragePage)]
pub(crate) fn storage_page() -> Html {
    let settings = use_selector(|store: &AppStore| store.settings.clone());
    let page = {
        let settings = settings.clone();
        use_reducer(move || StoragePageState::new(&settings))
    };

    let on_input = {
        let page = page.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                page.dispatch(StorageAction::Input(input.value()));
            }
        })
    };

    let on_submit = {
        let page = page.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if page.submitting {
                return;
            }
            match page.prepare(&settings) {
                Ok(next) => {
                    page.dispatch(StorageAction::Started);
                    let page = page.clone();
                    let on_done = Callback::from(move |result| {
                        page.dispatch(StorageAction::Finished(result));
                    });
                    connect_storage(next, on_done);
                }
                Err(message) => page.dispatch(StorageAction::Rejected(message)),
            }
        })
    };

    html! {
        <div class="container vertical-split-content">
            <h3>{"Storage"}</h3>
            <AlertList alerts={page.alerts.clone()} />
            <p>{"Connect a Dropbox account to host your profile data."}</p>
            <form class="form-inline" onsubmit={on_submit}>
                <input
                    name="dropboxAccessToken"
                    type="password"
                    class="form-control"
                    placeholder="Dropbox access token"
                    value={page.token.clone()}
                    oninput={on_input}
                />
                <button type="submit" class="btn btn-blue" disabled={page.submitting}>
                    {"Connect"}
                </button>
            </form>
            <Link<Route> to={Route::Home}>{"Back to search"}</Link<Route>>
        </div>
    }
}
