use crate::app::api::ApiCtx;
use crate::core::store::{AppStore, set_settings};
use crate::features::results::view::{ProfilePage, SearchResultsPage};
use crate::features::search::view::{AddUsernameSearchPage, SelectUsernamePage};
use crate::features::storage::view::StoragePage;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

#[function_component(StackportApp)]
pub fn stackport_app() -> Html {
    let settings = use_selector(|store: &AppStore| store.settings.clone());
    let loaded = use_state(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let settings = preferences::load_settings();
                Dispatch::<AppStore>::new().reduce_mut(|store| set_settings(store, settings));
                loaded.set(true);
                || ()
            },
            (),
        );
    }

    let api_ctx = use_memo(|settings| ApiCtx::new((**settings).clone()), settings);

    if !*loaded {
        return html! {};
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

#[allow(clippy::needless_pass_by_value)]
fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <SearchResultsPage /> },
        Route::Profile { id } => html! { <ProfilePage {id} /> },
        Route::AddUsernameSearch { index } => html! { <AddUsernameSearchPage owner={index} /> },
        Route::AddUsernameSelect { index, name } => {
            html! { <SelectUsernamePage owner={index} {name} /> }
        }
        Route::Storage => html! { <StoragePage /> },
        Route::NotFound => html! {
            <div class="container">
                <h3>{"Page not found"}</h3>
                <Link<Route> to={Route::Home}>{"Back to search"}</Link<Route>>
            </div>
        },
    }
}

/// Mount the app into `#root`, or the document body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<StackportApp>::with_root(root).render();
    } else {
        yew::Renderer::<StackportApp>::new().render();
    }
}
