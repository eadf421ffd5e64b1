//! Search result views.
//!
//! # Design
//! - Rows are rendered from precomputed `ResultRow` models.
//! - Requests run from the page controller through the feature api module.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::features::results::api::search_rows;
use crate::features::results::logic::{ResultRow, avatar_fallback};
use gloo::console;
use web_sys::{HtmlImageElement, HtmlInputElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchItemProps {
    pub row: ResultRow,
}

#[allow(clippy::needless_pass_by_value)]
fn swap_in_placeholder(event: Event) {
    if let Some(image) = event.target_dyn_into::<HtmlImageElement>()
        && let Some(fallback) = avatar_fallback(&image.src())
    {
        image.set_src(fallback);
    }
}

#[function_component(SearchItem)]
pub(crate) fn search_item(props: &SearchItemProps) -> Html {
    let row = &props.row;
    let onerror = Callback::from(swap_in_placeholder);
    html! {
        <Link<Route>
            to={Route::Profile { id: row.blockchain_id.clone() }}
            classes="list-group-item search-result"
        >
            <div class="col-md-1">
                <img
                    class="result-img"
                    src={row.avatar_url.clone()}
                    alt={row.blockchain_id.clone()}
                    {onerror}
                />
            </div>
            <div class="col-md-3">{row.name.clone()}</div>
            <div class="col-md-2">{row.blockchain_id.clone()}</div>
            <div class="col-md-6">{row.accounts_line()}</div>
        </Link<Route>>
    }
}

#[derive(Clone, Debug, PartialEq)]
enum SearchStatus {
    Idle,
    Loading,
    Loaded(Vec<ResultRow>),
    Failed(String),
}

#[function_component(SearchResultsPage)]
pub(crate) fn search_results_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let query = use_state(String::new);
    let status = use_state(|| SearchStatus::Idle);

    let on_input = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let on_submit = {
        let query = query.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let term = query.trim().to_string();
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            if term.is_empty() {
                return;
            }
            status.set(SearchStatus::Loading);
            let status = status.clone();
            yew::platform::spawn_local(async move {
                match search_rows(&api_ctx.client, &term).await {
                    Ok(rows) => status.set(SearchStatus::Loaded(rows)),
                    Err(err) => {
                        console::warn!("profile search failed", err.to_string());
                        status.set(SearchStatus::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let body = match &*status {
        SearchStatus::Idle => Html::default(),
        SearchStatus::Loading => html! { <p>{"Searching..."}</p> },
        SearchStatus::Loaded(rows) if rows.is_empty() => html! { <p>{"No profiles found."}</p> },
        SearchStatus::Loaded(rows) => html! {
            <div class="list-group">
                { for rows.iter().map(|row| html! {
                    <SearchItem key={row.blockchain_id.clone()} row={row.clone()} />
                }) }
            </div>
        },
        SearchStatus::Failed(message) => html! {
            <div class="alert alert-danger" role="alert">{message.clone()}</div>
        },
    };

    html! {
        <div class="container">
            <form class="form-inline" onsubmit={on_submit}>
                <input
                    class="form-control"
                    placeholder="Search profiles"
                    value={(*query).clone()}
                    oninput={on_input}
                />
                <button type="submit" class="btn btn-blue">{"Search"}</button>
            </form>
            {body}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ProfilePageProps {
    pub id: String,
}

#[function_component(ProfilePage)]
pub(crate) fn profile_page(props: &ProfilePageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let status = use_state(|| SearchStatus::Loading);

    {
        let status = status.clone();
        use_effect_with_deps(
            move |id: &String| {
                if let Some(api_ctx) = api_ctx {
                    let id = id.clone();
                    status.set(SearchStatus::Loading);
                    yew::platform::spawn_local(async move {
                        match search_rows(&api_ctx.client, &id).await {
                            Ok(rows) => status.set(SearchStatus::Loaded(
                                rows.into_iter()
                                    .filter(|row| row.blockchain_id == id)
                                    .collect(),
                            )),
                            Err(err) => status.set(SearchStatus::Failed(err.to_string())),
                        }
                    });
                }
                || ()
            },
            props.id.clone(),
        );
    }

    let body = match &*status {
        SearchStatus::Idle | SearchStatus::Loading => html! { <p>{"Loading profile..."}</p> },
        SearchStatus::Failed(message) => html! {
            <div class="alert alert-danger" role="alert">{message.clone()}</div>
        },
        SearchStatus::Loaded(rows) => match rows.first() {
            None => html! { <p>{format!("No profile found for {}.", props.id)}</p> },
            Some(row) => html! {
                <div class="profile">
                    <img
                        class="profile-img"
                        src={row.avatar_url.clone()}
                        alt={row.blockchain_id.clone()}
                        onerror={Callback::from(swap_in_placeholder)}
                    />
                    <h3>{row.name.clone()}</h3>
                    <p class="text-muted">{row.blockchain_id.clone()}</p>
                    <ul>
                        { for row.accounts.iter().map(|account| html! { <li>{account.clone()}</li> }) }
                    </ul>
                </div>
            },
        },
    };

    html! {
        <div class="container">
            {body}
            <Link<Route> to={Route::Home}>{"Back to search"}</Link<Route>>
        </div>
    }
}
