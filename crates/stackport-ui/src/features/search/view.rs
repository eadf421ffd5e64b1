//! Username search and selection views.
//!
//! # Design
//! - Keep API calls in the feature api module.
//! - Render rows from the shared AppStore availability records.
//! - Page state changes go through `SearchAction`.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::alert::AlertList;
use crate::core::store::AppStore;
use crate::features::search::actions::SearchAction;
use crate::features::search::api::{dispatch_checks, refresh_wallet_balance};
use crate::features::search::logic::{RowView, row_view};
use crate::features::search::state::{SearchPageState, SubmitOutcome};
use stackport_config::DEFAULT_NAMESPACE;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct AddUsernameSearchPageProps {
    pub owner: String,
}

#[function_component(AddUsernameSearchPage)]
pub(crate) fn add_username_search_page(props: &AddUsernameSearchPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let settings = use_selector(|store: &AppStore| store.settings.clone());
    let availability = use_selector(|store: &AppStore| store.availability.clone());
    let balance = use_selector(|store: &AppStore| store.wallet.balance);
    let page = {
        let settings = settings.clone();
        use_state(move || SearchPageState::new(&settings))
    };

    {
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    refresh_wallet_balance(&api_ctx.client);
                }
                || ()
            },
            (),
        );
    }

    // Any prop or store update resets the alerts, not only settings changes.
    {
        let page = page.clone();
        use_effect_with_deps(
            move |(settings, _owner, _availability, _balance)| {
                let mut next = (*page).clone();
                next.on_settings_updated(settings);
                page.set(next);
                || ()
            },
            (
                settings,
                props.owner.clone(),
                availability.clone(),
                balance.clone(),
            ),
        );
    }

    let on_action = {
        let page = page.clone();
        Callback::from(move |action: SearchAction| {
            let mut next = (*page).clone();
            match action {
                SearchAction::Input(raw) => next.on_input(&raw),
                SearchAction::Submit => {
                    if let SubmitOutcome::Dispatched { names } = next.submit()
                        && let Some(api_ctx) = &api_ctx
                    {
                        dispatch_checks(&api_ctx.client, names);
                    }
                }
            }
            page.set(next);
        })
    };

    let on_input = on_action.reform(|event: InputEvent| {
        let value = event
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default();
        SearchAction::Input(value)
    });
    let on_submit = on_action.reform(|event: SubmitEvent| {
        event.prevent_default();
        SearchAction::Submit
    });

    let disabled = !page.storage_connected;
    let rows = if page.searching_username.is_empty() {
        Html::default()
    } else {
        page.name_suffixes
            .iter()
            .map(|suffix| {
                let name = format!("{}.{suffix}", page.searching_username);
                let view = row_view(availability.record(&name), suffix);
                html! {
                    <div key={suffix.clone()}>
                        { render_row(&props.owner, &name, view) }
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="container vertical-split-content">
            <h3>{"Search for your username"}</h3>
            <AlertList alerts={page.alerts.clone()} />
            <p>
                {"Add a username to save your profile so you can interact with other people on the decentralized internet."}
            </p>
            {
                (*balance).map(|balance| html! {
                    <p class="text-muted">{format!("Wallet balance: {balance} bitcoins")}</p>
                }).unwrap_or_default()
            }
            <form class="form-inline" onsubmit={on_submit}>
                <input
                    name="username"
                    class="form-control"
                    placeholder="Username"
                    value={page.username.clone()}
                    oninput={on_input}
                    required=true
                    {disabled}
                />
                <button type="submit" class="btn btn-blue" {disabled}>{"Search"}</button>
            </form>
            <div>{rows}</div>
        </div>
    }
}

fn render_row(owner: &str, name: &str, view: RowView) -> Html {
    let select = Route::AddUsernameSelect {
        index: owner.to_string(),
        name: name.to_string(),
    };
    match view {
        RowView::Checking => html! { <h4>{format!("Checking {name}...")}</h4> },
        RowView::Taken => html! { <h4>{format!("{name} is already taken.")}</h4> },
        RowView::Failed(message) => html! {
            <h4 class="text-danger">{format!("Could not check {name}: {message}")}</h4>
        },
        RowView::AvailableSubdomain => html! {
            <div>
                <h4>{format!("{name} is available!")}</h4>
                <Link<Route> to={select}>{"Get"}</Link<Route>>
            </div>
        },
        RowView::CheckingPrice => html! {
            <div>
                <h4>{format!("{name} is available!")}</h4>
                <div class="progress">
                    <div class="progress-bar progress-bar-striped progress-bar-animated" role="progressbar">
                        {"Checking price..."}
                    </div>
                </div>
            </div>
        },
        RowView::Priced(price) => html! {
            <div>
                <h4>{format!("{name} is available!")}</h4>
                <ul>
                    <li><strong>{"Price:"}</strong>{format!(" {price} bitcoins")}</li>
                    <li><strong>{"Censorship resistant:"}</strong>{" Yes!"}</li>
                    <li>{"Arrives in ~2 hours"}</li>
                </ul>
                <Link<Route> to={select} classes="btn btn-primary btn-sm">
                    {format!("Buy {name}")}
                </Link<Route>>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SelectUsernamePageProps {
    pub owner: String,
    pub name: String,
}

#[function_component(SelectUsernamePage)]
pub(crate) fn select_username_page(props: &SelectUsernamePageProps) -> Html {
    let settings = use_selector(|store: &AppStore| store.settings.clone());
    let suffix = props
        .name
        .split_once('.')
        .map_or(DEFAULT_NAMESPACE, |(_, suffix)| suffix);
    let registrar = settings
        .register_url_for(suffix)
        .map(str::to_string)
        .unwrap_or_default();
    html! {
        <div class="container vertical-split-content">
            <h3>{format!("Register {}", props.name)}</h3>
            <p>{format!("Owner: {}", props.owner)}</p>
            <p class="text-muted">{format!("Registrar: {registrar}")}</p>
            <Link<Route> to={Route::AddUsernameSearch { index: props.owner.clone() }}>
                {"Back to search"}
            </Link<Route>>
        </div>
    }
}
