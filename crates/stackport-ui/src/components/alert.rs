use crate::core::alerts::Alert;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AlertListProps {
    pub alerts: Vec<Alert>,
}

#[function_component(AlertList)]
pub(crate) fn alert_list(props: &AlertListProps) -> Html {
    html! {
        <>
            { for props.alerts.iter().map(|alert| {
                let class = classes!("alert", format!("alert-{}", alert.status.as_str()));
                html! {
                    <div {class} role="alert">
                        {
                            match &alert.url {
                                Some(url) => html! { <a href={url.clone()}>{alert.message.clone()}</a> },
                                None => html! { <span>{alert.message.clone()}</span> },
                            }
                        }
                    </div>
                }
            }) }
        </>
    }
}
