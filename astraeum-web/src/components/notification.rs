use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct NotificationBannerProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

/// Transient banner; last write wins and a fixed-delay timer clears it.
#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    props.message.as_ref().map_or_else(Html::default, |message| {
        html! {
            <div class="notification" role="status">{ message.clone() }</div>
        }
    })
}
