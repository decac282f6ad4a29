use yew::prelude::*;

use super::{LineChart, Spinner};
use crate::models::dashboard::demo::{recent_activity, stat_cards};
use crate::state::DashboardState;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub state: DashboardState,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let state = &props.state;

    if state.loading {
        return html! { <Spinner /> };
    }

    if let Some(error) = &state.error {
        return html! {
            <div class="dashboard-error">
                { format!("Error loading dashboard data: {}", error) }
            </div>
        };
    }

    let cards = stat_cards().into_iter().map(|card| {
        html! {
            <div class={classes!("stat-card", format!("stat-card-{}", card.tone))}>
                <h3>{ card.title }</h3>
                <p class="stat-value">{ card.value }</p>
            </div>
        }
    });

    let activity = recent_activity().into_iter().map(|item| {
        html! {
            <div class="activity-item" key={item.title.clone()}>
                <div>
                    <p class="activity-title">{ &item.title }</p>
                    <p class="activity-description">{ &item.description }</p>
                </div>
                <span class="activity-when">{ item.when }</span>
            </div>
        }
    });

    html! {
        <div class="dashboard">
            <section class="panel">
                <h2>{"Dashboard"}</h2>
                <div class="stat-grid">{ for cards }</div>
            </section>

            <section class="panel">
                <h3>{"Activity Overview"}</h3>
                <div class="chart-container">
                    <LineChart series={state.series.clone()} />
                </div>
            </section>

            <section class="panel">
                <h3>{"Recent Activity"}</h3>
                <div class="activity-list">{ for activity }</div>
            </section>
        </div>
    }
}
