use std::rc::Rc;

use dashboard::messages;
use dashboard::{Controller, DashboardState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::chart::{BarChartView, TrendChartView};
use super::controls::Controls;
use super::stats::Stats;
use crate::api_client::district_data::HttpDataSource;
use crate::api_client::geocoder::NominatimGeocoder;
use crate::common::error::ErrorBanner;
use crate::geolocation::BrowserLocator;
use crate::settings::get_settings;

type PageController = Controller<HttpDataSource, NominatimGeocoder, BrowserLocator>;

fn build_controller() -> PageController {
    let settings = get_settings();
    Controller::new(
        HttpDataSource::new(&settings.api_base),
        NominatimGeocoder::new(&settings.geocoder_url),
        BrowserLocator,
    )
    .with_config(settings.controller_config())
}

/// Every step of a controller operation replaces the rendered snapshot.
fn publisher(handle: &UseStateHandle<DashboardState>) -> impl Fn(&DashboardState) {
    let handle = handle.clone();
    move |snapshot: &DashboardState| handle.set(snapshot.clone())
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let state = use_state(|| DashboardState::new(get_settings().default_state));
    let controller: Rc<PageController> = use_memo((), |_| build_controller());

    {
        let state = state.clone();
        let controller = controller.clone();
        use_effect_with((), move |_| {
            log::info!("Loading districts for {}", state.selected_state);
            let mut working = (*state).clone();
            spawn_local(async move {
                controller.init(&mut working, &publisher(&state)).await;
            });
            || ()
        });
    }

    let on_state_change = {
        let state = state.clone();
        let controller = controller.clone();
        Callback::from(move |name: String| {
            if state.is_busy() {
                return;
            }
            let mut working = (*state).clone();
            working.select_state(&name);
            let state = state.clone();
            let controller = controller.clone();
            spawn_local(async move {
                let state_name = working.selected_state.clone();
                controller
                    .load_districts(&mut working, &state_name, &publisher(&state))
                    .await;
            });
        })
    };

    let on_district_change = {
        let state = state.clone();
        Callback::from(move |value: String| {
            if state.is_busy() {
                return;
            }
            let mut working = (*state).clone();
            working.select(&value);
            state.set(working);
        })
    };

    let on_locate = {
        let state = state.clone();
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            if state.is_busy() {
                log::debug!("Ignoring action while another is running");
                return;
            }
            let mut working = (*state).clone();
            let state = state.clone();
            let controller = controller.clone();
            spawn_local(async move {
                controller.locate(&mut working, &publisher(&state)).await;
            });
        })
    };

    let on_get_data = {
        let state = state.clone();
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            if state.is_busy() {
                log::debug!("Ignoring action while another is running");
                return;
            }
            let mut working = (*state).clone();
            let state = state.clone();
            let controller = controller.clone();
            spawn_local(async move {
                controller.get_data(&mut working, &publisher(&state)).await;
            });
        })
    };

    let results = match (&state.summary, &state.trend, &state.bar) {
        (Some(summary), Some(trend), Some(bar)) => html! {
            <div id="resultArea" class="space-y-6">
                <Stats summary={summary.clone()} />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{ messages::TREND_TITLE }</h2>
                            <TrendChartView chart={trend.clone()} revision={state.chart_revision} />
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{ messages::RECENT_TITLE }</h2>
                            <BarChartView chart={bar.clone()} revision={state.chart_revision} />
                        </div>
                    </div>
                </div>
            </div>
        },
        _ => html! {},
    };

    html! {
        <div class="space-y-6">
            <Controls
                state={(*state).clone()}
                {on_state_change}
                {on_district_change}
                {on_locate}
                {on_get_data}
            />
            <ErrorBanner message={state.error.clone()} />
            { results }
        </div>
    }
}
