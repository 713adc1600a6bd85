use dashboard::messages;
use dashboard::DashboardState;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub state: DashboardState,
    pub on_state_change: Callback<String>,
    pub on_district_change: Callback<String>,
    pub on_locate: Callback<()>,
    pub on_get_data: Callback<()>,
}

fn select_value(on_change: &Callback<String>) -> Callback<Event> {
    on_change.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    })
}

/// State and district pickers plus the two action buttons.
#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    let state = &props.state;
    let busy = state.is_busy();

    let on_locate = props.on_locate.reform(|_: MouseEvent| ());
    let on_get_data = props.on_get_data.reform(|_: MouseEvent| ());

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body grid grid-cols-1 md:grid-cols-4 gap-4 items-end">
                <label class="form-control">
                    <span class="label-text">{ messages::STATE }</span>
                    <select id="stateSelect" class="select select-bordered" disabled={busy}
                        onchange={select_value(&props.on_state_change)}>
                        { for state.states.iter().map(|name| html! {
                            <option value={name.clone()} selected={*name == state.selected_state}>
                                { name }
                            </option>
                        }) }
                    </select>
                </label>
                <label class="form-control">
                    <span class="label-text">{ messages::DISTRICT }</span>
                    <select id="districtSelect" class="select select-bordered" disabled={busy}
                        onchange={select_value(&props.on_district_change)}>
                        { for state.options.iter().map(|option| html! {
                            <option value={option.value.clone()} selected={option.value == state.selected}>
                                { &option.label }
                            </option>
                        }) }
                    </select>
                </label>
                <button id="geoBtn" class="btn btn-outline" disabled={busy} onclick={on_locate}>
                    { state.locate_label() }
                </button>
                <button id="getBtn" class="btn btn-primary" disabled={busy} onclick={on_get_data}>
                    { state.get_data_label() }
                </button>
            </div>
        </div>
    }
}
