use dashboard::messages;
use dashboard::Summary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    pub summary: Summary,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    id: AttrValue,
    title: AttrValue,
    value: String,
    #[prop_or_default]
    class: Classes,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-title">{ &props.title }</div>
                <div id={props.id.clone()} class={classes!("stat-value", "text-2xl", props.class.clone())}>
                    { &props.value }
                </div>
            </div>
        </div>
    }
}

/// Latest-month figures for the selected district.
#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let summary = &props.summary;

    html! {
        <div>
            <p class="text-sm text-gray-500 mb-2">{ &summary.month }</p>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <StatCard id="m_house" title={messages::HOUSEHOLDS_WORKED}
                    value={summary.households_worked.clone()} class={classes!("text-primary")} />
                <StatCard id="m_pd" title={messages::PERSONDAYS}
                    value={summary.persondays.clone()} />
                <StatCard id="m_pay" title={messages::EXPENDITURE}
                    value={summary.expenditure.clone()} class={classes!("text-success")} />
                <StatCard id="m_female" title={messages::FEMALE_SHARE}
                    value={summary.female_pct.clone()} />
            </div>
        </div>
    }
}
