use dashboard::charts::{AxisScale, BarChart, TrendChart};
use dashboard::messages;
use serde::Serialize;
use serde_json::{json, Value};
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

const TREND_DIV: &str = "trendChart";
const BAR_DIV: &str = "barChart";

const HOUSEHOLDS_BAR: &str = "rgba(14,165,164,0.8)";
const PERSONDAYS_LINE: &str = "#0b9b90";
const RECENT_HOUSEHOLDS_BAR: &str = "#10b981";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

/// Plotly traces plus layout for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub traces: Value,
    pub layout: Value,
}

fn value_axis(scale: &AxisScale) -> Value {
    json!({
        "rangemode": "tozero",
        "range": [0.0, scale.top()],
        "tickmode": "array",
        "tickvals": scale.tick_values,
        "ticktext": scale.tick_labels,
        "showgrid": true,
        "gridcolor": "#eee",
    })
}

fn base_layout() -> Value {
    json!({
        "margin": {"t": 10, "r": 50, "l": 50, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"type": "category", "showgrid": false},
        "showlegend": true,
        "legend": {"orientation": "h", "y": -0.2},
    })
}

/// Households as bars on the left axis, persondays as a line on the right.
pub fn trend_figure(chart: &TrendChart) -> Figure {
    let traces = json!([
        {
            "type": "bar",
            "name": messages::HOUSEHOLDS_WORKED,
            "x": chart.labels,
            "y": chart.households,
            "marker": {"color": HOUSEHOLDS_BAR},
            "yaxis": "y",
        },
        {
            "type": "scatter",
            "mode": "lines+markers",
            "name": messages::PERSONDAYS,
            "x": chart.labels,
            "y": chart.persondays,
            "line": {"color": PERSONDAYS_LINE},
            "yaxis": "y2",
        }
    ]);

    let mut layout = base_layout();
    let mut left = value_axis(&chart.households_axis);
    left["side"] = json!("left");
    let mut right = value_axis(&chart.persondays_axis);
    right["side"] = json!("right");
    right["overlaying"] = json!("y");
    right["showgrid"] = json!(false);
    layout["yaxis"] = left;
    layout["yaxis2"] = right;
    layout["hovermode"] = json!("x unified");

    Figure { traces, layout }
}

/// Households for the recent months as one bar series.
pub fn bar_figure(chart: &BarChart) -> Figure {
    let traces = json!([{
        "type": "bar",
        "name": messages::HOUSEHOLDS_WORKED,
        "x": chart.labels,
        "y": chart.households,
        "marker": {"color": RECENT_HOUSEHOLDS_BAR},
    }]);

    let mut layout = base_layout();
    layout["yaxis"] = value_axis(&chart.axis);
    layout["showlegend"] = json!(false);

    Figure { traces, layout }
}

fn to_js(value: &Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    // Plain objects, not Maps, so Plotly can read them
    value.serialize(&Serializer::json_compatible())
}

/// Replaces whatever was drawn in `div_id` with `figure`.
fn draw(div_id: &str, figure: &Figure) {
    let config = json!({"responsive": true, "displayModeBar": false});
    match (to_js(&figure.traces), to_js(&figure.layout), to_js(&config)) {
        (Ok(data), Ok(layout), Ok(config)) => {
            purge(div_id);
            newPlot(div_id, data, layout, config);
            log::debug!("Rendered chart {}", div_id);
        }
        _ => log::error!("Failed to convert chart {} for Plotly", div_id),
    }
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub chart: TrendChart,
    pub revision: u32,
}

#[function_component(TrendChartView)]
pub fn trend_chart_view(props: &TrendChartProps) -> Html {
    let figure = trend_figure(&props.chart);

    use_effect_with(props.revision, move |_| {
        draw(TREND_DIV, &figure);
        || ()
    });

    html! {
        <div id={TREND_DIV} class="chart-container" style="height: 320px;"></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub chart: BarChart,
    pub revision: u32,
}

#[function_component(BarChartView)]
pub fn bar_chart_view(props: &BarChartProps) -> Html {
    let figure = bar_figure(&props.chart);

    use_effect_with(props.revision, move |_| {
        draw(BAR_DIV, &figure);
        || ()
    });

    html! {
        <div id={BAR_DIV} class="chart-container" style="height: 280px;"></div>
    }
}
