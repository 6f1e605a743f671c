use common::{
    dashboard::View,
    dataset::{self, DASHBOARD_CHARTS},
    req::SensorReading,
};
use yew::prelude::*;

use super::chart_plotly::ChartPlotly;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view: DisplayState,
}

/// Owned copy of [`View`] so it can travel through props.
#[derive(Clone, PartialEq)]
pub enum DisplayState {
    Idle,
    Loading,
    Failure(String),
    Empty,
    Charts(Vec<SensorReading>),
}

impl From<View<'_>> for DisplayState {
    fn from(view: View<'_>) -> Self {
        match view {
            View::Idle => DisplayState::Idle,
            View::Loading => DisplayState::Loading,
            View::Failure(msg) => DisplayState::Failure(msg.to_owned()),
            View::Empty => DisplayState::Empty,
            View::Charts(readings) => DisplayState::Charts(readings.to_vec()),
        }
    }
}

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="text-center">
            <div class="spinner"></div>
        </div>
    }
}

#[function_component(DataDisplay)]
pub fn data_display(props: &Props) -> Html {
    match &props.view {
        DisplayState::Idle => html! {},
        DisplayState::Loading => html! {
            <>
                <Spinner/>
                <p class="text-center">{"Loading sensor data..."}</p>
            </>
        },
        DisplayState::Failure(msg) => html! {
            <div class="alert alert-danger" role="alert">
                <strong>{"Error!"}</strong>{" "}{msg.clone()}
            </div>
        },
        DisplayState::Empty => html! {
            <div class="text-center">
                <p>{"No data available for the selected device and time range."}</p>
                <p><small>{"Check that the device is publishing and that readings are being ingested."}</small></p>
            </div>
        },
        DisplayState::Charts(readings) => {
            let charts: Html = DASHBOARD_CHARTS
                .iter()
                .map(|spec| {
                    html! {
                        <div class="col-lg-6 col-md-12">
                            <ChartPlotly
                                id={format!("chart-{}", spec.line.metric.key())}
                                title={spec.title}
                                series={vec![dataset::series(readings, &spec.line)]}
                                domain={spec.domain}
                            />
                        </div>
                    }
                })
                .collect();

            html! { <div class="row">{charts}</div> }
        }
    }
}
