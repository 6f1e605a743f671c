use common::dataset::{AxisDomain, Series};
use plotly::{
    common::{Line, Mode},
    layout::{Axis, AxisType, Margin},
    Configuration, Layout, Plot, Scatter,
};
use yew::prelude::*;

use crate::utils;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
    pub title: String,
    /// One entry per line. Categories are ordered as the traces first show them
    pub series: Vec<Series>,
    pub domain: AxisDomain,
}

#[function_component(ChartPlotly)]
pub fn chart_plotly(props: &Props) -> Html {
    let id = props.id.clone();
    let p = yew_hooks::use_async::<_, _, ()>({
        let mut plot = Plot::new();
        for series in &props.series {
            let trace = Scatter::new(series.labels(), series.values())
                .name(&series.name)
                .mode(Mode::LinesMarkers)
                .line(Line::new().color(series.color.clone()))
                .text_array(
                    series
                        .points
                        .iter()
                        .map(|p| utils::tooltip_label(p.timestamp_ms))
                        .collect(),
                );
            plot.add_trace(trace);
        }
        plot.set_configuration(
            Configuration::default()
                .display_logo(false)
                .editable(false)
                .display_mode_bar(plotly::configuration::DisplayModeBar::Hover),
        );

        let mut y_axis = Axis::new();
        if let Some((min, max)) = props.domain.resolve(&props.series) {
            y_axis = y_axis.range(vec![min, max]);
        }

        plot.set_layout(
            Layout::default()
                .hover_mode(plotly::layout::HoverMode::XUnified)
                .auto_size(true)
                .margin(Margin::default().top(20).bottom(80).left(40).right(20))
                .x_axis(
                    Axis::new()
                        .type_(AxisType::Category)
                        .tick_angle(-45.0),
                )
                .y_axis(y_axis),
        );

        async move {
            plotly::bindings::new_plot(&id, &plot).await;
            Ok(())
        }
    });

    use_effect_with(props.series.clone(), move |_| {
        p.run();
        || ()
    });

    html! {
        <div class="panel panel-default">
            <div class="panel-heading">
                <h3 class="panel-title">{&props.title}</h3>
            </div>
            <div class="panel-body">
                <div class="chart" id={props.id.clone()}></div>
            </div>
        </div>
    }
}
