use common::{
    dashboard,
    window::{TimeField, TimeWindow, MAX_HOURS, MAX_MINUTES},
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::utils;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub devices: Vec<String>,
    pub selected_device: String,
    pub window: TimeWindow,
    pub lookback_ms: u64,
    pub loading: bool,
    pub on_event: Callback<dashboard::Event>,
}

#[function_component(Controls)]
pub fn controls(props: &Props) -> Html {
    let on_device = {
        let cb = props.on_event.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            {
                cb.emit(dashboard::Event::DeviceSelected(select.value()));
            }
        })
    };

    let field_input = |field: TimeField, max: Option<u64>| {
        let cb = props.on_event.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                cb.emit(dashboard::Event::WindowFieldEdited(field, input.value()));
            }
        });
        let id = format!("{}-input", field.label().to_lowercase());

        html! {
            <div class="input-group col-md-12">
                <span class="input-group-addon width-70">{field.label()}</span>
                <input type="number" class="form-control" id={id}
                    min="0" max={max.map(|m| m.to_string())}
                    value={props.window.get(field).to_string()}
                    {oninput}
                />
            </div>
        }
    };

    let on_fetch = props.on_event.reform(|_: MouseEvent| dashboard::Event::FetchClicked);
    let on_refresh = props.on_event.reform(|_: MouseEvent| dashboard::Event::RefreshClicked);

    let options: Html = props
        .devices
        .iter()
        .map(|id| {
            html! {
                <option key={id.clone()} value={id.clone()} selected={*id == props.selected_device}>
                    {id.clone()}
                </option>
            }
        })
        .collect();

    html! {
        <section class="controls">
            <div class="submenuitem">
                <label for="device-select">{"Select Device:"}</label>
                <select id="device-select" class="form-control" onchange={on_device}>
                    {options}
                </select>
            </div>
            <div class="submenuitem">
                {field_input(TimeField::Days, None)}
                {field_input(TimeField::Hours, Some(MAX_HOURS))}
                {field_input(TimeField::Minutes, Some(MAX_MINUTES))}
                <small>{format!("last {}", utils::format_lookback(props.lookback_ms))}</small>
            </div>
            <div class="submenuitem">
                <button class="btn btn-success" onclick={on_fetch} disabled={props.loading}>
                    { if props.loading { "Fetching..." } else { "Fetch Data" } }
                </button>
                <button class="btn btn-primary" onclick={on_refresh} disabled={props.loading}>
                    {"Refresh"}
                </button>
            </div>
        </section>
    }
}
