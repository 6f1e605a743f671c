use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="page-header">
            <h1>{"VerdeTerra Dashboard 🌳"}</h1>
            <p>{"Real-time Garden Monitoring"}</p>
        </header>
    }
}
