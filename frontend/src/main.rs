mod components;
mod sample;
mod utils;

use std::{cell::RefCell, rc::Rc, time::Duration};

use common::{
    config::{Config, ConfigError},
    dashboard::{Dashboard, Event, FetchRequest},
    dataset::{self, COMPARISON_ACTUAL, COMPARISON_DOMAIN, COMPARISON_MODEL, COMPARISON_TITLE},
    model,
    req::SensorReading,
    request::SensorDataClient,
};
use log::{error, info};
use rand::{rngs::SmallRng, SeedableRng};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    chart_plotly::ChartPlotly,
    controls::Controls,
    data_display::{DataDisplay, DisplayState, Spinner},
    header::Header,
};

const SIMULATED_MODEL_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/model")]
    Model,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Result<Rc<Config>, String>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    match &props.config {
        Ok(config) => {
            let config = config.clone();
            html! {
                <BrowserRouter>
                    <Switch<Route> render={move |route| switch(route, config.clone())} />
                </BrowserRouter>
            }
        }
        Err(msg) => html! {
            <div class="container-fluid">
                <Header/>
                <div class="alert alert-danger" role="alert">
                    <strong>{"Configuration error!"}</strong>{" "}{msg.clone()}
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub config: Rc<Config>,
}

/// Glue between the page and its [`Dashboard`]: applies events, re-renders
/// and runs the requests the dashboard asks for.
#[derive(Clone)]
struct Controller {
    state: Rc<RefCell<Option<Dashboard>>>,
    rerender: UseForceUpdateHandle,
    client: Rc<SensorDataClient>,
    timeout: Duration,
}

impl Controller {
    fn dispatch(&self, event: Event) {
        let request = self
            .state
            .borrow_mut()
            .as_mut()
            .and_then(|dashboard| dashboard.handle(event));
        self.rerender.force_update();

        if let Some(request) = request {
            self.spawn_fetch(request);
        }
    }

    fn spawn_fetch(&self, request: FetchRequest) {
        let epoch = request.epoch;
        info!(
            "fetching {} over the last {}",
            request.device_id,
            utils::format_lookback(request.lookback_ms)
        );

        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = this
                .client
                .fetch_readings(&request.device_id, request.lookback_ms)
                .await;
            this.dispatch(Event::Settled { epoch, outcome });
        });

        // a late response after this fires is dropped by the dashboard
        let this = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            utils::sleep(this.timeout).await;
            this.dispatch(Event::TimedOut {
                epoch,
                after: this.timeout,
            });
        });
    }
}

#[function_component(PageLiveData)]
pub fn page_live_data(props: &PageProps) -> Html {
    let state = {
        let devices = props.config.device_ids.clone();
        use_mut_ref(move || Dashboard::new(devices))
    };
    let client = use_memo(props.config.api_endpoint.clone(), |endpoint| {
        SensorDataClient::new(endpoint)
    });
    let controller = Controller {
        state: state.clone(),
        rerender: use_force_update(),
        client,
        timeout: props.config.fetch_timeout,
    };

    {
        let controller = controller.clone();
        yew_hooks::use_mount(move || controller.dispatch(Event::Activated));
    }

    let on_event = {
        let controller = controller.clone();
        Callback::from(move |event: Event| controller.dispatch(event))
    };

    let dashboard = state.borrow();
    let content = match dashboard.as_ref() {
        Some(dashboard) => html! {
            <>
                <Controls
                    devices={dashboard.devices().to_vec()}
                    selected_device={dashboard.selected_device().to_owned()}
                    window={dashboard.window()}
                    lookback_ms={dashboard.lookback_ms()}
                    loading={dashboard.is_loading()}
                    {on_event}
                />
                <DataDisplay view={DisplayState::from(dashboard.view())} />
            </>
        },
        None => html! { <div>{"No devices configured"}</div> },
    };

    html! {
        <div class="container-fluid">
            <div class="row">
                <Sidebar current_route={Route::Home}/>
                <div class="col-sm-9 col-sm-offset-3 col-md-10 col-md-offset-2 main">
                    <Header/>
                    {content}
                </div>
            </div>
        </div>
    }
}

async fn load_comparison() -> Result<(Vec<SensorReading>, Vec<SensorReading>), String> {
    utils::sleep(SIMULATED_MODEL_DELAY).await;

    let actual = sample::sample_readings().map_err(|e| {
        error!("{e:#}");
        e.to_string()
    })?;
    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
    let predicted = model::simulate_predictions(&actual, &mut rng);
    Ok((actual, predicted))
}

#[function_component(PageModel)]
pub fn page_model() -> Html {
    let comparison = yew_hooks::use_async(load_comparison());
    {
        let comparison = comparison.clone();
        yew_hooks::use_mount(move || comparison.run());
    }

    let content = if let Some((actual, predicted)) = &comparison.data {
        let series =
            dataset::dual_series(actual, &COMPARISON_ACTUAL, predicted, &COMPARISON_MODEL);
        html! {
            <ChartPlotly
                id="chart-model-comparison"
                title={COMPARISON_TITLE}
                series={series.to_vec()}
                domain={COMPARISON_DOMAIN}
            />
        }
    } else if let Some(msg) = &comparison.error {
        html! {
            <div class="alert alert-danger" role="alert">
                <strong>{"Error!"}</strong>{" "}{msg.clone()}
            </div>
        }
    } else {
        html! {
            <>
                <Spinner/>
                <p class="text-center">{"Loading model predictions and sensor data..."}</p>
            </>
        }
    };

    html! {
        <div class="container-fluid">
            <div class="row">
                <Sidebar current_route={Route::Model}/>
                <div class="col-sm-9 col-sm-offset-3 col-md-10 col-md-offset-2 main">
                    <Header/>
                    <h2 class="text-center">{"Model Comparison"}</h2>
                    <p class="text-center">
                        {"Predictions of a model trained on the sensor time series, compared to the actual values."}
                    </p>
                    {content}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current_route: Route,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let cr = &props.current_route;
    let class_active = move |r| {
        if *cr == r {
            "active"
        } else {
            ""
        }
    };

    html! {
        <div class="col-sm-3 col-md-2 sidebar">
            <ul class="nav nav-sidebar">
                <li class={class_active(Route::Home)}>
                    <Link<Route> to={Route::Home}>{"🗠 Live Data"}</Link<Route>>
                </li>
                <li class={class_active(Route::Model)}>
                    <Link<Route> to={Route::Model}>{"⚖ Model"}</Link<Route>>
                </li>
            </ul>

            <ul class="nav nav-sidebar fix-bottom">
                {format!("v{}", env!("CARGO_PKG_VERSION"))}
            </ul>
        </div>
    }
}

fn switch(routes: Route, config: Rc<Config>) -> Html {
    match routes {
        Route::Home => html! { <PageLiveData {config} /> },
        Route::Model => html! { <PageModel/> },
        Route::NotFound => html! { <h1>{ "404" }</h1> },
    }
}

fn load_config() -> Result<Config, ConfigError> {
    Config::parse(
        option_env!("VERDETERRA_API_ENDPOINT"),
        option_env!("VERDETERRA_DEVICE_IDS"),
        option_env!("VERDETERRA_FETCH_TIMEOUT_SECS"),
    )
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let config = match load_config() {
        Ok(config) => {
            info!("using data API at {}", config.api_endpoint);
            Ok(Rc::new(config))
        }
        Err(e) => {
            error!("{e}");
            Err(e.to_string())
        }
    };

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
