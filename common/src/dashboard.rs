//! Live-data page state.
//!
//! Every user action and every settled request goes through
//! [`Dashboard::handle`]. When an event requires new data the caller gets a
//! [`FetchRequest`] back and is expected to run it and report the outcome
//! with [`Event::Settled`] carrying the same epoch.

use std::time::Duration;

use log::{debug, info};

use crate::{
    req::SensorReading,
    request::FetchError,
    window::{TimeField, TimeWindow},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchResult {
    #[default]
    Idle,
    Loading,
    Success(Vec<SensorReading>),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub epoch: u64,
    pub device_id: String,
    pub lookback_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Activated,
    DeviceSelected(String),
    WindowFieldEdited(TimeField, String),
    FetchClicked,
    RefreshClicked,
    Settled {
        epoch: u64,
        outcome: Result<Vec<SensorReading>, FetchError>,
    },
    TimedOut {
        epoch: u64,
        after: Duration,
    },
}

/// What the page should render.
#[derive(Debug, PartialEq)]
pub enum View<'a> {
    Idle,
    Loading,
    Failure(&'a str),
    Empty,
    Charts(&'a [SensorReading]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    devices: Vec<String>,
    device_id: String,
    window: TimeWindow,
    epoch: u64, // latest initiated
    result: FetchResult,
}

impl Dashboard {
    /// Returns `None` if `devices` is empty.
    pub fn new(devices: Vec<String>) -> Option<Self> {
        let device_id = devices.first()?.clone();
        Some(Self {
            devices,
            device_id,
            window: TimeWindow::default(),
            epoch: 0,
            result: FetchResult::Idle,
        })
    }

    pub fn devices(&self) -> &[String] {
        &self.devices
    }

    pub fn selected_device(&self) -> &str {
        &self.device_id
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn lookback_ms(&self) -> u64 {
        self.window.lookback_ms()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn result(&self) -> &FetchResult {
        &self.result
    }

    pub fn is_loading(&self) -> bool {
        self.result == FetchResult::Loading
    }

    /// Fetch and Refresh are disabled while a request is in flight.
    pub fn controls_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn view(&self) -> View<'_> {
        match &self.result {
            FetchResult::Idle => View::Idle,
            FetchResult::Loading => View::Loading,
            FetchResult::Failure(msg) => View::Failure(msg),
            FetchResult::Success(readings) if readings.is_empty() => View::Empty,
            FetchResult::Success(readings) => View::Charts(readings),
        }
    }

    pub fn handle(&mut self, event: Event) -> Option<FetchRequest> {
        match event {
            Event::Activated => Some(self.begin_fetch()),
            Event::DeviceSelected(id) => {
                if !self.devices.contains(&id) || id == self.device_id {
                    return None;
                }
                self.device_id = id;
                Some(self.begin_fetch())
            }
            Event::WindowFieldEdited(field, raw) => {
                let before = self.window.lookback_ms();
                self.window.set_raw(field, &raw);
                (self.window.lookback_ms() != before).then(|| self.begin_fetch())
            }
            Event::FetchClicked | Event::RefreshClicked => {
                if !self.controls_enabled() {
                    return None;
                }
                Some(self.begin_fetch())
            }
            Event::Settled { epoch, outcome } => {
                if self.accepts(epoch) {
                    self.result = match outcome {
                        Ok(readings) => {
                            info!("epoch {epoch}: {} readings", readings.len());
                            FetchResult::Success(readings)
                        }
                        Err(e) => FetchResult::Failure(e.to_string()),
                    };
                }
                None
            }
            Event::TimedOut { epoch, after } => {
                if self.accepts(epoch) {
                    self.result = FetchResult::Failure(FetchError::Timeout(after).to_string());
                }
                None
            }
        }
    }

    fn accepts(&self, epoch: u64) -> bool {
        let ok = epoch == self.epoch && self.is_loading();
        if !ok {
            debug!("discarding result of epoch {epoch}, latest is {}", self.epoch);
        }
        ok
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        self.epoch += 1;
        self.result = FetchResult::Loading;

        let req = FetchRequest {
            epoch: self.epoch,
            device_id: self.device_id.clone(),
            lookback_ms: self.window.lookback_ms(),
        };
        debug!("begin fetch {req:?}");
        req
    }
}
