use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::models::StatusReport;
use crate::services::{check_status, ApiClient};

/// Timer que repite un callback hasta ser dropeado
pub trait RepeatingTimer {
    fn every<F>(millis: u32, tick: F) -> Self
    where
        F: FnMut() + 'static;
}

impl RepeatingTimer for Interval {
    fn every<F>(millis: u32, tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Interval::new(millis, tick)
    }
}

/// Owns the polling timer: one check on `start`, then one per tick until `stop` or drop.
pub struct StatusPoller<T: RepeatingTimer = Interval> {
    timer: Option<T>,
}

impl<T: RepeatingTimer> Default for StatusPoller<T> {
    fn default() -> Self {
        Self { timer: None }
    }
}

impl<T: RepeatingTimer> StatusPoller<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `tick` now and schedules it every `interval_ms`. A running timer is replaced.
    pub fn start<F>(&mut self, interval_ms: u32, tick: F)
    where
        F: Fn() + 'static,
    {
        self.stop();
        let tick = Rc::new(tick);
        tick();

        log::info!("⏰ Status polling cada {} segundos", interval_ms / 1000);
        self.timer = Some(T::every(interval_ms, move || tick()));
    }

    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            log::info!("⏹️ Status polling detenido");
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }
}

pub struct UseStatusPollerHandle {
    /// `None` until the first check completes
    pub report: UseStateHandle<Option<StatusReport>>,
    pub refresh: Callback<()>,
}

/// Checks status on mount and then every `interval_ms`; the interval is dropped on unmount.
#[hook]
pub fn use_status_poller(api: ApiClient, interval_ms: u32) -> UseStatusPollerHandle {
    let report = use_state(|| None::<StatusReport>);
    let poller = use_mut_ref(StatusPoller::<Interval>::new);

    let check = {
        let report = report.clone();
        Callback::from(move |_| {
            let report = report.clone();
            let api = api.clone();
            // Sin deduplicación: una respuesta lenta puede solaparse con el siguiente tick
            wasm_bindgen_futures::spawn_local(async move {
                report.set(Some(check_status(&api).await));
            });
        })
    };

    {
        let check = check.clone();
        use_effect_with(interval_ms, move |interval_ms| {
            poller
                .borrow_mut()
                .start(*interval_ms, move || check.emit(()));

            move || poller.borrow_mut().stop()
        });
    }

    UseStatusPollerHandle {
        report,
        refresh: check,
    }
}
