//! Lifecycle of the embedded map view.
//!
//! Each (re)initialization takes a generation from `begin`; only the newest
//! generation may install its view. Older results that still arrive are
//! detached and dropped without an event.

use std::cell::RefCell;
use std::rc::Rc;

use crate::descriptor::plan;
use crate::engine::{MapEngine, REQUIRED_MODULES};
use crate::error::InitError;
use crate::model::MapSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation(u64);

/// A view that finished building, with the readiness it reported.
pub struct ReadyView<V> {
    pub view: V,
    pub ready: bool,
}

/// Runs one full initialization: load modules, build the map and view, attach
/// widgets, then wait for the view to report ready.
///
/// A view that was already bound when a later step fails is detached again.
pub async fn initialize<E: MapEngine>(
    engine: &E,
    settings: &MapSettings,
    container: &E::Container,
) -> Result<ReadyView<E::View>, InitError> {
    settings.validate()?;
    let modules = engine.load_modules(&REQUIRED_MODULES).await?;
    let plan = plan(settings);
    let map = engine.create_map(&modules, &plan.map)?;
    let view = engine.create_view(&modules, map, &plan.view, container)?;

    for widget in &plan.widgets {
        if let Err(err) = engine.add_widget(&modules, &view, widget) {
            engine.detach(&view);
            return Err(err.into());
        }
    }
    match engine.when_ready(&view).await {
        Ok(ready) => Ok(ReadyView { view, ready }),
        Err(err) => {
            engine.detach(&view);
            Err(err.into())
        }
    }
}

pub struct MapSession<E: MapEngine> {
    engine: Rc<E>,
    view: Option<E::View>,
    loaded: bool,
    generation: u64,
}

impl<E: MapEngine> MapSession<E> {
    pub fn new(engine: Rc<E>) -> Self {
        Self {
            engine,
            view: None,
            loaded: false,
            generation: 0,
        }
    }

    pub fn engine(&self) -> Rc<E> {
        self.engine.clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn view(&self) -> Option<&E::View> {
        self.view.as_ref()
    }

    /// Starts a new initialization, superseding any still in flight.
    pub fn begin(&mut self) -> Generation {
        self.generation += 1;
        Generation(self.generation)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.generation
    }

    /// Applies the outcome of the initialization started as `generation`.
    /// Returns the readiness to announce, or `None` when there is nothing to announce.
    pub fn complete(
        &mut self,
        generation: Generation,
        result: Result<ReadyView<E::View>, InitError>,
    ) -> Option<bool> {
        if !self.is_current(generation) {
            log::debug!("discarding superseded map initialization {}", generation.0);
            if let Ok(stale) = result {
                self.engine.detach(&stale.view);
            }
            return None;
        }
        if let Some(previous) = self.view.take() {
            self.engine.detach(&previous);
        }
        match result {
            Ok(ReadyView { view, ready }) => {
                log::info!("map view ready: {ready}");
                self.view = Some(view);
                self.loaded = ready;
                Some(ready)
            }
            Err(err) => {
                log::error!("map initialization failed: {err}");
                self.loaded = false;
                None
            }
        }
    }

    /// Releases the container. Safe to call with no view; in-flight
    /// initializations are superseded.
    pub fn destroy(&mut self) {
        self.generation += 1;
        if let Some(view) = self.view.take() {
            self.engine.detach(&view);
        }
        self.loaded = false;
    }
}

/// Runs one initialization for `session` without holding its borrow across the awaits.
pub async fn reconfigure<E: MapEngine>(
    session: &Rc<RefCell<MapSession<E>>>,
    settings: &MapSettings,
    container: &E::Container,
) -> Option<bool> {
    let (generation, engine) = {
        let mut s = session.borrow_mut();
        (s.begin(), s.engine())
    };
    log::debug!("initializing map {}: {:?}", generation.0, settings);
    let result = initialize(engine.as_ref(), settings, container).await;
    session.borrow_mut().complete(generation, result)
}
