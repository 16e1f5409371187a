//! Recording engine for tests.

use std::cell::{Cell, RefCell};

use super::{EngineModule, MapEngine};
use crate::descriptor::{MapDescriptor, UiPosition, ViewDescriptor, WidgetDescriptor};
use crate::error::EngineError;
use crate::model::LonLat;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    LoadModules(Vec<EngineModule>),
    CreateMap { basemap: String, layers: Vec<String> },
    CreateView { center: LonLat, zoom: f64, container: String },
    AddWidget { view: u32, position: UiPosition },
    WhenReady(u32),
    Detach(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailAt {
    LoadModules,
    CreateMap,
    CreateView,
    AddWidget,
    WhenReady,
}

#[derive(Debug, PartialEq)]
pub struct FakeView {
    pub id: u32,
    pub layers: Vec<String>,
}

pub struct FakeEngine {
    calls: RefCell<Vec<Call>>,
    fail_at: Cell<Option<FailAt>>,
    ready: Cell<bool>,
    next_id: Cell<u32>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_at: Cell::new(None),
            ready: Cell::new(true),
            next_id: Cell::new(1),
        }
    }
}

impl FakeEngine {
    pub fn failing_at(step: FailAt) -> Self {
        let engine = Self::default();
        engine.fail_at.set(Some(step));
        engine
    }

    pub fn set_fail_at(&self, step: Option<FailAt>) {
        self.fail_at.set(step);
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.set(ready);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn detached(&self) -> Vec<u32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Detach(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn make_view(&self, layers: &[&str]) -> FakeView {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        FakeView {
            id,
            layers: layers.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn check(&self, step: FailAt) -> Result<(), EngineError> {
        if self.fail_at.get() != Some(step) {
            return Ok(());
        }
        Err(match step {
            FailAt::LoadModules => EngineError::ModuleLoad("script error".into()),
            FailAt::CreateMap => EngineError::construct("map", "bad basemap"),
            FailAt::CreateView => EngineError::construct("map view", "no container"),
            FailAt::AddWidget => EngineError::construct("legend", "no layer"),
            FailAt::WhenReady => EngineError::Ready("rejected".into()),
        })
    }
}

impl MapEngine for FakeEngine {
    type Modules = Vec<EngineModule>;
    type Map = MapDescriptor;
    type View = FakeView;
    type Container = String;

    async fn load_modules(&self, modules: &[EngineModule]) -> Result<Vec<EngineModule>, EngineError> {
        self.calls.borrow_mut().push(Call::LoadModules(modules.to_vec()));
        self.check(FailAt::LoadModules)?;
        Ok(modules.to_vec())
    }

    fn create_map(&self, _: &Vec<EngineModule>, map: &MapDescriptor) -> Result<MapDescriptor, EngineError> {
        self.calls.borrow_mut().push(Call::CreateMap {
            basemap: map.basemap.clone(),
            layers: map.layers.iter().map(|l| l.id.clone()).collect(),
        });
        self.check(FailAt::CreateMap)?;
        Ok(map.clone())
    }

    fn create_view(
        &self,
        _: &Vec<EngineModule>,
        map: MapDescriptor,
        view: &ViewDescriptor,
        container: &String,
    ) -> Result<FakeView, EngineError> {
        self.calls.borrow_mut().push(Call::CreateView {
            center: view.center,
            zoom: view.zoom,
            container: container.clone(),
        });
        self.check(FailAt::CreateView)?;
        let ids: Vec<&str> = map.layers.iter().map(|l| l.id.as_str()).collect();
        Ok(self.make_view(&ids))
    }

    fn add_widget(
        &self,
        _: &Vec<EngineModule>,
        view: &FakeView,
        widget: &WidgetDescriptor,
    ) -> Result<(), EngineError> {
        self.calls.borrow_mut().push(Call::AddWidget {
            view: view.id,
            position: widget.position(),
        });
        self.check(FailAt::AddWidget)
    }

    async fn when_ready(&self, view: &FakeView) -> Result<bool, EngineError> {
        self.calls.borrow_mut().push(Call::WhenReady(view.id));
        self.check(FailAt::WhenReady)?;
        Ok(self.ready.get())
    }

    fn detach(&self, view: &FakeView) {
        self.calls.borrow_mut().push(Call::Detach(view.id));
    }
}
