//! The grid instance and its fetch cycle.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use datagrid_dom::{find_element, to_markup, Element, Event};
use serde_json::Value;

use crate::config::{GridConfig, GridOptions};
use crate::dispatch::Category;
use crate::error::{ConfigError, GridError};
use crate::filter::{collect_bindings, FilterBinding};
use crate::pager::{PagerLimits, PAGE_KEY};
use crate::params::{QueryParameters, Role};
use crate::registry::Registry;
use crate::render::{mark_busy, render_into, Rendered};
use crate::result::{Payload, ResultSet};
use crate::sort::{toggle, COLUMN_KEY};
use crate::source::SourceRequest;

/// Where a grid is in its fetch cycle.
///
/// A cycle goes `Idle -> Loading -> Rendered -> Idle`, or through `Error`
/// back to `Idle` when the source or parser fails. While other fetches are
/// still pending the grid settles in `Loading` instead of `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Rendered,
    Error,
}

/// How a fetch or interaction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A table with `rows` body rows was rendered.
    Rendered { rows: usize, last_page: u64 },
    /// The result was empty; the no-data message was rendered.
    NoData,
    /// A newer fetch was issued before this one completed, and stale
    /// completions are suppressed.
    Stale { sequence: u64 },
    /// Nothing was fetched (unknown source, unsortable column, click on an
    /// element without an action, change on an unbound control).
    Skipped,
}

struct GridState {
    config: GridConfig,
    params: QueryParameters,
    container: Element,
    filters: Vec<FilterBinding>,
    state: FetchState,
    /// Sequence number of the latest issued fetch.
    issued: u64,
    in_flight: usize,
    last_page: Option<u64>,
}

impl GridState {
    fn transition(&mut self, next: FetchState) {
        if self.state != next {
            log::debug!("[datagrid] {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Leaves a completed cycle.
    fn settle(&mut self) {
        let next = if self.in_flight > 0 {
            FetchState::Loading
        } else {
            FetchState::Idle
        };
        self.transition(next);
    }

    fn set_role(&mut self, role: Role, value: impl Into<Value>) {
        let name = self.config.param_name(role).to_string();
        self.params.set(name, value);
    }
}

/// What a render reads, copied out of the lock.
struct Snapshot {
    config: GridConfig,
    params: QueryParameters,
    container: Element,
}

impl Snapshot {
    fn of(state: &GridState) -> Self {
        Self {
            config: state.config.clone(),
            params: state.params.clone(),
            container: state.container.clone(),
        }
    }
}

/// Action attached to a clickable element.
enum Action {
    Sort(usize),
    Page(u64),
}

impl Action {
    fn from_element(element: &Element) -> Option<Self> {
        if !element.clickable || element.disabled {
            return None;
        }
        if let Some(index) = element.get_data(COLUMN_KEY) {
            return index.parse().ok().map(Self::Sort);
        }
        element.get_data(PAGE_KEY)?.parse().ok().map(Self::Page)
    }
}

/// A data grid bound to a container element.
///
/// Cloning is cheap and yields another handle to the same grid, so a
/// handle can be moved into a task while another one keeps driving
/// interactions. The registry is the only thing shared between distinct
/// grids.
#[derive(Clone)]
pub struct Datagrid {
    inner: Arc<RwLock<GridState>>,
    registry: Arc<Registry>,
}

impl Datagrid {
    /// Creates a grid rendering into `container`. Configuration errors are
    /// reported here; no fetch is started (see [`Datagrid::init`]).
    pub fn new(
        container: Element,
        options: GridOptions,
        registry: Arc<Registry>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::with_config(container, options.resolve()?, registry))
    }

    pub fn with_config(container: Element, config: GridConfig, registry: Arc<Registry>) -> Self {
        log::debug!(
            "[datagrid] Grid on '{}' with {} columns",
            container.id,
            config.columns.len()
        );
        let state = GridState {
            params: config.initial_params(),
            config,
            container,
            filters: Vec::new(),
            state: FetchState::Idle,
            issued: 0,
            in_flight: 0,
            last_page: None,
        };
        Self {
            inner: Arc::new(RwLock::new(state)),
            registry,
        }
    }

    /// Runs the first fetch if `autoload` is set.
    pub async fn init(&self) -> Result<Option<FetchOutcome>, GridError> {
        let autoload = self.read().config.autoload;
        if !autoload {
            return Ok(None);
        }
        self.get_data(None).await.map(Some)
    }

    /// Runs one fetch cycle: `on_before`, merge `filters` into the
    /// parameters, mark the table busy, fetch from the source, parse, render.
    ///
    /// Hooks and plugins run without the grid locked, so they may call back
    /// into any handle of this grid.
    ///
    /// Source and parse failures are returned; the container is left as it
    /// was (still busy).
    pub async fn get_data(&self, filters: Option<QueryParameters>) -> Result<FetchOutcome, GridError> {
        let (on_before, before) = {
            let state = self.read();
            (state.config.on_before.clone(), state.params.clone())
        };
        if let Some(on_before) = on_before {
            let mut edited = before.clone();
            on_before(&mut edited);
            self.write().params.apply_diff(&before, edited);
        }

        let (resolved, request, parse, sequence) = {
            let mut guard = self.write();
            let state = &mut *guard;

            if let Some(filters) = filters {
                state.params.merge(filters);
            }

            let resolved = match state
                .config
                .source
                .resolve(Category::Source, |name| self.registry.source(name))
            {
                Ok(resolved) => resolved,
                Err(e) => {
                    log::error!("[datagrid] {e}");
                    return Ok(FetchOutcome::Skipped);
                }
            };

            mark_busy(&mut state.container);
            state.issued += 1;
            state.in_flight += 1;
            state.transition(FetchState::Loading);

            let request = SourceRequest {
                url: state.config.url.clone(),
                params: state.params.clone(),
            };
            (resolved, request, state.config.parse.clone(), state.issued)
        };

        log::debug!("[datagrid] Fetch #{sequence} from '{}'", request.url);
        let fetched = resolved.plugin.fetch(request, resolved.args()).await;

        let result = fetched
            .map_err(GridError::from)
            .and_then(|payload| parse(payload).map_err(GridError::from));

        match result {
            Ok(result) => Ok(self.complete(sequence, result)),
            Err(e) => {
                let mut state = self.write();
                state.in_flight = state.in_flight.saturating_sub(1);
                state.transition(FetchState::Error);
                log::error!("[datagrid] Fetch #{sequence} failed: {e}");
                state.settle();
                Err(e)
            }
        }
    }

    fn complete(&self, sequence: u64, result: ResultSet) -> FetchOutcome {
        let snapshot = {
            let mut state = self.write();
            state.in_flight = state.in_flight.saturating_sub(1);

            if state.config.suppress_stale && sequence < state.issued {
                log::warn!(
                    "[datagrid] Dropping fetch #{sequence}, #{} is newer",
                    state.issued
                );
                state.settle();
                return FetchOutcome::Stale { sequence };
            }
            Snapshot::of(&state)
        };

        self.render_snapshot(snapshot, result)
    }

    /// Renders into a copy of the container, commits it, then runs
    /// `on_complete`. The grid is only locked to commit.
    fn render_snapshot(&self, snapshot: Snapshot, result: ResultSet) -> FetchOutcome {
        let Snapshot {
            config,
            params,
            mut container,
        } = snapshot;
        let rendered = render_into(&mut container, &config, &params, &self.registry, result);

        {
            let mut state = self.write();
            state.container = container.clone();
            state.last_page = match rendered {
                Rendered::Table { last_page, .. } => Some(last_page),
                Rendered::NoData => None,
            };
            state.transition(FetchState::Rendered);
        }

        if let Some(on_complete) = &config.on_complete {
            on_complete(&container);
        }
        self.write().settle();

        match rendered {
            Rendered::Table { rows, last_page } => FetchOutcome::Rendered { rows, last_page },
            Rendered::NoData => FetchOutcome::NoData,
        }
    }

    /// Parses `payload` with the configured parser and renders it, skipping
    /// the source.
    pub fn render(&self, payload: impl Into<Payload>) -> Result<FetchOutcome, GridError> {
        let (parse, snapshot) = {
            let state = self.read();
            (state.config.parse.clone(), Snapshot::of(&state))
        };
        let result = parse(payload.into())?;
        Ok(self.render_snapshot(snapshot, result))
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    /// Current page, 1 if the page parameter is missing or not a number.
    pub fn page(&self) -> u64 {
        let state = self.read();
        state
            .params
            .get_u64(state.config.param_name(Role::Page))
            .unwrap_or(1)
    }

    /// Sets the page parameter. Does not fetch.
    pub fn set_page(&self, page: u64) {
        self.write().set_role(Role::Page, page);
    }

    /// Snapshot of the query parameters.
    pub fn params(&self) -> QueryParameters {
        self.read().params.clone()
    }

    /// Sets one query parameter. Does not fetch.
    pub fn set_param(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.write().params.set(name, value);
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn config(&self) -> GridConfig {
        self.read().config.clone()
    }

    /// Snapshot of the container tree.
    pub fn container(&self) -> Element {
        self.read().container.clone()
    }

    /// Markup of the container.
    pub fn markup(&self) -> String {
        to_markup(&self.read().container)
    }

    pub fn state(&self) -> FetchState {
        self.read().state
    }

    /// Sequence number of the latest issued fetch (0 before the first).
    pub fn sequence(&self) -> u64 {
        self.read().issued
    }

    /// Last page computed by the latest table render.
    pub fn last_page(&self) -> Option<u64> {
        self.read().last_page
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Pager limits of `behavior` (e.g. `"sliding"`) for the current page.
    pub fn compute_limits(&self, behavior: &Value, last_page: u64) -> Option<PagerLimits> {
        PagerLimits::compute(behavior, self.page(), last_page)
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Toggles the sort on column `column_index` and fetches.
    pub async fn sort_by(&self, column_index: usize) -> Result<FetchOutcome, GridError> {
        let toggled = {
            let mut guard = self.write();
            let state = &mut *guard;
            toggle(&mut state.config, &mut state.params, column_index)
        };
        if !toggled {
            return Ok(FetchOutcome::Skipped);
        }
        self.get_data(None).await
    }

    /// Handles a click on the container element `id`: a sortable header
    /// toggles the sort, a page link moves to its page. Both fetch.
    pub async fn click(&self, id: &str) -> Result<FetchOutcome, GridError> {
        let action = {
            let state = self.read();
            find_element(&state.container, id).and_then(Action::from_element)
        };

        match action {
            Some(Action::Sort(index)) => self.sort_by(index).await,
            Some(Action::Page(page)) => {
                self.set_page(page);
                self.get_data(None).await
            }
            None => {
                log::debug!("[datagrid] No action on '{id}'");
                Ok(FetchOutcome::Skipped)
            }
        }
    }

    /// Binds the filter controls of `root` (or `root` itself if it is a
    /// control). Rebinding a control replaces its previous binding. Returns
    /// the number of controls bound.
    pub fn bind_filters(&self, root: &Element) -> usize {
        let bindings = collect_bindings(root);
        let count = bindings.len();

        let mut state = self.write();
        for binding in bindings {
            state.filters.retain(|b| b.control_id != binding.control_id);
            state.filters.push(binding);
        }
        log::debug!("[datagrid] Bound {count} filter controls under '{}'", root.id);
        count
    }

    /// Reads the bound control `control_id` from `form`, stores its value,
    /// goes back to page 1 and fetches.
    pub async fn control_changed(
        &self,
        form: &Element,
        control_id: &str,
    ) -> Result<FetchOutcome, GridError> {
        let updated = {
            let mut state = self.write();
            let change = state
                .filters
                .iter()
                .find(|b| b.control_id == control_id)
                .and_then(|b| Some((b.name.clone(), b.read(form)?)));

            match change {
                Some((name, value)) => {
                    state.params.set(name, value);
                    state.set_role(Role::Page, 1);
                    true
                }
                None => false,
            }
        };

        if !updated {
            log::debug!("[datagrid] '{control_id}' is not a bound filter");
            return Ok(FetchOutcome::Skipped);
        }
        self.get_data(None).await
    }

    /// Routes a UI event: clicks go to [`Datagrid::click`], changes to
    /// [`Datagrid::control_changed`] against `form`.
    pub async fn handle_event(&self, event: &Event, form: &Element) -> Result<FetchOutcome, GridError> {
        match event {
            Event::Click { target } => self.click(target).await,
            Event::Change { target } => self.control_changed(form, target).await,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, GridState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, GridState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Datagrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("Datagrid")
            .field("config", &state.config)
            .field("params", &state.params)
            .field("state", &state.state)
            .field("sequence", &state.issued)
            .finish_non_exhaustive()
    }
}
