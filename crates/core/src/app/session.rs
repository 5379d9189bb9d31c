use super::dispatcher::{Dispatcher, Outcome};
use super::menu;
use super::paths::PathResolver;
use super::tool::ToolLocator;
use crate::domain::{CommandKind, CommandScope, MenuCommand, MenuState, RefreshMode};
use crate::error::Result;
use crate::ports::{HostContext, ProcessLauncher};
use std::sync::Arc;
use tracing::{debug, info};

/// Per-host-session state: the path cache plus the dispatcher acting on it.
///
/// The host forwards its lifecycle events here so the cache is dropped at
/// the right moments; everything else is a synchronous pull.
pub struct Session {
    paths: PathResolver,
    dispatcher: Dispatcher,
}

impl Session {
    pub fn new(
        host: Arc<dyn HostContext>,
        launcher: Arc<dyn ProcessLauncher>,
        locator: ToolLocator,
    ) -> Self {
        Self {
            paths: PathResolver::new(host),
            dispatcher: Dispatcher::new(launcher, locator),
        }
    }

    pub fn paths(&self) -> &PathResolver {
        &self.paths
    }

    pub fn refresh(&mut self, mode: RefreshMode) {
        self.paths.refresh(mode);
    }

    /// A solution was opened or closed
    pub fn on_solution_changed(&mut self) {
        info!("Solution changed, dropping cached paths");
        self.refresh(RefreshMode::All);
    }

    /// A window gained focus; only the active document can have changed
    pub fn on_window_activated(&mut self) {
        debug!("Window activated");
        self.refresh(RefreshMode::ActiveDocument);
    }

    pub fn describe(&self, command: MenuCommand) -> MenuState {
        menu::describe(&self.paths, command)
    }

    pub fn execute(&self, scope: CommandScope, command: CommandKind) -> Result<Outcome> {
        self.dispatcher.execute(&self.paths, scope, command)
    }

    /// Run a menu entry. The menu root has nothing to run and yields `None`.
    pub fn invoke(&self, command: MenuCommand) -> Result<Option<Outcome>> {
        match command.binding() {
            Some((scope, kind)) => self.execute(scope, kind).map(Some),
            None => Ok(None),
        }
    }
}
