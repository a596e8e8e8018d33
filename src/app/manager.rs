//! Module Manager
//!
//! Owns every open module and the notebook that hosts the docked ones.

use ahash::AHashMap;
use tracing::debug;

use crate::host::{WindowHost, WindowId};
use crate::module::SatModule;

/// Notebook of docked modules, in page order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    pages: Vec<String>,
}

impl Notebook {
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn contains(&self, module: &str) -> bool {
        self.pages.iter().any(|page| page == module)
    }

    /// Take ownership of a module's content, appended as the last page
    pub fn dock(&mut self, module: &str, host: &mut impl WindowHost) {
        if !self.contains(module) {
            self.pages.push(module.to_string());
        }
        host.dock_content(module);
        debug!(module, pages = self.pages.len(), "Docked");
    }

    /// Release a module's content; no-op when it isn't docked
    pub fn undock(&mut self, module: &str, host: &mut impl WindowHost) {
        if !self.contains(module) {
            return;
        }
        self.pages.retain(|page| page != module);
        host.undock_content(module);
        debug!(module, pages = self.pages.len(), "Undocked");
    }
}

#[derive(Debug, Default)]
pub struct ModuleManager {
    modules: AHashMap<String, SatModule>,
    notebook: Notebook,
}

impl ModuleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, module: SatModule) {
        self.modules.insert(module.name().to_string(), module);
    }

    pub fn remove(&mut self, name: &str) -> Option<SatModule> {
        self.modules.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&SatModule> {
        self.modules.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SatModule> {
        self.modules.get_mut(name)
    }

    /// A module together with the notebook, for presentation changes
    pub fn module_and_notebook(&mut self, name: &str) -> Option<(&mut SatModule, &mut Notebook)> {
        let module = self.modules.get_mut(name)?;
        Some((module, &mut self.notebook))
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    pub fn notebook_mut(&mut self) -> &mut Notebook {
        &mut self.notebook
    }

    /// Open module names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module whose own window is `window`
    pub fn find_by_host_window(&self, window: WindowId) -> Option<&str> {
        self.modules
            .values()
            .find(|m| m.host_window() == Some(window))
            .map(SatModule::name)
    }

    /// Module owning an auxiliary window (controller or time controller)
    pub fn find_by_auxiliary_window(&self, window: WindowId) -> Option<&str> {
        self.modules
            .values()
            .find(|m| {
                m.time_controller().window() == Some(window)
                    || m.radio.as_ref().is_some_and(|s| s.window == window)
                    || m.rotator.as_ref().is_some_and(|s| s.window == window)
            })
            .map(SatModule::name)
    }
}
