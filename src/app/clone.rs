//! Clone Module
//!
//! The clone dialog asks for a new module name; on OK the module file is
//! copied byte for byte and, when requested, the new module is opened the
//! way the source is currently shown.

use std::ops::Range;
use tracing::{error, info, warn};

use super::Workspace;
use crate::constants::MODULE_NAME_MAX_LEN;
use crate::domain::{PanePositions, PresentationState, Size};
use crate::error::Result;
use crate::eventing::{ActionOutcome, UiEvent};
use crate::helpers::{EditResult, NameEntry, copy_file, is_valid_name, module_file_path};
use crate::host::{DialogResponse, WindowHost};
use crate::i18n::{Locale, t};
use crate::module::SatModule;

/// Model of the clone dialog
#[derive(Debug, Clone)]
pub struct CloneDialog {
    source: String,
    open_modules: Vec<String>,
    entry: NameEntry,
    open_when_created: bool,
    pub title: String,
    pub name_label: String,
    pub name_tooltip: String,
    pub open_label: String,
}

impl CloneDialog {
    /// Dialog for cloning `source`, prefilled with the source name
    pub fn new(source: &str, locale: Locale) -> Self {
        let mut entry = NameEntry::new(MODULE_NAME_MAX_LEN);
        entry.set_text(source);
        Self {
            source: source.to_string(),
            open_modules: Vec::new(),
            entry,
            open_when_created: true,
            title: t(locale, "title-clone"),
            name_label: t(locale, "clone-name-label"),
            name_tooltip: t(locale, "clone-name-tooltip"),
            open_label: t(locale, "clone-open-toggle"),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Names of modules currently open; none of them can be a clone target
    pub fn with_open_modules(mut self, names: Vec<String>) -> Self {
        self.open_modules = names;
        self
    }

    pub fn entry(&self) -> &NameEntry {
        &self.entry
    }

    /// Current content of the name entry
    pub fn name(&self) -> &str {
        self.entry.text()
    }

    /// Typing at the cursor (end of the entry)
    pub fn type_text(&mut self, text: &str) -> EditResult {
        self.entry.push_str(text)
    }

    pub fn clear_name(&mut self) {
        self.entry.clear();
    }

    pub fn delete(&mut self, range: Range<usize>) {
        self.entry.delete(range);
    }

    pub fn open_when_created(&self) -> bool {
        self.open_when_created
    }

    pub fn set_open_when_created(&mut self, open: bool) {
        self.open_when_created = open;
    }

    /// OK is sensitive only for a valid name that is neither the source's
    /// nor the name of another open module
    pub fn accept_enabled(&self) -> bool {
        let name = self.name();
        is_valid_name(name) && name != self.source && !self.open_modules.iter().any(|m| m == name)
    }
}

impl<H: WindowHost> Workspace<H> {
    /// "Clone..." on module `source`
    pub fn clone_module(&mut self, source: &str) -> Result<ActionOutcome> {
        let Some(module) = self.manager.get(source) else {
            error!(bug = true, module = source, "Clone requested for unknown module");
            return Ok(ActionOutcome::Ignored);
        };
        let state = module.state();
        let panes = module.layout().restrict(self.ctx.host.pane_positions(source));
        let size = self.ctx.host.content_size(source);
        let source_file = module.file().to_path_buf();

        let mut dialog =
            CloneDialog::new(source, self.ctx.locale()).with_open_modules(self.manager.names());
        match self.ctx.host.run_clone_dialog(&mut dialog) {
            DialogResponse::Accept => {}
            DialogResponse::Cancel => {
                info!(module = source, "Cloning cancelled by user");
                return Ok(ActionOutcome::CloneCancelled);
            }
            DialogResponse::Interrupted => {
                info!(module = source, "Cloning interrupted");
                return Ok(ActionOutcome::CloneCancelled);
            }
        }

        let target = dialog.name().to_string();
        let target_file = module_file_path(&self.ctx.paths.modules_dir, &target);
        if target_file.exists() {
            warn!(module = source, target = %target, path = ?target_file, "Overwriting existing module file");
        }

        if let Err(e) = copy_file(&source_file, &target_file) {
            error!(module = source, target = %target, error = %e, "Failed to clone module");
            return Ok(ActionOutcome::CloneFailed);
        }
        info!(module = source, target = %target, "Successfully cloned module");

        let opened = dialog.open_when_created() && self.open_clone(&target, state, panes, size);
        self.ctx.emit(UiEvent::ModuleCloned {
            source: source.to_string(),
            target: target.clone(),
            opened,
        });
        Ok(ActionOutcome::Cloned { target, opened })
    }

    fn open_clone(
        &mut self,
        target: &str,
        state: PresentationState,
        panes: PanePositions,
        size: Size,
    ) -> bool {
        match SatModule::load(target, &self.ctx.paths.modules_dir) {
            Ok(module) => {
                self.present_module(module, state, panes, Some(size));
                true
            }
            Err(e) => {
                error!(module = target, error = %e, "Failed to open cloned module");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_workspace;
    use crate::eventing::ModuleAction;
    use crate::host::{CloneScript, WindowContent};
    use crate::module::sat_module::tests::SAMPLE_MODULE;
    use std::fs;

    #[test]
    fn dialog_starts_with_source_name_and_open_toggle() {
        let dialog = CloneDialog::new("SAT", Locale::EnUS);
        assert_eq!(dialog.name(), "SAT");
        assert!(dialog.open_when_created());
        assert!(!dialog.accept_enabled());
        assert_eq!(dialog.name_label, "Name of new module:");
        assert_eq!(dialog.entry().max_len(), 25);
    }

    #[test]
    fn typed_space_never_reaches_the_entry() {
        let mut dialog = CloneDialog::new("SAT", Locale::EnUS);
        dialog.clear_name();
        assert!(!dialog.accept_enabled());
        let result = dialog.type_text("SAT 2");
        assert_eq!(result.rejected, 1);
        assert_eq!(dialog.name(), "SAT2");
        assert!(dialog.accept_enabled());
    }

    #[test]
    fn clone_copies_module_file_byte_identical() {
        let (mut ws, _rx, dir) = test_workspace();
        ws.open_module("SAT").expect("open");
        ws.ctx.host.push_clone_script(CloneScript {
            open_when_created: false,
            ..CloneScript::accept("SAT2")
        });

        let outcome = ws.dispatch("SAT", ModuleAction::Clone);
        assert_eq!(
            outcome,
            ActionOutcome::Cloned {
                target: "SAT2".to_string(),
                opened: false
            }
        );
        let source = fs::read(dir.path().join("modules/SAT.mod")).expect("read");
        let target = fs::read(dir.path().join("modules/SAT2.mod")).expect("read");
        assert_eq!(source, target);
        assert!(!ws.manager().contains("SAT2"));
    }

    #[test]
    fn clone_onto_existing_name_overwrites() {
        let (mut ws, _rx, dir) = test_workspace();
        fs::write(dir.path().join("modules/OLD.mod"), "[GLOBAL]\nLAYOUT = 0\n").expect("write");
        ws.open_module("SAT").expect("open");
        ws.ctx.host.push_clone_script(CloneScript {
            open_when_created: false,
            ..CloneScript::accept("OLD")
        });

        let outcome = ws.dispatch("SAT", ModuleAction::Clone);
        assert!(matches!(outcome, ActionOutcome::Cloned { .. }));
        let target = fs::read_to_string(dir.path().join("modules/OLD.mod")).expect("read");
        assert_eq!(target, SAMPLE_MODULE);
    }

    #[test]
    fn invalid_typed_characters_are_dropped_and_beep() {
        let (mut ws, _rx, dir) = test_workspace();
        ws.open_module("SAT").expect("open");
        ws.ctx.host.push_clone_script(CloneScript {
            open_when_created: false,
            ..CloneScript::accept("MY SAT")
        });

        ws.dispatch("SAT", ModuleAction::Clone);
        assert_eq!(ws.ctx.host.clone_entries, vec!["MYSAT".to_string()]);
        assert_eq!(ws.ctx.host.beeps, 1);
        assert!(dir.path().join("modules/MYSAT.mod").exists());
    }

    #[test]
    fn cancel_and_interrupt_copy_nothing() {
        let (mut ws, _rx, dir) = test_workspace();
        ws.open_module("SAT").expect("open");
        for response in [DialogResponse::Cancel, DialogResponse::Interrupted] {
            ws.ctx.host.push_clone_script(CloneScript {
                response,
                ..CloneScript::accept("SAT2")
            });
            assert_eq!(ws.dispatch("SAT", ModuleAction::Clone), ActionOutcome::CloneCancelled);
        }
        // Unscripted dialogs are cancelled as well
        assert_eq!(ws.dispatch("SAT", ModuleAction::Clone), ActionOutcome::CloneCancelled);
        assert!(!dir.path().join("modules/SAT2.mod").exists());
    }

    #[test]
    fn accept_is_insensitive_for_empty_or_same_name() {
        let (mut ws, _rx, _dir) = test_workspace();
        ws.open_module("SAT").expect("open");
        ws.ctx.host.push_clone_script(CloneScript::accept(""));
        ws.ctx.host.push_clone_script(CloneScript::accept("SAT"));
        assert_eq!(ws.dispatch("SAT", ModuleAction::Clone), ActionOutcome::CloneCancelled);
        assert_eq!(ws.dispatch("SAT", ModuleAction::Clone), ActionOutcome::CloneCancelled);
    }

    #[test]
    fn copy_failure_is_absorbed() {
        let (mut ws, _rx, dir) = test_workspace();
        ws.open_module("SAT").expect("open");
        fs::remove_file(dir.path().join("modules/SAT.mod")).expect("remove");
        ws.ctx.host.push_clone_script(CloneScript::accept("SAT2"));

        assert_eq!(ws.dispatch("SAT", ModuleAction::Clone), ActionOutcome::CloneFailed);
        assert!(ws.ctx.host.errors.is_empty());
        assert!(!ws.manager().contains("SAT2"));
    }

    #[test]
    fn docked_clone_replicates_pane_positions() {
        let (mut ws, _rx, _dir) = test_workspace();
        ws.open_module("SAT").expect("open");
        ws.ctx.host.drag_panes("SAT", PanePositions::new(150, 250));
        ws.ctx.host.push_clone_script(CloneScript::accept("SAT2"));

        let outcome = ws.dispatch("SAT", ModuleAction::Clone);
        assert_eq!(
            outcome,
            ActionOutcome::Cloned {
                target: "SAT2".to_string(),
                opened: true
            }
        );
        let clone = ws.module("SAT2").expect("open");
        assert_eq!(clone.state(), PresentationState::Docked);
        assert_eq!(ws.ctx.host.pane_positions("SAT2"), PanePositions::new(150, 250));
        assert!(ws.manager().notebook().contains("SAT2"));
    }

    #[test]
    fn floating_clone_gets_own_window_with_source_size() {
        let (mut ws, _rx, _dir) = test_workspace();
        ws.open_module("SAT").expect("open");
        ws.dispatch("SAT", ModuleAction::ToggleDock);
        ws.ctx.host.set_content_size("SAT", Size::new(720, 540));
        ws.ctx.host.push_clone_script(CloneScript::accept("SAT2"));

        ws.dispatch("SAT", ModuleAction::Clone);
        let clone = ws.module("SAT2").expect("open");
        assert_eq!(clone.state(), PresentationState::Windowed);
        let window = clone.host_window().expect("window");
        let record = ws.ctx.host.window(window).expect("live");
        assert_eq!(record.default_size, Some(Size::new(720, 540)));
        assert_eq!(record.spec.title, "GPREDICT: SAT2 (home)");
        assert!(matches!(&record.spec.content, WindowContent::Module { name } if name == "SAT2"));
    }

    #[test]
    fn fullscreen_clone_opens_fullscreen() {
        let (mut ws, _rx, _dir) = test_workspace();
        ws.open_module("SAT").expect("open");
        ws.dispatch("SAT", ModuleAction::ToggleFullscreen);
        ws.ctx.host.push_clone_script(CloneScript::accept("SAT2"));

        ws.dispatch("SAT", ModuleAction::Clone);
        let clone = ws.module("SAT2").expect("open");
        assert_eq!(clone.state(), PresentationState::Fullscreen);
        let record = ws.ctx.host.window(clone.host_window().expect("window")).expect("live");
        assert!(record.fullscreen);
    }

    #[test]
    fn accept_is_insensitive_for_open_module_name() {
        let mut dialog =
            CloneDialog::new("SAT", Locale::EnUS).with_open_modules(vec!["OTHER".to_string()]);
        dialog.clear_name();
        dialog.type_text("OTHER");
        assert!(!dialog.accept_enabled());
        dialog.type_text("2");
        assert!(dialog.accept_enabled());
    }

    #[test]
    fn open_module_file_is_never_overwritten_by_clone() {
        let (mut ws, _rx, dir) = test_workspace();
        let other = "[GLOBAL]\nLAYOUT = 0\nQTHFILE = \"away.qth\"\n";
        fs::write(dir.path().join("modules/OTHER.mod"), other).expect("write");
        ws.open_module("SAT").expect("open");
        ws.open_module("OTHER").expect("open");
        ws.ctx.host.push_clone_script(CloneScript::accept("OTHER"));

        assert_eq!(ws.dispatch("SAT", ModuleAction::Clone), ActionOutcome::CloneCancelled);
        assert_eq!(ws.manager().len(), 2);

        ws.close_all();
        let saved = fs::read_to_string(dir.path().join("modules/OTHER.mod")).expect("read");
        assert!(saved.contains("away.qth"));
    }
}
