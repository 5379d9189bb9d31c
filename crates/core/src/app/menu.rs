use super::paths::PathResolver;
use crate::domain::{MenuCommand, MenuState, NO_FILE_PLACEHOLDER};

/// Compute what the host should show for `command` right before it renders.
///
/// Everything is hidden outside a git repository. File commands are
/// disabled, and labelled with a placeholder, while no document is active.
pub fn describe(paths: &PathResolver, command: MenuCommand) -> MenuState {
    let visible = paths.repo_path().is_some();

    if !command.is_file_command() {
        return MenuState {
            visible,
            enabled: true,
            label: command.label(NO_FILE_PLACEHOLDER),
        };
    }

    if !visible {
        return MenuState {
            visible,
            enabled: false,
            label: command.label(NO_FILE_PLACEHOLDER),
        };
    }

    let file_name = paths
        .active_file_path()
        .and_then(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned());

    match file_name {
        Some(name) => MenuState {
            visible,
            enabled: true,
            label: command.label(&name),
        },
        None => MenuState {
            visible,
            enabled: false,
            label: command.label(NO_FILE_PLACEHOLDER),
        },
    }
}
