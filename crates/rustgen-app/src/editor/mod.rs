//! Editor handles: lazily created, cached text surfaces keyed by mount point
//!
//! - `toolkit`: one-time global configuration (theme, tab width)
//! - `buffer`: the text buffer behind each surface

pub mod buffer;
pub mod toolkit;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use rustgen_core::prelude::*;

use crate::config::EditorSettings;

pub use buffer::{Cursor, CursorHint, EditorCommand, EditorId, EditorInstance};
pub use toolkit::{EditorTheme, EditorToolkit, ToolkitConfig};

/// Stable identifier of a place in the view that hosts an editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    /// JSON document typed or pasted by the user
    Source,
    /// Code returned by the generation service
    Generated,
}

impl MountPoint {
    pub fn label(&self) -> &'static str {
        match self {
            MountPoint::Source => "JSON",
            MountPoint::Generated => "Generated",
        }
    }

    /// The other pane, for focus cycling
    pub fn other(&self) -> MountPoint {
        match self {
            MountPoint::Source => MountPoint::Generated,
            MountPoint::Generated => MountPoint::Source,
        }
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a mount point holds once acquisition has been attempted
#[derive(Debug)]
pub enum EditorSlot {
    Ready(EditorInstance),
    /// Creation failed; the message is rendered in place of the editor
    Failed(String),
}

/// Owns every editor instance. At most one instance exists per mount point
/// and it lives as long as the registry.
#[derive(Debug)]
pub struct EditorRegistry {
    toolkit: EditorToolkit,
    slots: HashMap<MountPoint, EditorSlot>,
    created: usize,
}

impl EditorRegistry {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            toolkit: EditorToolkit::new(settings),
            slots: HashMap::new(),
            created: 0,
        }
    }

    /// Return the editor at `mount`, creating it on first access.
    ///
    /// A cached editor is returned unchanged even when `mode` differs from the
    /// one it was created with. A mount point whose creation failed keeps
    /// failing with the same message.
    pub fn acquire(&mut self, mount: MountPoint, mode: &str) -> Result<&mut EditorInstance> {
        match self.slots.entry(mount) {
            Entry::Occupied(entry) => match entry.into_mut() {
                EditorSlot::Ready(editor) => {
                    if editor.mode() != mode {
                        debug!(
                            "Editor at {} already uses mode '{}', ignoring requested '{}'",
                            mount,
                            editor.mode(),
                            mode
                        );
                    }
                    Ok(editor)
                }
                EditorSlot::Failed(reason) => Err(Error::editor_toolkit(reason.clone())),
            },
            Entry::Vacant(entry) => {
                let slot = match create_editor(&mut self.toolkit, mount, mode) {
                    Ok(editor) => {
                        self.created += 1;
                        debug!(
                            "Created editor {} at {} (mode '{}')",
                            editor.id(),
                            mount,
                            mode
                        );
                        EditorSlot::Ready(editor)
                    }
                    Err(e) => {
                        error!("Editor at {} unavailable: {}", mount, e);
                        EditorSlot::Failed(e.to_string())
                    }
                };
                match entry.insert(slot) {
                    EditorSlot::Ready(editor) => Ok(editor),
                    EditorSlot::Failed(reason) => Err(Error::editor_toolkit(reason.clone())),
                }
            }
        }
    }

    pub fn get(&self, mount: MountPoint) -> Option<&EditorInstance> {
        match self.slots.get(&mount) {
            Some(EditorSlot::Ready(editor)) => Some(editor),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, mount: MountPoint) -> Option<&mut EditorInstance> {
        match self.slots.get_mut(&mount) {
            Some(EditorSlot::Ready(editor)) => Some(editor),
            _ => None,
        }
    }

    /// Creation error for `mount`, if acquiring it failed
    pub fn failure(&self, mount: MountPoint) -> Option<&str> {
        match self.slots.get(&mount) {
            Some(EditorSlot::Failed(reason)) => Some(reason),
            _ => None,
        }
    }

    /// Number of editor instances ever created
    pub fn created_count(&self) -> usize {
        self.created
    }

    pub fn toolkit(&self) -> &EditorToolkit {
        &self.toolkit
    }
}

fn create_editor(
    toolkit: &mut EditorToolkit,
    mount: MountPoint,
    mode: &str,
) -> Result<EditorInstance> {
    let config = toolkit.ensure_configured()?;
    if mode.trim().is_empty() {
        return Err(Error::editor_toolkit("language mode must not be empty"));
    }

    let editor = EditorInstance::new(mode, config);
    Ok(match mount {
        MountPoint::Source => editor,
        MountPoint::Generated => editor.read_only(),
    })
}
