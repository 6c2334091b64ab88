//! Application state (Model in TEA pattern)

use rustgen_core::prelude::*;
use rustgen_core::{GenerationOptions, GenerationOutcome, SubmissionPhase};

use crate::config::Settings;
use crate::editor::{CursorHint, EditorInstance, EditorRegistry, MountPoint};
use crate::overlay::{curl_recipes, CurlRecipe, HelpOverlay};
use crate::submission::SubmissionTracker;

/// Text the source editor starts with
pub const DEFAULT_SOURCE_TEXT: &str = "{\"hello\": \"world\"}";

/// Text the generated editor shows before the first generation
pub const OUTPUT_PLACEHOLDER: &str = "// gen code will be here";

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Both editors, keys go to the focused one
    #[default]
    Normal,

    /// Help overlay on top; only close and quit keys are handled
    Help,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Settings loaded at startup (after CLI overrides)
    pub settings: Settings,

    /// Editor instances keyed by mount point
    pub editors: EditorRegistry,

    /// Options sent with the next submission
    pub options: GenerationOptions,

    pub help: HelpOverlay,

    pub submissions: SubmissionTracker,

    /// Editor receiving keys and paste
    pub focus: MountPoint,

    /// Spinner animation frame while a request is in flight
    pub spinner_frame: usize,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create state and mount both editors with their initial text
    pub fn with_settings(settings: Settings) -> Self {
        Self::with_source_text(settings, DEFAULT_SOURCE_TEXT)
    }

    /// Like [`AppState::with_settings`] but pre-loads `source` into the
    /// source editor
    pub fn with_source_text(settings: Settings, source: &str) -> Self {
        let mut editors = EditorRegistry::new(settings.editor.clone());

        match editors.acquire(MountPoint::Source, &settings.editor.source_mode) {
            Ok(editor) => editor.set_text(source, Some(CursorHint::Start)),
            Err(e) => warn!("Source editor unavailable: {}", e),
        }
        match editors.acquire(MountPoint::Generated, &settings.editor.output_mode) {
            Ok(editor) => editor.set_text(OUTPUT_PLACEHOLDER, Some(CursorHint::Start)),
            Err(e) => warn!("Output editor unavailable: {}", e),
        }

        Self {
            options: settings.generation_options(),
            editors,
            settings,
            help: HelpOverlay::default(),
            submissions: SubmissionTracker::new(),
            focus: MountPoint::Source,
            spinner_frame: 0,
            quitting: false,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.help.is_open() {
            UiMode::Help
        } else {
            UiMode::Normal
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.submissions.phase()
    }

    /// Text currently in the source editor, `None` when it failed to mount
    pub fn source_text(&self) -> Option<String> {
        self.editors
            .get(MountPoint::Source)
            .map(EditorInstance::get_text)
    }

    /// Text currently in the generated editor
    pub fn output_text(&self) -> Option<String> {
        self.editors
            .get(MountPoint::Generated)
            .map(EditorInstance::get_text)
    }

    /// Replace the generated editor's text with the rendering of `outcome`
    pub fn show_outcome(&mut self, outcome: &GenerationOutcome) {
        let mode = self.settings.editor.output_mode.clone();
        match self.editors.acquire(MountPoint::Generated, &mode) {
            Ok(editor) => editor.set_text(&outcome.display_text(), Some(CursorHint::Start)),
            Err(e) => warn!("Dropping generation outcome, output editor unavailable: {}", e),
        }
    }

    pub fn curl_recipes(&self) -> Vec<CurlRecipe> {
        curl_recipes(&self.settings.service.endpoint)
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Advance the spinner while a request is outstanding
    pub fn tick(&mut self) {
        if self.phase().is_in_flight() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}
