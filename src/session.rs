//! Top-level visualization state.
//!
//! [`VisualizerSession`] owns one engine per structure, one traversal
//! controller per steppable structure, the value source and the status log.
//! The UI never touches engines directly: it sends [`Command`]s, calls
//! [`VisualizerSession::tick`] once per frame and draws
//! [`VisualizerSession::frame`].
//!
//! Every command runs to completion before returning. A successful mutation
//! recomputes that structure's layout and resets its traversal, so no stale
//! snapshot survives into the next step.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::config::VisConfig;
use crate::engine::{ArrayEngine, BstEngine, ListEngine};
use crate::error::{Result, StatusLevel, VisError};
use crate::layout::Band;
use crate::source::{sample_in, RandomSource, ValueSource};
use crate::traversal::{StepOutcome, TraversalController};
use crate::types::{Mode, Point, StructureKind};
use crate::view::FrameView;

const WELCOME: &str = "Welcome! Choose a data structure to explore.";

/// User-level operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch the structure on screen
    SelectMode(Mode),

    /// Link a node before the head. `None` uses the next counter value.
    ListInsertHead(Option<i32>),
    /// Append a node after the tail. `None` uses the next counter value.
    ListInsertTail(Option<i32>),
    ListRemoveTail,
    /// Remove every node and restart the counter at 1
    ListClear,
    /// Advance the head-to-tail traversal
    ListStep,

    /// Insert a value, sampled when `None`
    TreeInsert(Option<i32>),
    /// Advance the in-order traversal
    TreeStep,
    TreeClear,

    /// Append a value, sampled when `None`
    ArrayAppend(Option<i32>),
    ArrayRemoveLast,
    /// Move the highlighted index forward, wrapping
    ArrayStep,
    /// Refill to the default size, taking values from the seed where given
    ArrayReset(Option<Vec<i32>>),
}

impl Command {
    /// The mode a structure command belongs to; `None` for mode selection
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Command::SelectMode(_) => None,
            Command::ListInsertHead(_)
            | Command::ListInsertTail(_)
            | Command::ListRemoveTail
            | Command::ListClear
            | Command::ListStep => Some(Mode::LinkedList),
            Command::TreeInsert(_) | Command::TreeStep | Command::TreeClear => Some(Mode::Bst),
            Command::ArrayAppend(_)
            | Command::ArrayRemoveLast
            | Command::ArrayStep
            | Command::ArrayReset(_) => Some(Mode::Array),
        }
    }
}

/// One line of user feedback
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub at: DateTime<Local>,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            text: text.into(),
            level,
            at: Local::now(),
        }
    }
}

pub struct VisualizerSession {
    mode: Mode,
    config: VisConfig,

    list: ListEngine,
    bst: BstEngine,
    array: ArrayEngine,
    list_traversal: TraversalController,
    tree_traversal: TraversalController,

    source: Box<dyn ValueSource>,
    next_list_value: i32,
    tree_band: Band,
    status: VecDeque<StatusMessage>,
}

impl VisualizerSession {
    /// Session drawing random values from the OS, or from `config.random_seed`
    pub fn new(config: VisConfig) -> Self {
        let source: Box<dyn ValueSource> = match config.random_seed {
            Some(seed) => Box::new(RandomSource::seeded(seed)),
            None => Box::new(RandomSource::from_entropy()),
        };
        Self::with_source(config, source)
    }

    /// Session with an injected value source
    pub fn with_source(config: VisConfig, source: Box<dyn ValueSource>) -> Self {
        let layout = config.layout;
        let tree_band = layout.tree.band_for_width(config.window.width);

        let mut list = ListEngine::new();
        list.set_spawn(layout.list.target(0));

        let mut bst = BstEngine::new();
        bst.set_spawn(layout.tree.target(tree_band, 0));

        let mut array = ArrayEngine::new(config.array.capacity, config.array.default_size);
        array.relayout(&layout.array);

        let mut session = Self {
            mode: Mode::default(),
            config,
            list,
            bst,
            array,
            list_traversal: TraversalController::new(),
            tree_traversal: TraversalController::new(),
            source,
            next_list_value: 1,
            tree_band,
            status: VecDeque::new(),
        };

        let values = session.config.values;
        session.array.reset(None, session.source.as_mut(), values);
        session.push_status(WELCOME, StatusLevel::Info);
        tracing::info!(
            capacity = session.array.capacity(),
            seeded = session.config.random_seed.is_some(),
            "Visualizer session created"
        );
        session
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &VisConfig {
        &self.config
    }

    pub fn list(&self) -> &ListEngine {
        &self.list
    }

    pub fn bst(&self) -> &BstEngine {
        &self.bst
    }

    pub fn array(&self) -> &ArrayEngine {
        &self.array
    }

    pub fn list_traversal(&self) -> &TraversalController {
        &self.list_traversal
    }

    pub fn tree_traversal(&self) -> &TraversalController {
        &self.tree_traversal
    }

    /// Latest status message
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.back()
    }

    /// Status messages, oldest first
    pub fn status_history(&self) -> impl Iterator<Item = &StatusMessage> + '_ {
        self.status.iter()
    }

    /// Pseudocode for the active mode
    pub fn pseudocode(&self) -> &'static str {
        self.mode.pseudocode()
    }

    fn push_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        let limit = self.config.status_history.max(1);
        while self.status.len() >= limit {
            self.status.pop_front();
        }
        self.status.push_back(StatusMessage::new(text, level));
    }

    /// Run a command and record its outcome as a status message.
    ///
    /// Errors leave every structure untouched; they are returned for callers
    /// that care and are already visible in [`Self::status`].
    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        tracing::debug!(?command, mode = %self.mode, "Dispatching command");
        match self.apply(command) {
            Ok(text) => {
                self.push_status(text, StatusLevel::Info);
                Ok(())
            }
            Err(e) => {
                match e.level() {
                    StatusLevel::Info => tracing::debug!("Command had no effect: {}", e),
                    StatusLevel::Warning => tracing::warn!("Command rejected: {}", e),
                }
                self.push_status(e.to_string(), e.level());
                Err(e)
            }
        }
    }

    fn apply(&mut self, command: Command) -> Result<String> {
        if let Some(requested) = command.mode() {
            if requested != self.mode {
                return Err(VisError::ModeMismatch {
                    requested,
                    active: self.mode,
                });
            }
        }

        match command {
            Command::SelectMode(mode) => {
                self.mode = mode;
                tracing::info!(%mode, "Mode selected");
                Ok(mode.explanation().to_string())
            }

            Command::ListInsertHead(value) => {
                let value = value.unwrap_or_else(|| self.take_list_value());
                self.list.insert_at_head(value);
                self.list_changed();
                Ok(format!(
                    "Add Head: Created node {} and linked it before the current head.",
                    value
                ))
            }
            Command::ListInsertTail(value) => {
                let value = value.unwrap_or_else(|| self.take_list_value());
                self.list.insert_at_tail(value);
                self.list_changed();
                Ok(format!(
                    "Add Tail: Traversed to the end and appended node {}.",
                    value
                ))
            }
            Command::ListRemoveTail => {
                let value = self
                    .list
                    .remove_tail()
                    .ok_or(VisError::EmptyStructure(StructureKind::LinkedList))?;
                self.list_changed();
                Ok(format!(
                    "Remove Tail: Traversed and removed last node {}.",
                    value
                ))
            }
            Command::ListClear => {
                self.list.clear();
                self.next_list_value = 1;
                self.list_changed();
                Ok("Reset: Cleared linked list.".to_string())
            }
            Command::ListStep => {
                let outcome = self.list_traversal.step(&mut self.list);
                self.describe_step(outcome, StructureKind::LinkedList)
            }

            Command::TreeInsert(value) => {
                let value =
                    value.unwrap_or_else(|| sample_in(self.source.as_mut(), self.config.values));
                self.bst.insert(value);
                self.tree_changed();
                Ok(format!(
                    "Insert Node: Inserted {} recursively based on BST rules.",
                    value
                ))
            }
            Command::TreeStep => {
                let outcome = self.tree_traversal.step(&mut self.bst);
                self.describe_step(outcome, StructureKind::Tree)
            }
            Command::TreeClear => {
                self.bst.clear();
                self.tree_changed();
                Ok("Reset: Cleared BST.".to_string())
            }

            Command::ArrayAppend(value) => {
                let value =
                    value.unwrap_or_else(|| sample_in(self.source.as_mut(), self.config.values));
                let index = self.array.append(value)?;
                Ok(format!(
                    "Add Element: Appended {} to the array at index {}.",
                    value, index
                ))
            }
            Command::ArrayRemoveLast => {
                let value = self
                    .array
                    .remove_last()
                    .ok_or(VisError::EmptyStructure(StructureKind::Array))?;
                Ok(format!(
                    "Remove Element: Removed last array element {}.",
                    value
                ))
            }
            Command::ArrayStep => {
                let index = self
                    .array
                    .step()
                    .ok_or(VisError::EmptyStructure(StructureKind::Array))?;
                Ok(format!(
                    "Step: Highlighted array element {} (index {}).",
                    self.array.values()[index],
                    index
                ))
            }
            Command::ArrayReset(seed) => {
                let size = self
                    .array
                    .reset(seed.as_deref(), self.source.as_mut(), self.config.values);
                Ok(format!(
                    "Reset: Array refilled with {} new values.",
                    size
                ))
            }
        }
    }

    fn take_list_value(&mut self) -> i32 {
        let value = self.next_list_value;
        self.next_list_value = self.next_list_value.wrapping_add(1);
        value
    }

    fn list_changed(&mut self) {
        self.list.relayout(&self.config.layout.list);
        self.list_traversal.reset(&mut self.list);
    }

    fn tree_changed(&mut self) {
        self.bst.relayout(&self.config.layout.tree, self.tree_band);
        self.tree_traversal.reset(&mut self.bst);
    }

    fn describe_step(&self, outcome: StepOutcome, kind: StructureKind) -> Result<String> {
        let order = match kind {
            StructureKind::Tree => "in-order",
            _ => "head-to-tail",
        };
        match outcome {
            StepOutcome::Visited { handle, index, len } => {
                let value = match kind {
                    StructureKind::Tree => self.bst.get(handle).map(|n| n.value),
                    _ => self.list.get(handle).map(|n| n.value),
                };
                let value = value.map_or_else(|| "?".to_string(), |v| v.to_string());
                Ok(format!(
                    "Step: Visited {} ({} of {}) in {} traversal.",
                    value,
                    index + 1,
                    len,
                    order
                ))
            }
            StepOutcome::Completed => Ok(format!(
                "Step: {} traversal complete. The next step starts over.",
                order
            )),
            StepOutcome::Empty => Err(VisError::EmptyStructure(kind)),
        }
    }

    /// Advance every structure's animation by `dt` seconds.
    ///
    /// Returns true while anything is still moving.
    pub fn tick(&mut self, dt: f32) -> bool {
        let animation = self.config.animation;
        let mut moving = self.list.tick(dt, animation.ease_for(StructureKind::LinkedList));
        moving |= self.bst.tick(dt, animation.ease_for(StructureKind::Tree));
        moving |= self.array.tick(dt, animation.ease_for(StructureKind::Array));
        moving
    }

    /// Fit the tree band to a new canvas width
    pub fn set_viewport_width(&mut self, width: f32) {
        let band = self.config.layout.tree.band_for_width(width);
        if band == self.tree_band {
            return;
        }
        tracing::trace!(width, "Viewport width changed");
        self.tree_band = band;
        self.bst
            .set_spawn(self.config.layout.tree.target(band, 0));
        self.bst.relayout(&self.config.layout.tree, band);
    }

    /// Snapshot of the active structure for drawing
    pub fn frame(&self) -> FrameView {
        match self.mode {
            Mode::LinkedList => {
                let current = self.list_traversal.current(&self.list).ok().flatten();
                self.list.view(current)
            }
            Mode::Bst => self.bst.view(),
            Mode::Array => self.array.view(),
        }
    }

    /// Where the tree root is drawn
    pub fn tree_root_anchor(&self) -> Point {
        self.config.layout.tree.target(self.tree_band, 0)
    }
}
