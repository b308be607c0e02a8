//! One sketchpad session: engine, scene, mode state and the last status.

use crate::command::{self, CommandOutcome, HELP_TEXT};
use crate::config::SketchConfig;
use crate::controller::{ClickOutcome, InteractionController};
use crate::engine::GeometryEngine;
use crate::error::{SketchError, SketchResult};
use crate::mode::Mode;
use crate::model::{PointId, SceneStats, Status};
use crate::scene::SceneState;
use log::{info, warn};

/// Confirmation token for a pending clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClearToken(pub u64);

pub struct Sketchpad<E: GeometryEngine> {
    engine: E,
    scene: SceneState<E::Handle>,
    controller: InteractionController,
    config: SketchConfig,
    status: Status,
    pending_clear: Option<ClearToken>,
    next_token: u64,
}

impl<E: GeometryEngine> Sketchpad<E> {
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, SketchConfig::default())
    }

    pub fn with_config(engine: E, config: SketchConfig) -> Self {
        Sketchpad {
            engine,
            scene: SceneState::new(),
            controller: InteractionController::new(),
            config,
            status: Mode::None.prompt(),
            pending_clear: None,
            next_token: 1,
        }
    }

    pub fn engine(&self) -> &E { &self.engine }
    pub fn engine_mut(&mut self) -> &mut E { &mut self.engine }
    pub fn scene(&self) -> &SceneState<E::Handle> { &self.scene }
    pub fn config(&self) -> &SketchConfig { &self.config }
    pub fn status(&self) -> &Status { &self.status }
    pub fn mode(&self) -> Mode { self.controller.mode() }
    pub fn pending_selection(&self) -> &[PointId] { self.controller.pending() }
    pub fn stats(&self) -> SceneStats { self.scene.stats() }

    pub fn set_mode(&mut self, mode: Mode) -> &Status {
        self.status = self.controller.set_mode(mode);
        &self.status
    }

    pub fn click(&mut self, x: f64, y: f64) -> SketchResult<ClickOutcome> {
        let res = self.controller.handle_click(&mut self.scene, &mut self.engine, &self.config, x, y);
        match &res {
            Ok(outcome) => {
                if let Some(s) = outcome.status(self.controller.mode()) {
                    self.status = s;
                }
            }
            Err(e) => self.fail(e),
        }
        res
    }

    pub fn execute(&mut self, line: &str) -> SketchResult<CommandOutcome> {
        let res = command::execute(&mut self.scene, &mut self.engine, &self.config, line);
        match &res {
            Ok(CommandOutcome::Empty) => self.status = Status::info(""),
            Ok(CommandOutcome::Help) => self.status = Status::info(HELP_TEXT),
            Ok(CommandOutcome::Created { kind, first, second }) => {
                self.status = Status::success(kind.created_message(first, second));
            }
            Err(e) => self.fail(e),
        }
        res
    }

    /// First step of a clear. Any earlier token is invalidated.
    pub fn request_clear(&mut self) -> ClearToken {
        let token = ClearToken(self.next_token);
        self.next_token += 1;
        self.pending_clear = Some(token);
        token
    }

    pub fn cancel_clear(&mut self) {
        self.pending_clear = None;
    }

    /// Removes every primitive, empties the scene and selection, and resets
    /// the mode to `None`.
    pub fn confirm_clear(&mut self, token: ClearToken) -> SketchResult<()> {
        if self.pending_clear != Some(token) {
            let e = SketchError::StaleClearToken;
            self.fail(&e);
            return Err(e);
        }
        self.pending_clear = None;
        self.scene.clear(&mut self.engine);
        self.controller.reset();
        info!("board cleared");
        self.status = Status::success("Board cleared");
        Ok(())
    }

    fn fail(&mut self, e: &SketchError) {
        warn!("{}: {}", e.code(), e);
        self.status = Status::error(format!("Error: {}", e));
    }
}
