//! Run an engine on a worker thread so the caller stays responsive.
//!
//! The worker owns a copy of the position; the live game is never touched.
//! `cancel` raises the shared stop flag and the worker returns whatever its
//! engine reports for an interrupted search.

use std::panic;
use std::thread::{self, JoinHandle};

use log::debug;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::position::Position;
use crate::search::search_limits::StopFlag;

pub struct BackgroundSearch {
    stop: StopFlag,
    handle: Option<JoinHandle<ChessResult<EngineOutput>>>,
}

impl BackgroundSearch {
    pub fn spawn<E>(mut engine: E, position: &Position, params: GoParams) -> Self
    where
        E: Engine + 'static,
    {
        let stop = StopFlag::new();
        engine.set_stop_signal(Some(stop.clone()));
        let position = *position;

        let handle = thread::spawn(move || {
            debug!("background search started with {}", engine.name());
            engine.choose_move(&position, &params)
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn cancel(&self) {
        self.stop.stop();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the worker. A panic on the worker is re-raised here.
    pub fn join(mut self) -> ChessResult<EngineOutput> {
        let handle = self.handle.take();
        match handle.map(JoinHandle::join) {
            Some(Ok(result)) => result,
            Some(Err(payload)) => panic::resume_unwind(payload),
            None => Ok(EngineOutput::default()),
        }
    }
}

impl Drop for BackgroundSearch {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.stop.stop();
            let _ = handle.join();
        }
    }
}
