use crate::domain::*;
use crate::error::*;
use crate::grid::Grid;
use crate::initial_conditions::InitialCondition;
use crate::par_stencil;
use crate::stability::TimeStep;
use crate::stencil::StencilRule;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Seeded,
    Stepping { completed: usize },
    Done,
}

/// Explicit time marching over a double buffered field.
///
/// Each step runs the stencil over `[halo, len - halo)`, lets the boundary
/// condition fix the outer `halo` nodes of the new level, then swaps
/// buffers. The seeded field is time level zero, so `steps - 1`
/// steps are applied.
#[derive(Debug)]
pub struct Engine {
    grid: Grid,
    time_step: TimeStep,
    initial_condition: Box<dyn InitialCondition>,
    boundary: Box<dyn BoundaryCondition>,
    stencil: Box<dyn StencilRule>,
    field: FieldPair,
    state: EngineState,
    chunk_size: usize,
}

impl Engine {
    pub fn new(
        grid: Grid,
        time_step: TimeStep,
        initial_condition: Box<dyn InitialCondition>,
        boundary: Box<dyn BoundaryCondition>,
        stencil: Box<dyn StencilRule>,
        chunk_size: usize,
    ) -> Result<Self> {
        let reach = stencil.footprint().reach();
        let halo = boundary.halo();
        if reach > halo {
            return Err(Error::config(format!(
                "stencil reads {reach} nodes to a side, \
                 boundary maintains only {halo}"
            )));
        }
        if grid.margin() != boundary.ghosts() {
            return Err(Error::config(format!(
                "grid carries {} ghost nodes per side, \
                 boundary condition wraps {}",
                grid.margin(),
                boundary.ghosts()
            )));
        }
        if grid.len() < boundary.min_len() {
            return Err(Error::config(format!(
                "grid of {} nodes is too short for this boundary condition, \
                 {} needed",
                grid.len(),
                boundary.min_len()
            )));
        }

        let field = FieldPair::new(grid.len());
        Ok(Engine {
            grid,
            time_step,
            initial_condition,
            boundary,
            stencil,
            field,
            state: EngineState::Uninitialized,
            chunk_size: chunk_size.max(1),
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn time_step(&self) -> &TimeStep {
        &self.time_step
    }

    /// The most recent complete time level, ghosts included.
    pub fn field(&self) -> &[f64] {
        self.field.current()
    }

    /// The most recent time level on physical nodes only.
    pub fn physical_field(&self) -> &[f64] {
        &self.field.current()[self.grid.physical_range()]
    }

    pub fn into_field(self) -> Vec<f64> {
        self.field.into_current()
    }

    /// Steps applied so far.
    pub fn completed(&self) -> usize {
        match self.state {
            EngineState::Uninitialized | EngineState::Seeded => 0,
            EngineState::Stepping { completed } => completed,
            EngineState::Done => self.time_step.applied_steps(),
        }
    }

    /// (Re)start from time level zero.
    pub fn seed(&mut self) {
        let (current, next) = self.field.buffers_mut();
        self.initial_condition.seed(&self.grid, current, next);
        self.state = if self.time_step.applied_steps() == 0 {
            EngineState::Done
        } else {
            EngineState::Seeded
        };
    }

    /// Advance one time level, seeding first if needed.
    pub fn step(&mut self) -> Result<EngineState> {
        let completed = match self.state {
            EngineState::Uninitialized => {
                self.seed();
                return match self.state {
                    EngineState::Done => Ok(EngineState::Done),
                    _ => self.step(),
                };
            }
            EngineState::Seeded => 0,
            EngineState::Stepping { completed } => completed,
            EngineState::Done => return Ok(EngineState::Done),
        };

        let step = completed + 1;
        self.advance(step)?;
        self.state = if step >= self.time_step.applied_steps() {
            EngineState::Done
        } else {
            EngineState::Stepping { completed: step }
        };
        Ok(self.state)
    }

    fn advance(&mut self, step: usize) -> Result<()> {
        profiling::scope!("engine::step");
        let halo = self.boundary.halo();
        let interior = halo..self.field.len() - halo;
        {
            let (input, output) = self.field.split();
            par_stencil::apply(
                self.stencil.as_ref(),
                input,
                output,
                interior,
                self.chunk_size,
            );
        }
        self.boundary.apply(self.field.next_mut());

        let non_finite =
            par_stencil::find_non_finite(self.field.next(), self.chunk_size);
        if let Some(index) = non_finite {
            tracing::error!("non-finite value at index {index} in step {step}");
            return Err(Error::Instability {
                step,
                index,
                last_valid_step: step - 1,
            });
        }

        self.field.swap();
        tracing::trace!(step, "step complete");
        Ok(())
    }

    fn march<F: FnMut(usize, &[f64])>(
        &mut self,
        cancel: Option<&AtomicBool>,
        mut observer: F,
    ) -> Result<()> {
        if self.state == EngineState::Uninitialized {
            self.seed();
        }
        observer(self.completed(), self.field.current());
        while self.state != EngineState::Done {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    let completed = self.completed();
                    tracing::warn!("cancelled after {completed} steps");
                    return Err(Error::Cancelled { completed });
                }
            }
            self.step()?;
            observer(self.completed(), self.field.current());
        }
        tracing::info!("Finished {} steps", self.completed());
        Ok(())
    }

    /// March until `Done`.
    pub fn run(&mut self) -> Result<()> {
        self.march(None, |_, _| {})
    }

    /// March until `Done`, handing every time level to `observer`,
    /// starting with the seeded one.
    pub fn run_with<F: FnMut(usize, &[f64])>(
        &mut self,
        observer: F,
    ) -> Result<()> {
        self.march(None, observer)
    }

    /// March until `Done` or until `cancel` is raised between steps.
    pub fn run_until(&mut self, cancel: &AtomicBool) -> Result<()> {
        self.march(Some(cancel), |_, _| {})
    }
}
