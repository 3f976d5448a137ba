use crate::config::SchemeParameters;
use crate::error::*;
use crate::export::Table;
use crate::grid::Grid;
use crate::reference::*;
use crate::solver::{Engine, Scheme};
use crate::stability::TimeStep;

/// One configured run of a named scheme.
#[derive(Debug)]
pub struct Simulation {
    params: SchemeParameters,
    scheme: Scheme,
    engine: Engine,
}

impl Simulation {
    /// Derive the grid and time step, build the strategies and
    /// check they fit together. Nothing is left half built on error.
    pub fn new(
        params: SchemeParameters,
        scheme: &Scheme,
        chunk_size: usize,
    ) -> Result<Self> {
        tracing::info!("Scheme: {} ({})", scheme.name, scheme.description);
        let grid = Grid::new(params.extent, params.nodes, scheme.margin)?;
        let time_step = TimeStep::derive(
            scheme.stability,
            grid.h(),
            params.coefficient,
            params.stability_number,
            params.total_time,
            params.step_override,
        )?;
        let strategies = scheme.build(&params, &grid, &time_step)?;
        let engine = Engine::new(
            grid,
            time_step,
            strategies.initial_condition,
            strategies.boundary,
            strategies.stencil,
            chunk_size,
        )?;
        Ok(Simulation {
            params,
            scheme: scheme.clone(),
            engine,
        })
    }

    pub fn params(&self) -> &SchemeParameters {
        &self.params
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn run(&mut self) -> Result<()> {
        self.engine.run()
    }

    pub fn run_with<F: FnMut(usize, &[f64])>(
        &mut self,
        observer: F,
    ) -> Result<()> {
        self.engine.run_with(observer)
    }

    fn wave_setup(&self) -> Option<WaveSetup> {
        let harmonic = self.params.harmonic?;
        let time_step = self.engine.time_step();
        Some(WaveSetup {
            wave_number: harmonic * std::f64::consts::PI / self.params.extent,
            speed: self.params.coefficient,
            courant: self.params.stability_number,
            h: self.engine.grid().h(),
            dt: time_step.dt,
            steps: time_step.steps,
        })
    }

    /// Comparison curves over the physical nodes.
    pub fn references(&self) -> Vec<(&'static str, Vec<f64>)> {
        let wave = self.wave_setup();
        reference_columns(
            self.scheme.reference,
            wave.as_ref(),
            self.engine.grid().physical_coords(),
        )
    }

    /// Coordinate, solution and comparison columns over the physical nodes.
    pub fn table(&self) -> Result<Table> {
        let mut table = Table::default();
        table.push_column(
            self.scheme.axis_label,
            self.engine.grid().physical_coords().to_vec(),
        )?;
        table.push_column("u", self.engine.physical_field().to_vec())?;
        for (label, values) in self.references() {
            table.push_column(label, values)?;
        }
        Ok(table)
    }
}
