use crate::config::SchemeParameters;
use crate::domain::*;
use crate::error::*;
use crate::grid::Grid;
use crate::initial_conditions::*;
use crate::reference::{Amplification, ReferenceKind};
use crate::stability::{StabilityKind, TimeStep};
use crate::stencil::*;
use indexmap::IndexMap;

/// The three strategies an engine is built from.
#[derive(Debug)]
pub struct Strategies {
    pub initial_condition: Box<dyn InitialCondition>,
    pub boundary: Box<dyn BoundaryCondition>,
    pub stencil: Box<dyn StencilRule>,
}

pub type StrategyFactory =
    fn(&SchemeParameters, &Grid, &TimeStep) -> Result<Strategies>;

/// Everything needed to set up one named scheme.
#[derive(Clone, Debug)]
pub struct Scheme {
    pub name: &'static str,
    pub description: &'static str,
    /// Ghost nodes per side.
    pub margin: usize,
    pub stability: StabilityKind,
    pub reference: ReferenceKind,
    /// Label of the coordinate column in the output table.
    pub axis_label: &'static str,
    pub factory: StrategyFactory,
}

impl Scheme {
    pub fn build(
        &self,
        params: &SchemeParameters,
        grid: &Grid,
        time_step: &TimeStep,
    ) -> Result<Strategies> {
        (self.factory)(params, grid, time_step)
    }
}

fn sinusoidal(params: &SchemeParameters) -> Result<Sinusoidal> {
    Ok(Sinusoidal {
        base: params.require_base()?,
        amplitude: params.require_amplitude()?,
        harmonic: params.require_harmonic()?,
        extent: params.extent,
    })
}

fn channel_diffusion(
    params: &SchemeParameters,
    _grid: &Grid,
    time_step: &TimeStep,
) -> Result<Strategies> {
    let (lower, upper) = params.require_walls()?;
    Ok(Strategies {
        initial_condition: Box::new(ZeroWithWallValues { lower, upper }),
        boundary: Box::new(DirichletFixed::new(lower, upper)),
        stencil: Box::new(ExplicitDiffusion::new(
            params.stability_number,
            params.source,
            time_step.dt,
        )),
    })
}

fn upwind_sine(
    params: &SchemeParameters,
    grid: &Grid,
    time_step: &TimeStep,
) -> Result<Strategies> {
    Ok(Strategies {
        initial_condition: Box::new(sinusoidal(params)?),
        boundary: Box::new(PeriodicSingleGhost),
        stencil: Box::new(FirstOrderUpwind::new(
            params.coefficient,
            time_step.dt,
            grid.h(),
        )),
    })
}

fn upwind_step(
    params: &SchemeParameters,
    grid: &Grid,
    time_step: &TimeStep,
) -> Result<Strategies> {
    Ok(Strategies {
        initial_condition: Box::new(PiecewiseStep),
        boundary: Box::new(PeriodicSingleGhost),
        stencil: Box::new(FirstOrderUpwind::new(
            params.coefficient,
            time_step.dt,
            grid.h(),
        )),
    })
}

fn leonard_sine(
    params: &SchemeParameters,
    grid: &Grid,
    time_step: &TimeStep,
) -> Result<Strategies> {
    Ok(Strategies {
        initial_condition: Box::new(sinusoidal(params)?),
        boundary: Box::new(PeriodicDoubleGhost),
        stencil: Box::new(LeonardUpwind::new(
            params.coefficient,
            time_step.dt,
            grid.h(),
        )),
    })
}

fn leonard_step(
    params: &SchemeParameters,
    grid: &Grid,
    time_step: &TimeStep,
) -> Result<Strategies> {
    Ok(Strategies {
        initial_condition: Box::new(PiecewiseStep),
        boundary: Box::new(PeriodicDoubleGhost),
        stencil: Box::new(LeonardUpwind::new(
            params.coefficient,
            time_step.dt,
            grid.h(),
        )),
    })
}

/// Scheme lookup by name or alias.
#[derive(Clone, Debug, Default)]
pub struct SchemeRegistry {
    schemes: IndexMap<&'static str, Scheme>,
    aliases: IndexMap<String, &'static str>,
}

impl SchemeRegistry {
    pub fn new() -> Self {
        SchemeRegistry::default()
    }

    /// The channel flow and Burgers schemes.
    pub fn standard() -> Self {
        let mut registry = SchemeRegistry::new();
        registry.register(
            Scheme {
                name: "channel-diffusion",
                description: "Channel with a moving lid, explicit diffusion",
                margin: 0,
                stability: StabilityKind::Diffusive,
                reference: ReferenceKind::None,
                axis_label: "y",
                factory: channel_diffusion,
            },
            &["base.s1"],
        );
        registry.register(
            Scheme {
                name: "upwind-sine",
                description: "Burgers, sinusoidal data, first order upwind",
                margin: 1,
                stability: StabilityKind::Advective,
                reference: ReferenceKind::TravellingSine {
                    amplification: Amplification::FirstOrderUpwind,
                },
                axis_label: "x",
                factory: upwind_sine,
            },
            &["burgers.s1_t1"],
        );
        registry.register(
            Scheme {
                name: "upwind-step",
                description: "Burgers, three level step, first order upwind",
                margin: 1,
                stability: StabilityKind::Advective,
                reference: ReferenceKind::StaticStep,
                axis_label: "x",
                factory: upwind_step,
            },
            &["burgers.s1_t2"],
        );
        registry.register(
            Scheme {
                name: "leonard-sine",
                description: "Burgers, sinusoidal data, Leonard upwind",
                margin: 2,
                stability: StabilityKind::Advective,
                reference: ReferenceKind::TravellingSine {
                    amplification: Amplification::Leonard,
                },
                axis_label: "x",
                factory: leonard_sine,
            },
            &["burgers.s2_t1"],
        );
        registry.register(
            Scheme {
                name: "leonard-step",
                description: "Burgers, three level step, Leonard upwind",
                margin: 2,
                stability: StabilityKind::Advective,
                reference: ReferenceKind::StaticStep,
                axis_label: "x",
                factory: leonard_step,
            },
            &["burgers.s2_t2"],
        );
        registry
    }

    /// Add or replace a scheme.
    pub fn register(&mut self, scheme: Scheme, aliases: &[&str]) {
        let name = scheme.name;
        for alias in aliases {
            self.aliases.insert(alias.to_string(), name);
        }
        self.schemes.insert(name, scheme);
    }

    pub fn lookup(&self, id: &str) -> Result<&Scheme> {
        let name = self.aliases.get(id).copied().unwrap_or(id);
        self.schemes.get(name).ok_or_else(|| {
            Error::config(format!(
                "unknown scheme {id:?}, expected one of {:?}",
                self.names().collect::<Vec<_>>()
            ))
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemes.keys().copied()
    }

    pub fn schemes(&self) -> impl Iterator<Item = &Scheme> {
        self.schemes.values()
    }

    pub fn aliases_of<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.aliases
            .iter()
            .filter(move |(_, n)| **n == name)
            .map(|(a, _)| a.as_str())
    }
}
