use super::ParameterTable;
use crate::error::*;
use indexmap::IndexMap;

// Recognized names, first match wins.
const EXTENT: &[&str] = &["L", "H"];
const NODES: &[&str] = &["NX", "NY"];
const STABILITY_NUMBER: &[&str] = &["CFL", "VNM"];
const COEFFICIENT: &[&str] = &["C", "nu", "a"];
const TOTAL_TIME: &[&str] = &["Time"];
const BASE: &[&str] = &["C0"];
const AMPLITUDE: &[&str] = &["C1"];
const HARMONIC: &[&str] = &["m"];
const LOWER_WALL: &[&str] = &["U0"];
const UPPER_WALL: &[&str] = &["U1"];
const SOURCE: &[&str] = &["A"];
const STEPS: &[&str] = &["NT"];

const KNOWN: &[&[&str]] = &[
    EXTENT,
    NODES,
    STABILITY_NUMBER,
    COEFFICIENT,
    TOTAL_TIME,
    BASE,
    AMPLITUDE,
    HARMONIC,
    LOWER_WALL,
    UPPER_WALL,
    SOURCE,
    STEPS,
];

/// Physical and numerical constants of one run.
/// Built once from a `ParameterTable` and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemeParameters {
    /// Domain length, `L` or `H`.
    pub extent: f64,

    /// Requested physical node count, `NX` or `NY`.
    pub nodes: usize,

    /// Courant number for advection, Von Neumann number for diffusion.
    pub stability_number: f64,

    /// Wave speed or diffusivity.
    pub coefficient: f64,

    pub total_time: Option<f64>,

    /// Sinusoidal initial condition `C0 + C1 * sin(m * pi * x / L)`.
    pub base: Option<f64>,
    pub amplitude: Option<f64>,
    pub harmonic: Option<f64>,

    /// Wall velocities for the channel case.
    pub lower_wall: Option<f64>,
    pub upper_wall: Option<f64>,

    /// Constant forcing term, zero when absent.
    pub source: f64,

    /// Explicit step count, overrides `floor(Time / dt)`.
    pub step_override: Option<usize>,

    /// Names the solver does not use, kept in file order.
    pub extra: IndexMap<String, f64>,
}

fn require(table: &ParameterTable, names: &[&str]) -> Result<f64> {
    table.get_any(names).ok_or_else(|| {
        Error::config(format!(
            "missing parameter, one of {names:?} is required"
        ))
    })
}

fn count(value: f64, name: &str) -> Result<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(Error::config(format!(
            "{name} must be a non-negative integer, found {value}"
        )));
    }
    // usize::MAX as f64 rounds up, so anything at or above it saturates
    if value >= usize::MAX as f64 {
        return Err(Error::config(format!(
            "{name} is too large, found {value}"
        )));
    }
    Ok(value as usize)
}

impl SchemeParameters {
    pub fn from_table(table: &ParameterTable) -> Result<Self> {
        let extent = require(table, EXTENT)?;
        let nodes = count(require(table, NODES)?, "node count")?;
        let stability_number = require(table, STABILITY_NUMBER)?;
        let coefficient = require(table, COEFFICIENT)?;
        let total_time = table.get_any(TOTAL_TIME);
        let step_override = table
            .get_any(STEPS)
            .map(|nt| count(nt, "NT"))
            .transpose()?;

        if total_time.is_none() && step_override.is_none() {
            return Err(Error::config(
                "either Time or NT must be given to bound the run",
            ));
        }

        let mut extra = IndexMap::new();
        for (name, value) in table.iter() {
            if !KNOWN.iter().any(|names| names.contains(&name)) {
                tracing::debug!("unused parameter {name} = {value}");
                extra.insert(name.to_string(), value);
            }
        }

        Ok(SchemeParameters {
            extent,
            nodes,
            stability_number,
            coefficient,
            total_time,
            base: table.get_any(BASE),
            amplitude: table.get_any(AMPLITUDE),
            harmonic: table.get_any(HARMONIC),
            lower_wall: table.get_any(LOWER_WALL),
            upper_wall: table.get_any(UPPER_WALL),
            source: table.get_any(SOURCE).unwrap_or(0.0),
            step_override,
            extra,
        })
    }

    pub fn require_base(&self) -> Result<f64> {
        self.base.ok_or_else(|| Error::config("missing parameter C0"))
    }

    pub fn require_amplitude(&self) -> Result<f64> {
        self.amplitude
            .ok_or_else(|| Error::config("missing parameter C1"))
    }

    pub fn require_harmonic(&self) -> Result<f64> {
        self.harmonic.ok_or_else(|| Error::config("missing parameter m"))
    }

    pub fn require_walls(&self) -> Result<(f64, f64)> {
        match (self.lower_wall, self.upper_wall) {
            (Some(lower), Some(upper)) => Ok((lower, upper)),
            _ => Err(Error::config("missing wall values U0 and U1")),
        }
    }
}
