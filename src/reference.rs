//! Comparison curves written next to the numerical solution.
//!
//! For sinusoidal data the exact solution of linear advection is
//! `sin(k x - k C t)` with `t = NT * dt`, and the Von Neumann analysis of
//! each scheme predicts the damped, phase shifted wave
//! `|g|^NT sin(k x + phi NT)`. The step profile has no travelling
//! reference, its initial shape is reused as is.

use crate::error::*;
use crate::export::Table;
use crate::initial_conditions::PiecewiseStep;

/// Which Von Neumann amplification factor applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Amplification {
    FirstOrderUpwind,
    Leonard,
}

impl Amplification {
    /// Modulus of the amplification factor at Courant number `cu`
    /// and phase angle `beta = k h`.
    pub fn modulus(&self, cu: f64, beta: f64) -> f64 {
        match self {
            Amplification::FirstOrderUpwind => {
                let re = 1.0 - cu * (1.0 - beta.cos());
                let im = cu * beta.sin();
                (re * re + im * im).sqrt()
            }
            Amplification::Leonard => {
                let re = 1.0 - cu / 3.0 * (1.0 - beta.cos()).powi(2);
                let im = cu / 3.0 * beta.sin() * (2.0 - beta.cos());
                (re * re + im * im).sqrt()
            }
        }
    }

    /// Phase of the amplification factor.
    pub fn phase(&self, cu: f64, beta: f64) -> f64 {
        match self {
            Amplification::FirstOrderUpwind => {
                -(cu * beta.sin() / (1.0 - cu * (1.0 - beta.cos()))).atan()
            }
            Amplification::Leonard => {
                let re = 1.0 - cu / 3.0 * (1.0 - beta.cos()).powi(2);
                -(cu / 3.0 * beta.sin() * (2.0 - beta.cos()) / re).atan()
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ReferenceKind {
    /// No comparison columns.
    None,

    /// The untransported step profile.
    StaticStep,

    /// Exact travelling wave plus the predicted numerical wave.
    TravellingSine {
        amplification: Amplification,
    },
}

/// Inputs the reference curves depend on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WaveSetup {
    /// `k = m * pi / L`
    pub wave_number: f64,
    pub speed: f64,
    pub courant: f64,
    pub h: f64,
    pub dt: f64,
    pub steps: usize,
}

impl WaveSetup {
    pub fn exact(&self, x: f64) -> f64 {
        let k = self.wave_number;
        (k * x - k * self.dt * self.steps as f64 * self.speed).sin()
    }

    pub fn predicted(&self, amplification: Amplification, x: f64) -> f64 {
        let beta = self.wave_number * self.h;
        let g = amplification.modulus(self.courant, beta);
        let phi = amplification.phase(self.courant, beta);
        let nt = self.steps as f64;
        g.powf(nt) * (self.wave_number * x + phi * nt).sin()
    }
}

/// Labelled comparison columns for `kind` over `coords`.
pub fn reference_columns(
    kind: ReferenceKind,
    wave: Option<&WaveSetup>,
    coords: &[f64],
) -> Vec<(&'static str, Vec<f64>)> {
    match (kind, wave) {
        (ReferenceKind::StaticStep, _) => {
            vec![(
                "u_exac",
                coords.iter().map(|x| PiecewiseStep.value(*x)).collect(),
            )]
        }
        (ReferenceKind::TravellingSine { amplification }, Some(wave)) => vec![
            ("u_exac", coords.iter().map(|x| wave.exact(*x)).collect()),
            (
                "u_num_exac",
                coords
                    .iter()
                    .map(|x| wave.predicted(amplification, *x))
                    .collect(),
            ),
        ],
        _ => Vec::new(),
    }
}

fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| start + step * i as f64)
}

/// `|g|` of both upwind schemes over a Courant number by phase angle grid,
/// one row per pair.
pub fn amplification_table(
    max_courant: f64,
    max_beta: f64,
    n_courant: usize,
    n_beta: usize,
) -> Result<Table> {
    let mut cu_column = Vec::with_capacity(n_courant * n_beta);
    let mut beta_column = Vec::with_capacity(n_courant * n_beta);
    let mut first = Vec::with_capacity(n_courant * n_beta);
    let mut leonard = Vec::with_capacity(n_courant * n_beta);
    for cu in linspace(0.0, max_courant, n_courant) {
        for beta in linspace(0.0, max_beta, n_beta) {
            cu_column.push(cu);
            beta_column.push(beta);
            first.push(Amplification::FirstOrderUpwind.modulus(cu, beta));
            leonard.push(Amplification::Leonard.modulus(cu, beta));
        }
    }
    Table::from_columns(vec![
        ("Cu".to_string(), cu_column),
        ("beta".to_string(), beta_column),
        ("g_upwind".to_string(), first),
        ("g_leonard".to_string(), leonard),
    ])
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn modulus_limits() {
        for a in [Amplification::FirstOrderUpwind, Amplification::Leonard] {
            // No motion, nothing damped
            assert_approx_eq!(f64, a.modulus(0.0, 1.3), 1.0);
            // Constant mode is untouched
            assert_approx_eq!(f64, a.modulus(0.7, 0.0), 1.0);
            assert_approx_eq!(f64, a.phase(0.7, 0.0), 0.0);
        }
        // Courant one shifts exactly one cell
        assert_approx_eq!(
            f64,
            Amplification::FirstOrderUpwind.modulus(1.0, 0.9),
            1.0,
            epsilon = 1e-12
        );
        // Odd-even mode, |1 - 2 Cu|
        assert_approx_eq!(
            f64,
            Amplification::FirstOrderUpwind.modulus(0.25, PI),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn upwind_damps_below_unit_courant() {
        for cu in [0.1, 0.5, 0.9] {
            for beta in [0.1, 1.0, 2.0, 3.0] {
                let g = Amplification::FirstOrderUpwind.modulus(cu, beta);
                assert!(g < 1.0, "cu {cu} beta {beta} g {g}");
            }
        }
    }

    #[test]
    fn exact_wave_travels() {
        let wave = WaveSetup {
            wave_number: 2.0 * PI,
            speed: 1.0,
            courant: 0.5,
            h: 0.05,
            dt: 0.025,
            steps: 10,
        };
        // t = 0.25, a quarter period
        assert_approx_eq!(f64, wave.exact(0.25), 0.0, epsilon = 1e-12);
        assert_approx_eq!(f64, wave.exact(0.5), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn columns_per_kind() {
        let coords = [0.0, 0.3, 0.7];
        let none = reference_columns(ReferenceKind::None, None, &coords);
        assert!(none.is_empty());

        let step = reference_columns(ReferenceKind::StaticStep, None, &coords);
        assert_eq!(step.len(), 1);
        assert_eq!(step[0].1, vec![0.6, 0.2, 0.4]);

        let wave = WaveSetup {
            wave_number: PI,
            speed: 1.0,
            courant: 0.5,
            h: 0.1,
            dt: 0.05,
            steps: 0,
        };
        let sine = reference_columns(
            ReferenceKind::TravellingSine {
                amplification: Amplification::Leonard,
            },
            Some(&wave),
            &coords,
        );
        assert_eq!(sine.len(), 2);
        assert_eq!(sine[0].0, "u_exac");
        assert_eq!(sine[1].0, "u_num_exac");
        // No steps taken, both reduce to the initial wave
        for (i, x) in coords.iter().enumerate() {
            assert_approx_eq!(f64, sine[0].1[i], (PI * x).sin());
            assert_approx_eq!(f64, sine[1].1[i], (PI * x).sin());
        }
    }

    #[test]
    fn table_shape() {
        let t = amplification_table(2.0, 3.0, 5, 4).unwrap();
        assert_eq!(t.rows(), 20);
        assert_eq!(t.labels(), &["Cu", "beta", "g_upwind", "g_leonard"]);
        assert_approx_eq!(f64, t.column(0)[19], 2.0);
        assert_approx_eq!(f64, t.column(1)[19], 3.0);
    }
}
