use fdm1d::config::*;
use fdm1d::initial_conditions::PiecewiseStep;
use fdm1d::solver::*;
use fdm1d::Error;

use float_cmp::assert_approx_eq;

fn simulation(scheme: &str, text: &str) -> Simulation {
    let table = parse_parameters(text.as_bytes()).unwrap();
    let params = SchemeParameters::from_table(&table).unwrap();
    let registry = SchemeRegistry::standard();
    Simulation::new(params, registry.lookup(scheme).unwrap(), 7).unwrap()
}

const STEP: &str = "1.0 ! L\n41 ! NX\n0.5 ! CFL\n1.0 ! C\n0.5 ! Time\n";

#[test]
fn upwind_step_stays_bounded_and_conserves_mass() {
    let mut sim = simulation("upwind-step", STEP);
    let n = sim.engine().grid().len();

    // Indices 2..=n-2 are the distinct periodic nodes
    let mass = |field: &[f64]| field[2..=n - 2].iter().sum::<f64>();
    let mut initial_mass = None;
    let mut levels = 0;
    sim.run_with(|_, field| {
        levels += 1;
        let m = mass(field);
        let m0 = *initial_mass.get_or_insert(m);
        assert_approx_eq!(f64, m, m0, epsilon = 1e-10);
        for v in field {
            assert!(*v >= PiecewiseStep::LOW - 1e-12, "{v}");
            assert!(*v <= PiecewiseStep::HIGH + 1e-12, "{v}");
        }
    })
    .unwrap();
    assert_eq!(levels, sim.engine().time_step().steps);

    // Periodic ghosts agree with the wrapped nodes
    let u = sim.engine().field();
    assert_eq!(u[1], u[n - 2]);
    assert_eq!(u[0], u[n - 3]);
    assert_eq!(u[n - 1], u[2]);
}

#[test]
fn upwind_step_moves_the_profile() {
    let mut sim = simulation("upwind-step", STEP);
    sim.run().unwrap();
    let table = sim.table().unwrap();
    let u = table.column_by_label("u").unwrap();
    let reference = table.column_by_label("u_exac").unwrap();
    assert_eq!(u.len(), 41);
    assert!(u.iter().zip(reference).any(|(a, b)| (a - b).abs() > 1e-3));
}

#[test]
fn leonard_step_keeps_double_ghosts_periodic() {
    let mut sim = simulation("leonard-step", STEP);
    sim.run().unwrap();
    let n = sim.engine().grid().len();
    let u = sim.engine().field();
    assert!(u.iter().all(|v| v.is_finite()));
    assert_eq!(u[0], u[n - 4]);
    assert_eq!(u[1], u[n - 3]);
    assert_eq!(u[n - 2], u[2]);
    assert_eq!(u[n - 1], u[3]);
}

#[test]
fn uniform_flow_is_preserved() {
    let text = "1.0 ! L\n21 ! NX\n0.5 ! CFL\n1.0 ! C\n1.0 ! Time\n\
                0.7 ! C0\n0.0 ! C1\n2 ! m\n";
    for scheme in ["upwind-sine", "leonard-sine"] {
        let mut sim = simulation(scheme, text);
        sim.run().unwrap();
        for v in sim.engine().field() {
            assert_approx_eq!(f64, *v, 0.7, epsilon = 1e-12);
        }
    }
}

#[test]
fn leonard_sine_stays_finite() {
    let text = "1.0 ! L\n81 ! NX\n0.5 ! CFL\n1.0 ! C\n0.1 ! Time\n\
                1.0 ! C0\n0.5 ! C1\n2 ! m\n";
    let mut sim = simulation("burgers.s2_t1", text);
    sim.run().unwrap();
    let u = sim.engine().physical_field();
    assert!(u.iter().all(|v| v.is_finite() && v.abs() < 2.0));

    let table = sim.table().unwrap();
    assert_eq!(table.labels(), ["x", "u", "u_exac", "u_num_exac"]);
    // Close to unit modulus at this resolution
    for v in table.column_by_label("u_num_exac").unwrap() {
        assert!(v.is_finite() && v.abs() <= 1.05);
    }
}

#[test]
fn step_override_wins() {
    let text = "1.0 ! L\n21 ! NX\n0.5 ! CFL\n1.0 ! C\n0.5 ! Time\n4 ! NT\n";
    let mut sim = simulation("upwind-step", text);
    sim.run().unwrap();
    assert_eq!(sim.engine().completed(), 3);
}

#[test]
fn unknown_scheme() {
    let registry = SchemeRegistry::standard();
    assert!(matches!(
        registry.lookup("burgers.s3_t1"),
        Err(Error::Config(_))
    ));
}
