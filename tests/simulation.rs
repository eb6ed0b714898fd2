//! End-to-end runs of the driver.

use approx::assert_abs_diff_eq;
use ljmd::prelude::*;

fn params(ucell: [usize; 3], step_limit: usize, step_avg: usize) -> SimulationParameters {
    SimulationParameters {
        init_ucell: ucell,
        density: 0.8442,
        init_temp: 1.0,
        delta_t: 0.005,
        step_limit,
        step_avg,
    }
}

fn run_to_string(params: SimulationParameters, options: &RunOptions) -> String {
    let mut sim = Simulation::new(params, options).unwrap();
    let mut output = sim.output(Vec::new());
    sim.run(&mut output).unwrap();
    String::from_utf8(output.into_inner()).unwrap()
}

#[test]
fn single_step_scenario() {
    let params = input::parse("2 2 2\n0.8442\n1.0\n0.005\n1\n1\n").unwrap();
    let sim = Simulation::new(params.clone(), &RunOptions::default()).unwrap();
    assert_eq!(sim.atoms.num_atoms(), 32);

    let text = run_to_string(params, &RunOptions::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    let fields: Vec<&str> = lines[0].split_whitespace().collect();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0], "0.005000");
    for field in &fields {
        let (_, decimals) = field.split_once('.').unwrap();
        assert_eq!(decimals.len(), 6);
    }
}

#[test]
fn identical_runs_are_byte_identical() {
    let a = run_to_string(params([3, 3, 3], 40, 10), &RunOptions::default());
    let b = run_to_string(params([3, 3, 3], 40, 10), &RunOptions::default());
    assert_eq!(a.lines().count(), 4);
    assert_eq!(a, b);

    let gaussian = RunOptions {
        velocity_init: VelocityInit::Gaussian,
        ..RunOptions::default()
    };
    let c = run_to_string(params([3, 3, 3], 40, 10), &gaussian);
    let d = run_to_string(params([3, 3, 3], 40, 10), &gaussian);
    assert_eq!(c, d);
    assert_ne!(a, c);
}

#[test]
fn different_seeds_differ() {
    let a = run_to_string(params([2, 2, 2], 5, 5), &RunOptions::default());
    let b = run_to_string(
        params([2, 2, 2], 5, 5),
        &RunOptions {
            seed: 1,
            ..RunOptions::default()
        },
    );
    assert_ne!(a, b);
}

#[test]
fn lattice_index_order() {
    let sim = Simulation::new(params([2, 2, 2], 0, 1), &RunOptions::default()).unwrap();
    let p = sim.positions();
    let gap = sim.container().region()[0] / 2.0;
    // basis atoms of the first cell
    assert_abs_diff_eq!(p[1][1] - p[0][1], 0.5 * gap, epsilon = 1e-12);
    assert_abs_diff_eq!(p[1][2] - p[0][2], 0.5 * gap, epsilon = 1e-12);
    assert_abs_diff_eq!(p[3][0] - p[0][0], 0.5 * gap, epsilon = 1e-12);
    // then the next cell along x, then y, then z
    assert_abs_diff_eq!(p[4][0] - p[0][0], gap, epsilon = 1e-12);
    assert_abs_diff_eq!(p[8][1] - p[0][1], gap, epsilon = 1e-12);
    assert_abs_diff_eq!(p[16][2] - p[0][2], gap, epsilon = 1e-12);
}

#[test]
fn initial_momentum_is_zero() {
    for velocity_init in [VelocityInit::UnitSphere, VelocityInit::Gaussian] {
        let options = RunOptions {
            velocity_init,
            ..RunOptions::default()
        };
        let sim = Simulation::new(params([3, 2, 4], 0, 1), &options).unwrap();
        for p in sim.atoms.net_momentum() {
            assert_abs_diff_eq!(p, 0.0, epsilon = 1e-10);
        }
    }
}

#[test]
fn net_force_stays_zero() {
    let mut sim = Simulation::new(params([3, 3, 3], 20, 20), &RunOptions::default()).unwrap();
    for _ in 0..20 {
        sim.single_step().unwrap();
        for a in sim.atoms.net_acceleration() {
            assert_abs_diff_eq!(a, 0.0, epsilon = 1e-9);
        }
    }
    for p in sim.atoms.net_momentum() {
        assert_abs_diff_eq!(p, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn total_energy_is_conserved() {
    let mut sim = Simulation::new(params([4, 4, 4], 200, 50), &RunOptions::default()).unwrap();
    let initial = sim.thermo().total;
    let mut output = sim.output(Vec::new());
    let monitor = sim.run(&mut output).unwrap();
    assert!(monitor.energy_error < 0.01, "drift {}", monitor.energy_error);

    let text = String::from_utf8(output.into_inner()).unwrap();
    for line in text.lines() {
        let total: f64 = line.split_whitespace().nth(3).unwrap().parse().unwrap();
        assert!(((total - initial) / initial).abs() < 0.01);
    }
}

#[test]
fn positions_stay_in_the_box() {
    let mut sim = Simulation::new(params([3, 3, 3], 0, 1), &RunOptions::default()).unwrap();
    for _ in 0..100 {
        sim.single_step().unwrap();
    }
    let rect = *sim.container().rect();
    assert!(sim.positions().iter().all(|p| rect.contains(p)));
    let ext = sim.extents().unwrap();
    for k in 0..3 {
        assert!(ext.lo()[k] >= rect.lo()[k]);
        assert!(ext.hi()[k] < rect.hi()[k]);
    }
}

#[test]
fn boundary_wrap_folds_to_the_opposite_face() {
    let container = Container::from_density([2, 2, 2], 0.8442).unwrap();
    let h = container.region_h();
    let eps = 1e-4;
    let mut above = [h[0] + eps, 0.0, 0.0];
    let mut below = [0.0, -h[1] - eps, 0.0];
    container.wrap(&mut above);
    container.wrap(&mut below);
    assert_abs_diff_eq!(above[0], -h[0] + eps, epsilon = 1e-12);
    assert_abs_diff_eq!(below[1], h[1] - eps, epsilon = 1e-12);
}

#[test]
fn cutoff_continuity() {
    let lj = LJCut::default();
    let rc = lj.rcut();
    let (factor, energy) = lj.pair(rc * rc * (1.0 - 1e-12));
    assert_abs_diff_eq!(energy, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(factor * rc, 0.0, epsilon = 1e-10);
}

#[test]
fn configuration_errors_come_first() {
    assert!(matches!(
        input::parse("2 2 2 0.0 1.0 0.005 1 1"),
        Err(Error::Config { field: "density", .. })
    ));
    let options = RunOptions {
        max_atoms: 100,
        ..RunOptions::default()
    };
    assert!(matches!(
        Simulation::new(params([3, 3, 3], 1, 1), &options),
        Err(Error::Capacity { requested: 108, max: 100 })
    ));
}
