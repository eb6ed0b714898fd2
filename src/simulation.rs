use std::io::Write;

use tracing::{debug, info, warn};

use crate::{
    atomic::{AtomicPotential, AtomicPotentialTrait},
    compute::{ConservationMonitor, ConservationState, Thermo},
    config::{RunOptions, SimulationParameters},
    lattice::{Fcc, Lattice},
    output::Output,
    region::Rect,
    utils::Lcg,
    Atoms, Container, Error, Integrator, Result, Verlet,
};

/// Relative total-energy drift above which a run is flagged
pub const ENERGY_DRIFT_WARNING: f64 = 0.01;

/// The whole state of one run.
///
/// Owns the atoms, the box, the potential, the integrator and the step
/// counter. Accelerations in `atoms` are always
/// valid for the current positions.
pub struct Simulation {
    pub atoms: Atoms,
    container: Container,
    atomic_potential: AtomicPotential,
    integrator: Verlet,
    params: SimulationParameters,
    step_count: usize,
    potential_total: f64,
    baseline: ConservationState,
}
impl Simulation {
    /// Derive the constants, build the lattice, draw velocities and compute
    /// the initial accelerations
    pub fn new(params: SimulationParameters, options: &RunOptions) -> Result<Self> {
        params.validate()?;
        let num_atoms = params.check_capacity(options.max_atoms)?;

        let derived = params.derive(options.cutoff)?;
        let container = derived.container;
        let integrator = derived.integrator;
        let lattice = Fcc::fill(&container, params.init_ucell);
        let origin = container.region_h().map(|h| -h);
        let mut atoms = Atoms::new(lattice.coords(params.init_ucell, origin), options.max_atoms)?;

        atoms.set_temperature(
            params.init_temp,
            options.velocity_init,
            &mut Lcg::new(options.seed),
        )?;

        info!(
            num_atoms,
            region = ?container.region(),
            cutoff = derived.potential.rcut(),
            "initialized fcc configuration"
        );

        let atomic_potential = AtomicPotential::from(derived.potential);
        check_cutoff(&atomic_potential, &container);
        let potential_total = atomic_potential.compute_forces(&mut atoms, &container);
        let thermo = Thermo::evaluate(&atoms, potential_total);
        let baseline = ConservationState::new(&atoms, &thermo);

        let sim = Self {
            atoms,
            container,
            atomic_potential,
            integrator,
            params,
            step_count: 0,
            potential_total,
            baseline,
        };
        sim.check_finite()?;
        Ok(sim)
    }

    // Getters
    pub fn container(&self) -> &Container {
        &self.container
    }
    pub fn atomic_potential(&self) -> &AtomicPotential {
        &self.atomic_potential
    }
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }
    pub fn step_count(&self) -> usize {
        self.step_count
    }
    pub fn timestep(&self) -> f64 {
        self.integrator.timestep()
    }
    /// Elapsed simulated time
    pub fn time(&self) -> f64 {
        self.step_count as f64 * self.params.delta_t
    }
    pub fn positions(&self) -> &[[f64; 3]] {
        self.atoms.positions()
    }
    /// Bounding box of the current positions
    pub fn extents(&self) -> Option<Rect> {
        self.atoms.extents()
    }
    /// Pair-summed potential energy of the current configuration
    pub fn potential_total(&self) -> f64 {
        self.potential_total
    }
    pub fn thermo(&self) -> Thermo {
        Thermo::evaluate(&self.atoms, self.potential_total)
    }
    pub fn conservation(&self) -> ConservationMonitor {
        ConservationMonitor::check(&self.baseline, &self.atoms, &self.thermo())
    }

    // Setters

    /// Swap the pair potential; accelerations and the energy baseline are
    /// recomputed for the current positions
    pub fn set_atomic_potential(&mut self, atomic_potential: AtomicPotential) -> Result<()> {
        check_cutoff(&atomic_potential, &self.container);
        self.atomic_potential = atomic_potential;
        self.potential_total = self
            .atomic_potential
            .compute_forces(&mut self.atoms, &self.container);
        self.baseline = ConservationState::new(&self.atoms, &self.thermo());
        self.check_finite()
    }

    // Run methods

    /// Advance by one time step
    pub fn single_step(&mut self) -> Result<()> {
        self.potential_total =
            self.integrator
                .step(&mut self.atoms, &self.container, &self.atomic_potential);
        self.step_count += 1;
        self.check_finite()
    }

    /// Diagnostics sink reporting every `step_avg` steps
    pub fn output<W: Write>(&self, writer: W) -> Output<W> {
        Output::new(self.params.step_avg, writer)
    }

    /// Run the remaining steps up to `step_limit`, reporting when due
    pub fn run<W: Write>(&mut self, output: &mut Output<W>) -> Result<ConservationMonitor> {
        info!(
            steps = self.params.step_limit.saturating_sub(self.step_count),
            every = output.every,
            "starting run"
        );
        while self.step_count < self.params.step_limit {
            self.single_step()?;
            if output.is_due(self.step_count) {
                let thermo = self.thermo();
                debug!(step = self.step_count, ?thermo, "diagnostics");
                output.write(self.time(), &thermo)?;
            }
        }
        output.flush()?;

        let monitor = self.conservation();
        info!(
            steps = self.step_count,
            energy_drift = monitor.energy_error,
            momentum_drift = monitor.momentum_error,
            "run finished"
        );
        if !monitor.within(ENERGY_DRIFT_WARNING) {
            warn!(
                energy_drift = monitor.energy_error,
                "total energy drifted by more than {}%; the time step may be too large",
                ENERGY_DRIFT_WARNING * 100.0
            );
        }
        Ok(monitor)
    }

    // Private functions

    fn check_finite(&self) -> Result<()> {
        let quantity = self.atoms.first_non_finite().or_else(|| {
            if self.thermo().is_finite() {
                None
            } else {
                Some("energy")
            }
        });
        match quantity {
            Some(quantity) => Err(Error::NumericInstability {
                step: self.step_count,
                quantity,
            }),
            None => Ok(()),
        }
    }
}

/// Minimum image only finds every partner within the cutoff when the cutoff
/// is at most half the box
fn check_cutoff(potential: &AtomicPotential, container: &Container) {
    let cutoff = potential.cutoff_distance();
    if !container.fits_cutoff(cutoff) {
        warn!(
            cutoff,
            region_h = ?container.region_h(),
            "cutoff exceeds half the box; pairs only interact through their nearest image"
        );
    }
}
