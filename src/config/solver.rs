//! Typed solver options.

use serde::{Deserialize, Serialize};
use u_metaheur::ga::{GaConfig, Selection};

use super::Args;
use crate::error::ParseError;

/// Which solver a configuration string selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverKind {
    /// Baseline constructive solver, `"dummy"`.
    Dummy,
    /// Genetic algorithm, `"ga"`.
    #[serde(rename = "ga")]
    Genetic,
}

impl SolverKind {
    /// Resolves a solver name; anything unrecognized is the dummy solver.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ga" => SolverKind::Genetic,
            _ => SolverKind::Dummy,
        }
    }

    /// The solver's name.
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Dummy => "dummy",
            SolverKind::Genetic => "ga",
        }
    }
}

/// Options of the baseline solver. It has none beyond its name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DummyConfig {}

impl DummyConfig {
    /// Reads options from parsed arguments. Unknown keys are ignored.
    pub fn from_args(_args: &Args) -> Self {
        Self::default()
    }
}

/// Options of the genetic-algorithm solver.
///
/// Keys: `population`, `generations`, `crossover`, `mutation`, `elite`,
/// `stagnation`, `tournament`, `seed`, `parallel`, `time_limit_ms`.
///
/// # Examples
///
/// ```
/// use u_mtsp::config::{Args, GeneticConfig};
///
/// let (config, warnings) = GeneticConfig::from_args(&Args::parse("population:30 seed:7"));
/// assert!(warnings.is_empty());
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneticConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Maximum number of generations.
    pub max_generations: usize,
    /// Probability of recombining two parents.
    pub crossover_rate: f64,
    /// Probability of mutating an offspring.
    pub mutation_rate: f64,
    /// Fraction of the population copied unchanged.
    pub elite_ratio: f64,
    /// Generations without improvement before stopping (0 disables).
    pub stagnation_limit: usize,
    /// Tournament size for parent selection.
    pub tournament_size: usize,
    /// Random seed; `None` draws one.
    pub seed: Option<u64>,
    /// Evaluate the population in parallel.
    pub parallel: bool,
    /// Wall-clock limit in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 200,
            crossover_rate: 0.9,
            mutation_rate: 0.2,
            elite_ratio: 0.1,
            stagnation_limit: 50,
            tournament_size: 3,
            seed: None,
            parallel: false,
            time_limit_ms: None,
        }
    }
}

impl GeneticConfig {
    /// Reads options from parsed arguments.
    ///
    /// A malformed value keeps the default for that option and is reported
    /// in the returned list. Unknown keys are ignored.
    pub fn from_args(args: &Args) -> (Self, Vec<ParseError>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        read(args, "population", &mut config.population_size, &mut warnings);
        read(args, "generations", &mut config.max_generations, &mut warnings);
        read(args, "crossover", &mut config.crossover_rate, &mut warnings);
        read(args, "mutation", &mut config.mutation_rate, &mut warnings);
        read(args, "elite", &mut config.elite_ratio, &mut warnings);
        read(args, "stagnation", &mut config.stagnation_limit, &mut warnings);
        read(args, "tournament", &mut config.tournament_size, &mut warnings);
        read(args, "parallel", &mut config.parallel, &mut warnings);

        match args.parse_value::<u64>("seed") {
            Ok(seed) => config.seed = seed.or(config.seed),
            Err(e) => warnings.push(e),
        }
        match args.parse_value::<u64>("time_limit_ms") {
            Ok(ms) => config.time_limit_ms = ms.filter(|&ms| ms > 0).or(config.time_limit_ms),
            Err(e) => warnings.push(e),
        }

        (config, warnings)
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Converts into the GA engine's configuration.
    ///
    /// Sizes are raised to the engine's minimums (2 individuals, 1
    /// generation, tournament of 1) and rates are clamped to `0.0..=1.0`,
    /// with elites always leaving room for offspring.
    pub fn to_ga_config(&self) -> GaConfig {
        let population = self.population_size.max(2);
        let max_elite = (population - 1) as f64 / population as f64;
        let mut config = GaConfig::default()
            .with_population_size(population)
            .with_max_generations(self.max_generations.max(1))
            .with_selection(Selection::Tournament(self.tournament_size.max(1)))
            .with_crossover_rate(self.crossover_rate)
            .with_mutation_rate(self.mutation_rate)
            .with_elite_ratio(self.elite_ratio.min(max_elite))
            .with_stagnation_limit(self.stagnation_limit)
            .with_parallel(self.parallel);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(ms) = self.time_limit_ms {
            config = config.with_time_limit_ms(ms);
        }
        config
    }
}

fn read<T: std::str::FromStr>(args: &Args, key: &str, slot: &mut T, warnings: &mut Vec<ParseError>) {
    match args.parse_value::<T>(key) {
        Ok(Some(v)) => *slot = v,
        Ok(None) => {}
        Err(e) => warnings.push(e),
    }
}

/// A solver selection with its typed options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum SolverConfig {
    /// Baseline solver.
    Dummy(DummyConfig),
    /// Genetic algorithm.
    #[serde(rename = "ga")]
    Genetic(GeneticConfig),
}

impl SolverConfig {
    /// Resolves the `name` key (default `"dummy"`) and reads that solver's
    /// options, returning any malformed-option warnings.
    pub fn from_args(args: &Args) -> (Self, Vec<ParseError>) {
        match SolverKind::from_name(args.get_or("name", "dummy")) {
            SolverKind::Dummy => (SolverConfig::Dummy(DummyConfig::from_args(args)), Vec::new()),
            SolverKind::Genetic => {
                let (config, warnings) = GeneticConfig::from_args(args);
                (SolverConfig::Genetic(config), warnings)
            }
        }
    }

    /// Which solver this configures.
    pub fn kind(&self) -> SolverKind {
        match self {
            SolverConfig::Dummy(_) => SolverKind::Dummy,
            SolverConfig::Genetic(_) => SolverKind::Genetic,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig::Dummy(DummyConfig::default())
    }
}
