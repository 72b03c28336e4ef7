//! Command execution against an owned registry.

use std::path::{Component, Path, PathBuf};

use matstore_codec::{read_matrix, write_matrix};
use matstore_core::{Matrix, MatrixError};
use matstore_ops::{add, bitwise_shift, display, duplicate, equal, random_fill, MatrixRng};
use matstore_registry::MatrixRegistry;
use tracing::debug;

use crate::command::Command;
use crate::config::DispatchConfig;
use crate::outcome::Outcome;

/// Name of the matrix created by [`Dispatcher::seed_scratch`].
pub const SCRATCH_NAME: &str = "temp_mat";

/// `dir/name`, provided `name` is a single plain path component.
///
/// Absolute names, `..`, and names containing a separator would land
/// outside `dir` and are rejected.
fn file_in(dir: &Path, name: &str) -> Result<PathBuf, MatrixError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == name => Ok(dir.join(name)),
        _ => Err(MatrixError::invalid(format!(
            "matrix name {name:?} is not a plain file name"
        ))),
    }
}

/// Owns the registry and the random source, and runs commands.
///
/// # Examples
///
/// ```
/// use matstore_command::{Dispatcher, DispatchConfig, Outcome};
///
/// let mut d = Dispatcher::new(DispatchConfig::default()).unwrap();
/// d.run_line("create a 2 2").unwrap();
/// d.run_line("duplicate a b").unwrap();
/// let out = d.run_line("equal a b").unwrap();
/// assert_eq!(out, Outcome::Compared { same: true });
/// ```
#[derive(Debug)]
pub struct Dispatcher {
    registry: MatrixRegistry,
    config: DispatchConfig,
    rng: MatrixRng,
}

impl Dispatcher {
    /// Validate `config` and build an empty dispatcher.
    pub fn new(config: DispatchConfig) -> Result<Self, MatrixError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => MatrixRng::seeded(seed),
            None => MatrixRng::from_entropy(),
        };
        Ok(Self {
            registry: MatrixRegistry::new(config.registry.clone()),
            config,
            rng,
        })
    }

    /// The owned registry.
    pub fn registry(&self) -> &MatrixRegistry {
        &self.registry
    }

    /// The active configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Parse and execute one line.
    pub fn run_line(&mut self, line: &str) -> Result<Outcome, MatrixError> {
        let cmd = Command::parse(line)?;
        self.execute(cmd)
    }

    /// Execute a parsed command.
    ///
    /// Operands are resolved and any result computed before the registry
    /// is mutated, so a failed command leaves every slot as it was.
    pub fn execute(&mut self, cmd: Command) -> Result<Outcome, MatrixError> {
        debug!(?cmd, "executing command");
        match cmd {
            Command::Create { name, rows, cols } => {
                let m = Matrix::new(&name, rows, cols)?;
                let slot = self.registry.insert(m)?;
                Ok(Outcome::Created {
                    name,
                    rows,
                    cols,
                    slot,
                })
            }
            Command::Display { name } => {
                let m = self.registry.get_by_name(&name)?;
                Ok(Outcome::Displayed {
                    name,
                    shape: m.shape(),
                    rows: display(m),
                })
            }
            Command::Add { a, b, result } => {
                let sum = add(
                    self.registry.get_by_name(&a)?,
                    self.registry.get_by_name(&b)?,
                    &result,
                )?;
                self.registry.insert(sum)?;
                Ok(Outcome::Added { a, b, result })
            }
            Command::Duplicate { src, dst } => {
                let copy = duplicate(self.registry.get_by_name(&src)?, &dst)?;
                self.registry.insert(copy)?;
                Ok(Outcome::Duplicated { src, dst })
            }
            Command::Equal { a, b } => {
                let same = equal(
                    self.registry.get_by_name(&a)?,
                    self.registry.get_by_name(&b)?,
                );
                Ok(Outcome::Compared { same })
            }
            Command::Shift {
                name,
                direction,
                amount,
            } => {
                let m = self.registry.get_by_name_mut(&name)?;
                bitwise_shift(m, direction, amount)?;
                Ok(Outcome::Shifted {
                    name,
                    direction,
                    amount,
                })
            }
            Command::Read { path } => {
                let m = read_matrix(&path)?;
                let name = m.name().to_string();
                self.registry.insert(m)?;
                Ok(Outcome::Loaded { name, path })
            }
            Command::Write { name } => {
                let m = self.registry.get_by_name(&name)?;
                let path = file_in(&self.config.output_dir, &name)?;
                write_matrix(&path, m)?;
                Ok(Outcome::Saved { name, path })
            }
            Command::Random { name, low, high } => {
                let m = self.registry.get_by_name_mut(&name)?;
                random_fill(m, low, high, &mut self.rng)?;
                Ok(Outcome::Randomized {
                    name,
                    low: low.min(high),
                    high: low.max(high),
                })
            }
            Command::Exit => Ok(Outcome::Exit),
        }
    }

    /// Create a 5x5 [`SCRATCH_NAME`] matrix, fill it from `[1, 10)`, and
    /// write it to the output directory.
    pub fn seed_scratch(&mut self) -> Result<(), MatrixError> {
        let mut m = Matrix::new(SCRATCH_NAME, 5, 5)?;
        random_fill(&mut m, 1, 10, &mut self.rng)?;
        write_matrix(self.config.output_dir.join(SCRATCH_NAME), &m)?;
        self.registry.insert(m)?;
        Ok(())
    }

    /// Destroy every resident matrix. Returns how many were destroyed.
    pub fn shutdown(&mut self) -> usize {
        self.registry.destroy_all()
    }
}
