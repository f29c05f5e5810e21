use std::{
    collections::HashMap,
    env::consts::OS,
    io::Write,
    process::{Command, Stdio},
};

use log::debug;
use metrohash::MetroBuildHasher;

use crate::{Error, Result};

/// How a platform wipes the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearStrategy {
    /// Runs an external program and forwards whatever it prints.
    Command { program: String, args: Vec<String> },
    /// Writes the ANSI clear-screen and cursor-home sequences.
    #[cfg(unix)]
    Escape,
}

impl ClearStrategy {
    pub fn command(program: &str, args: &[&str]) -> Self {
        Self::Command {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    fn apply(&self, out: &mut impl Write) -> Result<()> {
        match self {
            Self::Command { program, args } => {
                let output = Command::new(program)
                    .args(args)
                    .stdin(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .output()
                    .map_err(|source| Error::ClearSpawn {
                        program: program.clone(),
                        source,
                    })?;
                if !output.status.success() {
                    return Err(Error::ClearStatus {
                        program: program.clone(),
                        status: output.status,
                    });
                }
                out.write_all(&output.stdout)?;
            }
            #[cfg(unix)]
            Self::Escape => {
                let clear = termion::clear::All;
                let home = termion::cursor::Goto(1, 1);
                write!(out, "{clear}{home}")?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Platform identifier (as in `std::env::consts::OS`) to clear strategy.
#[derive(Debug, Clone, Default)]
pub struct ClearRegistry {
    strategies: HashMap<String, ClearStrategy, MetroBuildHasher>,
}

impl ClearRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// `clear` on linux and macos, `cmd /c cls` on windows.
    pub fn standard() -> Self {
        Self::empty()
            .with("linux", ClearStrategy::command("clear", &[]))
            .with("macos", ClearStrategy::command("clear", &[]))
            .with("windows", ClearStrategy::command("cmd", &["/c", "cls"]))
    }

    pub fn with(mut self, platform: &str, strategy: ClearStrategy) -> Self {
        self.register(platform, strategy);
        self
    }

    pub fn register(&mut self, platform: &str, strategy: ClearStrategy) {
        self.strategies.insert(platform.to_string(), strategy);
    }

    pub fn get(&self, platform: &str) -> Option<&ClearStrategy> {
        self.strategies.get(platform)
    }
}

/// Clears the terminal through the strategy registered for one platform.
#[derive(Debug, Clone)]
pub struct Clearer {
    platform: String,
    registry: ClearRegistry,
}

impl Clearer {
    pub fn new(platform: impl Into<String>, registry: ClearRegistry) -> Self {
        Self {
            platform: platform.into(),
            registry,
        }
    }

    /// Uses the platform this binary was built for.
    pub fn host(registry: ClearRegistry) -> Self {
        Self::new(OS, registry)
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn clear(&self, out: &mut impl Write) -> Result<()> {
        self.clear_for(&self.platform, out)
    }

    pub fn clear_for(&self, platform: &str, out: &mut impl Write) -> Result<()> {
        let strategy = self
            .registry
            .get(platform)
            .ok_or_else(|| Error::UnsupportedPlatform(platform.to_string()))?;
        debug!("clearing terminal for {platform} with {strategy:?}");
        strategy.apply(out)
    }
}
