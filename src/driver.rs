use std::{
    io::Write,
    sync::mpsc::{self, TryRecvError},
    thread,
};

use log::{debug, info, warn};

use crate::{patterns, ClearFailurePolicy, Clearer, Config, Error, Grid, Result, Sim, View};

#[derive(Debug)]
pub enum DriverCmd {
    Stop,
}

/// Clear, step, draw, sleep.
pub struct Driver<W: Write> {
    config: Config,
    sim: Sim,
    view: View<W>,
    clearer: Clearer,
    clearing_disabled: bool,
    clear_failures: u64,
}

impl<W: Write> Driver<W> {
    /// Starts from the seed pattern.
    pub fn new(config: Config, clearer: Clearer, out: W) -> Result<Self> {
        let grid = patterns::seed_grid(config.rows, config.cols);
        Self::with_grid(config, clearer, out, grid)
    }

    pub fn with_grid(config: Config, clearer: Clearer, out: W, grid: Grid) -> Result<Self> {
        config.validate()?;
        if (grid.rows(), grid.cols()) != (config.rows, config.cols) {
            return Err(Error::InvalidConfig("grid dimensions differ from config"));
        }
        let view = View::new(out, config.glyphs);
        Ok(Self {
            config,
            sim: Sim::new(grid),
            view,
            clearer,
            clearing_disabled: false,
            clear_failures: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        self.sim.grid()
    }

    pub fn generation(&self) -> u64 {
        self.sim.generation()
    }

    pub fn into_writer(self) -> W {
        self.view.into_inner()
    }

    fn clear(&mut self) -> Result<()> {
        if self.clearing_disabled {
            return Ok(());
        }
        match self.clearer.clear(self.view.writer_mut()) {
            Ok(()) => Ok(()),
            Err(err) if err.is_unsupported_platform() => match self.config.clear_failure {
                ClearFailurePolicy::Fatal => Err(err),
                ClearFailurePolicy::Log => {
                    warn!("{err}, drawing without clearing");
                    self.clearing_disabled = true;
                    Ok(())
                }
            },
            Err(Error::Io(err)) => Err(Error::Io(err)),
            Err(err) => {
                self.clear_failures += 1;
                if self.clear_failures == 1 {
                    warn!("{err}, further clear failures are logged at debug level");
                } else {
                    debug!("{err} ({} failures so far)", self.clear_failures);
                }
                Ok(())
            }
        }
    }

    /// Runs one iteration without sleeping.
    pub fn frame(&mut self) -> Result<()> {
        self.clear()?;
        self.sim.tick();
        debug!(
            "generation {} has {} live cells",
            self.sim.generation(),
            self.sim.grid().population()
        );
        self.view.draw(self.sim.grid())?;
        Ok(())
    }

    /// Loops until `DriverCmd::Stop` arrives or every sender is gone.
    pub fn run(&mut self, receiver: &mpsc::Receiver<DriverCmd>) -> Result<()> {
        info!(
            "running {}x{} grid every {:?} on {}",
            self.config.rows,
            self.config.cols,
            self.config.frame_interval,
            self.clearer.platform()
        );
        loop {
            match receiver.try_recv() {
                Ok(DriverCmd::Stop) => break,
                Err(TryRecvError::Disconnected) => break,
                Err(TryRecvError::Empty) => (),
            }
            self.frame()?;
            thread::sleep(self.config.frame_interval);
        }
        info!("stopped after {} generations", self.generation());
        Ok(())
    }
}
