//! Command-line options. Every option has a default, so running with no
//! arguments reads the standard files from `./data`.

use std::path::PathBuf;

use clap::Parser;
use mri_data::{
    DEFAULT_PROCEDURE_COSTS_FILE, DEFAULT_PROCEDURES_FILE, DEFAULT_TECHNICIANS_FILE, DataPaths,
};

use crate::InputPolicy;

/// Estimate the cost of an MRI procedure performed by a chosen technician.
#[derive(Debug, Parser)]
#[command(name = "mri-cost-calculator", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the reference files.
    #[arg(long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Procedure cost table (`code,base_cost,sample_1,...`), relative to the data directory.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_PROCEDURE_COSTS_FILE)]
    pub procedure_costs: PathBuf,

    /// Technician salaries (`name,salary`), relative to the data directory.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_TECHNICIANS_FILE)]
    pub technicians: PathBuf,

    /// Procedure catalog (`code|description`), relative to the data directory.
    #[arg(long, value_name = "FILE", default_value = DEFAULT_PROCEDURES_FILE)]
    pub procedures: PathBuf,

    /// What to do when a menu answer is not a number.
    #[arg(long, value_enum, default_value = "abort")]
    pub on_malformed_input: InputPolicy,
}

impl Cli {
    /// Resolves the three file options against the data directory.
    /// Absolute file paths are used unchanged.
    pub fn data_paths(&self) -> DataPaths {
        DataPaths {
            procedure_costs: self.data_dir.join(&self.procedure_costs),
            technicians: self.data_dir.join(&self.technicians),
            procedures: self.data_dir.join(&self.procedures),
        }
    }
}
