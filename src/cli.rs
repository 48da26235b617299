//! Command-line options for `hidl-sig`

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hidl-sig")]
#[command(about = "Render HIDL method signatures for the native and managed backends", long_about = None)]
pub struct Cli {
    /// Method name
    #[arg(long, required_unless_present = "reserved")]
    pub name: Option<String>,

    /// Argument as TYPE:NAME, in declaration order
    #[arg(long = "arg", value_name = "TYPE:NAME")]
    pub args: Vec<String>,

    /// Result as TYPE:NAME, in declaration order
    #[arg(long = "result", value_name = "TYPE:NAME")]
    pub results: Vec<String>,

    /// Declare the method oneway
    #[arg(long)]
    pub oneway: bool,

    /// Annotation name, written as @NAME
    #[arg(long = "annotation", value_name = "NAME")]
    pub annotations: Vec<String>,

    /// Qualify the native signature with this class
    #[arg(long = "class", value_name = "CLASS")]
    pub class_name: Option<String>,

    /// Fully qualify runtime support types
    #[arg(long)]
    pub namespaces: bool,

    /// Which backend to render
    #[arg(long, value_enum, default_value_t = BackendChoice::All)]
    pub backend: BackendChoice,

    /// Also print the reserved methods of this interface (e.g. android.hardware.foo@1.0::IFoo)
    #[arg(long, value_name = "FQNAME")]
    pub reserved: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendChoice {
    Native,
    Managed,
    All,
}

impl BackendChoice {
    pub fn native(self) -> bool {
        matches!(self, BackendChoice::Native | BackendChoice::All)
    }

    pub fn managed(self) -> bool {
        matches!(self, BackendChoice::Managed | BackendChoice::All)
    }
}
