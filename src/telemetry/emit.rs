use anyhow::Result;
use serde::Serialize;

use super::config;
use crate::output::config::OutputConfig;
use crate::output::types::{Envelope, Meta};
use crate::output::Emitter;

fn meta() -> Meta {
    Meta { site: config::site(), duration_ms: config::elapsed_ms() }
}

pub fn print_plan<T: Serialize>(op: &'static str, plan: &T) -> Result<()> {
    let env = Envelope::plan(op, plan, meta())?;
    Emitter::new(OutputConfig::from_env()).emit(&env)?;
    Ok(())
}

pub fn print_result<T: Serialize>(op: &'static str, result: &T) -> Result<()> {
    let env = Envelope::result(op, result, meta())?;
    Emitter::new(OutputConfig::from_env()).emit(&env)?;
    Ok(())
}
