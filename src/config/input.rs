//! Positional input format.
//!
//! Whitespace-separated tokens, read in this exact order:
//!
//! ```text
//! InitUcell[0] InitUcell[1] InitUcell[2]   (integers)
//! Density                                  (real)
//! InitTemp                                 (real)
//! DeltaT                                   (real)
//! StepLimit                                (integer)
//! StepAvg                                  (integer)
//! ```
//!
//! Line breaks carry no meaning; anything after the last field is ignored.

use std::{io::Read, str::SplitWhitespace};

use tracing::debug;

use super::SimulationParameters;
use crate::{Error, Result};

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}
impl<'a> Tokens<'a> {
    fn next(&mut self, field: &'static str) -> Result<&'a str> {
        self.inner
            .next()
            .ok_or_else(|| Error::config(field, "missing from input"))
    }
    fn real(&mut self, field: &'static str) -> Result<f64> {
        let token = self.next(field)?;
        token
            .parse::<f64>()
            .map_err(|_| Error::config(field, format!("expected a number, found `{}`", token)))
    }
    fn count(&mut self, field: &'static str) -> Result<usize> {
        let token = self.next(field)?;
        let value = token
            .parse::<i64>()
            .map_err(|_| Error::config(field, format!("expected an integer, found `{}`", token)))?;
        usize::try_from(value)
            .map_err(|_| Error::config(field, format!("must be non-negative, found {}", value)))
    }
}

/// Parse and validate the six control parameters
pub fn parse(text: &str) -> Result<SimulationParameters> {
    let mut tokens = Tokens {
        inner: text.split_whitespace(),
    };
    let params = SimulationParameters {
        init_ucell: [
            tokens.count("init_ucell")?,
            tokens.count("init_ucell")?,
            tokens.count("init_ucell")?,
        ],
        density: tokens.real("density")?,
        init_temp: tokens.real("init_temp")?,
        delta_t: tokens.real("delta_t")?,
        step_limit: tokens.count("step_limit")?,
        step_avg: tokens.count("step_avg")?,
    };
    let trailing = tokens.inner.count();
    if trailing > 0 {
        debug!(trailing, "ignoring tokens after the last parameter");
    }
    params.validate()?;
    Ok(params)
}

/// Read the whole input, then parse it
pub fn read<R: Read>(mut reader: R) -> Result<SimulationParameters> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}
