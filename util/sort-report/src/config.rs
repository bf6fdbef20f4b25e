use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use sort_strategies_rs::SortAlgorithm;
use sort_test_tools::patterns::Pattern;

use crate::error::ReportError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Every selected algorithm against every pattern.
    All,
    /// Quick and default sort on random input only, with longer runs.
    QuickVsDefault,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub iterations: usize,
    /// Sizes are `10^1 ..= 10^max_exp`.
    pub max_exp: u32,
    pub out_dir: PathBuf,
    pub algorithms: Vec<SortAlgorithm>,
    pub seed: Option<u64>,
    pub pin_core: Option<usize>,
}

impl Config {
    /// Reads the configuration from `SORT_REPORT_*` environment variables.
    pub fn from_env() -> Result<Self, ReportError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ReportError> {
        let mode = match lookup("SORT_REPORT_MODE").as_deref().map(str::trim) {
            None | Some("") | Some("all") => Mode::All,
            Some("quick-vs-default") => Mode::QuickVsDefault,
            Some(other) => {
                return Err(ReportError::Config {
                    var: "SORT_REPORT_MODE",
                    value: other.to_owned(),
                })
            }
        };

        let (default_iterations, default_max_exp) = match mode {
            Mode::All => (10, 4),
            Mode::QuickVsDefault => (50, 8),
        };

        let iterations: usize =
            parse_var(&lookup, "SORT_REPORT_ITERATIONS")?.unwrap_or(default_iterations);
        let max_exp: u32 = parse_var(&lookup, "SORT_REPORT_MAX_EXP")?.unwrap_or(default_max_exp);
        if iterations == 0 {
            return Err(invalid("SORT_REPORT_ITERATIONS", iterations));
        }
        // Random patterns draw `i32` values up to `10 * len`.
        if !(1..=8).contains(&max_exp) {
            return Err(invalid("SORT_REPORT_MAX_EXP", max_exp));
        }

        let out_dir = lookup("SORT_REPORT_OUT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));

        let algorithms = match (mode, lookup("SORT_REPORT_ALGORITHMS")) {
            (Mode::QuickVsDefault, _) => vec![SortAlgorithm::Quick, SortAlgorithm::Default],
            (Mode::All, Some(list)) if !list.trim().is_empty() => list
                .split(',')
                .map(SortAlgorithm::from_str)
                .collect::<Result<Vec<_>, _>>()?,
            (Mode::All, _) => SortAlgorithm::ALL.to_vec(),
        };

        Ok(Config {
            mode,
            iterations,
            max_exp,
            out_dir,
            algorithms,
            seed: parse_var(&lookup, "SORT_REPORT_SEED")?,
            pin_core: parse_var(&lookup, "SORT_REPORT_PIN_CORE")?,
        })
    }

    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (1..=self.max_exp).map(|exp| 10usize.pow(exp))
    }

    pub fn patterns(&self) -> &'static [Pattern] {
        match self.mode {
            Mode::All => &Pattern::ALL,
            Mode::QuickVsDefault => &[Pattern::Random],
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ReportError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => {
            let parsed = value.trim().parse();
            parsed.map(Some).map_err(|_| ReportError::Config { var, value })
        }
    }
}

fn invalid(var: &'static str, value: impl ToString) -> ReportError {
    ReportError::Config {
        var,
        value: value.to_string(),
    }
}
