//! End-to-end VaR pipeline.
//!
//! Price history → log returns → historical, parametric and Monte Carlo VaR
//! → dollar VaR, assembled into a [`VarResults`] record. A run either returns
//! a fully populated record or fails; nothing is retried.

use rayon::prelude::*;
use riskvar_config::{LookbackWindow, VarConfig};
use riskvar_core::{PriceHistoryProvider, PriceHistoryRequest};
use riskvar_math::statistics::SampleStats;
use tracing::{debug, info, warn};

use crate::error::{VarError, VarResult};
use crate::portfolio::calculate_portfolio_var;
use crate::results::VarResults;
use crate::returns::{calculate_returns_from_series, ReturnMethod};
use crate::var::{historical_var, monte_carlo_var, parametric_var, MonteCarloParams};

/// Fewest cleaned returns the pipeline will estimate from.
pub const MIN_RETURN_OBSERVATIONS: usize = 30;

/// Seed used for the Monte Carlo draw so a run is reproducible for a given
/// price history.
pub const PIPELINE_SEED: u64 = 42;

/// VaR pipeline bound to a price-history provider.
///
/// The pipeline holds no mutable state; one instance can serve any number of
/// runs, including concurrent ones.
#[derive(Debug, Clone)]
pub struct VarPipeline<P> {
    provider: P,
}

impl<P: PriceHistoryProvider> VarPipeline<P> {
    /// Creates a pipeline over `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetches prices for the configured window and returns the cleaned log
    /// returns.
    ///
    /// # Errors
    ///
    /// `DataUnavailable` when the provider fails or returns no observations.
    pub fn fetch_returns(&self, config: &VarConfig) -> VarResult<(LookbackWindow, Vec<f64>)> {
        let window = config.lookback_window();
        let request = PriceHistoryRequest::new(&config.ticker, window.start, window.end)
            .map_err(|e| VarError::invalid_argument(e.to_string()))?;

        debug!(
            provider = self.provider.name(),
            ticker = %config.ticker,
            start = %window.start,
            end = %window.end,
            "Fetching price history"
        );

        let series = self.provider.price_history(&request)?;
        if series.is_empty() {
            return Err(VarError::DataUnavailable(format!(
                "no data returned for ticker {} between {} and {}",
                config.ticker, window.start, window.end
            )));
        }

        if series.len() < 2 {
            return Ok((window, Vec::new()));
        }

        let raw = calculate_returns_from_series(&series, ReturnMethod::Log)?;
        let dropped = raw.invalid_count();
        if dropped > 0 {
            warn!(
                ticker = %config.ticker,
                dropped,
                "Dropped undefined returns caused by missing or non-positive prices"
            );
        }

        Ok((window, raw.cleaned()))
    }

    /// Runs the full pipeline for `config.ticker`.
    pub fn run(&self, config: &VarConfig) -> VarResult<VarResults> {
        let config = config.clone().validated()?;
        info!(ticker = %config.ticker, confidence = config.confidence_level, "Starting VaR run");

        let (window, returns) = self.fetch_returns(&config)?;
        let results = estimate(&config.ticker, returns, &config, Some(window))?;

        info!(
            ticker = %results.ticker,
            observations = results.returns.len(),
            historical = results.historical_var,
            parametric = results.parametric_var,
            monte_carlo = results.monte_carlo_var,
            "VaR run complete"
        );
        Ok(results)
    }

    /// Evaluates every confidence level in `levels` over one fetched sample.
    ///
    /// Results come back in the order of `levels`.
    pub fn run_ladder(&self, config: &VarConfig, levels: &[f64]) -> VarResult<Vec<VarResults>> {
        if levels.is_empty() {
            return Err(VarError::invalid_argument(
                "at least one confidence level is required",
            ));
        }
        let config = config.clone().validated()?;
        let configs = levels
            .iter()
            .map(|&level| config.clone().with_confidence_level(level).validated())
            .collect::<Result<Vec<_>, _>>()?;

        let (window, returns) = self.fetch_returns(&config)?;
        configs
            .iter()
            .map(|cfg| estimate(&cfg.ticker, returns.clone(), cfg, Some(window)))
            .collect()
    }

    /// Runs independent pipelines for several tickers in parallel.
    ///
    /// Each run uses `config` with its ticker replaced. Results are returned
    /// in the order of `tickers`; one ticker failing does not affect others.
    pub fn run_many(
        &self,
        tickers: &[String],
        config: &VarConfig,
    ) -> Vec<(String, VarResult<VarResults>)> {
        tickers
            .par_iter()
            .map(|ticker| {
                let cfg = config.clone().with_ticker(ticker.clone());
                (ticker.clone(), self.run(&cfg))
            })
            .collect()
    }
}

/// Runs the VaR pipeline for `config.ticker` against `provider`.
///
/// # Errors
///
/// - `InvalidArgument` for an invalid configuration
/// - `DataUnavailable` when the provider has no prices for the window
/// - `InsufficientData` when fewer than [`MIN_RETURN_OBSERVATIONS`] returns remain
pub fn calculate_var_for_ticker<P>(provider: &P, config: &VarConfig) -> VarResult<VarResults>
where
    P: PriceHistoryProvider + ?Sized,
{
    VarPipeline::new(provider).run(config)
}

/// Evaluates every confidence level in `levels` over one fetched return
/// sample for `config.ticker`.
pub fn calculate_var_ladder<P>(
    provider: &P,
    config: &VarConfig,
    levels: &[f64],
) -> VarResult<Vec<VarResults>>
where
    P: PriceHistoryProvider + ?Sized,
{
    VarPipeline::new(provider).run_ladder(config, levels)
}

/// Runs independent pipelines for `tickers` in parallel; results come back in
/// input order.
pub fn calculate_var_for_tickers<P>(
    provider: &P,
    tickers: &[String],
    config: &VarConfig,
) -> Vec<(String, VarResult<VarResults>)>
where
    P: PriceHistoryProvider + ?Sized,
{
    VarPipeline::new(provider).run_many(tickers, config)
}

/// Runs the estimation half of the pipeline over returns the caller already
/// holds.
///
/// Non-finite returns are dropped first. The ticker argument overrides
/// `config.ticker` in the result.
pub fn calculate_var_from_returns(
    ticker: &str,
    returns: &[f64],
    config: &VarConfig,
) -> VarResult<VarResults> {
    let config = config.clone().validated()?;
    let cleaned = returns.iter().copied().filter(|r| r.is_finite()).collect();
    estimate(ticker, cleaned, &config, None)
}

fn estimate(
    ticker: &str,
    returns: Vec<f64>,
    config: &VarConfig,
    window: Option<LookbackWindow>,
) -> VarResult<VarResults> {
    if returns.len() < MIN_RETURN_OBSERVATIONS {
        return Err(VarError::insufficient_data(
            MIN_RETURN_OBSERVATIONS,
            returns.len(),
        ));
    }

    let confidence = config.confidence_level;

    let hist = historical_var(&returns, confidence)?;
    debug!(ticker, var = hist, "Historical VaR");

    let param = parametric_var(&returns, confidence)?;
    debug!(ticker, var = param, "Parametric VaR");

    let mc_params = MonteCarloParams::new(confidence)
        .with_simulations(config.mc_simulations)
        .with_horizon(config.time_horizon)
        .with_seed(PIPELINE_SEED);
    let mc = monte_carlo_var(&returns, &mc_params)?;
    debug!(
        ticker,
        var = mc.var,
        simulations = config.mc_simulations,
        horizon = config.time_horizon,
        "Monte Carlo VaR"
    );

    let value = config.portfolio_value;
    let hist_dollar = calculate_portfolio_var(&returns, value, hist);
    let param_dollar = calculate_portfolio_var(&returns, value, param);
    let mc_dollar = calculate_portfolio_var(&returns, value, mc.var);

    Ok(VarResults {
        ticker: ticker.to_string(),
        portfolio_value: value,
        confidence_level: confidence,
        time_horizon: config.time_horizon,
        mc_simulations: config.mc_simulations,
        window,
        return_stats: SampleStats::from_slice(&returns)?,
        returns,
        historical_var: hist,
        parametric_var: param,
        monte_carlo_var: mc.var,
        mc_simulated_returns: mc.simulated_returns,
        historical_var_dollar: hist_dollar.var_dollar,
        parametric_var_dollar: param_dollar.var_dollar,
        monte_carlo_var_dollar: mc_dollar.var_dollar,
    })
}
