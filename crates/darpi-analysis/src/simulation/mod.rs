//! Simulation engine: triangular sampling per risk, zero-inflation by
//! occurrence probability, and elementwise summation across risks.

pub mod aggregate;
pub mod monte_carlo;
pub mod sampler;
pub mod triangular;

pub use aggregate::{sum_samples, sum_samples_expecting};
pub use monte_carlo::{aggregate_portfolio, MonteCarloSimulator, PortfolioRun};
pub use sampler::{sample_risk, sample_risk_n};
pub use triangular::{build_triangular, TriangularDistribution};
