//! Core traits shared across layers.

use async_trait::async_trait;

/// Trait for mapping between persistence records and domain models.
pub trait Mapper<From, To> {
    /// Maps from source type to target type.
    fn map(from: From) -> To;
}

/// Trait for bidirectional mapping between persistence records and
/// domain models.
pub trait BiMapper<A, B>: Mapper<A, B> {
    /// Maps from target type back to source type.
    fn map_back(from: B) -> A;
}

/// Trait for health checks.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns the name of the component being checked.
    fn name(&self) -> &str;

    /// Performs the health check.
    async fn check(&self) -> HealthStatus;
}

/// Health check status.
#[derive(Debug, Clone)]
pub enum HealthStatus {
    /// The component is healthy.
    Healthy,
    /// The component is unhealthy.
    Unhealthy(String),
}

impl HealthStatus {
    /// Returns true if the status is healthy.
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Returns true if the status is unhealthy.
    #[must_use]
    pub const fn is_unhealthy(&self) -> bool {
        matches!(self, Self::Unhealthy(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status() {
        assert!(HealthStatus::Healthy.is_healthy());
        assert!(!HealthStatus::Healthy.is_unhealthy());
        assert!(HealthStatus::Unhealthy("down".to_string()).is_unhealthy());
        assert!(!HealthStatus::Unhealthy("down".to_string()).is_healthy());
    }
}
