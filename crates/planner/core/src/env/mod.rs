//! Traits describing read-only planner data.
//!
//! Oracles expose the cap table, the allocation policy, and the class/weapon/
//! spell catalog. The [`Env`] aggregate bundles them so the allocator can
//! access everything it needs without hard coupling to concrete
//! implementations.
mod caps;
mod catalog;
mod error;
mod policy;

pub use caps::CapsOracle;
pub use catalog::CatalogOracle;
pub use error::OracleError;
pub use policy::PolicyOracle;

use crate::catalog::StartingClass;

/// Aggregates read-only oracles required by the allocator and front-ends.
pub struct Env<'a, C, P, K>
where
    C: CapsOracle + ?Sized,
    P: PolicyOracle + ?Sized,
    K: CatalogOracle + ?Sized,
{
    caps: Option<&'a C>,
    policy: Option<&'a P>,
    catalog: Option<&'a K>,
}

impl<C, P, K> Clone for Env<'_, C, P, K>
where
    C: CapsOracle + ?Sized,
    P: PolicyOracle + ?Sized,
    K: CatalogOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, P, K> Copy for Env<'_, C, P, K>
where
    C: CapsOracle + ?Sized,
    P: PolicyOracle + ?Sized,
    K: CatalogOracle + ?Sized,
{
}

pub type PlannerEnv<'a> = Env<'a, dyn CapsOracle + 'a, dyn PolicyOracle + 'a, dyn CatalogOracle + 'a>;

impl<'a, C, P, K> Env<'a, C, P, K>
where
    C: CapsOracle + ?Sized,
    P: PolicyOracle + ?Sized,
    K: CatalogOracle + ?Sized,
{
    pub fn new(caps: Option<&'a C>, policy: Option<&'a P>, catalog: Option<&'a K>) -> Self {
        Self {
            caps,
            policy,
            catalog,
        }
    }

    pub fn with_all(caps: &'a C, policy: &'a P, catalog: &'a K) -> Self {
        Self::new(Some(caps), Some(policy), Some(catalog))
    }

    /// Returns the CapsOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CapsNotAvailable` if no caps oracle was provided.
    pub fn caps(&self) -> Result<&'a C, OracleError> {
        self.caps.ok_or(OracleError::CapsNotAvailable)
    }

    /// Returns the PolicyOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PolicyNotAvailable` if no policy oracle was provided.
    pub fn policy(&self) -> Result<&'a P, OracleError> {
        self.policy.ok_or(OracleError::PolicyNotAvailable)
    }

    /// Returns the CatalogOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CatalogNotAvailable` if no catalog oracle was provided.
    pub fn catalog(&self) -> Result<&'a K, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    /// Looks up a starting class by key.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CatalogNotAvailable` if no catalog oracle was provided, or
    /// `OracleError::StartingClassNotFound` if the key is unknown.
    pub fn starting_class(&self, key: &str) -> Result<&'a StartingClass, OracleError> {
        self.catalog()?
            .starting_class(key)
            .ok_or_else(|| OracleError::StartingClassNotFound(key.to_owned()))
    }
}

impl<'a, C, P, K> Env<'a, C, P, K>
where
    C: CapsOracle + 'a,
    P: PolicyOracle + 'a,
    K: CatalogOracle + 'a,
{
    /// Converts this environment into a trait-object based `PlannerEnv`.
    pub fn as_planner_env(&self) -> PlannerEnv<'a> {
        let caps: Option<&'a dyn CapsOracle> = self.caps.map(|caps| caps as _);
        let policy: Option<&'a dyn PolicyOracle> = self.policy.map(|policy| policy as _);
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        Env::new(caps, policy, catalog)
    }
}
