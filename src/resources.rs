use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

use crate::error::{
    ReportError,
    ReportResult,
};
use crate::quantity::Amount;

pub const CPU: &str = "cpu";
pub const MEMORY: &str = "memory";
pub const EPHEMERAL_STORAGE: &str = "ephemeral-storage";
pub const PODS: &str = "pods";

pub type ResourceList = BTreeMap<String, Quantity>;

#[derive(Clone, Debug, Default)]
pub struct Resources {
    pub cpu: Amount,
    pub memory: Amount,
    pub ephemeral_storage: Amount,
    pub pods: Amount,
}

impl Resources {
    /// Reads all four dimensions from a node status resource list. Missing
    /// entries are zero.
    pub fn from_list(list: Option<&ResourceList>, owner: &str) -> ReportResult<Resources> {
        let Some(list) = list else {
            return Ok(Resources::default());
        };

        return Ok(Resources {
            cpu: amount_of(list, CPU, owner)?,
            memory: amount_of(list, MEMORY, owner)?,
            ephemeral_storage: amount_of(list, EPHEMERAL_STORAGE, owner)?,
            pods: amount_of(list, PODS, owner)?,
        });
    }

    /// Adds a container's declared cpu, memory, and ephemeral storage. The pod
    /// tally is not a per-container quantity and is left alone.
    pub fn add_declared(&mut self, list: &ResourceList, owner: &str) -> ReportResult<()> {
        add_to(&mut self.cpu, &amount_of(list, CPU, owner)?, CPU, owner)?;
        add_to(&mut self.memory, &amount_of(list, MEMORY, owner)?, MEMORY, owner)?;
        add_to(&mut self.ephemeral_storage, &amount_of(list, EPHEMERAL_STORAGE, owner)?, EPHEMERAL_STORAGE, owner)?;
        return Ok(());
    }

    /// Column-wise exact sum; `owner` names the addend in the overflow error.
    pub fn add(&mut self, other: &Resources, owner: &str) -> ReportResult<()> {
        add_to(&mut self.cpu, &other.cpu, CPU, owner)?;
        add_to(&mut self.memory, &other.memory, MEMORY, owner)?;
        add_to(&mut self.ephemeral_storage, &other.ephemeral_storage, EPHEMERAL_STORAGE, owner)?;
        add_to(&mut self.pods, &other.pods, PODS, owner)?;
        return Ok(());
    }
}

fn add_to(total: &mut Amount, amount: &Amount, resource: &str, owner: &str) -> ReportResult<()> {
    return total
        .add(amount)
        .map_err(|_| ReportError::SumOverflow { owner: owner.to_string(), resource: resource.to_string() });
}

fn amount_of(list: &ResourceList, resource: &str, owner: &str) -> ReportResult<Amount> {
    let Some(quantity) = list.get(resource) else {
        return Ok(Amount::zero());
    };

    return Amount::parse(quantity).map_err(|err| ReportError::InvalidQuantity {
        owner: owner.to_string(),
        resource: resource.to_string(),
        value: quantity.0.clone(),
        reason: err.to_string(),
    });
}
