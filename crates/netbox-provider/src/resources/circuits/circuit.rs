//! `netbox_circuit` adapter
//!
//! A circuit is a physical or virtual connection supplied by a provider, identified by
//! its circuit ID (`cid`).

use crate::data::ResourceData;
use crate::error::ProviderError;
use crate::resource::Resource;
use crate::resource_helpers::{
    custom_fields_value, date_value, deleted_or_gone, found_or_cleared, get_custom_fields,
    get_optional_date, get_optional_id, get_optional_int, get_optional_str, get_tag_references,
    nullable, parse_id, require_id, require_str, tag_list_value,
};
use crate::schema::{Attribute, Schema};
use async_trait::async_trait;
use netbox_client::{Circuit, NetBoxClientTrait, NetBoxError, WritableCircuit};
use tracing::{debug, info};

/// Circuit lifecycle states accepted by NetBox
pub const CIRCUIT_STATUSES: &[&str] = &[
    "planned",
    "provisioning",
    "active",
    "offline",
    "deprovisioning",
    "decommissioning",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct CircuitResource;

impl CircuitResource {
    pub const TYPE_NAME: &'static str = "netbox_circuit";

    /// Map a validated record onto the write-side request body
    async fn writable(
        &self,
        api: &dyn NetBoxClientTrait,
        data: &ResourceData,
    ) -> Result<WritableCircuit, ProviderError> {
        self.schema().validate(data)?;

        let cid = require_str(data, "cid")?;
        let status = require_str(data, "status")?;
        let provider = require_id(data, "provider_id")?;
        let circuit_type = require_id(data, "type_id")?;
        let tenant = get_optional_id(data, "tenant_id")?;
        let commit_rate = get_optional_int(data, "commit_rate")?;
        let install_date = get_optional_date(data, "install_date")?;
        let termination_date = get_optional_date(data, "termination_date")?;
        let tags = get_tag_references(api, data).await?;

        Ok(WritableCircuit {
            cid,
            provider,
            circuit_type,
            status,
            tenant,
            install_date,
            termination_date,
            commit_rate,
            description: get_optional_str(data, "description"),
            comments: get_optional_str(data, "comments"),
            tags,
            custom_fields: get_custom_fields(data),
        })
    }

    fn apply(circuit: &Circuit, data: &mut ResourceData) {
        data.set_id(circuit.id);
        data.set("cid", circuit.cid.as_str());
        data.set("status", circuit.status.value.as_str());
        data.set("provider_id", nullable(circuit.provider.as_ref().map(|p| p.id)));
        data.set("type_id", nullable(circuit.circuit_type.as_ref().map(|t| t.id)));
        data.set("tenant_id", nullable(circuit.tenant.as_ref().map(|t| t.id)));
        data.set("description", circuit.description.as_str());
        data.set("commit_rate", nullable(circuit.commit_rate));
        data.set("install_date", date_value(circuit.install_date));
        data.set("termination_date", date_value(circuit.termination_date));
        data.set("comments", circuit.comments.as_str());
        data.set("tags", tag_list_value(&circuit.tags));
        data.set("custom_fields", custom_fields_value(&circuit.custom_fields));
    }
}

#[async_trait]
impl Resource for CircuitResource {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Schema::new("Manages a circuit in NetBox. A circuit is a physical or virtual connection delivered by a provider.")
            .with_attribute(
                "cid",
                Attribute::required_string().with_description("Unique circuit ID assigned by the provider."),
            )
            .with_attribute(
                "status",
                Attribute::required_string()
                    .with_description("Operational status of the circuit.")
                    .one_of(CIRCUIT_STATUSES),
            )
            .with_attribute(
                "provider_id",
                Attribute::required_int().with_description("ID of the circuit provider."),
            )
            .with_attribute(
                "type_id",
                Attribute::required_int().with_description("ID of the circuit type."),
            )
            .with_attribute("tenant_id", Attribute::optional_int())
            .with_attribute("description", Attribute::optional_string())
            .with_attribute(
                "commit_rate",
                Attribute::optional_int().with_description("Committed rate in Kbps."),
            )
            .with_attribute(
                "install_date",
                Attribute::optional_string().with_description("Installation date in YYYY-MM-DD format."),
            )
            .with_attribute(
                "termination_date",
                Attribute::optional_string().with_description("Termination date in YYYY-MM-DD format."),
            )
            .with_attribute("comments", Attribute::optional_string())
            .with_tags_and_custom_fields()
    }

    async fn create(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let body = self.writable(api, data).await?;

        info!("Creating circuit {} in NetBox", body.cid);
        let created = api.create_circuit(&body).await?;
        info!("Created circuit {} (ID: {})", created.cid, created.id);

        data.set_id(created.id);
        self.read(api, data).await
    }

    async fn read(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = parse_id(data.id())?;
        debug!("Reading circuit {}", id);

        if let Some(circuit) = found_or_cleared(api.get_circuit(id).await, data, "Circuit")? {
            Self::apply(&circuit, data);
        }
        Ok(())
    }

    async fn update(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = parse_id(data.id())?;
        let body = self.writable(api, data).await?;

        info!("Updating circuit {} (ID: {}) in NetBox", body.cid, id);
        api.update_circuit(id, &body).await?;

        self.read(api, data).await
    }

    async fn delete(&self, api: &dyn NetBoxClientTrait, data: &mut ResourceData) -> Result<(), ProviderError> {
        let id = parse_id(data.id())?;

        info!("Deleting circuit {} from NetBox", id);
        deleted_or_gone(api.delete_circuit(id).await, data, "Circuit")
    }

    async fn sweep(&self, api: &dyn NetBoxClientTrait, prefix: &str) -> Result<usize, ProviderError> {
        let circuits = api.query_circuits(&[], true).await?;
        let mut removed = 0;
        for circuit in circuits.iter().filter(|c| c.cid.starts_with(prefix)) {
            match api.delete_circuit(circuit.id).await {
                Ok(()) => {
                    info!("Swept circuit {} (ID: {})", circuit.cid, circuit.id);
                    removed += 1;
                }
                Err(NetBoxError::NotFound(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(removed)
    }
}
