use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{query_builder::Separated, FromRow, Postgres};
use uuid::Uuid;
use validator::Validate;

use super::resource::ResourceKind;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VirtualMachine {
    pub id: Uuid,
    #[serde(skip)]
    pub user_id: Uuid,
    pub name: String,
    pub cpus: i32,
    pub quantity: i32,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VirtualMachineRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 1, max = 64))]
    pub cpus: i32,
    #[validate(range(min = 1, max = 100))]
    pub quantity: i32,
}

impl ResourceKind for VirtualMachine {
    type Payload = VirtualMachineRequest;

    const TABLE: &'static str = "virtual_machines";
    const KIND: &'static str = "Virtual machine";
    const COLUMNS: &'static [&'static str] = &["name", "cpus", "quantity"];

    fn push_binds(payload: &VirtualMachineRequest, values: &mut Separated<'_, '_, Postgres, &'static str>) {
        values.push_bind(payload.name.clone());
        values.push_bind(payload.cpus);
        values.push_bind(payload.quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_machine_request_bounds() {
        let valid = VirtualMachineRequest { name: "web".to_string(), cpus: 4, quantity: 2 };
        assert!(valid.validate().is_ok());

        assert!(VirtualMachineRequest { cpus: 0, ..valid.clone() }.validate().is_err());
        assert!(VirtualMachineRequest { cpus: 65, ..valid.clone() }.validate().is_err());
        assert!(VirtualMachineRequest { quantity: 0, ..valid.clone() }.validate().is_err());
        assert!(VirtualMachineRequest { quantity: 101, ..valid.clone() }.validate().is_err());
        assert!(VirtualMachineRequest { name: String::new(), ..valid }.validate().is_err());
    }
}
