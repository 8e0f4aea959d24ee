//! `SQLite` implementation of [`EquipmentStore`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use staffhub_app::ports::EquipmentStore;
use staffhub_domain::equipment::Equipment;
use staffhub_domain::error::{ConflictError, StaffHubError};
use staffhub_domain::id::{EmployeeId, EquipmentId};

use crate::error::StorageError;
use crate::store::SqliteTransaction;

/// Wrapper for converting database rows into domain [`Equipment`].
struct Wrapper(Equipment);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Equipment> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let serial_number: String = row.try_get("serial_number")?;
        let kind: String = row.try_get("kind")?;
        let model: Option<String> = row.try_get("model")?;
        let employee_id: Option<String> = row.try_get("employee_id")?;

        let id = EquipmentId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let employee_id = employee_id
            .map(|s| EmployeeId::from_str(&s))
            .transpose()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Equipment {
            id,
            serial_number,
            kind,
            model,
            employee_id,
        }))
    }
}

const UPSERT: &str = r"
    INSERT INTO equipment (id, serial_number, kind, model, employee_id)
    VALUES (?, ?, ?, ?, ?)
    ON CONFLICT (id) DO UPDATE SET
        serial_number = excluded.serial_number,
        kind = excluded.kind,
        model = excluded.model,
        employee_id = excluded.employee_id
";
const SELECT_BY_ID: &str = "SELECT * FROM equipment WHERE id = ?";
const SELECT_BY_SERIAL: &str = "SELECT * FROM equipment WHERE serial_number = ?";
const SELECT_ALL: &str = "SELECT * FROM equipment ORDER BY serial_number";

impl EquipmentStore for SqliteTransaction {
    fn find_equipment(
        &mut self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Option<Equipment>, StaffHubError>> + Send {
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn find_equipment_by_serial(
        &mut self,
        serial_number: &str,
    ) -> impl Future<Output = Result<Option<Equipment>, StaffHubError>> + Send {
        let serial_number = serial_number.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_SERIAL)
                .bind(serial_number)
                .fetch_optional(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn list_equipment(
        &mut self,
    ) -> impl Future<Output = Result<Vec<Equipment>, StaffHubError>> + Send {
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn save_equipment(
        &mut self,
        equipment: Equipment,
    ) -> impl Future<Output = Result<Equipment, StaffHubError>> + Send {
        async move {
            self.ensure_writable()?;
            let result = sqlx::query(UPSERT)
                .bind(equipment.id.to_string())
                .bind(&equipment.serial_number)
                .bind(&equipment.kind)
                .bind(&equipment.model)
                .bind(equipment.employee_id.map(|id| id.to_string()))
                .execute(&mut *self.tx)
                .await
                .map_err(StorageError::from);

            match result {
                Ok(_) => Ok(equipment),
                Err(err) if err.is_unique_violation() => {
                    Err(ConflictError::DuplicateSerialNumber.into())
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::setup;
    use staffhub_app::ports::{StoreTransaction, TransactionManager, TxMode};

    fn laptop(serial: &str) -> Equipment {
        Equipment::builder()
            .serial_number(serial)
            .kind("laptop")
            .model("ThinkPad X1")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_save_and_find_by_id_and_serial() {
        let store = setup().await;
        let eq = laptop("EQ-42");

        let mut tx = store.begin(TxMode::ReadWrite).await.unwrap();
        tx.save_equipment(eq.clone()).await.unwrap();
        tx.commit().await.unwrap();

        let mut tx = store.begin(TxMode::ReadOnly).await.unwrap();
        assert_eq!(tx.find_equipment(eq.id).await.unwrap(), Some(eq.clone()));
        assert_eq!(
            tx.find_equipment_by_serial("EQ-42").await.unwrap(),
            Some(eq)
        );
        assert!(tx.find_equipment_by_serial("EQ-0").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_map_duplicate_serial_to_conflict() {
        let store = setup().await;

        let mut tx = store.begin(TxMode::ReadWrite).await.unwrap();
        tx.save_equipment(laptop("EQ-42")).await.unwrap();
        let result = tx.save_equipment(laptop("EQ-42")).await;

        assert!(matches!(
            result,
            Err(StaffHubError::Conflict(ConflictError::DuplicateSerialNumber))
        ));
    }

    #[tokio::test]
    async fn should_list_equipment_by_serial() {
        let store = setup().await;

        let mut tx = store.begin(TxMode::ReadWrite).await.unwrap();
        tx.save_equipment(laptop("EQ-2")).await.unwrap();
        tx.save_equipment(laptop("EQ-1")).await.unwrap();

        let serials: Vec<String> = tx
            .list_equipment()
            .await
            .unwrap()
            .into_iter()
            .map(|eq| eq.serial_number)
            .collect();
        assert_eq!(serials, ["EQ-1", "EQ-2"]);
    }
}
