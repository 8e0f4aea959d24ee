//! `SQLite` implementation of [`DepartmentStore`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use staffhub_app::ports::DepartmentStore;
use staffhub_domain::department::Department;
use staffhub_domain::error::StaffHubError;
use staffhub_domain::id::DepartmentId;

use crate::error::StorageError;
use crate::store::SqliteTransaction;

/// Wrapper for converting database rows into domain [`Department`].
struct Wrapper(Department);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Department> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        let id = DepartmentId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Department { id, name }))
    }
}

const UPSERT: &str = r"
    INSERT INTO departments (id, name) VALUES (?, ?)
    ON CONFLICT (id) DO UPDATE SET name = excluded.name
";
const SELECT_BY_ID: &str = "SELECT * FROM departments WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM departments ORDER BY name, id";

impl DepartmentStore for SqliteTransaction {
    fn find_department(
        &mut self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, StaffHubError>> + Send {
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn list_departments(
        &mut self,
    ) -> impl Future<Output = Result<Vec<Department>, StaffHubError>> + Send {
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn save_department(
        &mut self,
        department: Department,
    ) -> impl Future<Output = Result<Department, StaffHubError>> + Send {
        async move {
            self.ensure_writable()?;
            sqlx::query(UPSERT)
                .bind(department.id.to_string())
                .bind(&department.name)
                .execute(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(department)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::setup;
    use staffhub_app::ports::{StoreTransaction, TransactionManager, TxMode};

    #[tokio::test]
    async fn should_save_and_retrieve_department() {
        let store = setup().await;
        let department = Department::builder().name("Engineering").build().unwrap();
        let id = department.id;

        let mut tx = store.begin(TxMode::ReadWrite).await.unwrap();
        tx.save_department(department).await.unwrap();
        let fetched = tx.find_department(id).await.unwrap().unwrap();
        tx.commit().await.unwrap();

        assert_eq!(fetched.id, id);
        assert_eq!(fetched.name, "Engineering");
    }

    #[tokio::test]
    async fn should_return_none_when_department_not_found() {
        let store = setup().await;
        let mut tx = store.begin(TxMode::ReadOnly).await.unwrap();
        let result = tx.find_department(DepartmentId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_replace_department_on_second_save() {
        let store = setup().await;
        let mut department = Department::builder().name("Engineering").build().unwrap();

        let mut tx = store.begin(TxMode::ReadWrite).await.unwrap();
        tx.save_department(department.clone()).await.unwrap();
        department.name = "Research".to_string();
        tx.save_department(department.clone()).await.unwrap();

        let all = tx.list_departments().await.unwrap();
        assert_eq!(all, vec![department]);
    }
}
