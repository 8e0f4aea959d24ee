//! `SQLite` implementation of [`EmployeeStore`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use staffhub_app::ports::EmployeeStore;
use staffhub_domain::employee::{Employee, EmploymentType};
use staffhub_domain::error::{ConflictError, StaffHubError};
use staffhub_domain::id::{DepartmentId, EmployeeId, EquipmentId};
use staffhub_domain::search::SearchCriteria;

use crate::error::StorageError;
use crate::store::SqliteTransaction;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Employee);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Employee> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let salary: i64 = row.try_get("salary")?;
        let employment_type: String = row.try_get("employment_type")?;
        let department_id: String = row.try_get("department_id")?;
        let equipment_id: Option<String> = row.try_get("equipment_id")?;
        let retired_at: Option<String> = row.try_get("retired_at")?;

        let id = EmployeeId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let employment_type = EmploymentType::from_str(&employment_type)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let department_id = DepartmentId::from_str(&department_id)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let equipment_id = equipment_id
            .map(|s| EquipmentId::from_str(&s))
            .transpose()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let retired_at = retired_at
            .map(|s| chrono::DateTime::parse_from_rfc3339(&s).map(|ts| ts.to_utc()))
            .transpose()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Employee {
            id,
            name,
            salary,
            employment_type,
            department_id,
            equipment_id,
            retired_at,
        }))
    }
}

const UPSERT: &str = r"
    INSERT INTO employees (id, name, salary, employment_type, department_id, equipment_id, retired_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
    ON CONFLICT (id) DO UPDATE SET
        name = excluded.name,
        salary = excluded.salary,
        employment_type = excluded.employment_type,
        department_id = excluded.department_id,
        equipment_id = excluded.equipment_id,
        retired_at = excluded.retired_at
";

const SELECT_BY_ID: &str = "SELECT * FROM employees WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM employees ORDER BY name, id";

// Each filter is skipped when its parameter is NULL.
const SEARCH: &str = r"
    SELECT * FROM employees
    WHERE (?1 IS NULL OR department_id = ?1)
      AND (?2 IS NULL OR employment_type = ?2)
      AND (?3 IS NULL OR salary >= ?3)
      AND (?4 IS NULL OR salary <= ?4)
    ORDER BY name, id
";

const DELETE_BY_ID: &str = "DELETE FROM employees WHERE id = ?";

impl EmployeeStore for SqliteTransaction {
    fn find_all_employees(
        &mut self,
    ) -> impl Future<Output = Result<Vec<Employee>, StaffHubError>> + Send {
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_employee(
        &mut self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, StaffHubError>> + Send {
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn search_employees(
        &mut self,
        criteria: SearchCriteria,
    ) -> impl Future<Output = Result<Vec<Employee>, StaffHubError>> + Send {
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SEARCH)
                .bind(criteria.department_id.map(|id| id.to_string()))
                .bind(criteria.employment_type.map(EmploymentType::as_str))
                .bind(criteria.min_salary)
                .bind(criteria.max_salary)
                .fetch_all(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn save_employee(
        &mut self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, StaffHubError>> + Send {
        async move {
            self.ensure_writable()?;
            let result = sqlx::query(UPSERT)
                .bind(employee.id.to_string())
                .bind(&employee.name)
                .bind(employee.salary)
                .bind(employee.employment_type.as_str())
                .bind(employee.department_id.to_string())
                .bind(employee.equipment_id.map(|id| id.to_string()))
                .bind(employee.retired_at.map(|ts| ts.to_rfc3339()))
                .execute(&mut *self.tx)
                .await
                .map_err(StorageError::from);

            match result {
                Ok(_) => Ok(employee),
                Err(err) if err.is_unique_violation() => {
                    Err(ConflictError::EquipmentAlreadyAssigned.into())
                }
                Err(err) => Err(err.into()),
            }
        }
    }

    fn delete_employee(
        &mut self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<(), StaffHubError>> + Send {
        async move {
            self.ensure_writable()?;
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&mut *self.tx)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
