//! In-memory transactional store shared by the service tests.
//!
//! `begin` snapshots the shared state, writes go to the snapshot, and
//! `commit` publishes it. Dropping a transaction discards its writes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use staffhub_domain::department::Department;
use staffhub_domain::employee::Employee;
use staffhub_domain::equipment::Equipment;
use staffhub_domain::error::StaffHubError;
use staffhub_domain::id::{DepartmentId, EmployeeId, EquipmentId};
use staffhub_domain::search::SearchCriteria;

use crate::ports::{
    DepartmentStore, EmployeeStore, EquipmentStore, StoreTransaction, TransactionManager, TxMode,
};

#[derive(Debug, Clone, Default)]
pub struct State {
    pub departments: HashMap<DepartmentId, Department>,
    pub equipment: HashMap<EquipmentId, Equipment>,
    pub employees: HashMap<EmployeeId, Employee>,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
    equipment_save_budget: Arc<Mutex<Option<usize>>>,
}

impl InMemoryStore {
    /// Copy of the committed state.
    pub fn committed(&self) -> State {
        self.state.lock().unwrap().clone()
    }

    /// Seed records directly into the committed state.
    pub fn seed(&self, f: impl FnOnce(&mut State)) {
        f(&mut self.state.lock().unwrap());
    }

    /// Make every following `save_equipment` fail.
    pub fn fail_equipment_saves(&self) {
        self.fail_equipment_saves_after(0);
    }

    /// Let each following transaction save `n` equipment records, then fail.
    pub fn fail_equipment_saves_after(&self, n: usize) {
        *self.equipment_save_budget.lock().unwrap() = Some(n);
    }
}

pub struct InMemoryTransaction {
    shared: Arc<Mutex<State>>,
    staged: State,
    mode: TxMode,
    equipment_save_budget: Option<usize>,
}

impl InMemoryTransaction {
    fn ensure_writable(&self) -> Result<(), StaffHubError> {
        match self.mode {
            TxMode::ReadWrite => Ok(()),
            TxMode::ReadOnly => Err(storage_failure("write in read-only transaction")),
        }
    }
}

fn storage_failure(message: &str) -> StaffHubError {
    StaffHubError::Storage(Box::new(std::io::Error::other(message.to_string())))
}

fn sorted_employees(employees: impl Iterator<Item = Employee>) -> Vec<Employee> {
    let mut employees: Vec<Employee> = employees.collect();
    employees.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
    });
    employees
}

impl TransactionManager for InMemoryStore {
    type Transaction = InMemoryTransaction;

    async fn begin(&self, mode: TxMode) -> Result<InMemoryTransaction, StaffHubError> {
        let staged = self.state.lock().unwrap().clone();
        Ok(InMemoryTransaction {
            shared: Arc::clone(&self.state),
            staged,
            mode,
            equipment_save_budget: *self.equipment_save_budget.lock().unwrap(),
        })
    }
}

impl StoreTransaction for InMemoryTransaction {
    async fn commit(self) -> Result<(), StaffHubError> {
        if self.mode == TxMode::ReadWrite {
            *self.shared.lock().unwrap() = self.staged;
        }
        Ok(())
    }
}

impl DepartmentStore for InMemoryTransaction {
    async fn find_department(
        &mut self,
        id: DepartmentId,
    ) -> Result<Option<Department>, StaffHubError> {
        Ok(self.staged.departments.get(&id).cloned())
    }

    async fn list_departments(&mut self) -> Result<Vec<Department>, StaffHubError> {
        let mut all: Vec<Department> = self.staged.departments.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn save_department(
        &mut self,
        department: Department,
    ) -> Result<Department, StaffHubError> {
        self.ensure_writable()?;
        self.staged
            .departments
            .insert(department.id, department.clone());
        Ok(department)
    }
}

impl EquipmentStore for InMemoryTransaction {
    async fn find_equipment(
        &mut self,
        id: EquipmentId,
    ) -> Result<Option<Equipment>, StaffHubError> {
        Ok(self.staged.equipment.get(&id).cloned())
    }

    async fn find_equipment_by_serial(
        &mut self,
        serial_number: &str,
    ) -> Result<Option<Equipment>, StaffHubError> {
        Ok(self
            .staged
            .equipment
            .values()
            .find(|eq| eq.serial_number == serial_number)
            .cloned())
    }

    async fn list_equipment(&mut self) -> Result<Vec<Equipment>, StaffHubError> {
        let mut all: Vec<Equipment> = self.staged.equipment.values().cloned().collect();
        all.sort_by(|a, b| a.serial_number.cmp(&b.serial_number));
        Ok(all)
    }

    async fn save_equipment(&mut self, equipment: Equipment) -> Result<Equipment, StaffHubError> {
        self.ensure_writable()?;
        match self.equipment_save_budget.as_mut() {
            Some(0) => return Err(storage_failure("equipment table unavailable")),
            Some(left) => *left -= 1,
            None => {}
        }
        self.staged.equipment.insert(equipment.id, equipment.clone());
        Ok(equipment)
    }
}

impl EmployeeStore for InMemoryTransaction {
    async fn find_all_employees(&mut self) -> Result<Vec<Employee>, StaffHubError> {
        Ok(sorted_employees(self.staged.employees.values().cloned()))
    }

    async fn find_employee(&mut self, id: EmployeeId) -> Result<Option<Employee>, StaffHubError> {
        Ok(self.staged.employees.get(&id).cloned())
    }

    async fn search_employees(
        &mut self,
        criteria: SearchCriteria,
    ) -> Result<Vec<Employee>, StaffHubError> {
        Ok(sorted_employees(
            self.staged
                .employees
                .values()
                .filter(|e| criteria.matches(e))
                .cloned(),
        ))
    }

    async fn save_employee(&mut self, employee: Employee) -> Result<Employee, StaffHubError> {
        self.ensure_writable()?;
        self.staged.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn delete_employee(&mut self, id: EmployeeId) -> Result<(), StaffHubError> {
        self.ensure_writable()?;
        self.staged.employees.remove(&id);
        Ok(())
    }
}
