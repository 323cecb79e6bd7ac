use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbStaffMember, DbStaffRole, DbStaffShift};

// Mock repositories for testing
mock! {
    pub RoleRepo {
        pub async fn create_role(
            &self,
            department: &'static str,
            name: &'static str,
        ) -> eyre::Result<DbStaffRole>;

        pub async fn get_role_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbStaffRole>>;

        pub async fn list_roles(&self) -> eyre::Result<Vec<DbStaffRole>>;

        pub async fn list_roles_by_department(
            &self,
            department: &'static str,
        ) -> eyre::Result<Vec<DbStaffRole>>;

        pub async fn update_role(
            &self,
            id: Uuid,
            name: Option<&'static str>,
        ) -> eyre::Result<Option<DbStaffRole>>;

        pub async fn update_sort_order(
            &self,
            id: Uuid,
            sort_order: i32,
        ) -> eyre::Result<Option<DbStaffRole>>;
    }
}

mock! {
    pub StaffRepo {
        pub async fn create_staff(
            &self,
            name: &'static str,
            phone: Option<&'static str>,
            email: Option<&'static str>,
            role_id: Uuid,
            base_rate: i64,
            account_id: Option<&'static str>,
        ) -> eyre::Result<DbStaffMember>;

        pub async fn get_staff_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbStaffMember>>;

        pub async fn get_staff_by_account_id(
            &self,
            account_id: &'static str,
        ) -> eyre::Result<Option<DbStaffMember>>;

        pub async fn list_staff(&self) -> eyre::Result<Vec<DbStaffMember>>;

        pub async fn update_staff(
            &self,
            id: Uuid,
            name: Option<&'static str>,
            is_active: Option<bool>,
        ) -> eyre::Result<Option<DbStaffMember>>;
    }
}

mock! {
    pub ShiftRepo {
        pub async fn create_shift(
            &self,
            staff_id: Uuid,
            date: NaiveDate,
            shift_type: &'static str,
            bonus: i64,
            fine: i64,
        ) -> eyre::Result<Option<DbStaffShift>>;

        pub async fn get_shift_by_cell(
            &self,
            staff_id: Uuid,
            date: NaiveDate,
        ) -> eyre::Result<Option<DbStaffShift>>;

        pub async fn get_shifts_in_range(
            &self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> eyre::Result<Vec<DbStaffShift>>;

        pub async fn update_shift(
            &self,
            id: Uuid,
            shift_type: Option<&'static str>,
            bonus: Option<i64>,
            fine: Option<i64>,
        ) -> eyre::Result<Option<DbStaffShift>>;
    }
}
