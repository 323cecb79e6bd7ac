use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create staff_roles table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS staff_roles (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            department VARCHAR(32) NOT NULL,
            name VARCHAR(255) NOT NULL,
            sort_order INTEGER NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create staff table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS staff (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            phone VARCHAR(64) NULL,
            email VARCHAR(255) NULL,
            role_id UUID NOT NULL REFERENCES staff_roles(id),
            base_rate BIGINT NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            account_id VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT non_negative_rate CHECK (base_rate >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create staff_shifts table. One row per (staff, date); a second
    // concurrent create for the same cell fails on the unique constraint
    // and the losing caller re-reads instead of overwriting.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS staff_shifts (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            staff_id UUID NOT NULL REFERENCES staff(id),
            shift_date DATE NOT NULL,
            shift_type VARCHAR(16) NOT NULL,
            bonus BIGINT NOT NULL DEFAULT 0,
            fine BIGINT NOT NULL DEFAULT 0,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT one_row_per_cell UNIQUE (staff_id, shift_date),
            CONSTRAINT non_negative_amounts CHECK (bonus >= 0 AND fine >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_staff_roles_department ON staff_roles(department);
        CREATE INDEX IF NOT EXISTS idx_staff_role_id ON staff(role_id);
        CREATE INDEX IF NOT EXISTS idx_staff_account_id ON staff(account_id);
        CREATE INDEX IF NOT EXISTS idx_staff_shifts_staff_id ON staff_shifts(staff_id);
        CREATE INDEX IF NOT EXISTS idx_staff_shifts_date ON staff_shifts(shift_date);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
