use crate::models::DbStaffRole;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_role(
    pool: &Pool<Postgres>,
    department: &str,
    name: &str,
) -> Result<DbStaffRole> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating role: id={}, department={}, name={}",
        id,
        department,
        name
    );

    // New roles land at the end of their department's display order.
    let next_sort_order = sqlx::query_scalar::<_, i32>(
        r#"
        SELECT COALESCE(MAX(sort_order), 0) + 1
        FROM staff_roles
        WHERE department = $1
        "#,
    )
    .bind(department)
    .fetch_one(pool)
    .await?;

    let role = sqlx::query_as::<_, DbStaffRole>(
        r#"
        INSERT INTO staff_roles (id, department, name, sort_order, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, department, name, sort_order, created_at
        "#,
    )
    .bind(id)
    .bind(department)
    .bind(name)
    .bind(next_sort_order)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(role)
}

pub async fn get_role_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbStaffRole>> {
    let role = sqlx::query_as::<_, DbStaffRole>(
        r#"
        SELECT id, department, name, sort_order, created_at
        FROM staff_roles
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(role)
}

pub async fn list_roles(pool: &Pool<Postgres>) -> Result<Vec<DbStaffRole>> {
    let roles = sqlx::query_as::<_, DbStaffRole>(
        r#"
        SELECT id, department, name, sort_order, created_at
        FROM staff_roles
        ORDER BY department ASC, sort_order ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(roles)
}

pub async fn list_roles_by_department(
    pool: &Pool<Postgres>,
    department: &str,
) -> Result<Vec<DbStaffRole>> {
    let roles = sqlx::query_as::<_, DbStaffRole>(
        r#"
        SELECT id, department, name, sort_order, created_at
        FROM staff_roles
        WHERE department = $1
        ORDER BY sort_order ASC
        "#,
    )
    .bind(department)
    .fetch_all(pool)
    .await?;

    Ok(roles)
}

pub async fn update_role(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
) -> Result<Option<DbStaffRole>> {
    tracing::debug!("Updating role: id={}, name={:?}", id, name);

    let role = sqlx::query_as::<_, DbStaffRole>(
        r#"
        UPDATE staff_roles
        SET name = COALESCE($2, name)
        WHERE id = $1
        RETURNING id, department, name, sort_order, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(role)
}

pub async fn update_sort_order(
    pool: &Pool<Postgres>,
    id: Uuid,
    sort_order: i32,
) -> Result<Option<DbStaffRole>> {
    tracing::debug!("Updating role sort order: id={}, sort_order={}", id, sort_order);

    let role = sqlx::query_as::<_, DbStaffRole>(
        r#"
        UPDATE staff_roles
        SET sort_order = $2
        WHERE id = $1
        RETURNING id, department, name, sort_order, created_at
        "#,
    )
    .bind(id)
    .bind(sort_order)
    .fetch_optional(pool)
    .await?;

    Ok(role)
}
