use crate::models::DbStaffMember;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_staff(
    pool: &Pool<Postgres>,
    name: &str,
    phone: Option<&str>,
    email: Option<&str>,
    role_id: Uuid,
    base_rate: i64,
    account_id: Option<&str>,
) -> Result<DbStaffMember> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating staff member: id={}, name={}, role_id={}, base_rate={}",
        id,
        name,
        role_id,
        base_rate
    );

    let member = sqlx::query_as::<_, DbStaffMember>(
        r#"
        INSERT INTO staff (id, name, phone, email, role_id, base_rate, is_active, account_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7, $8)
        RETURNING id, name, phone, email, role_id, base_rate, is_active, account_id, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(phone)
    .bind(email)
    .bind(role_id)
    .bind(base_rate)
    .bind(account_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(member)
}

pub async fn get_staff_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbStaffMember>> {
    let member = sqlx::query_as::<_, DbStaffMember>(
        r#"
        SELECT id, name, phone, email, role_id, base_rate, is_active, account_id, created_at
        FROM staff
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(member)
}

pub async fn get_staff_by_account_id(
    pool: &Pool<Postgres>,
    account_id: &str,
) -> Result<Option<DbStaffMember>> {
    let member = sqlx::query_as::<_, DbStaffMember>(
        r#"
        SELECT id, name, phone, email, role_id, base_rate, is_active, account_id, created_at
        FROM staff
        WHERE account_id = $1
        "#,
    )
    .bind(account_id)
    .fetch_optional(pool)
    .await?;

    Ok(member)
}

pub async fn list_staff(pool: &Pool<Postgres>) -> Result<Vec<DbStaffMember>> {
    let members = sqlx::query_as::<_, DbStaffMember>(
        r#"
        SELECT id, name, phone, email, role_id, base_rate, is_active, account_id, created_at
        FROM staff
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(members)
}

#[allow(clippy::too_many_arguments)]
pub async fn update_staff(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
    role_id: Option<Uuid>,
    base_rate: Option<i64>,
    is_active: Option<bool>,
    account_id: Option<&str>,
) -> Result<Option<DbStaffMember>> {
    tracing::debug!("Updating staff member: id={}", id);

    let member = sqlx::query_as::<_, DbStaffMember>(
        r#"
        UPDATE staff
        SET name = COALESCE($2, name),
            phone = COALESCE($3, phone),
            email = COALESCE($4, email),
            role_id = COALESCE($5, role_id),
            base_rate = COALESCE($6, base_rate),
            is_active = COALESCE($7, is_active),
            account_id = COALESCE($8, account_id)
        WHERE id = $1
        RETURNING id, name, phone, email, role_id, base_rate, is_active, account_id, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(phone)
    .bind(email)
    .bind(role_id)
    .bind(base_rate)
    .bind(is_active)
    .bind(account_id)
    .fetch_optional(pool)
    .await?;

    Ok(member)
}
