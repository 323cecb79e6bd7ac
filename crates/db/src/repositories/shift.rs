use crate::models::DbStaffShift;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Creates the row for a (staff, date) cell. Returns `None` when a row
/// for the cell already exists: the first creation wins and the losing
/// caller is expected to re-read the current state instead of retrying.
pub async fn create_shift(
    pool: &Pool<Postgres>,
    staff_id: Uuid,
    date: NaiveDate,
    shift_type: &str,
    bonus: i64,
    fine: i64,
) -> Result<Option<DbStaffShift>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating shift: staff_id={}, date={}, shift_type={}",
        staff_id,
        date,
        shift_type
    );

    let shift = sqlx::query_as::<_, DbStaffShift>(
        r#"
        INSERT INTO staff_shifts (id, staff_id, shift_date, shift_type, bonus, fine, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        ON CONFLICT (staff_id, shift_date) DO NOTHING
        RETURNING id, staff_id, shift_date, shift_type, bonus, fine, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(staff_id)
    .bind(date)
    .bind(shift_type)
    .bind(bonus)
    .bind(fine)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    if shift.is_none() {
        tracing::debug!(
            "Shift create lost a race: staff_id={}, date={}",
            staff_id,
            date
        );
    }

    Ok(shift)
}

pub async fn get_shift_by_cell(
    pool: &Pool<Postgres>,
    staff_id: Uuid,
    date: NaiveDate,
) -> Result<Option<DbStaffShift>> {
    let shift = sqlx::query_as::<_, DbStaffShift>(
        r#"
        SELECT id, staff_id, shift_date, shift_type, bonus, fine, created_at, updated_at
        FROM staff_shifts
        WHERE staff_id = $1 AND shift_date = $2
        "#,
    )
    .bind(staff_id)
    .bind(date)
    .fetch_optional(pool)
    .await?;

    Ok(shift)
}

pub async fn get_shifts_in_range(
    pool: &Pool<Postgres>,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DbStaffShift>> {
    let shifts = sqlx::query_as::<_, DbStaffShift>(
        r#"
        SELECT id, staff_id, shift_date, shift_type, bonus, fine, created_at, updated_at
        FROM staff_shifts
        WHERE shift_date >= $1 AND shift_date <= $2
        ORDER BY shift_date ASC
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(shifts)
}

/// Partial in-place update of one shift row. Returns `None` when the
/// row no longer exists.
pub async fn update_shift(
    pool: &Pool<Postgres>,
    id: Uuid,
    shift_type: Option<&str>,
    bonus: Option<i64>,
    fine: Option<i64>,
) -> Result<Option<DbStaffShift>> {
    let now = Utc::now();

    tracing::debug!(
        "Updating shift: id={}, shift_type={:?}, bonus={:?}, fine={:?}",
        id,
        shift_type,
        bonus,
        fine
    );

    let shift = sqlx::query_as::<_, DbStaffShift>(
        r#"
        UPDATE staff_shifts
        SET shift_type = COALESCE($2, shift_type),
            bonus = COALESCE($3, bonus),
            fine = COALESCE($4, fine),
            updated_at = $5
        WHERE id = $1
        RETURNING id, staff_id, shift_date, shift_type, bonus, fine, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(shift_type)
    .bind(bonus)
    .bind(fine)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    Ok(shift)
}
