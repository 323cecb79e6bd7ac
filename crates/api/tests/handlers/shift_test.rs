use chrono::{NaiveDate, Utc};
use pretty_assertions::assert_eq;
use shiftbook_core::cycle::next_shift_type;
use shiftbook_core::errors::RosterError;
use shiftbook_core::models::shift::ShiftType;
use shiftbook_db::models::{DbStaffMember, DbStaffShift};
use uuid::Uuid;

use crate::test_utils::TestContext;
use shiftbook_api::middleware::error_handling::AppError;

fn db_shift(staff_id: Uuid, date: NaiveDate, shift_type: &str) -> DbStaffShift {
    DbStaffShift {
        id: Uuid::new_v4(),
        staff_id,
        shift_date: date,
        shift_type: shift_type.to_string(),
        bonus: 0,
        fine: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn db_member(id: Uuid) -> DbStaffMember {
    DbStaffMember {
        id,
        name: "Anna".to_string(),
        phone: None,
        email: None,
        role_id: Uuid::new_v4(),
        base_rate: 2500,
        is_active: true,
        account_id: None,
        created_at: Utc::now(),
    }
}

fn expect_known_staff(ctx: &mut TestContext) {
    ctx.staff_repo
        .expect_get_staff_by_id()
        .times(1)
        .returning(|id| Ok(Some(db_member(id))));
}

fn cell_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 4).expect("valid date")
}

// Test wrapper that mirrors the toggle handler's store protocol against
// the mock repository: check the staff member exists, read the cell,
// create on absent (recovering from a lost race by re-reading), cycle
// in place otherwise.
async fn toggle_cell_wrapper(
    ctx: &mut TestContext,
    staff_id: Uuid,
    date: NaiveDate,
) -> Result<ShiftType, AppError> {
    ctx.staff_repo
        .get_staff_by_id(staff_id)
        .await?
        .ok_or_else(|| {
            AppError(RosterError::NotFound(format!(
                "Staff member {} not found",
                staff_id
            )))
        })?;

    let current = ctx.shift_repo.get_shift_by_cell(staff_id, date).await?;

    match current {
        None => {
            let next = next_shift_type(None);
            match ctx
                .shift_repo
                .create_shift(staff_id, date, next.as_str(), 0, 0)
                .await?
            {
                Some(row) => Ok(row.shift_type.parse::<ShiftType>().map_err(AppError)?),
                None => {
                    // Lost the create race; report whatever the winner wrote.
                    let row = ctx
                        .shift_repo
                        .get_shift_by_cell(staff_id, date)
                        .await?
                        .ok_or_else(|| {
                            AppError(RosterError::Database(eyre::eyre!(
                                "row missing after conflicting create"
                            )))
                        })?;
                    Ok(row.shift_type.parse::<ShiftType>().map_err(AppError)?)
                }
            }
        }
        Some(row) => {
            let current_type = row.shift_type.parse::<ShiftType>().map_err(AppError)?;
            let next = next_shift_type(Some(current_type));
            let updated = ctx
                .shift_repo
                .update_shift(row.id, Some(next.as_str()), None, None)
                .await?
                .ok_or_else(|| {
                    AppError(RosterError::NotFound("Shift row no longer exists".to_string()))
                })?;
            Ok(updated.shift_type.parse::<ShiftType>().map_err(AppError)?)
        }
    }
}

// Wrapper mirroring the finance handler: validate first, then update in
// place or create a `none` row for an absent cell.
async fn set_cell_finance_wrapper(
    ctx: &mut TestContext,
    staff_id: Uuid,
    date: NaiveDate,
    bonus: i64,
    fine: i64,
) -> Result<DbStaffShift, AppError> {
    if bonus < 0 {
        return Err(AppError(RosterError::Validation(
            "Bonus must not be negative".to_string(),
        )));
    }
    if fine < 0 {
        return Err(AppError(RosterError::Validation(
            "Fine must not be negative".to_string(),
        )));
    }

    let current = ctx.shift_repo.get_shift_by_cell(staff_id, date).await?;

    match current {
        Some(row) => ctx
            .shift_repo
            .update_shift(row.id, None, Some(bonus), Some(fine))
            .await?
            .ok_or_else(|| {
                AppError(RosterError::NotFound("Shift row no longer exists".to_string()))
            }),
        None => {
            match ctx
                .shift_repo
                .create_shift(staff_id, date, "none", bonus, fine)
                .await?
            {
                Some(row) => Ok(row),
                None => {
                    let row = ctx
                        .shift_repo
                        .get_shift_by_cell(staff_id, date)
                        .await?
                        .ok_or_else(|| {
                            AppError(RosterError::Database(eyre::eyre!(
                                "row missing after conflicting create"
                            )))
                        })?;
                    ctx.shift_repo
                        .update_shift(row.id, None, Some(bonus), Some(fine))
                        .await?
                        .ok_or_else(|| {
                            AppError(RosterError::NotFound(
                                "Shift row no longer exists".to_string(),
                            ))
                        })
                }
            }
        }
    }
}

#[tokio::test]
async fn test_toggle_unknown_staff_is_not_found() {
    // No shift-repo expectations: the cell must not be touched.
    let mut ctx = TestContext::new();

    ctx.staff_repo
        .expect_get_staff_by_id()
        .times(1)
        .returning(|_| Ok(None));

    let result = toggle_cell_wrapper(&mut ctx, Uuid::new_v4(), cell_date()).await;

    assert!(matches!(result, Err(AppError(RosterError::NotFound(_)))));
}

#[tokio::test]
async fn test_toggle_absent_cell_creates_full_row() {
    let mut ctx = TestContext::new();
    let staff_id = Uuid::new_v4();

    expect_known_staff(&mut ctx);
    ctx.shift_repo
        .expect_get_shift_by_cell()
        .times(1)
        .returning(|_, _| Ok(None));
    ctx.shift_repo
        .expect_create_shift()
        .withf(|_, _, shift_type, bonus, fine| *shift_type == *"full" && *bonus == 0 && *fine == 0)
        .times(1)
        .returning(|staff_id, date, shift_type, _, _| {
            Ok(Some(db_shift(staff_id, date, shift_type)))
        });

    let result = toggle_cell_wrapper(&mut ctx, staff_id, cell_date()).await;

    assert_eq!(result.unwrap(), ShiftType::Full);
}

#[tokio::test]
async fn test_toggle_full_cell_advances_to_half() {
    let mut ctx = TestContext::new();
    let staff_id = Uuid::new_v4();

    expect_known_staff(&mut ctx);
    ctx.shift_repo
        .expect_get_shift_by_cell()
        .times(1)
        .returning(|staff_id, date| Ok(Some(db_shift(staff_id, date, "full"))));
    ctx.shift_repo
        .expect_update_shift()
        .withf(|_, shift_type, _, _| *shift_type == Some("half"))
        .times(1)
        .returning(|id, shift_type, _, _| {
            let mut row = db_shift(Uuid::new_v4(), cell_date(), shift_type.unwrap());
            row.id = id;
            Ok(Some(row))
        });

    let result = toggle_cell_wrapper(&mut ctx, staff_id, cell_date()).await;

    assert_eq!(result.unwrap(), ShiftType::Half);
}

#[tokio::test]
async fn test_toggle_none_cell_wraps_to_full() {
    let mut ctx = TestContext::new();
    let staff_id = Uuid::new_v4();

    expect_known_staff(&mut ctx);
    ctx.shift_repo
        .expect_get_shift_by_cell()
        .times(1)
        .returning(|staff_id, date| Ok(Some(db_shift(staff_id, date, "none"))));
    ctx.shift_repo
        .expect_update_shift()
        .withf(|_, shift_type, _, _| *shift_type == Some("full"))
        .times(1)
        .returning(|id, shift_type, _, _| {
            let mut row = db_shift(Uuid::new_v4(), cell_date(), shift_type.unwrap());
            row.id = id;
            Ok(Some(row))
        });

    let result = toggle_cell_wrapper(&mut ctx, staff_id, cell_date()).await;

    assert_eq!(result.unwrap(), ShiftType::Full);
}

#[tokio::test]
async fn test_toggle_lost_race_reports_winner_state_without_error() {
    let mut ctx = TestContext::new();
    let staff_id = Uuid::new_v4();

    expect_known_staff(&mut ctx);
    // First read sees no row; the concurrent winner creates one before
    // our insert lands, so create returns None and the re-read finds
    // the winner's `full` row.
    ctx.shift_repo
        .expect_get_shift_by_cell()
        .times(1)
        .returning(|_, _| Ok(None));
    ctx.shift_repo
        .expect_create_shift()
        .times(1)
        .returning(|_, _, _, _, _| Ok(None));
    ctx.shift_repo
        .expect_get_shift_by_cell()
        .times(1)
        .returning(|staff_id, date| Ok(Some(db_shift(staff_id, date, "full"))));

    let result = toggle_cell_wrapper(&mut ctx, staff_id, cell_date()).await;

    // The loser sees `full`, not an error, and the cycle advanced once.
    assert_eq!(result.unwrap(), ShiftType::Full);
}

#[tokio::test]
async fn test_finance_rejects_negative_amounts_before_any_store_call() {
    // No expectations are set: any store call would panic the test.
    let mut ctx = TestContext::new();
    let staff_id = Uuid::new_v4();

    let result = set_cell_finance_wrapper(&mut ctx, staff_id, cell_date(), -1, 0).await;
    assert!(matches!(
        result,
        Err(AppError(RosterError::Validation(_)))
    ));

    let result = set_cell_finance_wrapper(&mut ctx, staff_id, cell_date(), 0, -5).await;
    assert!(matches!(
        result,
        Err(AppError(RosterError::Validation(_)))
    ));
}

#[tokio::test]
async fn test_finance_on_absent_cell_creates_none_row() {
    let mut ctx = TestContext::new();
    let staff_id = Uuid::new_v4();

    ctx.shift_repo
        .expect_get_shift_by_cell()
        .times(1)
        .returning(|_, _| Ok(None));
    ctx.shift_repo
        .expect_create_shift()
        .withf(|_, _, shift_type, bonus, fine| {
            *shift_type == *"none" && *bonus == 200 && *fine == 50
        })
        .times(1)
        .returning(|staff_id, date, shift_type, bonus, fine| {
            let mut row = db_shift(staff_id, date, shift_type);
            row.bonus = bonus;
            row.fine = fine;
            Ok(Some(row))
        });

    let row = set_cell_finance_wrapper(&mut ctx, staff_id, cell_date(), 200, 50)
        .await
        .unwrap();

    assert_eq!(row.shift_type, "none");
    assert_eq!(row.bonus, 200);
    assert_eq!(row.fine, 50);
}

#[tokio::test]
async fn test_finance_lost_race_updates_winner_row() {
    let mut ctx = TestContext::new();
    let staff_id = Uuid::new_v4();
    let winner_id = Uuid::new_v4();

    ctx.shift_repo
        .expect_get_shift_by_cell()
        .times(1)
        .returning(|_, _| Ok(None));
    ctx.shift_repo
        .expect_create_shift()
        .times(1)
        .returning(|_, _, _, _, _| Ok(None));
    ctx.shift_repo
        .expect_get_shift_by_cell()
        .times(1)
        .returning(move |staff_id, date| {
            let mut row = db_shift(staff_id, date, "full");
            row.id = winner_id;
            Ok(Some(row))
        });
    ctx.shift_repo
        .expect_update_shift()
        .withf(move |id, shift_type, bonus, fine| {
            *id == winner_id && shift_type.is_none() && *bonus == Some(200) && *fine == Some(0)
        })
        .times(1)
        .returning(|id, _, bonus, fine| {
            let mut row = db_shift(Uuid::new_v4(), cell_date(), "full");
            row.id = id;
            row.bonus = bonus.unwrap();
            row.fine = fine.unwrap();
            Ok(Some(row))
        });

    let row = set_cell_finance_wrapper(&mut ctx, staff_id, cell_date(), 200, 0)
        .await
        .unwrap();

    // The winner's attendance state is preserved; only the amounts moved.
    assert_eq!(row.shift_type, "full");
    assert_eq!(row.bonus, 200);
}
