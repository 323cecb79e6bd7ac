use chrono::Utc;
use pretty_assertions::assert_eq;
use shiftbook_core::errors::RosterError;
use shiftbook_core::ordering::{plan_reorder, SortOrderChange};
use shiftbook_db::models::DbStaffRole;
use uuid::Uuid;

use crate::test_utils::TestContext;
use shiftbook_api::middleware::error_handling::AppError;

fn db_role(name: &str, sort_order: i32) -> DbStaffRole {
    DbStaffRole {
        id: Uuid::new_v4(),
        department: "kitchen".to_string(),
        name: name.to_string(),
        sort_order,
        created_at: Utc::now(),
    }
}

// Test wrapper mirroring the reorder handler: load the department's
// roles, plan the minimal diff, persist each change.
async fn reorder_roles_wrapper(
    ctx: &mut TestContext,
    department: &'static str,
    moved_role_id: Uuid,
    new_index: usize,
) -> Result<Vec<SortOrderChange>, AppError> {
    let roles = ctx
        .role_repo
        .list_roles_by_department(department)
        .await?
        .into_iter()
        .map(|role| role.into_role())
        .collect::<eyre::Result<Vec<_>>>()?;

    let changes = plan_reorder(&roles, moved_role_id, new_index)?;

    for change in &changes {
        ctx.role_repo
            .update_sort_order(change.role_id, change.sort_order)
            .await?
            .ok_or_else(|| {
                AppError(RosterError::NotFound(format!(
                    "Role with ID {} not found",
                    change.role_id
                )))
            })?;
    }

    Ok(changes)
}

#[tokio::test]
async fn test_reorder_moves_line_cook_to_front() {
    let mut ctx = TestContext::new();

    let chef = db_role("Chef", 1);
    let sous_chef = db_role("SousChef", 2);
    let line = db_role("Line", 3);
    let line_id = line.id;

    let roles = vec![chef.clone(), sous_chef.clone(), line.clone()];
    ctx.role_repo
        .expect_list_roles_by_department()
        .times(1)
        .returning(move |_| Ok(roles.clone()));
    ctx.role_repo
        .expect_update_sort_order()
        .times(3)
        .returning(|id, sort_order| {
            let mut role = db_role("updated", sort_order);
            role.id = id;
            Ok(Some(role))
        });

    let changes = reorder_roles_wrapper(&mut ctx, "kitchen", line_id, 0)
        .await
        .unwrap();

    assert_eq!(
        changes,
        vec![
            SortOrderChange { role_id: line.id, sort_order: 1 },
            SortOrderChange { role_id: chef.id, sort_order: 2 },
            SortOrderChange { role_id: sous_chef.id, sort_order: 3 },
        ]
    );
}

#[tokio::test]
async fn test_reorder_in_place_persists_nothing() {
    // update_sort_order has no expectation: a write would panic the test.
    let mut ctx = TestContext::new();

    let chef = db_role("Chef", 1);
    let sous_chef = db_role("SousChef", 2);
    let sous_chef_id = sous_chef.id;

    let roles = vec![chef, sous_chef];
    ctx.role_repo
        .expect_list_roles_by_department()
        .times(1)
        .returning(move |_| Ok(roles.clone()));

    let changes = reorder_roles_wrapper(&mut ctx, "kitchen", sous_chef_id, 1)
        .await
        .unwrap();

    assert_eq!(changes, vec![]);
}

#[tokio::test]
async fn test_reorder_out_of_bounds_fails_before_any_write() {
    let mut ctx = TestContext::new();

    let chef = db_role("Chef", 1);
    let chef_id = chef.id;

    let roles = vec![chef];
    ctx.role_repo
        .expect_list_roles_by_department()
        .times(1)
        .returning(move |_| Ok(roles.clone()));

    let result = reorder_roles_wrapper(&mut ctx, "kitchen", chef_id, 5).await;

    assert!(matches!(
        result,
        Err(AppError(RosterError::Validation(_)))
    ));
}

#[tokio::test]
async fn test_reorder_vanished_role_surfaces_not_found() {
    let mut ctx = TestContext::new();

    let chef = db_role("Chef", 1);
    let sous_chef = db_role("SousChef", 2);
    let sous_chef_id = sous_chef.id;

    let roles = vec![chef, sous_chef];
    ctx.role_repo
        .expect_list_roles_by_department()
        .times(1)
        .returning(move |_| Ok(roles.clone()));
    // The role was deleted between the plan and the write.
    ctx.role_repo
        .expect_update_sort_order()
        .returning(|_, _| Ok(None));

    let result = reorder_roles_wrapper(&mut ctx, "kitchen", sous_chef_id, 0).await;

    assert!(matches!(result, Err(AppError(RosterError::NotFound(_)))));
}
